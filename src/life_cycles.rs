// 🏔️ Life Cycles - Pinnacles and Challenges
// Four successive pinnacle periods plus four challenge numbers from the birth date

use crate::core_numbers::life_path;
use crate::reduction::{is_master_number, reduce, reduce_date_part, ReducePolicy};
use serde::{Deserialize, Serialize};

/// Age at which the first pinnacle ends is `FIRST_PINNACLE_BASE - life path`
const FIRST_PINNACLE_BASE: u32 = 36;

/// Length in years of the second and third pinnacles
const MIDDLE_PINNACLE_SPAN: u32 = 9;

// ============================================================================
// PINNACLES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PinnacleItem {
    pub pinnacle: u8,
    pub number: u32,
    pub is_master_number: bool,
    pub age_start: u32,
    /// `None` for the fourth pinnacle, which lasts for the rest of life
    pub age_end: Option<u32>,
    pub year_start: u32,
    pub year_end: Option<u32>,
}

impl PinnacleItem {
    fn new(pinnacle: u8, number: u32, birth_year: u32, age_start: u32, age_end: Option<u32>) -> Self {
        PinnacleItem {
            pinnacle,
            number,
            is_master_number: is_master_number(number),
            age_start,
            age_end,
            year_start: birth_year + age_start,
            year_end: age_end.map(|age| birth_year + age),
        }
    }

    /// Whether a person of `age` is within this pinnacle
    pub fn contains_age(&self, age: u32) -> bool {
        age >= self.age_start && self.age_end.map_or(true, |end| age <= end)
    }
}

/// The four pinnacles.
///
/// Boundaries come from the life path forced to a single digit, even when the
/// life path itself is a master number:
/// - 1st: ages `0 ..= 36 - lp`
/// - 2nd and 3rd: nine years each
/// - 4th: open ended
pub fn pinnacles(day: u32, month: u32, year: u32) -> [PinnacleItem; 4] {
    let rd = reduce_date_part(day);
    let rm = reduce_date_part(month);
    let ry = reduce_date_part(year);

    let lp_single = reduce(life_path(day, month, year).core.number, ReducePolicy::SingleDigit);
    let first_end = FIRST_PINNACLE_BASE - lp_single;
    let second_end = first_end + MIDDLE_PINNACLE_SPAN;
    let third_end = second_end + MIDDLE_PINNACLE_SPAN;

    let p1 = reduce(rm + rd, ReducePolicy::KeepMaster);
    let p2 = reduce(rd + ry, ReducePolicy::KeepMaster);
    let p3 = reduce(p1 + p2, ReducePolicy::KeepMaster);
    let p4 = reduce(rm + ry, ReducePolicy::KeepMaster);

    [
        PinnacleItem::new(1, p1, year, 0, Some(first_end)),
        PinnacleItem::new(2, p2, year, first_end + 1, Some(second_end)),
        PinnacleItem::new(3, p3, year, second_end + 1, Some(third_end)),
        PinnacleItem::new(4, p4, year, third_end + 1, None),
    ]
}

// ============================================================================
// CHALLENGES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeItem {
    pub challenge: u8,
    pub number: u32,
}

/// The four challenges, always single digits (0 allowed)
pub fn challenges(day: u32, month: u32, year: u32) -> [ChallengeItem; 4] {
    let rd = reduce_date_part(day);
    let rm = reduce_date_part(month);
    let ry = reduce_date_part(year);

    let single = |n: u32| reduce(n, ReducePolicy::SingleDigit);

    let c1 = single(rm.abs_diff(rd));
    let c2 = single(rd.abs_diff(ry));
    let c3 = single(c1.abs_diff(c2));
    let c4 = single(rm.abs_diff(ry));

    [
        ChallengeItem { challenge: 1, number: c1 },
        ChallengeItem { challenge: 2, number: c2 },
        ChallengeItem { challenge: 3, number: c3 },
        ChallengeItem { challenge: 4, number: c4 },
    ]
}

// ============================================================================
// TESTS
// ============================================================================
