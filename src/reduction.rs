// ➗ Digit Reducer - Sum digits until one is left
// Two policies: keep master numbers (11, 22, 33) or always reduce

use crate::alphabet::MASTER_NUMBERS;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReducePolicy {
    /// Stop at 11, 22 or 33 (life path style numbers)
    KeepMaster,
    /// Always end on a single digit (challenges, personal month/day)
    SingleDigit,
}

pub fn is_master_number(n: u32) -> bool {
    MASTER_NUMBERS.contains(&n)
}

fn digit_sum(mut n: u32) -> u32 {
    let mut sum = 0;
    while n > 0 {
        sum += n % 10;
        n /= 10;
    }
    sum
}

/// Reduce `n` to 0..=9, or to a master number under `KeepMaster`.
///
/// Membership in the master set is checked before each digit sum, so a master
/// number only survives if it appears on the way down.
pub fn reduce(mut n: u32, policy: ReducePolicy) -> u32 {
    while n > 9 {
        if policy == ReducePolicy::KeepMaster && is_master_number(n) {
            return n;
        }
        n = digit_sum(n);
    }
    n
}

/// Day, month or year reduced on its own (master numbers kept)
pub fn reduce_date_part(part: u32) -> u32 {
    reduce(part, ReducePolicy::KeepMaster)
}

// ============================================================================
// TESTS
// ============================================================================
