// 🧾 Numerology Profile - Everything about one person
// Aggregates core numbers, name numbers, karmic lessons, life cycles and the
// current personal period into one immutable value

use crate::core_numbers::{
    self, ActiveNumber, BirthdayNumber, ExpressionNumber, KarmicLessons, LegacyNumber,
    LifePathNumber, MaturityNumber, PersonalityNumber, PowerNameNumber, SoulUrgeNumber,
};
use crate::life_cycles::{self, ChallengeItem, PinnacleItem};
use crate::personal_period::{self, PersonalDay, PersonalMonth, PersonalYear};
use chrono::{Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

// ============================================================================
// REFERENCE DATE
// ============================================================================

/// Date the personal year/month/day are computed against.
///
/// The calculations never read the clock; callers pick the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceDate {
    pub year: u32,
    pub month: u32,
    pub day: u32,
}

impl ReferenceDate {
    pub fn new(year: u32, month: u32, day: u32) -> Self {
        ReferenceDate { year, month, day }
    }

    /// Today's date in UTC
    pub fn today_utc() -> Self {
        Self::from(Utc::now().date_naive())
    }

    /// Fill omitted fields from `fallback`
    pub fn with_defaults(
        year: Option<u32>,
        month: Option<u32>,
        day: Option<u32>,
        fallback: ReferenceDate,
    ) -> Self {
        ReferenceDate {
            year: year.unwrap_or(fallback.year),
            month: month.unwrap_or(fallback.month),
            day: day.unwrap_or(fallback.day),
        }
    }
}

impl From<NaiveDate> for ReferenceDate {
    fn from(date: NaiveDate) -> Self {
        // CE dates only; years before 1 clamp to 0
        ReferenceDate {
            year: date.year().max(0) as u32,
            month: date.month(),
            day: date.day(),
        }
    }
}

// ============================================================================
// PROFILE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreNumbers {
    pub life_path: LifePathNumber,
    pub expression: ExpressionNumber,
    pub soul_urge: SoulUrgeNumber,
    pub personality: PersonalityNumber,
    pub birthday: BirthdayNumber,
    pub maturity: MaturityNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameNumbers {
    pub power_name: PowerNameNumber,
    pub active: ActiveNumber,
    pub legacy: LegacyNumber,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeCycles {
    pub pinnacles: [PinnacleItem; 4],
    pub challenges: [ChallengeItem; 4],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentPeriod {
    pub personal_year: PersonalYear,
    pub personal_month: PersonalMonth,
    pub personal_day: PersonalDay,
}

/// Complete profile for one person. A pure function of its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NumerologyProfile {
    /// Name exactly as supplied
    pub name: String,
    /// `YYYY-MM-DD`
    pub birth_date: String,
    pub core_numbers: CoreNumbers,
    pub name_numbers: NameNumbers,
    pub karmic_lessons: KarmicLessons,
    pub life_cycles: LifeCycles,
    pub current_period: CurrentPeriod,
}

impl NumerologyProfile {
    pub fn life_path(&self) -> u32 {
        self.core_numbers.life_path.core.number
    }

    pub fn expression(&self) -> u32 {
        self.core_numbers.expression.core.number
    }

    pub fn soul_urge(&self) -> u32 {
        self.core_numbers.soul_urge.core.number
    }

    pub fn personality(&self) -> u32 {
        self.core_numbers.personality.core.number
    }

    /// Pinnacle active at `age`
    pub fn pinnacle_at_age(&self, age: u32) -> Option<&PinnacleItem> {
        self.life_cycles.pinnacles.iter().find(|p| p.contains_age(age))
    }
}

/// Build the full profile for `full_name` born on `day/month/year`.
///
/// Inputs are assumed range-checked by the caller. A name without letters
/// is not an error: every name-derived number comes out as 0.
pub fn calculate_profile(
    full_name: &str,
    day: u32,
    month: u32,
    year: u32,
    reference: ReferenceDate,
) -> NumerologyProfile {
    let life_path = core_numbers::life_path(day, month, year);
    let expression = core_numbers::expression(full_name);
    let soul_urge = core_numbers::soul_urge(full_name);
    let personality = core_numbers::personality(full_name);
    let birthday = core_numbers::birthday(day);
    let maturity = core_numbers::maturity(life_path.core.number, expression.core.number);
    let power_name = core_numbers::power_name(soul_urge.core.number, personality.core.number);

    let personal_year = personal_period::personal_year(day, month, reference.year);
    let personal_month = personal_period::personal_month(personal_year.number, reference.month);
    let personal_day = personal_period::personal_day(personal_month.number, reference.day);

    let profile = NumerologyProfile {
        name: full_name.to_string(),
        birth_date: format!("{:04}-{:02}-{:02}", year, month, day),
        core_numbers: CoreNumbers {
            life_path,
            expression,
            soul_urge,
            personality,
            birthday,
            maturity,
        },
        name_numbers: NameNumbers {
            power_name,
            active: core_numbers::active(full_name),
            legacy: core_numbers::legacy(full_name),
        },
        karmic_lessons: core_numbers::karmic_lessons(full_name),
        life_cycles: LifeCycles {
            pinnacles: life_cycles::pinnacles(day, month, year),
            challenges: life_cycles::challenges(day, month, year),
        },
        current_period: CurrentPeriod {
            personal_year,
            personal_month,
            personal_day,
        },
    };

    debug!(
        name = full_name,
        life_path = profile.life_path(),
        expression = profile.expression(),
        soul_urge = profile.soul_urge(),
        personality = profile.personality(),
        "numerology profile computed"
    );

    profile
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> ReferenceDate {
        ReferenceDate::new(2025, 6, 15)
    }

    #[test]
    fn test_profile_is_deterministic() {
        let a = calculate_profile("Fernando Wanderley", 14, 4, 1976, reference());
        let b = calculate_profile("Fernando Wanderley", 14, 4, 1976, reference());
        assert_eq!(a, b);
    }

    #[test]
    fn test_profile_fields() {
        let p = calculate_profile("José da Silva", 14, 4, 1976, reference());
        assert_eq!(p.name, "José da Silva");
        assert_eq!(p.birth_date, "1976-04-14");
        assert_eq!(p.life_path(), 5);
        assert_eq!(p.name_numbers.active.first_name, "JOSE");
        assert_eq!(p.name_numbers.legacy.last_name, "SILVA");
        assert_eq!(
            p.core_numbers.maturity.life_path,
            p.core_numbers.life_path.core.number
        );
        assert_eq!(p.life_cycles.pinnacles[0].age_end, Some(31));
        assert_eq!(p.pinnacle_at_age(45).map(|p| p.pinnacle), Some(3));
    }

    #[test]
    fn test_current_period_cascade() {
        // personal year 5 + 4 + 9 = 18 → 9; month 9 + 6 = 15 → 6; day 6 + 15 = 21 → 3
        let p = calculate_profile("Ana", 14, 4, 1976, reference());
        assert_eq!(p.current_period.personal_year.number, 9);
        assert_eq!(p.current_period.personal_month.number, 6);
        assert_eq!(p.current_period.personal_day.number, 3);
    }

    #[test]
    fn test_birth_date_is_zero_padded() {
        let p = calculate_profile("Ana", 3, 7, 905, reference());
        assert_eq!(p.birth_date, "0905-07-03");
    }

    #[test]
    fn test_empty_name_is_degenerate_not_an_error() {
        let p = calculate_profile("", 14, 4, 1976, reference());
        assert_eq!(p.life_path(), 5);
        assert_eq!(p.expression(), 0);
        assert_eq!(p.soul_urge(), 0);
        assert_eq!(p.personality(), 0);
        assert_eq!(p.name_numbers.power_name.core.number, 0);
        assert_eq!(p.karmic_lessons.karmic_lessons_count, 9);
        // maturity still carries the life path
        assert_eq!(p.core_numbers.maturity.core.number, 5);
    }

    #[test]
    fn test_serialized_shape() {
        let p = calculate_profile("Ana", 14, 4, 1976, reference());
        let json = serde_json::to_value(&p).unwrap();

        let lp = &json["core_numbers"]["life_path"];
        assert_eq!(lp["number"], 5);
        assert_eq!(lp["total_before_reduction"], 14);
        assert_eq!(lp["is_master_number"], false);
        assert_eq!(lp["reduced_year"], 5);

        assert_eq!(json["core_numbers"]["expression"]["letter_values"][0]["letter"], "A");
        assert_eq!(json["life_cycles"]["pinnacles"].as_array().unwrap().len(), 4);
        assert!(json["life_cycles"]["pinnacles"][3]["age_end"].is_null());
        assert_eq!(json["karmic_lessons"]["karmic_lessons_count"], 7);
        assert_eq!(json["current_period"]["personal_month"]["month"], 6);
    }

    #[test]
    fn test_reference_date_defaults() {
        let fallback = ReferenceDate::new(2030, 1, 2);
        let r = ReferenceDate::with_defaults(Some(2024), None, Some(9), fallback);
        assert_eq!(r, ReferenceDate::new(2024, 1, 9));
    }

    #[test]
    fn test_reference_date_from_naive_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        assert_eq!(ReferenceDate::from(date), ReferenceDate::new(2026, 10, 19));
    }
}
