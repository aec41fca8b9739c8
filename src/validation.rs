// 📐 Input Validation - Range checks at the caller boundary
// The calculators trust their inputs; the CLI and server check them here first.
// No calendar legality (31 February passes): only numeric ranges.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

pub const DAY_RANGE: RangeInclusive<u32> = 1..=31;
pub const MONTH_RANGE: RangeInclusive<u32> = 1..=12;
pub const YEAR_RANGE: RangeInclusive<u32> = 1900..=2100;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: String,
        value: u32,
        min: u32,
        max: u32,
    },
}

fn check(field: &str, value: u32, range: &RangeInclusive<u32>) -> Result<(), InputError> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(InputError::OutOfRange {
            field: field.to_string(),
            value,
            min: *range.start(),
            max: *range.end(),
        })
    }
}

/// One person's birth data plus an optional reference date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInput {
    pub full_name: String,
    pub birth_day: u32,
    pub birth_month: u32,
    pub birth_year: u32,
    #[serde(default)]
    pub current_year: Option<u32>,
    #[serde(default)]
    pub current_month: Option<u32>,
    #[serde(default)]
    pub current_day: Option<u32>,
}

impl BirthInput {
    pub fn new(full_name: impl Into<String>, birth_day: u32, birth_month: u32, birth_year: u32) -> Self {
        BirthInput {
            full_name: full_name.into(),
            birth_day,
            birth_month,
            birth_year,
            current_year: None,
            current_month: None,
            current_day: None,
        }
    }

    /// Check every supplied field; the current year is unbounded
    pub fn validate(&self) -> Result<(), InputError> {
        check("birth_day", self.birth_day, &DAY_RANGE)?;
        check("birth_month", self.birth_month, &MONTH_RANGE)?;
        check("birth_year", self.birth_year, &YEAR_RANGE)?;
        if let Some(month) = self.current_month {
            check("current_month", month, &MONTH_RANGE)?;
        }
        if let Some(day) = self.current_day {
            check("current_day", day, &DAY_RANGE)?;
        }
        Ok(())
    }
}

/// Two people to compare
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompatibilityInput {
    pub person1_name: String,
    pub person1_day: u32,
    pub person1_month: u32,
    pub person1_year: u32,
    pub person2_name: String,
    pub person2_day: u32,
    pub person2_month: u32,
    pub person2_year: u32,
}

impl CompatibilityInput {
    pub fn validate(&self) -> Result<(), InputError> {
        check("person1_day", self.person1_day, &DAY_RANGE)?;
        check("person1_month", self.person1_month, &MONTH_RANGE)?;
        check("person1_year", self.person1_year, &YEAR_RANGE)?;
        check("person2_day", self.person2_day, &DAY_RANGE)?;
        check("person2_month", self.person2_month, &MONTH_RANGE)?;
        check("person2_year", self.person2_year, &YEAR_RANGE)?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_passes() {
        assert!(BirthInput::new("Ana", 14, 4, 1976).validate().is_ok());
    }

    #[test]
    fn test_calendar_legality_is_not_checked() {
        assert!(BirthInput::new("Ana", 31, 2, 2001).validate().is_ok());
    }

    #[test]
    fn test_out_of_range_fields() {
        let err = BirthInput::new("Ana", 32, 4, 1976).validate().unwrap_err();
        assert_eq!(
            err,
            InputError::OutOfRange {
                field: "birth_day".to_string(),
                value: 32,
                min: 1,
                max: 31,
            }
        );
        assert_eq!(err.to_string(), "birth_day must be between 1 and 31, got 32");

        assert!(BirthInput::new("Ana", 1, 13, 1976).validate().is_err());
        assert!(BirthInput::new("Ana", 1, 1, 1899).validate().is_err());
    }

    #[test]
    fn test_optional_reference_fields() {
        let mut input = BirthInput::new("Ana", 14, 4, 1976);
        input.current_year = Some(3000);
        assert!(input.validate().is_ok());

        input.current_month = Some(0);
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_deserialize_without_reference_fields() {
        let input: BirthInput = serde_json::from_str(
            r#"{"full_name": "Ana", "birth_day": 14, "birth_month": 4, "birth_year": 1976}"#,
        )
        .unwrap();
        assert_eq!(input.current_year, None);
    }

    #[test]
    fn test_compatibility_input_names_the_person() {
        let input = CompatibilityInput {
            person1_name: "Ana".to_string(),
            person1_day: 14,
            person1_month: 4,
            person1_year: 1976,
            person2_name: "Bia".to_string(),
            person2_day: 22,
            person2_month: 0,
            person2_year: 1992,
        };
        let err = input.validate().unwrap_err();
        assert!(err.to_string().starts_with("person2_month"));
    }
}
