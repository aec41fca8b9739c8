// 📅 Personal Periods - Year, month and day cycles
// Cascading sums anchored to an explicit reference date

use crate::reduction::{is_master_number, reduce, reduce_date_part, ReducePolicy};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalYear {
    pub number: u32,
    pub year: u32,
    pub is_master_number: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalMonth {
    pub number: u32,
    pub month: u32,
    pub personal_year: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDay {
    pub number: u32,
    pub day: u32,
    pub personal_month: u32,
}

/// Birth day + birth month + reference year, each reduced first
pub fn personal_year(birth_day: u32, birth_month: u32, current_year: u32) -> PersonalYear {
    let total =
        reduce_date_part(birth_day) + reduce_date_part(birth_month) + reduce_date_part(current_year);
    let number = reduce(total, ReducePolicy::KeepMaster);

    PersonalYear {
        number,
        year: current_year,
        is_master_number: is_master_number(number),
    }
}

pub fn personal_month(personal_year: u32, current_month: u32) -> PersonalMonth {
    PersonalMonth {
        number: reduce(personal_year + current_month, ReducePolicy::SingleDigit),
        month: current_month,
        personal_year,
    }
}

pub fn personal_day(personal_month: u32, current_day: u32) -> PersonalDay {
    PersonalDay {
        number: reduce(personal_month + current_day, ReducePolicy::SingleDigit),
        day: current_day,
        personal_month,
    }
}

// ============================================================================
// TESTS
// ============================================================================
