// 🔢 Core Numbers - Birth date and name derived numbers
// Life Path, Expression, Soul Urge, Personality, Birthday, Maturity,
// Power Name, Active, Legacy and Karmic Lessons

use crate::alphabet::{sum_text, sum_values, LetterValue};
use crate::classifier::classify_letters;
use crate::normalizer::{first_word, last_word, normalize_name};
use crate::reduction::{is_master_number, reduce, reduce_date_part, ReducePolicy};
use serde::{Deserialize, Serialize};

// ============================================================================
// CORE NUMBER SHAPE
// ============================================================================

/// Shared shape of every reduced number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoreNumber {
    pub number: u32,
    pub total_before_reduction: Option<u32>,
    pub is_master_number: bool,
}

impl CoreNumber {
    /// Reduce a raw total, keeping master numbers
    pub fn from_total(total: u32) -> Self {
        let number = reduce(total, ReducePolicy::KeepMaster);
        CoreNumber {
            number,
            total_before_reduction: Some(total),
            is_master_number: is_master_number(number),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifePathNumber {
    #[serde(flatten)]
    pub core: CoreNumber,
    pub reduced_day: u32,
    pub reduced_month: u32,
    pub reduced_year: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpressionNumber {
    #[serde(flatten)]
    pub core: CoreNumber,
    pub letter_values: Vec<LetterValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoulUrgeNumber {
    #[serde(flatten)]
    pub core: CoreNumber,
    pub vowels: Vec<LetterValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalityNumber {
    #[serde(flatten)]
    pub core: CoreNumber,
    pub consonants: Vec<LetterValue>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthdayNumber {
    pub number: u32,
    pub day: u32,
    pub is_master_number: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaturityNumber {
    #[serde(flatten)]
    pub core: CoreNumber,
    pub life_path: u32,
    pub expression: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerNameNumber {
    #[serde(flatten)]
    pub core: CoreNumber,
    pub soul_urge: u32,
    pub personality: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveNumber {
    #[serde(flatten)]
    pub core: CoreNumber,
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyNumber {
    #[serde(flatten)]
    pub core: CoreNumber,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KarmicLessons {
    pub missing_numbers: Vec<u32>,
    pub present_numbers: Vec<u32>,
    pub karmic_lessons_count: usize,
}

// ============================================================================
// DATE NUMBERS
// ============================================================================

/// Life Path by part-wise reduction.
///
/// 14/04/1976: 14→5, 4→4, 1976→23→5, 5+4+5 = 14 → 5
pub fn life_path(day: u32, month: u32, year: u32) -> LifePathNumber {
    let reduced_day = reduce_date_part(day);
    let reduced_month = reduce_date_part(month);
    let reduced_year = reduce_date_part(year);

    LifePathNumber {
        core: CoreNumber::from_total(reduced_day + reduced_month + reduced_year),
        reduced_day,
        reduced_month,
        reduced_year,
    }
}

pub fn birthday(day: u32) -> BirthdayNumber {
    let number = reduce_date_part(day);
    BirthdayNumber {
        number,
        day,
        is_master_number: is_master_number(number),
    }
}

// ============================================================================
// NAME NUMBERS
// ============================================================================

/// Expression / Destiny: every letter of the full name
pub fn expression(full_name: &str) -> ExpressionNumber {
    let letter_values: Vec<LetterValue> = normalize_name(full_name)
        .chars()
        .filter_map(LetterValue::of)
        .collect();

    ExpressionNumber {
        core: CoreNumber::from_total(sum_values(&letter_values)),
        letter_values,
    }
}

/// Soul Urge / Heart's Desire: vowels only
pub fn soul_urge(full_name: &str) -> SoulUrgeNumber {
    let vowels = classify_letters(full_name).vowels;
    SoulUrgeNumber {
        core: CoreNumber::from_total(sum_values(&vowels)),
        vowels,
    }
}

/// Personality: consonants only
pub fn personality(full_name: &str) -> PersonalityNumber {
    let consonants = classify_letters(full_name).consonants;
    PersonalityNumber {
        core: CoreNumber::from_total(sum_values(&consonants)),
        consonants,
    }
}

pub fn maturity(life_path: u32, expression: u32) -> MaturityNumber {
    MaturityNumber {
        core: CoreNumber::from_total(life_path + expression),
        life_path,
        expression,
    }
}

pub fn power_name(soul_urge: u32, personality: u32) -> PowerNameNumber {
    PowerNameNumber {
        core: CoreNumber::from_total(soul_urge + personality),
        soul_urge,
        personality,
    }
}

/// Active: first token of the full name
pub fn active(full_name: &str) -> ActiveNumber {
    let normalized = normalize_name(full_name);
    let first = first_word(&normalized);
    ActiveNumber {
        core: CoreNumber::from_total(sum_text(first)),
        first_name: first.to_string(),
    }
}

/// Legacy / Hereditary: last token of the full name
pub fn legacy(full_name: &str) -> LegacyNumber {
    let normalized = normalize_name(full_name);
    let last = last_word(&normalized);
    LegacyNumber {
        core: CoreNumber::from_total(sum_text(last)),
        last_name: last.to_string(),
    }
}

/// Digits 1-9 that no letter of the name produces
pub fn karmic_lessons(full_name: &str) -> KarmicLessons {
    let mut present = [false; 10];
    for lv in normalize_name(full_name).chars().filter_map(LetterValue::of) {
        present[lv.value as usize] = true;
    }

    let (present_numbers, missing_numbers): (Vec<u32>, Vec<u32>) =
        (1..=9u32).partition(|&d| present[d as usize]);

    KarmicLessons {
        karmic_lessons_count: missing_numbers.len(),
        missing_numbers,
        present_numbers,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_life_path_reduces_by_part() {
        let lp = life_path(14, 4, 1976);
        assert_eq!(lp.reduced_day, 5);
        assert_eq!(lp.reduced_month, 4);
        assert_eq!(lp.reduced_year, 5);
        assert_eq!(lp.core.total_before_reduction, Some(14));
        assert_eq!(lp.core.number, 5);
        assert!(!lp.core.is_master_number);
    }

    #[test]
    fn test_life_path_keeps_master() {
        // 29 → 11, 11 → 11, 1990 → 19 → 10 → 1; 11 + 11 + 1 = 23 → 5
        let lp = life_path(29, 11, 1990);
        assert_eq!(lp.reduced_day, 11);
        assert_eq!(lp.reduced_month, 11);
        assert_eq!(lp.core.number, 5);

        // 2 + 9 + 1993→22 = 33
        let lp = life_path(2, 9, 1993);
        assert_eq!(lp.reduced_year, 22);
        assert_eq!(lp.core.number, 33);
        assert!(lp.core.is_master_number);
    }

    #[test]
    fn test_birthday() {
        assert_eq!(birthday(14).number, 5);
        let b = birthday(22);
        assert_eq!(b.number, 22);
        assert_eq!(b.day, 22);
        assert!(b.is_master_number);
    }

    #[test]
    fn test_expression_records_letters_in_order() {
        let ex = expression("Ana");
        let letters: Vec<(char, u32)> =
            ex.letter_values.iter().map(|l| (l.letter, l.value)).collect();
        assert_eq!(letters, vec![('A', 1), ('N', 5), ('A', 1)]);
        assert_eq!(ex.core.total_before_reduction, Some(7));
        assert_eq!(ex.core.number, 7);
    }

    #[test]
    fn test_vowel_and_consonant_totals_add_up_to_expression() {
        for name in ["Fernando Wanderley", "Maria Santos", "Yvonne Kyle Barry"] {
            let ex = expression(name);
            let su = soul_urge(name);
            let pe = personality(name);
            assert_eq!(
                su.core.total_before_reduction.unwrap() + pe.core.total_before_reduction.unwrap(),
                ex.core.total_before_reduction.unwrap(),
                "{}",
                name
            );
        }
    }

    #[test]
    fn test_soul_urge_and_personality() {
        // MARIA SANTOS: vowels A I A A O = 1+9+1+1+6 = 18 → 9
        let su = soul_urge("Maria Santos");
        assert_eq!(su.core.total_before_reduction, Some(18));
        assert_eq!(su.core.number, 9);
        // consonants M R S N T S = 4+9+1+5+2+1 = 22
        let pe = personality("Maria Santos");
        assert_eq!(pe.core.total_before_reduction, Some(22));
        assert_eq!(pe.core.number, 22);
        assert!(pe.core.is_master_number);
    }

    #[test]
    fn test_maturity_and_power_name() {
        let m = maturity(5, 6);
        assert_eq!(m.core.number, 11);
        assert_eq!(m.life_path, 5);
        assert_eq!(m.expression, 6);

        let p = power_name(9, 22);
        assert_eq!(p.core.total_before_reduction, Some(31));
        assert_eq!(p.core.number, 4);
    }

    #[test]
    fn test_active_and_legacy_use_first_and_last_tokens() {
        let a = active("Maria da Silva Santos");
        assert_eq!(a.first_name, "MARIA");
        assert_eq!(a.core.total_before_reduction, Some(4 + 1 + 9 + 9 + 1));

        let l = legacy("Maria da Silva Santos");
        assert_eq!(l.last_name, "SANTOS");
        assert_eq!(l.core.total_before_reduction, Some(1 + 1 + 5 + 2 + 6 + 1));
    }

    #[test]
    fn test_karmic_lessons_pangram_has_none_missing() {
        let k = karmic_lessons("The quick brown fox jumps over the lazy dog");
        assert!(k.missing_numbers.is_empty());
        assert_eq!(k.present_numbers, (1..=9).collect::<Vec<_>>());
        assert_eq!(k.karmic_lessons_count, 0);
    }

    #[test]
    fn test_karmic_lessons_missing_digits() {
        // ANA: A=1, N=5
        let k = karmic_lessons("Ana");
        assert_eq!(k.present_numbers, vec![1, 5]);
        assert_eq!(k.missing_numbers, vec![2, 3, 4, 6, 7, 8, 9]);
        assert_eq!(k.karmic_lessons_count, 7);
    }

    #[test]
    fn test_empty_name_reduces_to_zero() {
        assert_eq!(expression("").core.number, 0);
        assert_eq!(soul_urge("!!").core.number, 0);
        assert_eq!(personality(" ").core.number, 0);
        let a = active("");
        assert_eq!(a.core.number, 0);
        assert_eq!(a.first_name, "");
        assert_eq!(legacy("123").last_name, "");
        assert_eq!(karmic_lessons("").karmic_lessons_count, 9);
    }
}
