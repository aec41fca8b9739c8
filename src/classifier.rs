// 🏷️ Letter Classifier - Vowels vs consonants
// Splits a normalized name into two ordered sequences, deciding Y per word

use crate::alphabet::{is_plain_consonant, is_standard_vowel, LetterValue};
use crate::normalizer::normalize_name;
use serde::{Deserialize, Serialize};

// ============================================================================
// CLASSIFICATION
// ============================================================================

/// Vowels and consonants of a name.
///
/// Each sequence keeps left-to-right order of its own letters. The two are
/// never merged back: only within-sequence order is meaningful.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    pub vowels: Vec<LetterValue>,
    pub consonants: Vec<LetterValue>,
}

impl Classification {
    pub fn vowel_total(&self) -> u32 {
        crate::alphabet::sum_values(&self.vowels)
    }

    pub fn consonant_total(&self) -> u32 {
        crate::alphabet::sum_values(&self.consonants)
    }
}

/// Classify every letter of `name` (normalized first).
pub fn classify_letters(name: &str) -> Classification {
    let normalized = normalize_name(name);
    let mut classification = Classification::default();

    for word in normalized.split(' ') {
        let letters: Vec<char> = word.chars().collect();

        for (pos, &c) in letters.iter().enumerate() {
            let Some(lv) = LetterValue::of(c) else {
                continue;
            };

            let vowel = if c == 'Y' {
                is_y_vowel_in_word(&letters, pos)
            } else {
                is_standard_vowel(c)
            };

            if vowel {
                classification.vowels.push(lv);
            } else {
                classification.consonants.push(lv);
            }
        }
    }

    classification
}

// ============================================================================
// Y RULE
// ============================================================================

/// Decide whether the Y at `pos` inside a single word acts as a vowel.
///
/// Never looks across a word boundary. Returns `false` if `word[pos]` is not Y.
///
/// | position | neighbours                      | result    |
/// |----------|---------------------------------|-----------|
/// | first    | next consonant / none           | vowel     |
/// | first    | next standard vowel             | consonant |
/// | last     | previous consonant / other      | vowel     |
/// | last     | previous standard vowel         | consonant |
/// | middle   | consonant on both sides         | vowel     |
/// | middle   | standard vowel on both sides    | consonant |
/// | middle   | one vowel and one consonant     | consonant |
/// | middle   | anything else (e.g. "YYY")      | vowel     |
pub fn is_y_vowel_in_word(word: &[char], pos: usize) -> bool {
    if word.get(pos) != Some(&'Y') {
        return false;
    }

    let last = word.len() - 1;

    if pos == 0 {
        return match word.get(1) {
            Some(&next) if is_plain_consonant(next) => true,
            Some(&next) if is_standard_vowel(next) => false,
            _ => true,
        };
    }

    let prev = word[pos - 1];

    if pos == last {
        return !is_standard_vowel(prev);
    }

    let next = word[pos + 1];

    match (
        is_plain_consonant(prev),
        is_standard_vowel(prev),
        is_plain_consonant(next),
        is_standard_vowel(next),
    ) {
        (true, _, true, _) => true,
        (_, true, _, true) => false,
        (true, _, _, true) | (_, true, true, _) => false,
        _ => true,
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::sum_text;
    use proptest::prelude::*;

    fn y_is_vowel(name: &str) -> bool {
        classify_letters(name).vowels.iter().any(|l| l.letter == 'Y')
    }

    fn y_is_consonant(name: &str) -> bool {
        classify_letters(name)
            .consonants
            .iter()
            .any(|l| l.letter == 'Y')
    }

    #[test]
    fn test_word_initial_y_before_consonant() {
        assert!(y_is_vowel("Yvonne"));
        assert!(y_is_vowel("Ylsa"));
    }

    #[test]
    fn test_word_initial_y_before_vowel() {
        assert!(y_is_consonant("Yolanda"));
    }

    #[test]
    fn test_lone_y_is_vowel() {
        assert!(y_is_vowel("Y"));
        assert!(y_is_vowel("John Y Smith"));
    }

    #[test]
    fn test_word_final_y() {
        assert!(y_is_vowel("Barry"));
        assert!(y_is_vowel("Tommy"));
        assert!(y_is_consonant("Mulrooney"));
    }

    #[test]
    fn test_interior_y() {
        assert!(y_is_vowel("Kyle"));
        assert!(y_is_vowel("Tyson"));
        assert!(y_is_consonant("Eyarta"));
    }

    #[test]
    fn test_interior_y_with_mixed_neighbours_is_consonant() {
        // consonant then vowel
        assert!(y_is_consonant("Bya"));
        // vowel then consonant
        assert!(y_is_consonant("Ayb"));
    }

    #[test]
    fn test_interior_y_fallback() {
        let word: Vec<char> = "AYYYB".chars().collect();
        assert!(is_y_vowel_in_word(&word, 2));
    }

    #[test]
    fn test_y_rule_does_not_cross_spaces() {
        // "BARRY ANNE": Y is word-final after R, the following A is another word
        assert!(y_is_vowel("Barry Anne"));
        // "LEE YOLANDA": Y is word-initial, the preceding E belongs to LEE
        assert!(y_is_consonant("Lee Yolanda"));
    }

    #[test]
    fn test_non_y_position_is_never_y_vowel() {
        let word: Vec<char> = "KYLE".chars().collect();
        assert!(!is_y_vowel_in_word(&word, 0));
        assert!(!is_y_vowel_in_word(&word, 10));
    }

    #[test]
    fn test_sequences_keep_left_to_right_order() {
        let c = classify_letters("Fernando Wanderley");
        let vowels: String = c.vowels.iter().map(|l| l.letter).collect();
        let consonants: String = c.consonants.iter().map(|l| l.letter).collect();
        // final Y of WANDERLEY follows a standard vowel
        assert_eq!(vowels, "EAOAEE");
        assert_eq!(consonants, "FRNNDWNDRLY");
    }

    #[test]
    fn test_empty_name() {
        let c = classify_letters("  -- ");
        assert!(c.vowels.is_empty());
        assert!(c.consonants.is_empty());
    }

    proptest! {
        #[test]
        fn prop_classification_conserves_letter_values(raw in "[A-Za-zÀ-ÿ '\\-]{0,30}") {
            let c = classify_letters(&raw);
            prop_assert_eq!(
                c.vowel_total() + c.consonant_total(),
                sum_text(&normalize_name(&raw))
            );
        }
    }
}
