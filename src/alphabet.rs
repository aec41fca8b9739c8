// 🔤 Pythagorean Alphabet - Letters as numbers
// Fixed A-Z table (A=1 ... I=9, J=1 ... R=9, S=1 ... Z=8), vowels, master numbers

use serde::{Deserialize, Serialize};

// ============================================================================
// TABLES
// ============================================================================

/// Letter values indexed by `letter - 'A'`
const PYTHAGOREAN_TABLE: [u32; 26] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, // A..I
    1, 2, 3, 4, 5, 6, 7, 8, 9, // J..R
    1, 2, 3, 4, 5, 6, 7, 8, // S..Z
];

/// Vowels that never depend on context (Y is decided per word)
pub const STANDARD_VOWELS: [char; 5] = ['A', 'E', 'I', 'O', 'U'];

/// Numbers preserved by master-aware reduction
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Value of an uppercase ASCII letter, 0 for anything else
pub fn letter_value(letter: char) -> u32 {
    if letter.is_ascii_uppercase() {
        PYTHAGOREAN_TABLE[(letter as u8 - b'A') as usize]
    } else {
        0
    }
}

pub fn is_standard_vowel(c: char) -> bool {
    STANDARD_VOWELS.contains(&c)
}

/// A letter that is neither a standard vowel nor Y
pub fn is_plain_consonant(c: char) -> bool {
    c.is_ascii_alphabetic() && !is_standard_vowel(c) && c != 'Y'
}

// ============================================================================
// LETTER VALUE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterValue {
    pub letter: char,
    pub value: u32,
}

impl LetterValue {
    /// Look up a letter; `None` when it has no table entry
    pub fn of(letter: char) -> Option<Self> {
        match letter_value(letter) {
            0 => None,
            value => Some(LetterValue { letter, value }),
        }
    }
}

/// Sum of a sequence of letter values
pub fn sum_values(letters: &[LetterValue]) -> u32 {
    letters.iter().map(|l| l.value).sum()
}

/// Sum of every letter value in a (normalized) text, spaces skipped
pub fn sum_text(text: &str) -> u32 {
    text.chars().map(letter_value).sum()
}

// ============================================================================
// TESTS
// ============================================================================
