// 🧹 Name Normalizer - Canonical uppercase form
// "José  da-Silva" → "JOSE DASILVA"

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalize a raw name for numerology.
///
/// Steps:
/// 1. NFKD decomposition, so accented letters split into base + mark
/// 2. Combining marks dropped
/// 3. Uppercased
/// 4. Only `A-Z` and the space character kept (digits, punctuation,
///    hyphens, tabs all disappear)
/// 5. Runs of spaces collapsed, ends trimmed
///
/// Total: any input (including `""`) yields a possibly empty string.
pub fn normalize_name(name: &str) -> String {
    let upper: String = name
        .nfkd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_uppercase();

    let clean: String = upper
        .chars()
        .filter(|c| c.is_ascii_uppercase() || *c == ' ')
        .collect();

    clean.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First space-separated token of a normalized name ("" when empty)
pub fn first_word(normalized: &str) -> &str {
    normalized.split(' ').next().unwrap_or("")
}

/// Last space-separated token of a normalized name ("" when empty)
pub fn last_word(normalized: &str) -> &str {
    normalized.rsplit(' ').next().unwrap_or("")
}

// ============================================================================
// TESTS
// ============================================================================
