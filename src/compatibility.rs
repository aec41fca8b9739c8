// 💞 Compatibility Engine - Two profiles, one score
// Static pairwise table (0-100) combined with fixed category weights

use crate::profile::{calculate_profile, NumerologyProfile, ReferenceDate};
use crate::reduction::{reduce, ReducePolicy};
use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

/// Score used when a pair has no table entry
pub const DEFAULT_SCORE: f64 = 50.0;

pub const LIFE_PATH_WEIGHT: f64 = 0.40;
pub const SOUL_URGE_WEIGHT: f64 = 0.25;
pub const EXPRESSION_WEIGHT: f64 = 0.20;
pub const PERSONALITY_WEIGHT: f64 = 0.15;

/// (low, high, score) for every unordered pair of digits 1-9
const COMPATIBILITY_TABLE: [(u32, u32, f64); 45] = [
    // 1
    (1, 1, 70.0), (1, 2, 55.0), (1, 3, 85.0), (1, 4, 50.0), (1, 5, 90.0),
    (1, 6, 60.0), (1, 7, 65.0), (1, 8, 55.0), (1, 9, 80.0),
    // 2
    (2, 2, 75.0), (2, 3, 80.0), (2, 4, 85.0), (2, 5, 45.0), (2, 6, 90.0),
    (2, 7, 60.0), (2, 8, 70.0), (2, 9, 65.0),
    // 3
    (3, 3, 80.0), (3, 4, 40.0), (3, 5, 90.0), (3, 6, 85.0), (3, 7, 55.0),
    (3, 8, 50.0), (3, 9, 95.0),
    // 4
    (4, 4, 75.0), (4, 5, 35.0), (4, 6, 80.0), (4, 7, 70.0), (4, 8, 90.0),
    (4, 9, 40.0),
    // 5
    (5, 5, 70.0), (5, 6, 45.0), (5, 7, 80.0), (5, 8, 55.0), (5, 9, 75.0),
    // 6
    (6, 6, 85.0), (6, 7, 40.0), (6, 8, 60.0), (6, 9, 90.0),
    // 7
    (7, 7, 80.0), (7, 8, 45.0), (7, 9, 55.0),
    // 8
    (8, 8, 75.0), (8, 9, 50.0),
    // 9
    (9, 9, 70.0),
];

lazy_static! {
    static ref STANDARD_MATRIX: CompatibilityMatrix = CompatibilityMatrix::from_entries(&COMPATIBILITY_TABLE);
}

// ============================================================================
// MATRIX
// ============================================================================

/// Symmetric pair → score table. Only `(min, max)` keys are stored.
#[derive(Debug, Clone)]
pub struct CompatibilityMatrix {
    scores: HashMap<(u32, u32), f64>,
}

fn ordered(a: u32, b: u32) -> (u32, u32) {
    (a.min(b), a.max(b))
}

impl CompatibilityMatrix {
    pub fn from_entries(entries: &[(u32, u32, f64)]) -> Self {
        let scores = entries
            .iter()
            .map(|&(a, b, score)| (ordered(a, b), score))
            .collect();
        CompatibilityMatrix { scores }
    }

    /// Shared table built once per process
    pub fn standard() -> &'static CompatibilityMatrix {
        &STANDARD_MATRIX
    }

    /// Score for an unordered pair.
    ///
    /// Tries the pair as given, then both numbers forced to single digits
    /// (so 11/22/33 score as 2/4/6), then falls back to `DEFAULT_SCORE`.
    pub fn score(&self, a: u32, b: u32) -> f64 {
        if let Some(&score) = self.scores.get(&ordered(a, b)) {
            return score;
        }

        let ra = reduce(a, ReducePolicy::SingleDigit);
        let rb = reduce(b, ReducePolicy::SingleDigit);
        self.scores
            .get(&ordered(ra, rb))
            .copied()
            .unwrap_or(DEFAULT_SCORE)
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

// ============================================================================
// RESULT TYPES
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonSummary {
    pub name: String,
    pub life_path: u32,
    pub expression: u32,
    pub soul_urge: u32,
    pub personality: u32,
}

impl From<&NumerologyProfile> for PersonSummary {
    fn from(profile: &NumerologyProfile) -> Self {
        PersonSummary {
            name: profile.name.clone(),
            life_path: profile.life_path(),
            expression: profile.expression(),
            soul_urge: profile.soul_urge(),
            personality: profile.personality(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    pub score: f64,
    pub weight: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityScores {
    pub overall_score: f64,
    pub life_path: CategoryScore,
    pub expression: CategoryScore,
    pub soul_urge: CategoryScore,
    pub personality: CategoryScore,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompatibilityResult {
    pub person1: PersonSummary,
    pub person2: PersonSummary,
    pub compatibility: CompatibilityScores,
    pub profile1: NumerologyProfile,
    pub profile2: NumerologyProfile,
}

// ============================================================================
// ENGINE
// ============================================================================

pub struct CompatibilityEngine<'a> {
    matrix: &'a CompatibilityMatrix,
}

impl CompatibilityEngine<'static> {
    /// Engine over the standard table
    pub fn new() -> Self {
        CompatibilityEngine {
            matrix: CompatibilityMatrix::standard(),
        }
    }
}

impl Default for CompatibilityEngine<'static> {
    fn default() -> Self {
        Self::new()
    }
}

/// One decimal place, ties to even (77.25 → 77.2)
fn round_one_decimal(x: f64) -> f64 {
    (x * 10.0).round_ties_even() / 10.0
}

impl<'a> CompatibilityEngine<'a> {
    pub fn with_matrix(matrix: &'a CompatibilityMatrix) -> Self {
        CompatibilityEngine { matrix }
    }

    /// Weighted category scores for two existing profiles
    pub fn score_profiles(&self, p1: &NumerologyProfile, p2: &NumerologyProfile) -> CompatibilityScores {
        let category = |a: u32, b: u32, weight: f64| CategoryScore {
            score: self.matrix.score(a, b),
            weight,
        };

        let life_path = category(p1.life_path(), p2.life_path(), LIFE_PATH_WEIGHT);
        let expression = category(p1.expression(), p2.expression(), EXPRESSION_WEIGHT);
        let soul_urge = category(p1.soul_urge(), p2.soul_urge(), SOUL_URGE_WEIGHT);
        let personality = category(p1.personality(), p2.personality(), PERSONALITY_WEIGHT);

        let weighted = life_path.score * life_path.weight
            + soul_urge.score * soul_urge.weight
            + expression.score * expression.weight
            + personality.score * personality.weight;

        CompatibilityScores {
            overall_score: round_one_decimal(weighted),
            life_path,
            expression,
            soul_urge,
            personality,
        }
    }

    /// Compare two profiles and keep both in the result
    pub fn compare(&self, profile1: NumerologyProfile, profile2: NumerologyProfile) -> CompatibilityResult {
        let compatibility = self.score_profiles(&profile1, &profile2);

        debug!(
            person1 = %profile1.name,
            person2 = %profile2.name,
            overall = compatibility.overall_score,
            "numerology compatibility computed"
        );

        CompatibilityResult {
            person1: PersonSummary::from(&profile1),
            person2: PersonSummary::from(&profile2),
            compatibility,
            profile1,
            profile2,
        }
    }
}

/// Build both profiles against one reference date and compare them
#[allow(clippy::too_many_arguments)]
pub fn calculate_compatibility(
    name1: &str,
    day1: u32,
    month1: u32,
    year1: u32,
    name2: &str,
    day2: u32,
    month2: u32,
    year2: u32,
    reference: ReferenceDate,
) -> CompatibilityResult {
    let profile1 = calculate_profile(name1, day1, month1, year1, reference);
    let profile2 = calculate_profile(name2, day2, month2, year2, reference);
    CompatibilityEngine::new().compare(profile1, profile2)
}

// ============================================================================
// TESTS
// ============================================================================
