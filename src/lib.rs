// Numerology Engine - Core Library
// Pythagorean numerology profiles and compatibility, exposed for the CLI and API server

pub mod alphabet;
pub mod normalizer;
pub mod classifier;
pub mod reduction;
pub mod core_numbers;
pub mod life_cycles;
pub mod personal_period;
pub mod profile;
pub mod compatibility;
pub mod validation;      // Caller boundary: range checks
pub mod config;          // Binaries: environment settings
pub mod telemetry;       // Binaries: tracing subscriber

// Re-export commonly used types
pub use alphabet::{LetterValue, MASTER_NUMBERS};
pub use normalizer::normalize_name;
pub use classifier::{classify_letters, is_y_vowel_in_word, Classification};
pub use reduction::{is_master_number, reduce, ReducePolicy};
pub use core_numbers::{
    CoreNumber, LifePathNumber, ExpressionNumber, SoulUrgeNumber, PersonalityNumber,
    BirthdayNumber, MaturityNumber, PowerNameNumber, ActiveNumber, LegacyNumber,
    KarmicLessons,
};
pub use life_cycles::{PinnacleItem, ChallengeItem};
pub use personal_period::{PersonalYear, PersonalMonth, PersonalDay};
pub use profile::{
    calculate_profile, NumerologyProfile, ReferenceDate,
    CoreNumbers, NameNumbers, LifeCycles, CurrentPeriod,
};
pub use compatibility::{
    calculate_compatibility, CompatibilityEngine, CompatibilityMatrix, CompatibilityResult,
    CompatibilityScores, CategoryScore, PersonSummary,
};
pub use validation::{BirthInput, CompatibilityInput, InputError};
pub use config::{Settings, ConfigError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
