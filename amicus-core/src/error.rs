//! Error type shared by every core module.

/// Failures surfaced by the core. Degenerate inputs (empty text, empty ledger,
/// no reviews) are not errors and never produce one of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoreError {
    #[error("assessment incomplete: {answered} of {expected} questions answered")]
    IncompleteAssessment { answered: usize, expected: usize },

    #[error("catalog '{catalog}' has no bundles for declared category '{category}'")]
    UndeclaredCategory {
        catalog: &'static str,
        category: &'static str,
    },

    #[error("invalid date key '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid calendar month: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("unknown {kind} '{value}'")]
    UnknownCategory { kind: &'static str, value: String },

    #[error("question {question} has no option {option}")]
    InvalidOption { question: usize, option: usize },

    #[error("question {question} offers no answer with weight {weight}")]
    InvalidWeight { question: usize, weight: u32 },

    #[error("assessment already has an answer for every question")]
    AssessmentComplete,

    #[error("rating {0} is outside 1..=5")]
    InvalidRating(u8),

    #[error("{0} must not be empty")]
    EmptyField(&'static str),

    #[error("no review with id {0}")]
    UnknownReview(u32),
}

pub type Result<T> = std::result::Result<T, CoreError>;
