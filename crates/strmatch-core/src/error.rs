//! Matching error types

use thiserror::Error;

/// Raised when an operation that must pick "the" closest match is given
/// nothing to pick from.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}")]
pub struct StringMatchingError {
    message: String,
}

impl StringMatchingError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Error returned by `closest_string` for an empty candidate slice
    pub fn empty_candidates() -> Self {
        Self::new(
            "When using closest_string(), the possible_words array must contain at least one word",
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Result type for single-result matching operations
pub type MatchResult<T> = Result<T, StringMatchingError>;
