//! Error types for the strmatch front end.

use thiserror::Error;

/// Common error type for strmatch commands.
#[derive(Error, Debug)]
pub enum Error {
    /// Matching error (no candidates for a single-result command)
    #[error(transparent)]
    Matching(#[from] strmatch_core::StringMatchingError),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias using strmatch Error.
pub type Result<T> = std::result::Result<T, Error>;
