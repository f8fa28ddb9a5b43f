//! Error types for drill-core.

use thiserror::Error;

/// Result type alias using MatchError.
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors that can occur while scoring an attempt.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("input of {length} characters exceeds the limit of {limit}")]
    LimitExceeded { length: usize, limit: usize },
}
