//! Error types for quiz-core.

use thiserror::Error;

/// Result type alias using QuizError.
pub type Result<T> = std::result::Result<T, QuizError>;

/// Errors that can occur while encoding or decoding question sets.
#[derive(Debug, Error)]
pub enum QuizError {
    #[error("invalid question set JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid question {id}: {reason}")]
    InvalidQuestion { id: String, reason: String },
}
