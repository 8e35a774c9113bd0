//! Error types for the converter.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to encode questions: {0}")]
    Encode(#[from] quiz_core::QuizError),

    #[error("failed to write report: {0}")]
    Report(#[from] std::io::Error),
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn read_error_names_path() {
        let error = ConvertError::ReadInput {
            path: PathBuf::from("quiz.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "no such file"),
        };
        assert_eq!(error.to_string(), "failed to read quiz.txt: no such file");
    }

    #[test]
    fn write_error_names_path() {
        let error = ConvertError::WriteOutput {
            path: PathBuf::from("out/questions.json"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(
            error.to_string(),
            "failed to write out/questions.json: denied"
        );
    }
}
