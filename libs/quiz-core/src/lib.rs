//! Core quiz library used by the converter binary.
//!
//! Provides:
//! - Plain-text quiz parser (numbered blocks, lettered options, answer line)
//! - JSON codec for question sets
//! - Shared types (Question, QuestionOption, OptionLabel, etc.)

pub mod codec;
pub mod error;
pub mod parser;
pub mod types;

pub use codec::{from_json, to_json};
pub use error::{QuizError, Result};
pub use parser::extract;
pub use types::{Extraction, IncompleteQuestion, OptionLabel, Question, QuestionOption};
