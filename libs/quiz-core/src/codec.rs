//! JSON encoding for question sets.
//!
//! The output is a bare array of questions, indented with two spaces and with
//! non-ASCII text written as-is.

use crate::error::{QuizError, Result};
use crate::types::{Question, OPTIONS_PER_QUESTION};

/// Encode questions as a pretty-printed JSON array.
pub fn to_json(questions: &[Question]) -> Result<String> {
    Ok(serde_json::to_string_pretty(questions)?)
}

/// Decode a JSON array of questions, rejecting structurally incomplete records.
pub fn from_json(json: &str) -> Result<Vec<Question>> {
    let questions: Vec<Question> = serde_json::from_str(json)?;
    for question in &questions {
        validate(question)?;
    }
    Ok(questions)
}

fn validate(question: &Question) -> Result<()> {
    let invalid = |reason: String| QuizError::InvalidQuestion {
        id: question.id.clone(),
        reason,
    };

    if question.stem.trim().is_empty() {
        return Err(invalid("empty stem".to_string()));
    }
    if question.options.len() != OPTIONS_PER_QUESTION {
        return Err(invalid(format!(
            "expected {} options, found {}",
            OPTIONS_PER_QUESTION,
            question.options.len()
        )));
    }
    if let Some(option) = question.options.iter().find(|o| o.text.trim().is_empty()) {
        return Err(invalid(format!("option {} has no text", option.id)));
    }
    if question.correct.len() != 1 {
        return Err(invalid(format!(
            "expected 1 correct label, found {}",
            question.correct.len()
        )));
    }
    Ok(())
}
