//! Core types for the quiz converter.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Prefix of every synthesized question id.
pub const QUESTION_ID_PREFIX: &str = "real-q";

/// Number of options a complete question carries.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// Label of a multiple-choice option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum OptionLabel {
    A,
    B,
    C,
    D,
}

impl OptionLabel {
    /// Get the label as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Parse from an uppercase letter. Lowercase letters are rejected.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'A' => Some(Self::A),
            'B' => Some(Self::B),
            'C' => Some(Self::C),
            'D' => Some(Self::D),
            _ => None,
        }
    }
}

impl fmt::Display for OptionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One labelled answer choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionOption {
    pub id: OptionLabel,
    pub text: String,
}

/// A complete multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub stem: String,
    pub options: Vec<QuestionOption>,
    pub correct: Vec<OptionLabel>,
}

impl Question {
    /// Build the id for the block at the given 1-based position.
    pub fn id_for_position(position: usize) -> String {
        format!("{}{}", QUESTION_ID_PREFIX, position)
    }
}

/// Diagnostic for a block that was left out of the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncompleteQuestion {
    /// 1-based position of the block among the non-empty blocks.
    pub position: usize,
    pub has_stem: bool,
    pub option_count: usize,
    pub has_correct: bool,
}

impl fmt::Display for IncompleteQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Question {} is incomplete (stem={}, options={}, correct={})",
            self.position, self.has_stem, self.option_count, self.has_correct
        )
    }
}

/// Result of a single extraction pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub questions: Vec<Question>,
    pub warnings: Vec<IncompleteQuestion>,
}

impl Extraction {
    /// Total number of blocks seen, accepted or not.
    pub fn blocks_seen(&self) -> usize {
        self.questions.len() + self.warnings.len()
    }
}
