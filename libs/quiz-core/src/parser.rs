//! Plain-text quiz parser.
//!
//! # Format
//! ```text
//! 1. What is 2+2?
//! A) 3
//! B) 4
//! C) 5
//! D) 6
//! Respuesta: B
//!
//! 2. Another question
//! A. First option
//! ...
//! ```
//!
//! Blocks that are missing a stem, do not have exactly four options, or carry no
//! answer line are reported as [`IncompleteQuestion`] and left out of the result.

use crate::types::{
    Extraction, IncompleteQuestion, OptionLabel, Question, QuestionOption, OPTIONS_PER_QUESTION,
};
use regex::Regex;
use std::sync::LazyLock;

/// `<digits>.<whitespace>` at the start of a line. The whitespace may be a line break.
static BLOCK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^\d+\.\s+").expect("block marker pattern"));

static OPTION_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-D])[).]\s*(.+)$").expect("option pattern"));

// Keyword is case-insensitive, the label letter is not.
static ANSWER_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i:respuesta|correcta|correct|answer):\s*([A-D])").expect("answer pattern")
});

/// Extract every complete question from quiz text.
///
/// Never fails: malformed blocks end up in [`Extraction::warnings`].
pub fn extract(text: &str) -> Extraction {
    split_blocks(text)
        .enumerate()
        .fold(Extraction::default(), |mut extraction, (idx, block)| {
            match parse_block(block, idx + 1) {
                Ok(question) => extraction.questions.push(question),
                Err(warning) => extraction.warnings.push(warning),
            }
            extraction
        })
}

/// Split text into trimmed, non-empty blocks. Text before the first marker is dropped.
fn split_blocks(text: &str) -> impl Iterator<Item = &str> {
    BLOCK_MARKER
        .split(text)
        .skip(1)
        .map(str::trim)
        .filter(|block| !block.is_empty())
}

fn parse_block(block: &str, position: usize) -> Result<Question, IncompleteQuestion> {
    let mut lines = block.lines();
    let stem = lines.next().unwrap_or_default().trim();

    let mut builder = QuestionBuilder::new(position, stem);
    for line in lines {
        builder.process_line(line);
    }
    builder.build()
}

/// Match an option line such as `A) text` or `B. text`.
pub fn parse_option(line: &str) -> Option<QuestionOption> {
    let caps = OPTION_LINE.captures(line)?;
    let id = caps[1].chars().next().and_then(OptionLabel::from_char)?;
    Some(QuestionOption {
        id,
        text: caps[2].trim().to_string(),
    })
}

/// Match an answer line such as `Respuesta: B` or `ANSWER: C`.
pub fn parse_answer(line: &str) -> Option<OptionLabel> {
    let caps = ANSWER_LINE.captures(line)?;
    caps[1].chars().next().and_then(OptionLabel::from_char)
}

struct QuestionBuilder {
    position: usize,
    stem: String,
    options: Vec<QuestionOption>,
    correct: Option<OptionLabel>,
}

impl QuestionBuilder {
    fn new(position: usize, stem: &str) -> Self {
        Self {
            position,
            stem: stem.to_string(),
            options: Vec::new(),
            correct: None,
        }
    }

    fn process_line(&mut self, line: &str) {
        let line = line.trim();

        // Repeated labels are appended, not replaced.
        if let Some(option) = parse_option(line) {
            self.options.push(option);
        }
        if let Some(label) = parse_answer(line) {
            self.correct = Some(label);
        }
    }

    fn build(self) -> Result<Question, IncompleteQuestion> {
        match self.correct {
            Some(label) if !self.stem.is_empty() && self.options.len() == OPTIONS_PER_QUESTION => {
                Ok(Question {
                    id: Question::id_for_position(self.position),
                    stem: self.stem,
                    options: self.options,
                    correct: vec![label],
                })
            }
            correct => Err(IncompleteQuestion {
                position: self.position,
                has_stem: !self.stem.is_empty(),
                option_count: self.options.len(),
                has_correct: correct.is_some(),
            }),
        }
    }
}
