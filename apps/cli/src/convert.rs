//! Text-to-JSON conversion pipeline.

use crate::error::{ConvertError, Result};
use quiz_core::IncompleteQuestion;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Outcome of a conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertSummary {
    pub parsed: usize,
    pub rejected: Vec<IncompleteQuestion>,
    pub output: PathBuf,
}

/// Convert a quiz file and write the question set to `output`.
///
/// Progress lines go to `out`, one warning per rejected block goes to `err`.
/// Nothing is parsed when the input cannot be read.
pub fn convert_file(
    input: &Path,
    output: &Path,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<ConvertSummary> {
    let text = fs::read_to_string(input).map_err(|source| ConvertError::ReadInput {
        path: input.to_path_buf(),
        source,
    })?;
    info!("Read {} bytes from {}", text.len(), input.display());

    let extraction = quiz_core::extract(&text);
    info!(
        "Extracted {} of {} blocks",
        extraction.questions.len(),
        extraction.blocks_seen()
    );

    for warning in &extraction.warnings {
        debug!(position = warning.position, "Skipping incomplete block");
        writeln!(err, "Warning: {}", warning)?;
    }
    writeln!(out, "Parsed {} questions", extraction.questions.len())?;

    let json = quiz_core::to_json(&extraction.questions)?;
    fs::write(output, json).map_err(|source| ConvertError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    info!("Wrote {}", output.display());

    writeln!(out, "Questions saved to {}", output.display())?;

    Ok(ConvertSummary {
        parsed: extraction.questions.len(),
        rejected: extraction.warnings,
        output: output.to_path_buf(),
    })
}
