//! Command-line arguments.

use clap::Parser;
use std::path::PathBuf;

const INPUT_FORMAT_HELP: &str = "\
Expected input format:
  1. Question text
  A) Option A
  B) Option B
  C) Option C
  D) Option D
  Respuesta: B

The answer line also accepts Correcta:, Correct: and Answer:.";

#[derive(Parser, Debug)]
#[command(name = "quiz-convert")]
#[command(version, about, long_about = None, after_help = INPUT_FORMAT_HELP)]
pub struct Cli {
    /// Plain-text quiz file to convert
    pub input: PathBuf,

    /// Destination JSON file [default: questions.real.json or $QUIZ_CONVERT_OUTPUT]
    pub output: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
