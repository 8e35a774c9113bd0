//! Converter from plain-text quiz files to JSON question sets.
//!
//! ```text
//! quiz-convert <input-path> [<output-path>]
//! ```

pub mod cli;
pub mod config;
pub mod convert;
pub mod error;

pub use cli::Cli;
pub use config::Config;
pub use convert::{convert_file, ConvertSummary};
pub use error::ConvertError;

use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn run(cli: Cli) -> anyhow::Result<()> {
    let config = Config::from_env();

    // Logs share stderr with the warnings; stdout only carries the report.
    tracing_subscriber::registry()
        .with(EnvFilter::new(config.log_filter_for(cli.verbose)))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false),
        )
        .init();

    let output = cli.output.unwrap_or_else(|| config.default_output.clone());
    tracing::debug!("Converting {} into {}", cli.input.display(), output.display());

    convert_file(&cli.input, &output, &mut io::stdout(), &mut io::stderr())?;
    Ok(())
}
