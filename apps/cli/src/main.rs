use clap::Parser;
use quiz_convert::Cli;

fn main() -> anyhow::Result<()> {
    quiz_convert::run(Cli::parse())
}
