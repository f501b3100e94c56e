mod commands;
mod input_output;
mod logging;
mod tables;

use clap::Parser;
use commands::Commands;

/// nertag: named-entity tagging tools.
#[derive(clap::Parser, Debug)]
#[command(name = "nertag", version)]
pub struct Args {
    #[command(flatten)]
    logging: logging::LogArgs,

    /// Subcommand to run.
    #[clap(subcommand)]
    pub command: Commands,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    args.logging.setup_logging(2)?;

    args.command.run()
}
