//! sessbound command-line entry point

use clap::Parser;
use sessbound_cli::commands::Commands;

/// Evaluate predicted chat session boundaries against ground truth
#[derive(Debug, Parser)]
#[command(name = "sessbound", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
