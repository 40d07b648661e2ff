//! Command-line client for the kireme sentence segmentation web service

use anyhow::Result;
use clap::Parser;
use kireme_cli::commands::Commands;

/// Segment text into sentences via a remote sentence segmentation service
#[derive(Debug, Parser)]
#[command(name = "kireme", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute().await
}
