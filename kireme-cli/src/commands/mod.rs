//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod health;
pub mod interactive;
pub mod list;
pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text into sentences via the remote service
    Segment(segment::SegmentArgs),

    /// Check whether the segmentation service is reachable
    Health(health::HealthArgs),

    /// Start an interactive segmentation session
    Interactive(interactive::InteractiveArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a default configuration file
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List supported languages
    Languages,

    /// List available segmentation methods
    Methods,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Dispatch to the selected command
    pub async fn execute(self) -> Result<()> {
        match self {
            Commands::Segment(args) => args.execute().await,
            Commands::Health(args) => args.execute().await,
            Commands::Interactive(args) => args.execute().await,
            Commands::List { subcommand } => list::execute(subcommand),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(quiet: bool, verbose: u8) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
