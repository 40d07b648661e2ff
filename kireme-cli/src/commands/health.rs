//! Health command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use kireme_api::{ClientConfig, SegmentClient};

use crate::config::CliConfig;

/// Arguments for the health command
#[derive(Debug, Args)]
pub struct HealthArgs {
    /// Base URL of the segmentation service
    #[arg(long, value_name = "URL", env = "KIREME_API_URL")]
    pub api_url: Option<String>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl HealthArgs {
    /// Execute the health command
    pub async fn execute(&self) -> Result<()> {
        super::init_logging(false, self.verbose);

        let config = CliConfig::load(self.config.as_deref())?;
        let base_url = self
            .api_url
            .clone()
            .unwrap_or(config.service.base_url);
        let client = SegmentClient::new(ClientConfig::new(base_url.clone()))?;

        if client.health().await {
            println!("✓ Backend API is running at {base_url}");
            Ok(())
        } else {
            println!("⚠ Backend API not reachable at {base_url}");
            Err(anyhow::anyhow!("health probe failed for {base_url}"))
        }
    }
}
