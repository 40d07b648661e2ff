//! Segment command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use kireme_api::{ClientConfig, FormState, Language, Method, SegmentClient, SubmissionTracker};

use crate::config::CliConfig;
use crate::input;
use crate::output::{self, OutputFormat};
use crate::progress::LoadingIndicator;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Text to segment (reads stdin when neither --text nor --input is given)
    #[arg(short, long, value_name = "TEXT", conflicts_with = "input")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Language of the text (en, fr, de, es)
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<Language>,

    /// Segmentation method (baseline, spacy)
    #[arg(short, long, value_name = "NAME")]
    pub method: Option<Method>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Base URL of the segmentation service
    #[arg(long, value_name = "URL", env = "KIREME_API_URL")]
    pub api_url: Option<String>,

    /// Request timeout in seconds (default: wait indefinitely)
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<u64>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl SegmentArgs {
    /// Execute the segment command
    pub async fn execute(&self) -> Result<()> {
        super::init_logging(self.quiet, self.verbose);
        log::info!("Starting segmentation request");

        let config = CliConfig::load(self.config.as_deref())?;

        let language = match self.language {
            Some(language) => language,
            None => config.default_language()?,
        };
        let method = match self.method {
            Some(method) => method,
            None => config.default_method()?,
        };
        let format = match self.format {
            Some(format) => format,
            None => config.default_format()?,
        };

        let text = input::read_text(self.text.as_deref(), self.input.as_deref())?;

        // Submission-time validation: an inconsistent pair fails here and
        // nothing is sent over the network.
        let form = FormState::with_fields(text, language, method);
        let request = form.validate()?;

        let base_url = self
            .api_url
            .clone()
            .unwrap_or(config.service.base_url);
        let mut client_config = ClientConfig::new(base_url);
        if let Some(secs) = self.timeout.or(config.service.timeout_secs) {
            client_config = client_config.with_timeout(Duration::from_secs(secs));
        }
        let client = SegmentClient::new(client_config)?;

        let tracker = SubmissionTracker::new();
        let ticket = tracker.begin();

        let indicator = LoadingIndicator::start(self.quiet);
        let result = client.segment(&request).await;
        // Loading state ends before anything is rendered, on every path.
        drop(indicator);

        let response = result?;
        if !ticket.is_current() {
            log::warn!("discarding stale segmentation response");
            return Ok(());
        }

        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                output::render(&response, format, file)?;
                log::info!("wrote result to {}", path.display());
            }
            None => output::render(&response, format, io::stdout().lock())?,
        }

        Ok(())
    }
}
