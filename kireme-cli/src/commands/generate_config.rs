//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "kireme.toml")]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to point at your segmentation service");
        println!("2. Use it for requests:");
        println!("   kireme segment --config {} --text \"...\"", self.output.display());

        Ok(())
    }

    /// Generate template configuration content
    fn generate_template(&self) -> String {
        r#"# kireme CLI configuration

[service]
# Base URL of the segmentation service
base_url = "http://localhost:8000"

# Request timeout in seconds. Remove to wait indefinitely.
# timeout_secs = 30

[defaults]
# Default language code (en, fr, de, es)
language = "en"

# Default segmentation method (baseline, spacy).
# The baseline method only supports English.
method = "spacy"

# Default output format (text, json, markdown)
format = "text"
"#
        .to_string()
    }
}
