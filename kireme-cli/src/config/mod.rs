//! Configuration module

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

use kireme_api::{Language, Method};

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Segmentation service connection settings
    #[serde(default)]
    pub service: ServiceConfig,

    /// Default request options
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Service connection configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Base URL of the segmentation service
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds; absent means wait indefinitely
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

/// Default request options
#[derive(Debug, Deserialize, Serialize)]
pub struct DefaultsConfig {
    /// Default language code
    #[serde(default = "default_language")]
    pub language: String,

    /// Default segmentation method
    #[serde(default = "default_method")]
    pub method: String,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            language: default_language(),
            method: default_method(),
            format: default_format(),
        }
    }
}

fn default_language() -> String {
    "en".to_string()
}

fn default_method() -> String {
    "spacy".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

impl CliConfig {
    /// Load configuration from a file, or built-in defaults when none is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read config file: {}", path.display()))?;
                toml::from_str(&content)
                    .with_context(|| format!("Invalid config file: {}", path.display()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Parse the configured default language
    pub fn default_language(&self) -> Result<Language> {
        Language::from_str(&self.defaults.language)
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Parse the configured default method
    pub fn default_method(&self) -> Result<Method> {
        Method::from_str(&self.defaults.method)
            .map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Parse the configured default output format
    pub fn default_format(&self) -> Result<OutputFormat> {
        match self.defaults.format.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(CliError::ConfigError(format!(
                "unknown output format '{other}' (use text, json or markdown)"
            ))
            .into()),
        }
    }
}
