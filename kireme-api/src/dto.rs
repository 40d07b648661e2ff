//! Wire protocol types for the segmentation service

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Languages the segmentation service accepts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// English
    #[default]
    En,
    /// French
    Fr,
    /// German
    De,
    /// Spanish
    Es,
}

impl Language {
    /// Wire code for this language
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Fr => "fr",
            Language::De => "de",
            Language::Es => "es",
        }
    }

    /// English display name, used in listings
    pub fn name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Fr => "French",
            Language::De => "German",
            Language::Es => "Spanish",
        }
    }

    /// All languages the service supports
    pub fn all() -> &'static [Language] {
        &[Language::En, Language::Fr, Language::De, Language::Es]
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "en" => Ok(Language::En),
            "fr" => Ok(Language::Fr),
            "de" => Ok(Language::De),
            "es" => Ok(Language::Es),
            other => Err(ValidationError::UnknownLanguage(other.to_string())),
        }
    }
}

/// Segmentation method identifiers exposed by the service
///
/// The service treats these as opaque algorithm selectors; the only rule a
/// client has to know is that `baseline` works for English only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Rule-based splitter, English only
    Baseline,
    /// NLP-pipeline-backed splitter, multilingual
    #[default]
    Spacy,
}

impl Method {
    /// Wire identifier for this method
    pub fn id(&self) -> &'static str {
        match self {
            Method::Baseline => "baseline",
            Method::Spacy => "spacy",
        }
    }

    /// Short description, used in listings
    pub fn describe(&self) -> &'static str {
        match self {
            Method::Baseline => "rule-based splitter (English only)",
            Method::Spacy => "NLP pipeline splitter (multilingual)",
        }
    }

    /// All methods the service supports
    pub fn all() -> &'static [Method] {
        &[Method::Baseline, Method::Spacy]
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Method {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "baseline" => Ok(Method::Baseline),
            "spacy" => Ok(Method::Spacy),
            other => Err(ValidationError::UnknownMethod(other.to_string())),
        }
    }
}

/// Body of `POST /segment`
///
/// Built through [`FormState::validate`](crate::form::FormState::validate),
/// so the text is non-empty and trimmed and the method/language pair is
/// consistent. Created fresh per submission and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentationRequest {
    /// Text to segment, trimmed of leading and trailing whitespace
    pub text: String,
    /// Target language
    pub language: Language,
    /// Selected segmentation method
    pub method: Method,
}

/// Successful response from `POST /segment`
///
/// Fields the service omits fall back to safe defaults. `count` is
/// reported as given, never recomputed from the sentence list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentationResponse {
    /// Segmented sentences, in input order
    #[serde(default)]
    pub sentences: Vec<String>,
    /// Sentence count as reported by the service
    #[serde(default)]
    pub count: usize,
    /// Identifier of the method that actually ran
    #[serde(default = "unknown_method")]
    pub method: String,
    /// Language the service applied
    #[serde(default = "default_language_code")]
    pub language: String,
}

fn unknown_method() -> String {
    "unknown".to_string()
}

fn default_language_code() -> String {
    "en".to_string()
}

/// Body shape of a non-2xx response
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    /// Human-readable rejection reason, when the service provides one
    #[serde(default)]
    pub detail: Option<String>,
}
