//! Client error types

use thiserror::Error;

/// Validation failures caught before any network call
///
/// Display strings are the user-facing messages shown in the error banner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Input text was empty after trimming
    #[error("Please enter some text to segment.")]
    EmptyText,

    /// The baseline method was combined with a non-English language
    #[error("Baseline method only supports English. Please select English or use the spacy method.")]
    BaselineRequiresEnglish,

    /// Language code the service does not know
    #[error("Language '{0}' not supported. Supported: en, fr, de, es")]
    UnknownLanguage(String),

    /// Method identifier the service does not know
    #[error("Method '{0}' not supported. Use 'baseline' or 'spacy'")]
    UnknownMethod(String),
}

/// Errors surfaced by the segmentation client
///
/// All variants reach the user through the same error banner path; they
/// differ only in message text. None is retried and none is fatal to the
/// session.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Request rejected before anything was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Backend reachable but it rejected the request
    #[error("{message}")]
    Service {
        /// Message from the backend's `detail` field, or the generic fallback
        message: String,
    },

    /// Backend unreachable or its response could not be parsed
    #[error("{message}. Make sure the backend server is running on {base_url}")]
    Network {
        /// The configured service base URL, included so a down backend is
        /// diagnosable from the message alone
        base_url: String,
        /// Underlying transport or parse failure
        message: String,
    },
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, ClientError>;
