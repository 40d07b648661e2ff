//! Typed client for the kireme sentence segmentation web service
//!
//! The segmentation itself runs server-side; this crate covers the client
//! half of the contract: form state with validation and auto-correction,
//! the `/segment` and `/health` HTTP calls, and the error taxonomy the
//! frontends surface to users.

#![warn(missing_docs)]

pub mod client;
pub mod dto;
pub mod error;
pub mod form;
pub mod notice;

// Re-export key types
pub use client::{ClientConfig, SegmentClient, SubmissionTicket, SubmissionTracker};
pub use dto::{Language, Method, SegmentationRequest, SegmentationResponse};
pub use error::{ClientError, Result, ValidationError};
pub use form::FormState;
pub use notice::{Notice, NoticeBoard};

/// Segment text with default settings (convenience function)
///
/// Validates the text, sends it to the service at the default base URL and
/// returns the parsed response.
pub async fn segment_text(text: &str) -> Result<SegmentationResponse> {
    let mut form = FormState::new();
    form.set_text(text);
    let request = form.validate()?;
    let client = SegmentClient::with_default_config()?;
    client.segment(&request).await
}
