//! Form state and validation
//!
//! The submission form is an explicit value object instead of scattered
//! mutable UI state. Field setters run the method/language auto-correction;
//! [`FormState::validate`] is a pure function that either produces a
//! well-formed [`SegmentationRequest`] or explains why no request may be
//! issued.

use crate::dto::{Language, Method, SegmentationRequest};
use crate::error::ValidationError;
use crate::notice::Notice;

/// Snapshot of the submission form fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    text: String,
    language: Language,
    method: Method,
}

impl FormState {
    /// Create an empty form with the service defaults (English, spacy)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a form with the fields as given, without auto-correction
    ///
    /// Used for one-shot submissions where an inconsistent pair must fail
    /// validation rather than be silently fixed.
    pub fn with_fields(text: impl Into<String>, language: Language, method: Method) -> Self {
        Self {
            text: text.into(),
            language,
            method,
        }
    }

    /// The raw text buffer, untrimmed
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Currently selected language
    pub fn language(&self) -> Language {
        self.language
    }

    /// Currently selected method
    pub fn method(&self) -> Method {
        self.method
    }

    /// Replace the text buffer
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Append a line to the text buffer
    pub fn push_line(&mut self, line: &str) {
        if !self.text.is_empty() {
            self.text.push('\n');
        }
        self.text.push_str(line);
    }

    /// Discard the text buffer
    pub fn clear_text(&mut self) {
        self.text.clear();
    }

    /// Select a segmentation method
    ///
    /// Selecting `baseline` while a non-English language is active resets
    /// the language to English and reports the correction as a notice.
    pub fn set_method(&mut self, method: Method) -> Option<Notice> {
        self.method = method;
        self.correct_language()
    }

    /// Select a language
    ///
    /// The baseline method pins the language to English; an incompatible
    /// selection is corrected back and reported as a notice.
    pub fn set_language(&mut self, language: Language) -> Option<Notice> {
        self.language = language;
        self.correct_language()
    }

    fn correct_language(&mut self) -> Option<Notice> {
        if self.method == Method::Baseline && self.language != Language::En {
            self.language = Language::En;
            Some(Notice::baseline_language_reset())
        } else {
            None
        }
    }

    /// Validate the current fields into a request
    ///
    /// Pure: no I/O, no mutation. A failure means no network call happens.
    pub fn validate(&self) -> Result<SegmentationRequest, ValidationError> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyText);
        }
        if self.method == Method::Baseline && self.language != Language::En {
            return Err(ValidationError::BaselineRequiresEnglish);
        }

        Ok(SegmentationRequest {
            text: text.to_string(),
            language: self.language,
            method: self.method,
        })
    }
}
