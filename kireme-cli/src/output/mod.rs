//! Output formatting module
//!
//! Result output and the error banner are mutually exclusive surfaces:
//! formatters write results to the selected writer, failures go to stderr
//! through [`error_banner`].

use anyhow::Result;
use kireme_api::SegmentationResponse;
use std::borrow::Cow;
use std::io::Write;

/// Trait for result renderers
pub trait OutputFormatter {
    /// Render a full segmentation response
    fn format_response(&mut self, response: &SegmentationResponse) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Output formats selectable on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Numbered sentences with a summary footer
    Text,
    /// The service response as pretty-printed JSON
    Json,
    /// Markdown list with markup-safe escaping
    Markdown,
}

/// Render a response with the chosen format
pub fn render<W: Write>(
    response: &SegmentationResponse,
    format: OutputFormat,
    writer: W,
) -> Result<()> {
    match format {
        OutputFormat::Text => TextFormatter::new(writer).format_response(response),
        OutputFormat::Json => JsonFormatter::new(writer).format_response(response),
        OutputFormat::Markdown => MarkdownFormatter::new(writer).format_response(response),
    }
}

/// Print a failure to stderr, replacing any result output
pub fn error_banner(message: &str) {
    eprintln!("Error: {message}");
}

/// Placeholder shown instead of an empty sentence list
pub const EMPTY_PLACEHOLDER: &str = "No sentences found.";

/// Pluralized count summary, with the count as reported by the service
pub fn count_summary(count: usize) -> String {
    if count == 1 {
        "1 sentence found".to_string()
    } else {
        format!("{count} sentences found")
    }
}

/// Upper-cased method/language info line
pub fn info_line(response: &SegmentationResponse) -> String {
    format!(
        "Method: {} | Language: {}",
        response.method.to_uppercase(),
        response.language.to_uppercase()
    )
}

/// Neutralize control characters in untrusted sentence text
///
/// Sentences come from the network; anything that could re-program the
/// terminal (escape sequences, carriage returns) is replaced before it is
/// written. Tabs and newlines pass through.
pub fn sanitize(text: &str) -> Cow<'_, str> {
    let needs_escaping = |c: char| c.is_control() && c != '\t' && c != '\n';
    if text.chars().any(needs_escaping) {
        text.chars()
            .map(|c| {
                if needs_escaping(c) {
                    char::REPLACEMENT_CHARACTER
                } else {
                    c
                }
            })
            .collect::<String>()
            .into()
    } else {
        Cow::Borrowed(text)
    }
}
