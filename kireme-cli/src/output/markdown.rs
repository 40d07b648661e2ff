//! Markdown output formatter

use super::{count_summary, info_line, OutputFormatter, EMPTY_PLACEHOLDER};
use anyhow::Result;
use kireme_api::SegmentationResponse;
use std::io::Write;

/// Markdown formatter - numbered list with markup-safe sentence text
pub struct MarkdownFormatter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for MarkdownFormatter<W> {
    fn format_response(&mut self, response: &SegmentationResponse) -> Result<()> {
        if response.sentences.is_empty() {
            writeln!(self.writer, "_{EMPTY_PLACEHOLDER}_")?;
        } else {
            for (index, sentence) in response.sentences.iter().enumerate() {
                // Sentences are untrusted server content; escape them so a
                // markdown viewer renders them as text, never as markup.
                writeln!(
                    self.writer,
                    "{}. {}",
                    index + 1,
                    html_escape::encode_text(sentence)
                )?;
            }
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*{}*", count_summary(response.count))?;
        writeln!(self.writer, "*{}*", info_line(response))?;
        self.writer.flush()?;
        Ok(())
    }
}
