//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use kireme_api::SegmentationResponse;
use std::io::Write;

/// JSON formatter - re-serializes the service response verbatim
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputFormatter for JsonFormatter<W> {
    fn format_response(&mut self, response: &SegmentationResponse) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, response)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
