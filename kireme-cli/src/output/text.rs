//! Plain text output formatter

use super::{count_summary, info_line, sanitize, OutputFormatter, EMPTY_PLACEHOLDER};
use anyhow::Result;
use kireme_api::SegmentationResponse;
use std::io::{self, Write};

/// Plain text formatter - numbered sentences followed by a summary footer
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> OutputFormatter for TextFormatter<W> {
    fn format_response(&mut self, response: &SegmentationResponse) -> Result<()> {
        if response.sentences.is_empty() {
            writeln!(self.writer, "{EMPTY_PLACEHOLDER}")?;
        } else {
            for (index, sentence) in response.sentences.iter().enumerate() {
                writeln!(self.writer, "{}. {}", index + 1, sanitize(sentence))?;
            }
        }

        writeln!(self.writer)?;
        writeln!(self.writer, "{}", count_summary(response.count))?;
        writeln!(self.writer, "{}", info_line(response))?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(response: &SegmentationResponse) -> String {
        let mut buffer = Vec::new();
        TextFormatter::new(&mut buffer)
            .format_response(response)
            .unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn numbers_sentences_from_one() {
        let output = render(&SegmentationResponse {
            sentences: vec!["Hi.".to_string(), "Bye.".to_string()],
            count: 2,
            method: "spacy".to_string(),
            language: "en".to_string(),
        });

        assert!(output.contains("1. Hi.\n"));
        assert!(output.contains("2. Bye.\n"));
        assert!(output.contains("2 sentences found\n"));
        assert!(output.contains("Method: SPACY | Language: EN\n"));
    }

    #[test]
    fn singular_count_reads_naturally() {
        let output = render(&SegmentationResponse {
            sentences: vec!["Only one.".to_string()],
            count: 1,
            method: "baseline".to_string(),
            language: "en".to_string(),
        });

        assert!(output.contains("1 sentence found"));
        assert!(output.contains("Method: BASELINE | Language: EN"));
    }

    #[test]
    fn empty_list_shows_the_placeholder_not_a_list() {
        let output = render(&SegmentationResponse {
            sentences: vec![],
            count: 0,
            method: "spacy".to_string(),
            language: "en".to_string(),
        });

        assert!(output.contains("No sentences found."));
        assert!(!output.contains("1. "));
        assert!(output.contains("0 sentences found"));
    }

    #[test]
    fn markup_in_sentences_is_shown_literally() {
        let output = render(&SegmentationResponse {
            sentences: vec!["<script>alert('x')</script> Hello.".to_string()],
            count: 1,
            method: "spacy".to_string(),
            language: "en".to_string(),
        });

        assert!(output.contains("<script>alert('x')</script> Hello."));
    }

    #[test]
    fn escape_bytes_are_neutralized() {
        let output = render(&SegmentationResponse {
            sentences: vec!["bad\u{1b}]0;pwned\u{7}sentence.".to_string()],
            count: 1,
            method: "spacy".to_string(),
            language: "en".to_string(),
        });

        assert!(!output.contains('\u{1b}'));
        assert!(!output.contains('\u{7}'));
    }
}
