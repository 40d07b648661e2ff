//! Input handling module

use anyhow::Result;
use std::io::Read;
use std::path::Path;

use crate::error::CliError;

pub mod file_reader;

pub use file_reader::FileReader;

/// Resolve the text to segment from the command-line sources
///
/// Precedence: inline `--text`, then `--input FILE`, then stdin.
pub fn read_text(inline: Option<&str>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text.to_string());
    }
    if let Some(path) = file {
        return FileReader::read_text(path);
    }
    read_stdin()
}

/// Read all of stdin as UTF-8 text
fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|e| CliError::InputError(format!("failed to read from stdin: {e}")))?;
    Ok(buffer)
}
