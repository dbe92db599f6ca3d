//! Memory Image Loader.
//!
//! This module reads the text images that seed the instruction and data
//! windows. It performs:
//! 1. **Parsing:** Converts one `0`/`1` line per byte (MSB first) into raw bytes.
//! 2. **Validation:** Rejects lines that are not exactly eight binary digits.
//! 3. **Formatting:** Renders bytes and words back to fixed-width binary text.

use std::fs;
use std::path::Path;

use crate::common::constants::{BYTE_TEXT_WIDTH, WORD_TEXT_WIDTH};
use crate::common::error::LoadError;

/// Parses one image line into a byte.
///
/// Returns `None` unless the line is exactly eight `0`/`1` characters.
fn parse_byte(line: &str) -> Option<u8> {
    if line.len() != BYTE_TEXT_WIDTH {
        return None;
    }
    line.bytes().try_fold(0u8, |acc, c| match c {
        b'0' => Some(acc << 1),
        b'1' => Some((acc << 1) | 1),
        _ => None,
    })
}

/// Parses a memory image from its text form.
///
/// Line `i` (0-indexed) becomes the byte at address `i`. A trailing `\r` is
/// stripped from every line and blank lines at the end of the text are
/// ignored; a blank line anywhere else is malformed.
///
/// # Arguments
///
/// * `text` - Image contents, one byte per line.
///
/// # Errors
///
/// Returns `LoadError::Malformed` with the one-based line number of the first
/// offending line.
///
/// # Examples
///
/// ```
/// use rvss_core::sim::loader::parse_image;
///
/// let bytes = parse_image("00000000\n10000011\r\n").unwrap();
/// assert_eq!(bytes, vec![0x00, 0x83]);
/// ```
pub fn parse_image(text: &str) -> Result<Vec<u8>, LoadError> {
    let lines: Vec<&str> = text
        .lines()
        .map(|l| l.strip_suffix('\r').unwrap_or(l))
        .collect();
    let used = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |last| last + 1);

    lines[..used]
        .iter()
        .enumerate()
        .map(|(i, line)| {
            parse_byte(line).ok_or_else(|| LoadError::Malformed {
                line: i + 1,
                content: (*line).to_string(),
            })
        })
        .collect()
}

/// Reads and parses a memory image file.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or
/// `LoadError::Malformed` if its contents are not a valid image.
pub fn load_image(path: impl AsRef<Path>) -> Result<Vec<u8>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let bytes = parse_image(&text)?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "memory image loaded");
    Ok(bytes)
}

/// Renders a byte as eight binary digits, MSB first.
pub fn format_byte(byte: u8) -> String {
    format!("{byte:0width$b}", width = BYTE_TEXT_WIDTH)
}

/// Renders a word as thirty-two binary digits, MSB first.
pub fn format_word(word: u32) -> String {
    format!("{word:0width$b}", width = WORD_TEXT_WIDTH)
}
