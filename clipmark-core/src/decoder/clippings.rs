//! Kindle "My Clippings.txt" decoder
//!
//! An export is a run of records separated by `==========` lines. Each record
//! is a title line, a metadata line and one or more content lines:
//!
//! ```text
//! Book One (Jane Doe)
//! - Your Highlight at location 10-12 | Added on Monday, 1 January 2024
//! First highlight text
//! ==========
//! ```
//!
//! Only highlights are kept. Notes and bookmarks either have no content or
//! carry a single location number, and are dropped without being reported.

use super::dedup::dedup;
use super::patterns::{AUTHOR_SUFFIX_RE, LOCATION_RANGE_RE};
use crate::error::{ClipmarkError, ParseError, Result};
use crate::types::{Highlight, Library, UNKNOWN_AUTHOR};
use std::io::Read;

/// Line separating records in an export
pub const DELIMITER: &str = "==========";

/// Decoder for Kindle clippings exports
#[derive(Debug, Clone, Copy, Default)]
pub struct ClippingsDecoder;

impl ClippingsDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Run the full pipeline over already-decoded text
    pub fn parse_str(&self, content: &str) -> Library {
        let extracted = extract(content);
        let extracted_count = extracted.len();
        let unique = dedup(extracted);
        tracing::debug!(
            extracted = extracted_count,
            unique = unique.len(),
            "deduplicated highlights"
        );
        Library::from_highlights(unique)
    }
}

impl super::Decoder for ClippingsDecoder {
    fn decode(&self, reader: &mut dyn Read) -> Result<Library> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(ClipmarkError::FileRead)?;

        let content = decode_utf8(&data)?;
        Ok(self.parse_str(content))
    }

    fn supported_extensions(&self) -> &[&str] {
        &["txt"]
    }
}

/// Interpret raw bytes as UTF-8 text
pub fn decode_utf8(data: &[u8]) -> std::result::Result<&str, ParseError> {
    std::str::from_utf8(data).map_err(|e| ParseError::InvalidEncoding(e.to_string()))
}

/// Extract every well-formed highlight, in input order, duplicates included
pub fn extract(content: &str) -> Vec<Highlight> {
    // A lone '\r' is left alone and ends up inside a line
    let normalized = content.replace("\r\n", "\n");

    normalized
        .split(DELIMITER)
        .filter_map(parse_block)
        .collect()
}

/// Parse one record, or `None` if it is not a highlight
fn parse_block(block: &str) -> Option<Highlight> {
    let lines: Vec<&str> = trim_export(block)
        .split('\n')
        .map(trim_export)
        .filter(|line| !line.is_empty())
        .collect();

    if lines.len() < 3 {
        tracing::trace!(lines = lines.len(), "skipping short block");
        return None;
    }

    let Some(location) = LOCATION_RANGE_RE.find(lines[1]) else {
        tracing::trace!(meta = lines[1], "skipping block without location range");
        return None;
    };

    let (title, author) = split_title_line(lines[0]);
    let meta_line = lines[1].strip_prefix("- ").unwrap_or(lines[1]);

    Some(Highlight {
        title: title.to_string(),
        author: author.to_string(),
        location: location.as_str().to_string(),
        meta_line: meta_line.to_string(),
        content: lines[2..].join("\n"),
    })
}

/// Split `Title (Author)` into its parts
fn split_title_line(line: &str) -> (&str, &str) {
    match AUTHOR_SUFFIX_RE.captures(line) {
        Some(caps) => {
            let (Some(whole), Some(author)) = (caps.get(0), caps.get(1)) else {
                return (line, UNKNOWN_AUTHOR);
            };
            (line[..whole.start()].trim(), author.as_str())
        }
        None => (line, UNKNOWN_AUTHOR),
    }
}

/// Trim whitespace plus the byte order mark Kindle writes at the start of the file
fn trim_export(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}
