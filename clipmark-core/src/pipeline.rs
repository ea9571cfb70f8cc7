//! One complete clippings run: read, parse, group, render
//!
//! The whole computation is synchronous and starts only once the full input
//! is in memory. Nothing is kept between runs.

use crate::decoder::{decode_utf8, ClippingsDecoder};
use crate::encoder::MarkdownEncoder;
use crate::error::{ClipmarkError, Result};
use crate::status::Status;
use crate::types::Library;
use crate::view::InteractiveView;
use std::path::Path;

/// Result of a successful run
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub library: Library,
    pub markdown: String,
}

impl Conversion {
    /// The completion status line
    pub fn status(&self) -> Status {
        Status::Complete {
            highlights: self.library.highlight_count(),
        }
    }

    /// A fresh interactive view, all sections collapsed
    pub fn view(&self) -> InteractiveView {
        InteractiveView::new(self.library.clone())
    }
}

/// Convert text that is already in memory. Never fails.
pub fn convert_str(content: &str) -> Conversion {
    let library = ClippingsDecoder::new().parse_str(content);
    let markdown = MarkdownEncoder::new().render(&library);
    Conversion { library, markdown }
}

/// Convert raw file contents
pub fn convert_bytes(data: &[u8]) -> Result<Conversion> {
    let content = decode_utf8(data).map_err(|e| {
        tracing::error!(error = %e, "failed to parse clippings");
        ClipmarkError::from(e)
    })?;
    Ok(convert_str(content))
}

/// Read an input file. `None` means the user picked nothing.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    let path = path.ok_or(ClipmarkError::NoFileSelected)?;
    tracing::debug!(path = %path.display(), "reading clippings file");
    std::fs::read(path).map_err(|e| {
        tracing::error!(error = %e, path = %path.display(), "failed to read clippings file");
        ClipmarkError::FileRead(e)
    })
}

/// Read and convert a file in one step
pub fn run_file(path: Option<&Path>) -> Result<Conversion> {
    let data = read_input(path)?;
    convert_bytes(&data)
}

/// Display name of an input for the "Reading file" status
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
