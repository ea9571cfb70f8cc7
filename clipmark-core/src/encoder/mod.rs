//! Encoders for rendering a library to output formats

mod html;
mod json;
mod markdown;

pub use html::{escape_html, HtmlEncoder};
pub use json::JsonEncoder;
pub use markdown::{MarkdownEncoder, DOCUMENT_HEADING};

use crate::error::ConversionError;
use crate::types::Library;
use std::io::Write;

/// Trait for encoding a library to an output format
pub trait Encoder: Send + Sync {
    /// Encode a library to a writer
    fn encode(&self, library: &Library, writer: &mut dyn Write) -> Result<(), ConversionError>;

    /// Format name (e.g., "Markdown", "HTML")
    fn format_name(&self) -> &str;

    /// File extension for this format
    fn file_extension(&self) -> &str;

    /// MIME type for this format
    fn mime_type(&self) -> &str;
}

/// Get an encoder by format name
pub fn encoder_for_format(format: &str) -> Option<Box<dyn Encoder>> {
    match format.to_lowercase().as_str() {
        "markdown" | "md" => Some(Box::new(MarkdownEncoder::new())),
        "html" | "htm" => Some(Box::new(HtmlEncoder::new())),
        "json" => Some(Box::new(JsonEncoder::new())),
        _ => None,
    }
}
