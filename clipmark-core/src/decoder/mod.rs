//! Decoders for turning raw exports into a grouped library

mod clippings;
mod dedup;
mod patterns;

pub use clippings::{decode_utf8, extract, ClippingsDecoder, DELIMITER};
pub use dedup::dedup;

use crate::error::Result;
use crate::types::Library;
use std::io::Read;

/// Trait for decoding annotation exports into a library
pub trait Decoder: Send + Sync {
    /// Decode a library from a reader
    fn decode(&self, reader: &mut dyn Read) -> Result<Library>;

    /// File extensions this decoder supports
    fn supported_extensions(&self) -> &[&str];
}

/// Get the appropriate decoder for a file extension
pub fn decoder_for_extension(ext: &str) -> Option<Box<dyn Decoder>> {
    match ext.to_lowercase().as_str() {
        "txt" => Some(Box::new(ClippingsDecoder::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decoder_lookup() {
        assert!(decoder_for_extension("txt").is_some());
        assert!(decoder_for_extension("TXT").is_some());
        assert!(decoder_for_extension("epub").is_none());
    }
}
