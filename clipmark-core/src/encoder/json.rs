//! JSON encoder for the grouped library

use crate::error::ConversionError;
use crate::types::Library;
use std::io::Write;

/// Encoder writing the library as JSON
#[derive(Debug, Clone, Copy)]
pub struct JsonEncoder {
    pretty: bool,
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Enable or disable pretty printing
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl super::Encoder for JsonEncoder {
    fn encode(&self, library: &Library, writer: &mut dyn Write) -> Result<(), ConversionError> {
        let result = if self.pretty {
            serde_json::to_writer_pretty(&mut *writer, library)
        } else {
            serde_json::to_writer(&mut *writer, library)
        };
        result.map_err(|e| ConversionError::EncodingFailed(e.to_string()))?;
        writer.write_all(b"\n")?;
        Ok(())
    }

    fn format_name(&self) -> &str {
        "JSON"
    }

    fn file_extension(&self) -> &str {
        "json"
    }

    fn mime_type(&self) -> &str {
        "application/json"
    }
}
