//! Error types for clipmark core

use crate::status::Status;
use thiserror::Error;

/// Result type alias using ClipmarkError
pub type Result<T> = std::result::Result<T, ClipmarkError>;

/// Top-level error type for a single clippings run
///
/// Each variant corresponds to one of the user-visible failure kinds, so a
/// caller can branch on the kind without inspecting the message.
#[derive(Debug, Error)]
pub enum ClipmarkError {
    /// No input was supplied. Not a fault, only a status.
    #[error("No file selected")]
    NoFileSelected,

    /// The input could not be read. The cause is logged, not shown.
    #[error("Error reading the file")]
    FileRead(#[source] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

impl ClipmarkError {
    /// The status line a host should display for this error
    pub fn status(&self) -> Status {
        match self {
            ClipmarkError::NoFileSelected => Status::NoFileSelected,
            ClipmarkError::FileRead(_) => Status::ReadFailed,
            ClipmarkError::Parse(e) => Status::ParseFailed {
                message: e.to_string(),
            },
        }
    }
}

/// Errors raised while turning raw input into text
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Input is not valid UTF-8: {0}")]
    InvalidEncoding(String),
}

/// Errors that occur while encoding a library to an output format
#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
