//! Clipmark Core Library
//!
//! Turns a Kindle "My Clippings.txt" export into a deduplicated set of
//! highlights grouped by book, and renders that set as Markdown or as an
//! expandable HTML view.
//!
//! The pipeline runs strictly in one direction: the decoder extracts and
//! deduplicates highlights, [`Library`] groups and sorts them, and the
//! encoders project the library into output formats.

pub mod decoder;
pub mod encoder;
pub mod error;
pub mod pipeline;
pub mod status;
pub mod types;
pub mod view;

pub use error::{ClipmarkError, ConversionError, ParseError, Result};
pub use pipeline::{convert_bytes, convert_str, run_file, Conversion};
pub use status::Status;
pub use types::{BookGroup, Highlight, Library, UNKNOWN_AUTHOR};
pub use view::{InteractiveView, SectionState};
