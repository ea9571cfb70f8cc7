//! The single human-readable status line reported to the user

use serde::{Serialize, Serializer};
use std::fmt;

/// Progress or outcome of one clippings run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    NoFileSelected,

    /// The named file is being read
    Reading { name: String },

    /// The pipeline finished with this many unique highlights
    Complete { highlights: usize },

    ReadFailed,

    /// Parsing or rendering failed with the given message
    ParseFailed { message: String },
}

impl Status {
    /// Whether this status reports a failure
    pub fn is_error(&self) -> bool {
        matches!(self, Status::ReadFailed | Status::ParseFailed { .. })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::NoFileSelected => write!(f, "No file selected."),
            Status::Reading { name } => write!(f, "Reading file \"{}\"...", name),
            Status::Complete { highlights } => {
                write!(f, "Parsing complete! {} unique highlights found.", highlights)
            }
            Status::ReadFailed => write!(f, "Error reading the file."),
            Status::ParseFailed { message } => write!(f, "Error during parsing: {}", message),
        }
    }
}

// Hosts only ever see the line itself
impl Serialize for Status {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
