//! Core types for extracted and grouped highlights

mod book_group;
mod highlight;
mod library;

pub use book_group::BookGroup;
pub use highlight::{Highlight, UNKNOWN_AUTHOR};
pub use library::Library;
