//! A single highlight extracted from a clippings export

use serde::{Deserialize, Serialize};

/// Author used when the title line carries no parenthetical suffix
pub const UNKNOWN_AUTHOR: &str = "Unknown Author";

/// One highlight record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Highlight {
    /// Book title with any trailing `(Author)` removed
    pub title: String,

    /// Parenthetical author, or [`UNKNOWN_AUTHOR`]
    pub author: String,

    /// The matched location range, verbatim (e.g. `"1035-1036"`)
    pub location: String,

    /// Second line of the record without its leading `"- "`
    pub meta_line: String,

    /// Highlighted text, possibly spanning several lines
    pub content: String,
}

impl Highlight {
    /// Create a highlight with the unknown-author sentinel
    pub fn new(
        title: impl Into<String>,
        location: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: UNKNOWN_AUTHOR.to_string(),
            location: location.into(),
            meta_line: String::new(),
            content: content.into(),
        }
    }

    /// Set the author
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Set the display metadata line
    pub fn with_meta_line(mut self, meta_line: impl Into<String>) -> Self {
        self.meta_line = meta_line.into();
        self
    }

    /// Identity key shared by duplicate exports of the same highlight
    pub fn key(&self) -> String {
        format!("{}|{}", self.title, self.location)
    }

    /// Length of the content in UTF-16 code units, used to pick among
    /// duplicates. Characters outside the BMP count twice.
    pub fn content_length(&self) -> usize {
        self.content.encode_utf16().count()
    }

    /// Numeric value of the first number in the location, `0` if none
    pub fn location_start(&self) -> u64 {
        let digits: String = self
            .location
            .chars()
            .skip_while(|c| !c.is_ascii_digit())
            .take_while(|c| c.is_ascii_digit())
            .collect();
        digits.parse().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_uses_title_and_location() {
        let h = Highlight::new("Dune", "10-12", "text");
        assert_eq!(h.key(), "Dune|10-12");
    }

    #[test]
    fn test_key_is_case_sensitive() {
        let a = Highlight::new("Dune", "10-12", "text");
        let b = Highlight::new("dune", "10-12", "text");
        assert_ne!(a.key(), b.key());
    }

    #[test]
    fn test_content_length_counts_utf16_units() {
        let h = Highlight::new("T", "1-2", "héllo");
        assert_eq!(h.content_length(), 5);

        let h = Highlight::new("T", "1-2", "\u{1F600}a");
        assert_eq!(h.content_length(), 3);
    }

    #[test]
    fn test_location_start() {
        assert_eq!(Highlight::new("T", "1035-1036", "").location_start(), 1035);
        assert_eq!(Highlight::new("T", "7-9", "").location_start(), 7);
        assert_eq!(Highlight::new("T", "none", "").location_start(), 0);
    }

    #[test]
    fn test_default_author() {
        let h = Highlight::new("T", "1-2", "x");
        assert_eq!(h.author, UNKNOWN_AUTHOR);
        assert_eq!(h.with_author("Jane").author, "Jane");
    }

    #[test]
    fn test_serialization_omits_length() {
        let h = Highlight::new("T", "1-2", "abc").with_meta_line("Loc 1-2");
        let json = serde_json::to_value(&h).unwrap();
        assert!(json.get("content_length").is_none());
        assert_eq!(json["meta_line"], "Loc 1-2");
    }
}
