//! Cached regex patterns for clippings extraction

use regex::Regex;
use std::sync::LazyLock;

/// A two-number location range such as `1035-1036`. ASCII digits only.
pub static LOCATION_RANGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+-[0-9]+").unwrap());

/// A parenthetical group closing the title line, e.g. `Dune (Frank Herbert)`
pub static AUTHOR_SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(([^)]+)\)$").unwrap());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_range_first_match() {
        let m = LOCATION_RANGE_RE
            .find("page 3-4 | location 1035-1036")
            .unwrap();
        assert_eq!(m.as_str(), "3-4");
    }

    #[test]
    fn test_location_range_rejects_single_number() {
        assert!(LOCATION_RANGE_RE.find("Your Note at location 42").is_none());
    }

    #[test]
    fn test_author_suffix_must_end_line() {
        assert!(AUTHOR_SUFFIX_RE.is_match("Dune (Frank Herbert)"));
        assert!(!AUTHOR_SUFFIX_RE.is_match("Dune (Frank Herbert) 2nd ed"));
        assert!(!AUTHOR_SUFFIX_RE.is_match("Dune ()"));
    }
}
