//! Highlights of one book

use super::Highlight;
use serde::{Deserialize, Serialize};

/// All highlights sharing a title, ordered by location
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookGroup {
    pub title: String,

    /// Author of the first highlight seen for this title
    pub author: String,

    pub highlights: Vec<Highlight>,
}

impl BookGroup {
    /// Start a group from its first highlight
    pub fn new(first: Highlight) -> Self {
        Self {
            title: first.title.clone(),
            author: first.author.clone(),
            highlights: vec![first],
        }
    }

    /// Add a highlight. The group author is never changed.
    pub fn push(&mut self, highlight: Highlight) {
        self.highlights.push(highlight);
    }

    /// Stable sort by the first number of each location
    pub fn sort_by_location(&mut self) {
        self.highlights.sort_by_key(Highlight::location_start);
    }

    pub fn len(&self) -> usize {
        self.highlights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.highlights.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_author_comes_from_first_highlight() {
        let mut group = BookGroup::new(Highlight::new("Dune", "1-2", "a").with_author("Frank"));
        group.push(Highlight::new("Dune", "3-4", "b").with_author("Someone Else"));
        assert_eq!(group.author, "Frank");
        assert_eq!(group.len(), 2);
    }

    #[test]
    fn test_sort_is_numeric_and_stable() {
        let mut group = BookGroup::new(Highlight::new("T", "100-101", "first"));
        group.push(Highlight::new("T", "20-25", "second"));
        group.push(Highlight::new("T", "100-120", "third"));
        group.push(Highlight::new("T", "3-4", "fourth"));
        group.sort_by_location();

        let order: Vec<&str> = group.highlights.iter().map(|h| h.content.as_str()).collect();
        assert_eq!(order, vec!["fourth", "second", "first", "third"]);
    }
}
