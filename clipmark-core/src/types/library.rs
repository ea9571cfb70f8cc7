//! The grouped, ordered result of a clippings run

use super::{BookGroup, Highlight};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Book groups in the order their titles were first encountered
///
/// Both renderers rely on this order, so it is part of the contract rather
/// than a property of the underlying container.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "Vec<BookGroup>", into = "Vec<BookGroup>")]
pub struct Library {
    groups: Vec<BookGroup>,
    index: HashMap<String, usize>,
}

impl Library {
    pub fn new() -> Self {
        Self::default()
    }

    /// Group deduplicated highlights by title and sort each group by location
    pub fn from_highlights(highlights: impl IntoIterator<Item = Highlight>) -> Self {
        let mut library = Self::new();
        for highlight in highlights {
            library.insert(highlight);
        }
        for group in &mut library.groups {
            group.sort_by_location();
        }
        library
    }

    /// Append a highlight to its title's group, creating the group if needed.
    /// Groups are not re-sorted.
    pub fn insert(&mut self, highlight: Highlight) {
        match self.index.get(&highlight.title) {
            Some(&i) => self.groups[i].push(highlight),
            None => {
                self.index
                    .insert(highlight.title.clone(), self.groups.len());
                self.groups.push(BookGroup::new(highlight));
            }
        }
    }

    /// Groups in first-encounter order
    pub fn groups(&self) -> &[BookGroup] {
        &self.groups
    }

    /// Look up a group by title
    pub fn get(&self, title: &str) -> Option<&BookGroup> {
        self.index.get(title).map(|&i| &self.groups[i])
    }

    /// Number of books
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of unique highlights across all books
    pub fn highlight_count(&self) -> usize {
        self.groups.iter().map(BookGroup::len).sum()
    }
}

impl From<Vec<BookGroup>> for Library {
    fn from(groups: Vec<BookGroup>) -> Self {
        let index = groups
            .iter()
            .enumerate()
            .map(|(i, g)| (g.title.clone(), i))
            .collect();
        Self { groups, index }
    }
}

impl From<Library> for Vec<BookGroup> {
    fn from(library: Library) -> Self {
        library.groups
    }
}
