//! Collapse repeated exports of the same highlight

use crate::types::Highlight;
use std::collections::HashMap;

/// Keep one highlight per `title|location` key.
///
/// The longest content wins. On equal length the earlier record stays, so a
/// later duplicate never replaces it. Output follows the position of each
/// key's first occurrence; a replacement takes over that slot.
pub fn dedup(highlights: impl IntoIterator<Item = Highlight>) -> Vec<Highlight> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut unique: Vec<Highlight> = Vec::new();

    for highlight in highlights {
        match slots.get(&highlight.key()) {
            Some(&slot) => {
                if highlight.content_length() > unique[slot].content_length() {
                    tracing::trace!(key = %highlight.key(), "replacing shorter duplicate");
                    unique[slot] = highlight;
                }
            }
            None => {
                slots.insert(highlight.key(), unique.len());
                unique.push(highlight);
            }
        }
    }

    unique
}
