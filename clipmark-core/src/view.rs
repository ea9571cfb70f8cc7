//! Expand/collapse state for the interactive view
//!
//! Every book gets one section. A section starts collapsed and only changes
//! when its header is activated, which flips it. Sections never affect each
//! other. Building a view from a new library starts over with every section
//! collapsed.

use crate::types::{BookGroup, Library};
use serde::{Deserialize, Serialize};

/// State of one collapsible section
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SectionState {
    #[default]
    Collapsed,
    Expanded,
}

impl SectionState {
    /// The state after one header activation
    pub fn toggled(self) -> Self {
        match self {
            SectionState::Collapsed => SectionState::Expanded,
            SectionState::Expanded => SectionState::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == SectionState::Expanded
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SectionState::Collapsed => "collapsed",
            SectionState::Expanded => "expanded",
        }
    }
}

/// A library plus one section state per book
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InteractiveView {
    library: Library,
    states: Vec<SectionState>,
}

/// Summary of a section for hosts that only need the toggle states
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct SectionSummary {
    pub index: usize,
    pub title: String,
    pub author: String,
    pub highlights: usize,
    pub state: SectionState,
}

impl InteractiveView {
    /// Build a view with every section collapsed
    pub fn new(library: Library) -> Self {
        let states = vec![SectionState::Collapsed; library.len()];
        Self { library, states }
    }

    pub fn library(&self) -> &Library {
        &self.library
    }

    /// Sections in library order
    pub fn sections(&self) -> impl Iterator<Item = (&BookGroup, SectionState)> {
        self.library
            .groups()
            .iter()
            .zip(self.states.iter().copied())
    }

    pub fn state(&self, index: usize) -> Option<SectionState> {
        self.states.get(index).copied()
    }

    /// Flip one section, returning its new state
    pub fn toggle(&mut self, index: usize) -> Option<SectionState> {
        let state = self.states.get_mut(index)?;
        *state = state.toggled();
        Some(*state)
    }

    pub fn summaries(&self) -> Vec<SectionSummary> {
        self.sections()
            .enumerate()
            .map(|(index, (group, state))| SectionSummary {
                index,
                title: group.title.clone(),
                author: group.author.clone(),
                highlights: group.len(),
                state,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
