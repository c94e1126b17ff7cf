//! Expansion state for the timeline.
//!
//! At most one entry is expanded at a time. Toggling the expanded entry
//! collapses it; toggling any other entry moves the expansion there.

use tracing::debug;

/// Which timeline entry, if any, is currently expanded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpansionState {
    expanded: Option<usize>,
}

impl ExpansionState {
    /// Create a state with nothing expanded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the expanded entry.
    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Whether the entry at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Toggle the entry at `index`.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
        debug!(index, expanded = ?self.expanded, "toggled timeline entry");
    }

    /// Collapse everything.
    pub fn reset(&mut self) {
        self.expanded = None;
    }
}
