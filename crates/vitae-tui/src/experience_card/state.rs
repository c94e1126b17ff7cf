//! Experience card state.
//!
//! Holds the records, the loading flag, the expansion state and the scroll
//! position, and maps timeline rows back to entries for mouse hit testing.

use vitae_core::{ExpansionState, Experience};

use super::list_item::project_lines;

/// Number of placeholder entries shown while loading.
pub const LOADING_PLACEHOLDERS: usize = 2;

/// Rows used by an entry before its project list (time, position, company).
pub const BASE_ENTRY_HEIGHT: usize = 3;

/// Row within an entry that holds the company name.
pub const COMPANY_ROW: usize = 2;

/// Blank rows between entries.
pub const ENTRY_GAP: usize = 1;

/// Entries scrolled per mouse wheel tick.
///
/// Scrolling moves by whole entries: the top of the timeline is always the
/// first row of an entry. Project rows of an expanded entry taller than the
/// timeline are clipped at the bottom, and scrolling once more jumps to the
/// next entry.
pub const SCROLL_SPEED: usize = 1;

/// A timeline row resolved to an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntryHit {
    /// Index of the entry in the experience list.
    pub index: usize,
    /// Row within the entry, starting at 0 for the time label.
    pub row: usize,
}

/// Experience card state.
#[derive(Debug, Default)]
pub struct ExperienceCardState {
    /// Records in display order.
    experiences: Vec<Experience>,
    /// Whether the records are still being loaded.
    loading: bool,
    /// Which entry shows its projects.
    expansion: ExpansionState,
    /// Index of first visible entry.
    scroll_offset: usize,
}

impl ExperienceCardState {
    /// Create a card showing the given records.
    pub fn new(experiences: Vec<Experience>) -> Self {
        Self {
            experiences,
            ..Self::default()
        }
    }

    /// Create a card in the loading state.
    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }

    /// Get all records.
    pub fn experiences(&self) -> &[Experience] {
        &self.experiences
    }

    /// Whether the card is showing placeholders.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch between the loading and loaded branches.
    ///
    /// The records and expansion are kept, so toggling `loading` off again
    /// shows the same timeline.
    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    /// Replace the records and leave the loading state.
    ///
    /// Expansion and scrolling refer to the old records, so both reset.
    pub fn set_experiences(&mut self, experiences: Vec<Experience>) {
        self.experiences = experiences;
        self.loading = false;
        self.expansion.reset();
        self.scroll_offset = 0;
    }

    /// Get the expansion state.
    pub fn expansion(&self) -> ExpansionState {
        self.expansion
    }

    /// Index of the expanded entry.
    pub fn expanded(&self) -> Option<usize> {
        self.expansion.expanded()
    }

    /// Whether the entry at `index` is expanded.
    pub fn is_expanded(&self, index: usize) -> bool {
        self.expansion.is_expanded(index)
    }

    /// Number of entries drawn: two placeholders while loading, else one per record.
    pub fn entry_count(&self) -> usize {
        if self.loading {
            LOADING_PLACEHOLDERS
        } else {
            self.experiences.len()
        }
    }

    /// Whether entries respond to clicks.
    pub fn is_interactive(&self) -> bool {
        !self.loading
    }

    /// Toggle the entry at `index`.
    ///
    /// Returns `false` without changing anything while loading or when the
    /// index is out of range.
    pub fn toggle(&mut self, index: usize) -> bool {
        if !self.is_interactive() || index >= self.experiences.len() {
            return false;
        }
        self.expansion.toggle(index);
        true
    }

    /// Get the scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Scroll up by the given number of entries.
    pub fn scroll_up(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }

    /// Scroll down by the given number of entries.
    pub fn scroll_down(&mut self, amount: usize) {
        let max_offset = self.entry_count().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max_offset);
    }

    /// Display height of the entry at `index` for entries `width` cells wide.
    pub fn entry_height(&self, index: usize, width: usize) -> usize {
        if self.loading {
            return BASE_ENTRY_HEIGHT;
        }
        match self.experiences.get(index) {
            Some(exp) if self.is_expanded(index) => {
                BASE_ENTRY_HEIGHT + project_lines(exp.projects(), width).len()
            }
            Some(_) => BASE_ENTRY_HEIGHT,
            None => 0,
        }
    }

    /// Convert a row (relative to the top of the timeline) to an entry.
    ///
    /// Returns `None` while loading, in the gap between entries, or past the
    /// last entry.
    pub fn hit_test(&self, y: usize, width: usize) -> Option<EntryHit> {
        if !self.is_interactive() {
            return None;
        }

        let mut current_y = 0usize;

        for index in self.scroll_offset..self.experiences.len() {
            let height = self.entry_height(index, width);

            if y >= current_y && y < current_y + height {
                return Some(EntryHit {
                    index,
                    row: y - current_y,
                });
            }

            current_y += height + ENTRY_GAP;
        }

        None
    }

    /// Handle a click on a timeline row: toggle the entry under it.
    pub fn click(&mut self, y: usize, width: usize) -> Option<EntryHit> {
        let hit = self.hit_test(y, width)?;
        self.toggle(hit.index);
        Some(hit)
    }
}
