//! Experience card module.
//!
//! This module provides:
//! - [`ExperienceCardState`] - Records, loading flag, expansion and scrolling
//! - [`ExperienceCard`] - Widget rendering the card and its timeline
//!
//! Entries are drawn by a private list item helper.

mod list_item;
mod state;
mod widget;

pub use state::{
    EntryHit, ExperienceCardState, BASE_ENTRY_HEIGHT, COMPANY_ROW, ENTRY_GAP,
    LOADING_PLACEHOLDERS, SCROLL_SPEED,
};
pub use widget::{CardLayout, ExperienceCard, CARD_TITLE, TITLE_SKELETON};

pub(crate) use list_item::company_span_width;
