//! Shared widgets around the card.

mod footer_hints;

pub use footer_hints::{FooterHints, FooterStatus, KeyHint};
