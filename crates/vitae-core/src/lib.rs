//! vitae-core: Data model and state for the vitae experience timeline
//!
//! This crate has no terminal code. It provides:
//! - Experience records and the resume data file
//! - The single-entry expansion state
//! - Display configuration
//! - Opening company links in the system browser

pub mod config;
pub mod expansion;
pub mod experience;
pub mod opener;
pub mod resume;

// Re-export commonly used types
pub use config::{
    Config, ConfigError, IconStyle, ThemeName, DEFAULT_CONFIG_PATH, MIN_TICK_RATE_MS,
};
pub use expansion::ExpansionState;
pub use experience::Experience;
pub use opener::{open_link, OpenError};
pub use resume::{ResumeData, ResumeError, DEFAULT_DATA_FILE};
