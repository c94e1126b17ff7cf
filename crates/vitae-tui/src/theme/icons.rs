//! Icon sets for Nerd Fonts, Unicode, and ASCII fallback.
//!
//! Every timeline glyph is a single cell wide in all modes so the card
//! layout does not depend on the icon mode.

use vitae_core::IconStyle;

/// Icon mode configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IconMode {
    /// Nerd Font icons (default, richest experience).
    #[default]
    Nerd,
    /// Standard Unicode symbols (wide compatibility).
    Unicode,
    /// ASCII-only fallback (maximum compatibility, also used with `NO_COLOR`).
    Ascii,
}

impl From<IconStyle> for IconMode {
    fn from(style: IconStyle) -> Self {
        match style {
            IconStyle::Nerd => Self::Nerd,
            IconStyle::Unicode => Self::Unicode,
            IconStyle::Ascii => Self::Ascii,
        }
    }
}

/// Icon set based on configured mode.
#[derive(Debug, Clone)]
pub struct IconSet {
    mode: IconMode,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new(IconMode::default())
    }
}

impl IconSet {
    /// Create a new icon set with the specified mode.
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Get the current icon mode.
    pub fn mode(&self) -> IconMode {
        self.mode
    }

    // === Timeline ===

    /// Marker drawn on the rail at the first row of each entry.
    pub fn timeline_dot(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f111}",
            IconMode::Unicode => "●",
            IconMode::Ascii => "o",
        }
    }

    /// Vertical rail segment.
    pub fn rail(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "│",
            IconMode::Ascii => "|",
        }
    }

    /// Project bullet.
    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "•",
            IconMode::Ascii => "-",
        }
    }

    /// Suffix marking a company name as an external link. Empty in ASCII mode.
    pub fn external_link(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "\u{f08e}",
            IconMode::Unicode => "↗",
            IconMode::Ascii => "",
        }
    }

    /// Fill symbol for skeleton placeholders.
    pub fn skeleton(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd | IconMode::Unicode => "░",
            IconMode::Ascii => ".",
        }
    }

    // === Status ===

    /// Marker shown in the footer next to a load failure.
    pub fn error(&self) -> &'static str {
        match self.mode {
            IconMode::Nerd => "󰅖",
            IconMode::Unicode => "✗",
            IconMode::Ascii => "[X]",
        }
    }

    // === Spinner Frames (for animation) ===

    /// Footer spinner frames while loading, advanced once per tick.
    pub fn spinner_frames(&self) -> &'static [&'static str] {
        match self.mode {
            IconMode::Nerd => &["󰪞", "󰪟", "󰪠", "󰪡", "󰪢", "󰪣"],
            IconMode::Unicode => &["◐", "◓", "◑", "◒"],
            IconMode::Ascii => &["|", "/", "-", "\\"],
        }
    }
}
