//! Display configuration for vitae.
//!
//! Controls the colour theme, icon set, border and event tick rate used by
//! the terminal front end. Every field has a default so a partial file (or
//! no file at all) is valid.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Default location of the config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".vitae/config.json";

/// Shortest event poll interval; smaller values are raised to this.
pub const MIN_TICK_RATE_MS: u64 = 16;

/// Main configuration for vitae.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Colour theme.
    #[serde(default)]
    pub theme: ThemeName,

    /// Icon set.
    #[serde(default)]
    pub icons: IconStyle,

    /// Whether to draw the card border.
    #[serde(default = "default_border")]
    pub border: bool,

    /// Event poll interval in milliseconds, at least [`MIN_TICK_RATE_MS`].
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_border() -> bool {
    true
}

fn default_tick_rate_ms() -> u64 {
    250
}

/// Named colour themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ThemeName {
    /// Dark theme.
    #[default]
    Mocha,
    /// Light theme.
    Latte,
    /// Maximum contrast.
    HighContrast,
}

/// Icon styles, from richest to most portable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IconStyle {
    #[default]
    Nerd,
    Unicode,
    Ascii,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::Io)?;
        serde_json::from_str(&content).map_err(ConfigError::Parse)
    }

    /// Load configuration if the file exists, otherwise use defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        std::fs::write(path, content).map_err(ConfigError::Io)
    }

    /// Apply the `NO_COLOR` convention: plain ASCII icons.
    #[must_use]
    pub fn with_no_color(mut self, no_color: bool) -> Self {
        if no_color {
            self.icons = IconStyle::Ascii;
        }
        self
    }

    /// Event poll interval, clamped to [`MIN_TICK_RATE_MS`].
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(MIN_TICK_RATE_MS))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            icons: IconStyle::default(),
            border: default_border(),
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}

/// Errors that can occur when working with configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// I/O error reading or writing config.
    #[error("I/O error: {0}")]
    Io(#[source] std::io::Error),

    /// Error parsing config JSON.
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// Error serializing config to JSON.
    #[error("Serialize error: {0}")]
    Serialize(#[source] serde_json::Error),
}
