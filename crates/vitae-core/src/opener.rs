//! Opening company links in the system browser.
//!
//! Finds a platform opener on PATH and hands it the URL, the terminal
//! equivalent of a link with a new browsing context. Openers hand off to
//! the browser and exit, so the child is waited on and reaped.

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use thiserror::Error;
use tracing::{debug, warn};

/// Opener commands tried in order.
#[cfg(target_os = "macos")]
pub const OPENER_CANDIDATES: &[&str] = &["open"];

/// Opener commands tried in order.
#[cfg(target_os = "windows")]
pub const OPENER_CANDIDATES: &[&str] = &["explorer"];

/// Opener commands tried in order.
#[cfg(not(any(target_os = "macos", target_os = "windows")))]
pub const OPENER_CANDIDATES: &[&str] = &["xdg-open", "wslview", "gio"];

/// URL schemes the opener will pass on.
pub const ALLOWED_SCHEMES: &[&str] = &["https://", "http://", "mailto:"];

/// Error type for link opening.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("Refusing to open link with unsupported scheme: {0}")]
    UnsupportedScheme(String),

    #[error("No link opener found on PATH (tried {0})")]
    NoOpener(String),

    #[error("Failed to launch {opener}: {source}")]
    Spawn {
        opener: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{opener} exited with {status}")]
    Exited { opener: String, status: ExitStatus },
}

/// Check that a link uses one of the [`ALLOWED_SCHEMES`].
pub fn check_scheme(url: &str) -> Result<(), OpenError> {
    let lower = url.to_ascii_lowercase();
    if ALLOWED_SCHEMES.iter().any(|s| lower.starts_with(s)) {
        Ok(())
    } else {
        Err(OpenError::UnsupportedScheme(url.to_string()))
    }
}

/// Locate the first available opener.
pub fn find_opener() -> Result<PathBuf, OpenError> {
    OPENER_CANDIDATES
        .iter()
        .find_map(|name| which::which(name).ok())
        .ok_or_else(|| OpenError::NoOpener(OPENER_CANDIDATES.join(", ")))
}

/// Open `url` in the system browser.
///
/// Blocks until the opener process exits, so call it off the UI thread.
pub fn open_link(url: &str) -> Result<(), OpenError> {
    check_scheme(url)?;
    let opener = find_opener()?;
    launch(&opener, url)
}

fn launch(opener: &Path, url: &str) -> Result<(), OpenError> {
    let spawn_error = |source| {
        warn!(url, opener = %opener.display(), "failed to launch link opener");
        OpenError::Spawn {
            opener: opener.display().to_string(),
            source,
        }
    };

    let mut command = Command::new(opener);
    // gio needs the "open" subcommand
    if opener.file_stem().is_some_and(|s| s == "gio") {
        command.arg("open");
    }

    let mut child = command
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(spawn_error)?;

    let status = child.wait().map_err(spawn_error)?;
    if !status.success() {
        warn!(url, opener = %opener.display(), %status, "link opener failed");
        return Err(OpenError::Exited {
            opener: opener.display().to_string(),
            status,
        });
    }

    debug!(url, opener = %opener.display(), "opened link");
    Ok(())
}
