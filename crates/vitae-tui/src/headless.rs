//! Headless mode for the vitae TUI.
//!
//! This module provides a way to run the TUI without a real terminal,
//! enabling E2E testing and automation. Actions are sent via channels
//! and screen state is captured after each render.

use crate::app::{spawn_load, App};
use crate::event::Action;
use ratatui::{backend::TestBackend, buffer::Buffer, layout::Rect, Terminal};
use std::path::{Path, PathBuf};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::warn;
use vitae_core::{Config, MIN_TICK_RATE_MS};

/// Default terminal dimensions for headless mode.
pub const DEFAULT_WIDTH: u16 = 80;
pub const DEFAULT_HEIGHT: u16 = 24;

/// State captured from the headless TUI after each render.
#[derive(Debug, Clone, Default)]
pub struct HeadlessState {
    /// Text contents of the terminal buffer.
    pub screen_contents: String,
    /// Whether the card is showing placeholders.
    pub loading: bool,
    /// Index of the expanded entry.
    pub expanded: Option<usize>,
    /// Number of entries drawn.
    pub entry_count: usize,
    /// Last load failure.
    pub load_error: Option<String>,
    /// Last link the user asked to open. Headless mode never launches it.
    pub last_link: Option<String>,
    /// Whether the TUI should quit.
    pub should_quit: bool,
}

/// Handle to control a headless TUI instance.
///
/// Use this to send actions and observe state changes.
pub struct HeadlessHandle {
    action_tx: mpsc::UnboundedSender<Action>,
    state_rx: watch::Receiver<HeadlessState>,
}

impl HeadlessHandle {
    /// Send an action to the TUI.
    ///
    /// Returns `true` if the action was sent successfully.
    pub fn send_action(&self, action: Action) -> bool {
        self.action_tx.send(action).is_ok()
    }

    /// Get the current state of the TUI.
    pub fn state(&self) -> HeadlessState {
        self.state_rx.borrow().clone()
    }

    /// Wait until a condition is met on the state.
    ///
    /// Returns the state when the condition is met, or `None` if timed out.
    pub async fn wait_for<F>(
        &mut self,
        condition: F,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState>
    where
        F: Fn(&HeadlessState) -> bool,
    {
        let deadline = tokio::time::Instant::now() + timeout;

        loop {
            let state = self.state();
            if condition(&state) {
                return Some(state);
            }

            let remaining = deadline.saturating_duration_since(tokio::time::Instant::now());
            if remaining.is_zero() {
                return None;
            }

            if tokio::time::timeout(remaining, self.state_rx.changed())
                .await
                .is_err()
            {
                return None;
            }
        }
    }

    /// Wait for specific text to appear on screen.
    pub async fn wait_for_text(
        &mut self,
        text: &str,
        timeout: std::time::Duration,
    ) -> Option<HeadlessState> {
        let text = text.to_string();
        self.wait_for(|s| s.screen_contents.contains(&text), timeout)
            .await
    }

    /// Check if the TUI has quit.
    pub fn has_quit(&self) -> bool {
        self.state().should_quit
    }
}

/// Configuration for headless mode.
#[derive(Debug, Clone)]
pub struct HeadlessConfig {
    /// Terminal width.
    pub width: u16,
    /// Terminal height.
    pub height: u16,
    /// Tick rate in milliseconds, at least [`MIN_TICK_RATE_MS`].
    pub tick_rate_ms: u64,
}

impl Default for HeadlessConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            tick_rate_ms: 50, // Faster tick rate for testing
        }
    }
}

/// Run the TUI in headless mode, loading records from `data_path`.
///
/// Returns a handle to control the TUI and a join handle for the background task.
///
/// # Example
///
/// ```ignore
/// let (mut handle, task) =
///     run_tui_headless(Path::new("resume.json"), HeadlessConfig::default(), &Config::default());
///
/// handle.wait_for(|s| !s.loading, Duration::from_secs(1)).await;
/// handle.send_action(Action::Toggle(0));
///
/// handle.send_action(Action::Quit);
/// task.await.unwrap();
/// ```
pub fn run_tui_headless(
    data_path: &Path,
    config: HeadlessConfig,
    app_config: &Config,
) -> (HeadlessHandle, JoinHandle<Result<(), String>>) {
    let (action_tx, action_rx) = mpsc::unbounded_channel();
    let (state_tx, state_rx) = watch::channel(HeadlessState::default());

    let app = App::new(data_path.to_path_buf(), app_config);

    let task = tokio::spawn(async move {
        run_headless_loop(app, config, action_rx, state_tx)
            .await
            .map_err(|e| e.to_string())
    });

    let handle = HeadlessHandle {
        action_tx,
        state_rx,
    };

    (handle, task)
}

async fn run_headless_loop(
    mut app: App,
    config: HeadlessConfig,
    mut action_rx: mpsc::UnboundedReceiver<Action>,
    state_tx: watch::Sender<HeadlessState>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let backend = TestBackend::new(config.width, config.height);
    let mut terminal = Terminal::new(backend)?;
    app.set_viewport(Rect::new(0, 0, config.width, config.height));

    let mut load_handle = None;
    let mut last_link: Option<String> = None;
    let tick_duration =
        std::time::Duration::from_millis(config.tick_rate_ms.max(MIN_TICK_RATE_MS));

    loop {
        if let Some(path) = app.take_load_request() {
            if let Some(stale) = load_handle.replace(spawn_load(path)) {
                stale.abort();
            }
        }

        // Draw
        terminal.draw(|frame| app.render(frame.area(), frame.buffer_mut()))?;

        if let Some(link) = app.take_pending_link() {
            last_link = Some(link);
        }

        let _ = state_tx.send(HeadlessState {
            screen_contents: buffer_to_string(terminal.backend().buffer()),
            loading: app.card.is_loading(),
            expanded: app.card.expanded(),
            entry_count: app.card.entry_count(),
            load_error: app.load_error.clone(),
            last_link: last_link.clone(),
            should_quit: app.should_quit,
        });

        if app.should_quit {
            break;
        }

        // Check for a completed load (non-blocking)
        if load_handle.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = load_handle.take() {
                match handle.await {
                    Ok(result) => app.finish_load(result),
                    Err(e) => warn!(error = %e, "load task failed"),
                }
                continue;
            }
        }

        // Wait for action or tick
        let action = tokio::select! {
            Some(action) = action_rx.recv() => action,
            () = tokio::time::sleep(tick_duration) => Action::None,
        };

        if action == Action::None {
            app.tick();
        } else {
            app.handle_action(action);
        }
    }

    if let Some(handle) = load_handle {
        handle.abort();
    }

    Ok(())
}

/// Render one frame of `app` on an off-screen terminal and return its text.
pub fn render_frame(app: &App, width: u16, height: u16) -> std::io::Result<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height))?;
    terminal.draw(|frame| app.render(frame.area(), frame.buffer_mut()))?;
    Ok(buffer_to_string(terminal.backend().buffer()))
}

/// Convert a terminal buffer to a string representation.
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                result.push_str(cell.symbol());
            }
        }
        // Trim trailing whitespace from each line
        while result.ends_with(' ') {
            result.pop();
        }
        result.push('\n');
    }

    // Remove trailing newline
    if result.ends_with('\n') {
        result.pop();
    }

    result
}
