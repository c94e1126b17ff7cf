//! vitae-tui: Terminal UI for the vitae experience timeline
//!
//! This crate provides the TUI layer for vitae, including:
//! - The experience card widget and its state
//! - Injectable skeleton placeholders
//! - Themes, icon sets and the footer bar
//! - Headless mode for testing and automation

mod app;
mod event;
pub mod experience_card;
pub mod headless;
mod layout;
pub mod skeleton;
#[cfg(test)]
pub mod test_utils;
mod text;
pub mod theme;
mod widgets;

pub use app::App;
pub use event::{Action, Event, EventHandler};
pub use experience_card::{ExperienceCard, ExperienceCardState};
pub use skeleton::{ShadedSkeleton, SkeletonRenderer, SkeletonSpec, SkeletonWidth};
pub use vitae_core;

use crossterm::{
    cursor::Show as ShowCursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, stdout};
use std::path::Path;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use vitae_core::{open_link, Config, OpenError};

/// RAII guard for terminal state restoration.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen, ShowCursor);
    }
}

/// Run the TUI application.
///
/// This is the main entry point for the TUI. It sets up the terminal,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_tui(data_path: &Path, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    // Setup terminal with RAII guard for cleanup
    enable_raw_mode()?;
    let _guard = TerminalGuard;

    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(data_path.to_path_buf(), config);
    let mut events = EventHandler::new(config.tick_rate());

    info!(path = %data_path.display(), "starting TUI");
    let result = run_loop(&mut terminal, &mut app, &mut events).await;

    // Restore cursor before guard drops
    terminal.show_cursor()?;

    result
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut load_handle = None;
    let mut link_handles: Vec<JoinHandle<Result<(), OpenError>>> = Vec::new();

    loop {
        if let Some(path) = app.take_load_request() {
            if let Some(stale) = load_handle.replace(crate::app::spawn_load(path)) {
                stale.abort();
            }
        }

        // Draw
        terminal.draw(|frame| {
            let area = frame.area();
            app.set_viewport(area);
            app.render(area, frame.buffer_mut());
        })?;

        // Check for a completed load (non-blocking)
        if load_handle.as_ref().is_some_and(JoinHandle::is_finished) {
            if let Some(handle) = load_handle.take() {
                match handle.await {
                    Ok(result) => app.finish_load(result),
                    Err(e) => warn!(error = %e, "load task failed"),
                }
            }
        }

        // Handle events
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => app.handle_action(event::key_to_action(key)),
                Event::Mouse(mouse) => app.handle_action(event::mouse_to_action(mouse)),
                Event::Tick => app.tick(),
                Event::Resize(_, _) => {
                    // Terminal will handle resize automatically
                }
            }
        }

        if let Some(link) = app.take_pending_link() {
            // Use spawn_blocking since the opener lookup touches the filesystem
            link_handles.push(tokio::task::spawn_blocking(move || open_link(&link)));
        }

        // Report finished link openings
        let mut completed = Vec::new();
        for (i, handle) in link_handles.iter().enumerate() {
            if handle.is_finished() {
                completed.push(i);
            }
        }
        for i in completed.into_iter().rev() {
            if let Ok(Err(e)) = link_handles.remove(i).await {
                warn!(error = %e, "failed to open link");
            }
        }

        if app.should_quit {
            if let Some(handle) = load_handle {
                handle.abort();
            }
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod snapshot_tests {
    use crate::experience_card::{ExperienceCard, ExperienceCardState};
    use crate::skeleton::{SkeletonRenderer, SkeletonSpec};
    use crate::test_utils::*;
    use crate::theme::{IconMode, IconSet, Theme};
    use insta::assert_snapshot;
    use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

    fn render_card(state: &ExperienceCardState, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        ExperienceCard::new(state, &theme, &icons).render(buf.area, &mut buf);
        buffer_to_string(&buf)
    }

    // ========================================================================
    // Card Snapshot Tests
    // ========================================================================

    #[test]
    fn test_snapshot_card_collapsed() {
        let state = ExperienceCardState::new(vec![acme_experience()]);
        assert_snapshot!(render_card(&state, 31, 8), @r"
┌─────────────────────────────┐
│ Experience                  │
│                             │
│  o 2020 - 2022              │
│  | Engineer                 │
│  | Acme                     │
│                             │
└─────────────────────────────┘
");
    }

    #[test]
    fn test_snapshot_card_expanded() {
        let mut state = ExperienceCardState::new(vec![acme_experience()]);
        state.toggle(0);
        assert_snapshot!(render_card(&state, 31, 10), @r"
┌─────────────────────────────┐
│ Experience                  │
│                             │
│  o 2020 - 2022              │
│  | Engineer                 │
│  | Acme                     │
│  |   - Built X              │
│  |   - Shipped Y            │
│                             │
└─────────────────────────────┘
");
    }

    #[test]
    fn test_snapshot_card_loading() {
        let state = ExperienceCardState::loading();
        assert_snapshot!(render_card(&state, 31, 11), @r"
┌─────────────────────────────┐
│ ................            │
│                             │
│  o ..........               │
│  | ............             │
│  | ............             │
│  |                          │
│  o ..........               │
│  | ............             │
│  | ............             │
└─────────────────────────────┘
");
    }

    #[test]
    fn test_custom_skeleton_renderer() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let state = ExperienceCardState::loading();
        let hashes = |spec: &SkeletonSpec, area: Rect, buf: &mut Buffer| {
            let rect = spec.rect_in(area);
            for x in rect.left()..rect.right() {
                buf[(x, rect.y)].set_symbol("#");
            }
        };

        let mut buf = Buffer::empty(Rect::new(0, 0, 31, 11));
        ExperienceCard::new(&state, &theme, &icons)
            .skeleton(&hashes as &dyn SkeletonRenderer)
            .render(buf.area, &mut buf);
        let result = buffer_to_string(&buf);

        assert!(result.contains("│ ################"));
        assert!(result.contains("│  o ##########"));
        assert!(!result.contains('.'));
    }

    #[test]
    fn test_snapshot_app_loaded() {
        let app = create_test_app();
        let result = render_app_to_string(&app, TEST_WIDTH, TEST_HEIGHT);
        let lines: Vec<&str> = result.lines().collect();
        assert!(lines[3].contains("o 2020 - 2022"));
        assert!(lines[7].contains("o 2018 - 2020"));
        assert!(lines[11].contains("o 2016 - 2018"));
        assert!(lines[6].contains('|'));
        assert!(lines[23].ends_with("[q] quit"));
    }

    #[test]
    fn test_snapshot_app_loading() {
        let app = create_loading_test_app();
        let result = render_app_to_string(&app, TEST_WIDTH, TEST_HEIGHT);
        assert!(!result.contains("Experience"));
        assert!(!result.contains("Acme"));
        assert_eq!(result.matches(" o ").count(), 2);
        assert!(result.lines().last().unwrap_or_default().starts_with("Loading resume.json"));
    }
}
