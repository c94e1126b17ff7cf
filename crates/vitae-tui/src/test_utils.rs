//! Test utilities for vitae-tui snapshot and integration testing.
//!
//! This module provides helper functions for creating test apps, sample
//! records, and converting buffers to strings for snapshot testing.

use crate::app::App;
use crate::theme::IconMode;
use ratatui::{buffer::Buffer, layout::Rect};
use vitae_core::{Config, Experience, IconStyle};

pub use crate::headless::buffer_to_string;

/// Default terminal width for tests.
pub const TEST_WIDTH: u16 = 80;

/// Default terminal height for tests.
pub const TEST_HEIGHT: u16 = 24;

/// The single record used throughout the docs and examples.
pub fn acme_experience() -> Experience {
    Experience::new("2020", "2022", "Engineer", "Acme")
        .with_link("https://acme.example")
        .with_projects(["Built X", "Shipped Y"])
}

/// Three records: linked with projects, linked with one project, and bare.
pub fn sample_experiences() -> Vec<Experience> {
    vec![
        acme_experience(),
        Experience::new("2018", "2020", "Developer", "Initech")
            .with_link("https://initech.example")
            .with_projects(["Maintained TPS reports"]),
        Experience::new("2016", "2018", "Intern", "Globex"),
    ]
}

/// Config using ASCII icons so rendered output is plain text.
pub fn ascii_config() -> Config {
    Config {
        icons: IconStyle::Ascii,
        ..Config::default()
    }
}

/// Create a test app showing the sample records.
pub fn create_test_app() -> App {
    App::with_experiences(sample_experiences(), &ascii_config())
}

/// Create a test app that is still loading.
pub fn create_loading_test_app() -> App {
    let mut app = create_test_app();
    app.card.set_loading(true);
    app
}

/// Render an app to a buffer and return it as a string.
pub fn render_app_to_string(app: &App, width: u16, height: u16) -> String {
    let area = Rect::new(0, 0, width, height);
    let mut buffer = Buffer::empty(area);
    app.render(area, &mut buffer);
    buffer_to_string(&buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_app() {
        let app = create_test_app();
        assert_eq!(app.card.entry_count(), 3);
        assert_eq!(app.icons.mode(), IconMode::Ascii);
        assert!(!app.card.is_loading());
    }

    #[test]
    fn test_create_loading_test_app() {
        let app = create_loading_test_app();
        assert!(app.card.is_loading());
    }

    #[test]
    fn test_buffer_to_string() {
        let area = Rect::new(0, 0, 10, 3);
        let mut buffer = Buffer::empty(area);
        buffer.set_string(0, 0, "Hello", ratatui::style::Style::default());
        buffer.set_string(0, 1, "World", ratatui::style::Style::default());

        let result = buffer_to_string(&buffer);
        assert_eq!(result, "Hello\nWorld");
    }

    #[test]
    fn test_render_app_to_string_size() {
        let app = create_test_app();
        let result = render_app_to_string(&app, TEST_WIDTH, TEST_HEIGHT);
        assert_eq!(result.lines().count(), TEST_HEIGHT as usize);
    }
}
