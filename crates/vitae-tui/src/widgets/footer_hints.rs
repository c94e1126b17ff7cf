//! Footer status bar widget.
//!
//! Format: `Loading resume.json ◐            [1-9] toggle │ [r] reload │ [q] quit`
//!
//! The left side shows load progress or a load error; the right side shows
//! key hints.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::text::visual_width;
use crate::theme::Theme;

/// A single keybinding hint.
#[derive(Debug, Clone)]
pub struct KeyHint {
    /// The key or key combination (e.g., "r", "1-9").
    pub key: String,
    /// The action description (e.g., "reload").
    pub action: String,
}

impl KeyHint {
    /// Create a new key hint.
    pub fn new(key: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            action: action.into(),
        }
    }
}

/// What the left side of the footer reports.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FooterStatus {
    /// Nothing to report.
    Idle,
    /// Data is loading; carries the label and the spinner frame.
    Loading { label: String, frame: &'static str },
    /// Loading failed.
    Error { icon: &'static str, message: String },
}

/// Footer status bar widget.
pub struct FooterHints<'a> {
    hints: &'a [KeyHint],
    theme: &'a Theme,
    status: FooterStatus,
}

impl<'a> FooterHints<'a> {
    /// Create a new footer hints widget.
    pub fn new(hints: &'a [KeyHint], theme: &'a Theme) -> Self {
        Self {
            hints,
            theme,
            status: FooterStatus::Idle,
        }
    }

    /// Set the status shown on the left.
    #[must_use]
    pub fn status(mut self, status: FooterStatus) -> Self {
        self.status = status;
        self
    }

    /// Hints for the experience card.
    pub fn default_hints() -> Vec<KeyHint> {
        vec![
            KeyHint::new("1-9", "toggle"),
            KeyHint::new("r", "reload"),
            KeyHint::new("q", "quit"),
        ]
    }
}

impl Widget for FooterHints<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut left_spans = Vec::new();
        let mut right_spans = Vec::new();

        match &self.status {
            FooterStatus::Idle => {}
            FooterStatus::Loading { label, frame } => {
                left_spans.push(Span::styled(
                    format!("Loading {label} "),
                    Style::default().fg(self.theme.subtext),
                ));
                left_spans.push(Span::styled(*frame, Style::default().fg(self.theme.primary)));
            }
            FooterStatus::Error { icon, message } => {
                left_spans.push(Span::styled(
                    format!("{icon} {message}"),
                    Style::default().fg(self.theme.error),
                ));
            }
        }

        // Right side: hints (rendered right-aligned)
        for (i, hint) in self.hints.iter().enumerate() {
            if i > 0 {
                right_spans.push(Span::styled(" │ ", Style::default().fg(self.theme.muted)));
            }

            right_spans.push(Span::styled("[", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.key.as_str(),
                Style::default().fg(self.theme.primary),
            ));
            right_spans.push(Span::styled("] ", Style::default().fg(self.theme.muted)));
            right_spans.push(Span::styled(
                hint.action.as_str(),
                Style::default().fg(self.theme.subtext),
            ));
        }

        let left_width: usize = left_spans.iter().map(|s| visual_width(&s.content)).sum();
        let right_width: usize = right_spans.iter().map(|s| visual_width(&s.content)).sum();
        let total_width = area.width as usize;

        // Errors take priority over hints when space is short
        if left_width + right_width > total_width && !left_spans.is_empty() {
            right_spans.clear();
        }

        let padding = total_width.saturating_sub(left_width + right_width);
        if padding > 0 && !right_spans.is_empty() {
            left_spans.push(Span::raw(" ".repeat(padding)));
        }

        left_spans.extend(right_spans);

        let line = Line::from(left_spans);
        let paragraph = Paragraph::new(line).style(Style::default().bg(self.theme.surface));
        paragraph.render(area, buf);
    }
}
