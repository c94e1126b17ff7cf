//! Application state and update logic for the vitae TUI.

use crate::event::Action;
use crate::experience_card::{
    company_span_width, CardLayout, ExperienceCard, ExperienceCardState, COMPANY_ROW,
    SCROLL_SPEED,
};
use crate::layout::screen_layout;
use crate::theme::{IconMode, IconSet, Theme};
use crate::widgets::{FooterHints, FooterStatus, KeyHint};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};
use std::path::{Path, PathBuf};
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use vitae_core::{Config, Experience, ResumeData, ResumeError, DEFAULT_DATA_FILE};

/// Main application state.
pub struct App {
    /// The experience card.
    pub card: ExperienceCardState,
    /// Color theme.
    pub theme: Theme,
    /// Icon set.
    pub icons: IconSet,
    /// Whether the card draws its border.
    pub with_border: bool,
    /// File the records are loaded from, if any.
    pub data_path: Option<PathBuf>,
    /// Last load failure, shown in the footer.
    pub load_error: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Tick counter for animations.
    pub tick: usize,
    /// Terminal area used to map mouse positions.
    viewport: Rect,
    /// Whether a (re)load of `data_path` should start.
    load_requested: bool,
    /// Link to hand to the system opener.
    pending_link: Option<String>,
    hints: Vec<KeyHint>,
}

impl App {
    /// Create an app that loads its records from `data_path`.
    ///
    /// The card starts in the loading state; the caller picks up the load
    /// request with [`App::take_load_request`].
    pub fn new(data_path: PathBuf, config: &Config) -> Self {
        Self {
            card: ExperienceCardState::loading(),
            data_path: Some(data_path),
            load_requested: true,
            ..Self::base(config)
        }
    }

    /// Create an app showing records that are already in memory.
    pub fn with_experiences(experiences: Vec<Experience>, config: &Config) -> Self {
        Self {
            card: ExperienceCardState::new(experiences),
            ..Self::base(config)
        }
    }

    fn base(config: &Config) -> Self {
        Self {
            card: ExperienceCardState::default(),
            theme: Theme::from(config.theme),
            icons: IconSet::new(IconMode::from(config.icons)),
            with_border: config.border,
            data_path: None,
            load_error: None,
            should_quit: false,
            tick: 0,
            viewport: Rect::default(),
            load_requested: false,
            pending_link: None,
            hints: FooterHints::default_hints(),
        }
    }

    /// Handle an action.
    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::Toggle(index) => {
                self.card.toggle(index);
            }
            Action::Click { column, row } => self.click(column, row),
            Action::ScrollUp => self.card.scroll_up(SCROLL_SPEED),
            Action::ScrollDown => self.card.scroll_down(SCROLL_SPEED),
            Action::Reload => self.request_reload(),
            Action::None => {}
        }
    }

    /// Record the terminal area the app is drawn into.
    pub fn set_viewport(&mut self, area: Rect) {
        self.viewport = area;
    }

    /// Advance animations by one tick.
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    fn request_reload(&mut self) {
        if self.data_path.is_none() {
            return;
        }
        debug!("reload requested");
        self.card.set_loading(true);
        self.load_error = None;
        self.load_requested = true;
    }

    /// Take the pending load request, returning the file to load.
    pub fn take_load_request(&mut self) -> Option<PathBuf> {
        if !self.load_requested {
            return None;
        }
        self.load_requested = false;
        self.data_path.clone()
    }

    /// Apply the result of a load.
    ///
    /// On failure the card stays in its loading branch and the error is
    /// reported in the footer.
    pub fn finish_load(&mut self, result: Result<ResumeData, ResumeError>) {
        match result {
            Ok(data) => {
                debug!(count = data.len(), "resume data loaded");
                self.load_error = None;
                self.card.set_experiences(data.experiences);
            }
            Err(e) => {
                warn!(error = %e, "failed to load resume data");
                self.load_error = Some(e.to_string());
                self.card.set_loading(true);
            }
        }
    }

    /// Take the link the user asked to open, if any.
    pub fn take_pending_link(&mut self) -> Option<String> {
        self.pending_link.take()
    }

    /// Toggle the entry under a click; queue its link when the click lands on
    /// a linked company name.
    fn click(&mut self, column: u16, row: u16) {
        let (card_area, _) = screen_layout(self.viewport);
        let layout = CardLayout::new(card_area, self.with_border);
        let Some(y) = layout.list_row(column, row) else {
            return;
        };

        let width = layout.entry_width();
        let Some(hit) = self.card.click(y, width) else {
            return;
        };

        if hit.row != COMPANY_ROW || column < layout.entry_x() {
            return;
        }
        let offset = (column - layout.entry_x()) as usize;
        if let Some(exp) = self.card.experiences().get(hit.index) {
            if let Some(link) = exp.link() {
                if offset < company_span_width(exp, width, &self.icons) {
                    debug!(link, "company link clicked");
                    self.pending_link = Some(link.to_string());
                }
            }
        }
    }

    fn footer_status(&self) -> FooterStatus {
        if let Some(message) = &self.load_error {
            return FooterStatus::Error {
                icon: self.icons.error(),
                message: message.clone(),
            };
        }
        if self.card.is_loading() {
            let frames = self.icons.spinner_frames();
            let label = self
                .data_path
                .as_deref()
                .and_then(Path::file_name)
                .map_or_else(
                    || DEFAULT_DATA_FILE.to_string(),
                    |name| name.to_string_lossy().into_owned(),
                );
            return FooterStatus::Loading {
                label,
                frame: frames[self.tick % frames.len()],
            };
        }
        FooterStatus::Idle
    }

    /// Draw the card and footer into `area`.
    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        let (card_area, footer_area) = screen_layout(area);

        ExperienceCard::new(&self.card, &self.theme, &self.icons)
            .with_border(self.with_border)
            .render(card_area, buf);

        FooterHints::new(&self.hints, &self.theme)
            .status(self.footer_status())
            .render(footer_area, buf);
    }
}

/// Load `path` on the blocking pool.
pub(crate) fn spawn_load(path: PathBuf) -> JoinHandle<Result<ResumeData, ResumeError>> {
    tokio::task::spawn_blocking(move || ResumeData::load(&path))
}
