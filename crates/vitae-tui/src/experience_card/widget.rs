//! Experience card widget.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use super::list_item::{ListItem, RAIL_WIDTH};
use super::state::{ExperienceCardState, ENTRY_GAP};
use crate::skeleton::{ShadedSkeleton, SkeletonRenderer, SkeletonSpec};
use crate::theme::{BorderSet, IconSet, Theme};

/// Card title.
pub const CARD_TITLE: &str = "Experience";

/// Placeholder drawn instead of the title while loading.
pub const TITLE_SKELETON: SkeletonSpec = SkeletonSpec::cells(16, 1);

/// Rows between the title and the timeline.
const TITLE_GAP: u16 = 1;

/// Regions of the card, derived from its outer area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    /// Title row.
    pub title: Rect,
    /// Timeline, starting at the rail column.
    pub list: Rect,
}

impl CardLayout {
    /// Compute the layout for a card drawn in `area`.
    pub fn new(area: Rect, with_border: bool) -> Self {
        let inner = if with_border {
            Block::default().borders(Borders::ALL).inner(area)
        } else {
            area
        };

        // One column of padding on each side
        let content = Rect::new(
            inner.x + 1.min(inner.width),
            inner.y,
            inner.width.saturating_sub(2),
            inner.height,
        );

        let title = Rect::new(content.x, content.y, content.width, 1.min(content.height));

        let list_offset = (1 + TITLE_GAP).min(content.height);
        let list = Rect::new(
            content.x + 1.min(content.width),
            content.y + list_offset,
            content.width.saturating_sub(1),
            content.height - list_offset,
        );

        Self { title, list }
    }

    /// First column of entry text.
    pub fn entry_x(&self) -> u16 {
        self.list.x + RAIL_WIDTH.min(self.list.width)
    }

    /// Width available to entry text.
    pub fn entry_width(&self) -> usize {
        self.list.width.saturating_sub(RAIL_WIDTH) as usize
    }

    /// Row within the timeline for a terminal position, if it lies inside it.
    pub fn list_row(&self, column: u16, row: u16) -> Option<usize> {
        self.list
            .contains(Position::new(column, row))
            .then(|| (row - self.list.y) as usize)
    }
}

/// Experience timeline card.
///
/// Shows the title and one entry per record, or the title placeholder and two
/// placeholder entries while the state is loading. Placeholders are drawn by
/// the injected [`SkeletonRenderer`]; without one, a [`ShadedSkeleton`] is used.
pub struct ExperienceCard<'a> {
    state: &'a ExperienceCardState,
    theme: &'a Theme,
    icons: &'a IconSet,
    skeleton: Option<&'a dyn SkeletonRenderer>,
    /// Whether to render with a border (default: true).
    with_border: bool,
}

impl<'a> ExperienceCard<'a> {
    /// Create a new experience card.
    pub fn new(state: &'a ExperienceCardState, theme: &'a Theme, icons: &'a IconSet) -> Self {
        Self {
            state,
            theme,
            icons,
            skeleton: None,
            with_border: true,
        }
    }

    /// Use a custom placeholder renderer.
    #[must_use]
    pub fn skeleton(mut self, skeleton: &'a dyn SkeletonRenderer) -> Self {
        self.skeleton = Some(skeleton);
        self
    }

    /// Set whether to render with a border.
    #[must_use]
    pub fn with_border(mut self, border: bool) -> Self {
        self.with_border = border;
        self
    }

    fn render_title(&self, area: Rect, buf: &mut Buffer, skeleton: &dyn SkeletonRenderer) {
        if area.height == 0 {
            return;
        }
        if self.state.is_loading() {
            skeleton.render(&TITLE_SKELETON, area, buf);
        } else {
            let title = Line::from(Span::styled(
                CARD_TITLE,
                Style::default().fg(self.theme.subtext),
            ));
            Paragraph::new(title).render(area, buf);
        }
    }

    fn render_timeline(&self, area: Rect, buf: &mut Buffer, skeleton: &dyn SkeletonRenderer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let items: Vec<ListItem<'_>> = if self.state.is_loading() {
            (0..self.state.entry_count())
                .map(|_| ListItem::placeholder(self.theme, self.icons, skeleton))
                .collect()
        } else {
            self.state
                .experiences()
                .iter()
                .enumerate()
                .skip(self.state.scroll_offset())
                .map(|(index, exp)| {
                    ListItem::from_experience(
                        exp,
                        self.state.is_expanded(index),
                        self.theme,
                        self.icons,
                        skeleton,
                    )
                })
                .collect()
        };

        let rail_style = Style::default().fg(self.theme.rail);
        let count = items.len();
        let mut y = area.y;

        for (i, item) in items.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }

            let item_area = Rect::new(area.x, y, area.width, area.bottom() - y);
            y += item.render(item_area, buf);

            // The rail runs through the gap when another entry follows
            let gap = u16::try_from(ENTRY_GAP).unwrap_or(u16::MAX);
            if i + 1 < count {
                for gap_y in y..(y.saturating_add(gap)).min(area.bottom()) {
                    buf.set_string(area.x, gap_y, self.icons.rail(), rail_style);
                }
            }
            y = y.saturating_add(gap);
        }
    }
}

impl Widget for ExperienceCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.with_border {
            let block = Block::default()
                .borders(Borders::ALL)
                .border_set(BorderSet::new(self.icons.mode()).card())
                .border_style(Style::default().fg(self.theme.border))
                .style(Style::default().bg(self.theme.base));
            block.render(area, buf);
        }

        let layout = CardLayout::new(area, self.with_border);

        let default_skeleton;
        let skeleton: &dyn SkeletonRenderer = if let Some(skeleton) = self.skeleton {
            skeleton
        } else {
            default_skeleton = ShadedSkeleton::new(self.theme, self.icons);
            &default_skeleton
        };

        self.render_title(layout.title, buf, skeleton);
        self.render_timeline(layout.list, buf, skeleton);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::experience_card::state::BASE_ENTRY_HEIGHT;
    use crate::test_utils::{acme_experience, buffer_to_string, sample_experiences};
    use crate::theme::IconMode;

    fn render_card(state: &ExperienceCardState, border: bool, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        ExperienceCard::new(state, &theme, &icons)
            .with_border(border)
            .render(buf.area, &mut buf);
        buffer_to_string(&buf)
    }

    fn count_dots(rendered: &str) -> usize {
        rendered
            .lines()
            .filter(|line| line.contains(" o "))
            .count()
    }

    #[test]
    fn test_layout_with_border() {
        let layout = CardLayout::new(Rect::new(0, 0, 40, 12), true);
        assert_eq!(layout.title, Rect::new(2, 1, 36, 1));
        assert_eq!(layout.list, Rect::new(3, 3, 35, 8));
        assert_eq!(layout.entry_x(), 5);
        assert_eq!(layout.entry_width(), 33);
    }

    #[test]
    fn test_layout_without_border() {
        let layout = CardLayout::new(Rect::new(0, 0, 30, 8), false);
        assert_eq!(layout.title, Rect::new(1, 0, 28, 1));
        assert_eq!(layout.list, Rect::new(2, 2, 27, 6));
        assert_eq!(layout.entry_width(), 25);
    }

    #[test]
    fn test_layout_tiny_area() {
        let layout = CardLayout::new(Rect::new(0, 0, 2, 2), true);
        assert_eq!(layout.list.height, 0);
        assert_eq!(layout.entry_width(), 0);
    }

    #[test]
    fn test_list_row() {
        let layout = CardLayout::new(Rect::new(0, 0, 40, 12), true);
        assert_eq!(layout.list_row(5, 3), Some(0));
        assert_eq!(layout.list_row(5, 7), Some(4));
        assert_eq!(layout.list_row(5, 2), None);
        assert_eq!(layout.list_row(1, 5), None);
    }

    #[test]
    fn test_title_when_loaded() {
        let state = ExperienceCardState::new(Vec::new());
        let result = render_card(&state, true, 40, 6);
        assert!(result.lines().nth(1).unwrap().contains(CARD_TITLE));
    }

    #[test]
    fn test_title_placeholder_when_loading() {
        let state = ExperienceCardState::loading();
        let result = render_card(&state, false, 40, 6);
        assert!(!result.contains(CARD_TITLE));
        assert_eq!(result.lines().next().unwrap(), format!(" {}", ".".repeat(16)));
    }

    #[test]
    fn test_loading_renders_two_placeholders() {
        let mut state = ExperienceCardState::new(sample_experiences());
        state.set_loading(true);
        let result = render_card(&state, false, 40, 20);

        assert_eq!(count_dots(&result), 2);
        assert!(!result.contains("Acme"));
    }

    #[test]
    fn test_loaded_renders_entries_in_order() {
        let state = ExperienceCardState::new(sample_experiences());
        let result = render_card(&state, true, 60, 20);

        assert_eq!(count_dots(&result), 3);
        let acme = result.find("Acme").unwrap();
        let initech = result.find("Initech").unwrap();
        let globex = result.find("Globex").unwrap();
        assert!(acme < initech && initech < globex);
    }

    #[test]
    fn test_empty_list_renders_no_entries() {
        let state = ExperienceCardState::new(Vec::new());
        let result = render_card(&state, false, 40, 8);
        assert_eq!(count_dots(&result), 0);
        assert_eq!(result.lines().next().unwrap(), " Experience");
    }

    #[test]
    fn test_expanded_entry_shows_projects() {
        let mut state = ExperienceCardState::new(vec![acme_experience()]);
        let collapsed = render_card(&state, false, 30, 7);
        assert!(!collapsed.contains("Built X"));

        state.toggle(0);
        let expanded = render_card(&state, false, 30, 7);
        assert!(expanded.contains("- Built X"));
        assert!(expanded.contains("- Shipped Y"));

        state.toggle(0);
        let collapsed = render_card(&state, false, 30, 7);
        assert!(!collapsed.contains("Built X"));
    }

    #[test]
    fn test_rail_runs_through_gap() {
        let state = ExperienceCardState::new(sample_experiences());
        let result = render_card(&state, false, 40, 20);
        let lines: Vec<&str> = result.lines().collect();

        // Timeline starts at row 2; the gap after the first entry is a rail row
        let gap_row = 2 + BASE_ENTRY_HEIGHT;
        assert_eq!(lines[gap_row], "  |");
    }

    #[test]
    fn test_no_rail_after_last_entry() {
        let state = ExperienceCardState::new(vec![acme_experience()]);
        let result = render_card(&state, false, 30, 8);
        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines[2 + BASE_ENTRY_HEIGHT], "");
    }

    #[test]
    fn test_scrolled_hides_earlier_entries() {
        let mut state = ExperienceCardState::new(sample_experiences());
        state.scroll_down(1);
        let result = render_card(&state, false, 40, 20);
        assert!(!result.contains("Acme"));
        assert!(result.contains("Initech"));
    }

    #[test]
    fn test_custom_skeleton_renderer() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let state = ExperienceCardState::loading();
        let renderer = |spec: &SkeletonSpec, area: Rect, buf: &mut Buffer| {
            let rect = spec.rect_in(area);
            buf.set_string(rect.x, rect.y, "#".repeat(rect.width as usize), Style::default());
        };

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 8));
        ExperienceCard::new(&state, &theme, &icons)
            .with_border(false)
            .skeleton(&renderer)
            .render(buf.area, &mut buf);

        let result = buffer_to_string(&buf);
        assert!(result.contains('#'));
        assert!(!result.contains('.'));
    }

    #[test]
    fn test_tiny_area_does_not_panic() {
        let state = ExperienceCardState::new(sample_experiences());
        for (w, h) in [(0, 0), (1, 1), (2, 2), (3, 5), (5, 3)] {
            render_card(&state, true, w, h);
            render_card(&state, false, w, h);
        }
    }
}
