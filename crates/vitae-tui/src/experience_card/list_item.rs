//! One timeline entry.
//!
//! A [`ListItem`] is purely presentational: it draws the rail marker, the
//! time label, the position, the company (as a link when one is given) and,
//! when expanded, the project bullets. Every field is either display-ready
//! text or a skeleton placeholder. Clicks are routed by the parent card
//! state, so the item holds no state of its own.

use std::borrow::Cow;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use vitae_core::Experience;

use crate::skeleton::{SkeletonRenderer, SkeletonSpec};
use crate::text::{truncate_to_width, visual_width, wrap_text};
use crate::theme::{IconSet, Theme};

/// Columns taken by the rail and the space after it.
pub const RAIL_WIDTH: u16 = 2;

/// Indent of the project list under the company name.
const PROJECT_INDENT: &str = "  ";

/// Width of a bullet and its trailing space.
const BULLET_WIDTH: usize = 2;

/// One wrapped line of the project list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProjectLine {
    /// Whether this line starts a new bullet.
    pub first: bool,
    pub text: String,
}

/// Wrap project bullets for entries `width` cells wide.
pub(crate) fn project_lines(projects: &[String], width: usize) -> Vec<ProjectLine> {
    let text_width = width.saturating_sub(PROJECT_INDENT.len() + BULLET_WIDTH);
    projects
        .iter()
        .flat_map(|project| {
            wrap_text(project, text_width)
                .into_iter()
                .enumerate()
                .map(|(i, text)| ProjectLine { first: i == 0, text })
        })
        .collect()
}

/// Cells occupied by the company name (and link icon) in an entry `width` cells wide.
pub(crate) fn company_span_width(exp: &Experience, width: usize, icons: &IconSet) -> usize {
    let (name, icon) = company_parts(&exp.company, exp.link().is_some(), width, icons);
    visual_width(&name) + icon.map_or(0, |i| 1 + visual_width(i))
}

/// Company text truncated to fit, plus the link icon if it should be shown.
fn company_parts<'i>(
    company: &str,
    linked: bool,
    width: usize,
    icons: &'i IconSet,
) -> (String, Option<&'i str>) {
    let icon = Some(icons.external_link()).filter(|i| linked && !i.is_empty());
    let reserved = icon.map_or(0, |i| 1 + visual_width(i));
    (truncate_to_width(company, width.saturating_sub(reserved)), icon)
}

/// Content of one field.
pub(crate) enum Field<'a> {
    Text(Cow<'a, str>),
    Placeholder(SkeletonSpec),
}

/// A single timeline entry.
pub(crate) struct ListItem<'a> {
    time: Field<'a>,
    position: Field<'a>,
    company: Field<'a>,
    company_link: Option<&'a str>,
    projects: &'a [String],
    is_expanded: bool,
    theme: &'a Theme,
    icons: &'a IconSet,
    skeleton: &'a dyn SkeletonRenderer,
}

enum Row<'r, 'a> {
    Field(&'r Field<'a>, Style),
    Company,
    Project(ProjectLine),
}

impl<'a> ListItem<'a> {
    /// Entry for a loaded record.
    pub(crate) fn from_experience(
        exp: &'a Experience,
        is_expanded: bool,
        theme: &'a Theme,
        icons: &'a IconSet,
        skeleton: &'a dyn SkeletonRenderer,
    ) -> Self {
        Self {
            time: Field::Text(Cow::Owned(exp.time_label())),
            position: Field::Text(Cow::Borrowed(&exp.position)),
            company: Field::Text(Cow::Borrowed(&exp.company)),
            company_link: exp.link(),
            projects: exp.projects(),
            is_expanded,
            theme,
            icons,
            skeleton,
        }
    }

    /// Placeholder entry shown while loading.
    pub(crate) fn placeholder(
        theme: &'a Theme,
        icons: &'a IconSet,
        skeleton: &'a dyn SkeletonRenderer,
    ) -> Self {
        Self {
            time: Field::Placeholder(SkeletonSpec::fraction(5, 12, 1)),
            position: Field::Placeholder(
                SkeletonSpec::fraction(6, 12, 1).class(Style::new().add_modifier(Modifier::DIM)),
            ),
            company: Field::Placeholder(SkeletonSpec::fraction(6, 12, 1)),
            company_link: None,
            projects: &[],
            is_expanded: false,
            theme,
            icons,
            skeleton,
        }
    }

    /// Render into `area`, whose first column is the rail.
    ///
    /// Rows that do not fit are clipped. Returns the number of rows drawn.
    pub(crate) fn render(&self, area: Rect, buf: &mut Buffer) -> u16 {
        let content_x = area.x + RAIL_WIDTH.min(area.width);
        let content_width = area.width.saturating_sub(RAIL_WIDTH);

        let mut rows = vec![
            Row::Field(&self.time, Style::default().fg(self.theme.muted)),
            Row::Field(
                &self.position,
                Style::default()
                    .fg(self.theme.text)
                    .add_modifier(Modifier::BOLD),
            ),
            Row::Company,
        ];
        if self.is_expanded {
            rows.extend(
                project_lines(self.projects, content_width as usize)
                    .into_iter()
                    .map(Row::Project),
            );
        }

        let mut drawn = 0u16;
        for (i, row) in rows.iter().enumerate() {
            let y = area.y + drawn;
            if y >= area.bottom() {
                break;
            }

            let marker = if i == 0 {
                Span::styled(self.icons.timeline_dot(), Style::default().fg(self.theme.rail))
            } else {
                Span::styled(self.icons.rail(), Style::default().fg(self.theme.rail))
            };
            Paragraph::new(Line::from(marker)).render(Rect::new(area.x, y, 1, 1), buf);

            let line_area = Rect::new(content_x, y, content_width, 1);
            match row {
                Row::Field(field, style) => self.render_field(field, *style, line_area, buf),
                Row::Company => self.render_company(line_area, buf),
                Row::Project(line) => self.render_project_line(line, line_area, buf),
            }
            drawn += 1;
        }

        drawn
    }

    fn render_field(&self, field: &Field<'_>, style: Style, area: Rect, buf: &mut Buffer) {
        match field {
            Field::Text(text) => {
                let display = truncate_to_width(text, area.width as usize);
                Paragraph::new(Line::from(Span::styled(display, style))).render(area, buf);
            }
            Field::Placeholder(spec) => self.skeleton.render(spec, area, buf),
        }
    }

    fn render_company(&self, area: Rect, buf: &mut Buffer) {
        let Field::Text(company) = &self.company else {
            self.render_field(&self.company, Style::default(), area, buf);
            return;
        };

        let linked = self.company_link.is_some();
        let (name, icon) = company_parts(company, linked, area.width as usize, self.icons);

        let style = if linked {
            Style::default()
                .fg(self.theme.link)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(self.theme.subtext)
        };

        let mut spans = vec![Span::styled(name, style)];
        if let Some(icon) = icon {
            spans.push(Span::raw(" "));
            spans.push(Span::styled(icon, Style::default().fg(self.theme.link)));
        }
        Paragraph::new(Line::from(spans)).render(area, buf);
    }

    fn render_project_line(&self, line: &ProjectLine, area: Rect, buf: &mut Buffer) {
        let lead = if line.first {
            Span::styled(
                format!("{}{} ", PROJECT_INDENT, self.icons.bullet()),
                Style::default().fg(self.theme.muted),
            )
        } else {
            Span::raw(format!("{PROJECT_INDENT}  "))
        };
        let text_width = (area.width as usize).saturating_sub(PROJECT_INDENT.len() + BULLET_WIDTH);
        let text = Span::styled(
            truncate_to_width(&line.text, text_width),
            Style::default().fg(self.theme.text),
        );
        Paragraph::new(Line::from(vec![lead, text])).render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::ShadedSkeleton;
    use crate::test_utils::{acme_experience, buffer_to_string};
    use crate::theme::IconMode;

    fn render_item(exp: &Experience, expanded: bool, width: u16, height: u16) -> String {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let skeleton = ShadedSkeleton::new(&theme, &icons);
        let item = ListItem::from_experience(exp, expanded, &theme, &icons, &skeleton);

        let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
        item.render(buf.area, &mut buf);
        buffer_to_string(&buf)
    }

    #[test]
    fn test_collapsed_entry() {
        let result = render_item(&acme_experience(), false, 30, 3);
        assert_eq!(result, "o 2020 - 2022\n| Engineer\n| Acme");
    }

    #[test]
    fn test_expanded_entry_shows_projects() {
        let result = render_item(&acme_experience(), true, 30, 5);
        assert_eq!(
            result,
            "o 2020 - 2022\n| Engineer\n| Acme\n|   - Built X\n|   - Shipped Y"
        );
    }

    #[test]
    fn test_expanded_without_projects() {
        let exp = Experience::new("2017", "2019", "Junior", "Globex");
        let result = render_item(&exp, true, 30, 6);
        assert_eq!(result, "o 2017 - 2019\n| Junior\n| Globex\n\n\n");
    }

    #[test]
    fn test_clipped_to_area() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let skeleton = ShadedSkeleton::new(&theme, &icons);
        let exp = acme_experience();
        let item = ListItem::from_experience(&exp, true, &theme, &icons, &skeleton);

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 2));
        assert_eq!(item.render(buf.area, &mut buf), 2);
    }

    #[test]
    fn test_linked_company_is_underlined() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Unicode);
        let skeleton = ShadedSkeleton::new(&theme, &icons);
        let exp = acme_experience();
        let item = ListItem::from_experience(&exp, false, &theme, &icons, &skeleton);

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 3));
        item.render(buf.area, &mut buf);

        let cell = &buf[(RAIL_WIDTH, 2)];
        assert_eq!(cell.symbol(), "A");
        assert!(cell.modifier.contains(Modifier::UNDERLINED));
        assert_eq!(cell.fg, theme.link);
        // Link icon after the name
        assert_eq!(buf[(RAIL_WIDTH + 5, 2)].symbol(), "↗");
    }

    #[test]
    fn test_unlinked_company_is_plain() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Unicode);
        let skeleton = ShadedSkeleton::new(&theme, &icons);
        let exp = Experience::new("2017", "2019", "Junior", "Globex");
        let item = ListItem::from_experience(&exp, false, &theme, &icons, &skeleton);

        let mut buf = Buffer::empty(Rect::new(0, 0, 30, 3));
        item.render(buf.area, &mut buf);

        let cell = &buf[(RAIL_WIDTH, 2)];
        assert!(!cell.modifier.contains(Modifier::UNDERLINED));
        assert_eq!(buf[(RAIL_WIDTH + 7, 2)].symbol(), " ");
    }

    #[test]
    fn test_placeholder_entry() {
        let theme = Theme::default();
        let icons = IconSet::new(IconMode::Ascii);
        let skeleton = ShadedSkeleton::new(&theme, &icons);
        let item = ListItem::placeholder(&theme, &icons, &skeleton);

        // 26 columns leaves 24 for content: 5/12 -> 10, 6/12 -> 12
        let mut buf = Buffer::empty(Rect::new(0, 0, 26, 3));
        item.render(buf.area, &mut buf);
        assert_eq!(
            buffer_to_string(&buf),
            "o ..........\n| ............\n| ............"
        );
    }

    #[test]
    fn test_project_lines_wrap() {
        let projects = vec!["Shipped the new billing pipeline".to_string()];
        // 16 wide leaves 12 for text
        let lines = project_lines(&projects, 16);
        assert!(lines.len() > 1);
        assert!(lines[0].first);
        assert!(lines[1..].iter().all(|l| !l.first));
    }

    #[test]
    fn test_project_lines_one_per_short_project() {
        let exp = acme_experience();
        let lines = project_lines(exp.projects(), 30);
        assert_eq!(
            lines,
            vec![
                ProjectLine {
                    first: true,
                    text: "Built X".into()
                },
                ProjectLine {
                    first: true,
                    text: "Shipped Y".into()
                },
            ]
        );
    }

    #[test]
    fn test_company_span_width() {
        let exp = acme_experience();
        assert_eq!(company_span_width(&exp, 30, &IconSet::new(IconMode::Ascii)), 4);
        assert_eq!(company_span_width(&exp, 30, &IconSet::new(IconMode::Unicode)), 6);

        let unlinked = Experience::new("a", "b", "c", "Globex");
        assert_eq!(
            company_span_width(&unlinked, 30, &IconSet::new(IconMode::Unicode)),
            6
        );
    }
}
