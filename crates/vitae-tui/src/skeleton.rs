//! Skeleton placeholders.
//!
//! The card never draws placeholders itself. It describes each block with a
//! [`SkeletonSpec`] and hands it to an injected [`SkeletonRenderer`], so any
//! placeholder style can be swapped in. [`ShadedSkeleton`] is the default.

use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use crate::theme::{IconSet, Theme};

/// Horizontal extent of a placeholder block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkeletonWidth {
    /// A fraction of the available width, rounded down.
    Fraction { num: u16, den: u16 },
    /// A fixed number of cells, clamped to the available width.
    Cells(u16),
}

impl SkeletonWidth {
    /// Resolve to a cell count within `available` cells.
    pub fn resolve(self, available: u16) -> u16 {
        match self {
            Self::Fraction { den: 0, .. } => 0,
            Self::Fraction { num, den } => {
                let cells = u32::from(available) * u32::from(num) / u32::from(den);
                u16::try_from(cells).unwrap_or(u16::MAX).min(available)
            }
            Self::Cells(n) => n.min(available),
        }
    }
}

/// Size and styling of one placeholder block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkeletonSpec {
    pub width: SkeletonWidth,
    /// Height in rows.
    pub height: u16,
    /// Extra styling patched over the renderer's own.
    pub class: Option<Style>,
}

impl SkeletonSpec {
    /// A block of the given width and height with no extra styling.
    pub const fn new(width: SkeletonWidth, height: u16) -> Self {
        Self {
            width,
            height,
            class: None,
        }
    }

    /// A block spanning `num/den` of the available width.
    pub const fn fraction(num: u16, den: u16, height: u16) -> Self {
        Self::new(SkeletonWidth::Fraction { num, den }, height)
    }

    /// A block a fixed number of cells wide.
    pub const fn cells(width: u16, height: u16) -> Self {
        Self::new(SkeletonWidth::Cells(width), height)
    }

    /// Attach extra styling.
    #[must_use]
    pub fn class(mut self, style: Style) -> Self {
        self.class = Some(style);
        self
    }

    /// The rectangle this block occupies at the top-left of `area`.
    pub fn rect_in(&self, area: Rect) -> Rect {
        Rect::new(
            area.x,
            area.y,
            self.width.resolve(area.width),
            self.height.min(area.height),
        )
    }
}

/// Renders placeholder blocks.
pub trait SkeletonRenderer {
    /// Draw the block described by `spec` at the top-left of `area`.
    fn render(&self, spec: &SkeletonSpec, area: Rect, buf: &mut Buffer);
}

impl<F> SkeletonRenderer for F
where
    F: Fn(&SkeletonSpec, Rect, &mut Buffer),
{
    fn render(&self, spec: &SkeletonSpec, area: Rect, buf: &mut Buffer) {
        self(spec, area, buf);
    }
}

/// Default renderer: fills the block with a shade symbol.
#[derive(Debug, Clone)]
pub struct ShadedSkeleton {
    symbol: &'static str,
    style: Style,
}

impl ShadedSkeleton {
    /// Create a renderer using the theme's surface colors and the icon set's fill.
    pub fn new(theme: &Theme, icons: &IconSet) -> Self {
        Self {
            symbol: icons.skeleton(),
            style: Style::default().fg(theme.overlay).bg(theme.surface),
        }
    }
}

impl SkeletonRenderer for ShadedSkeleton {
    fn render(&self, spec: &SkeletonSpec, area: Rect, buf: &mut Buffer) {
        let rect = spec.rect_in(area).intersection(buf.area);
        let style = spec.class.map_or(self.style, |class| self.style.patch(class));

        for y in rect.top()..rect.bottom() {
            for x in rect.left()..rect.right() {
                if let Some(cell) = buf.cell_mut((x, y)) {
                    cell.set_symbol(self.symbol).set_style(style);
                }
            }
        }
    }
}
