//! Screen layout: the card fills the screen above a one-row footer.

use ratatui::layout::{Constraint, Layout, Rect};

/// Height of the footer row.
pub const FOOTER_HEIGHT: u16 = 1;

/// Split the terminal area into the card area and the footer.
pub fn screen_layout(area: Rect) -> (Rect, Rect) {
    let [card, footer] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(FOOTER_HEIGHT)]).areas(area);
    (card, footer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout() {
        let (card, footer) = screen_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(card, Rect::new(0, 0, 80, 23));
        assert_eq!(footer, Rect::new(0, 23, 80, 1));
    }

    #[test]
    fn test_screen_layout_single_row() {
        let (card, footer) = screen_layout(Rect::new(0, 0, 80, 1));
        assert_eq!(card.height, 0);
        assert_eq!(footer.height, 1);
    }
}
