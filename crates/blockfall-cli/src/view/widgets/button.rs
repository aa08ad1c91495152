use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, Widget},
};

use crate::view::widgets::style;

/// A clickable label inside a filled box.
///
/// The widget only draws; hit-testing is done by the caller against the same area.
#[derive(Debug)]
pub(crate) struct Button<'a> {
    label: &'a str,
}

impl<'a> Button<'a> {
    pub(crate) const WIDTH: u16 = 20;
    pub(crate) const HEIGHT: u16 = 3;

    pub(crate) fn new(label: &'a str) -> Self {
        Self { label }
    }

    /// Where a button is drawn inside `row`: horizontally centered, full height.
    pub(crate) fn area_in(row: Rect) -> Rect {
        let horizontal = Layout::horizontal([Constraint::Length(Self::WIDTH)]).flex(Flex::Center);
        let [area] = row.layout(&horizontal);
        let [area] = area.layout(&Layout::vertical([Constraint::Length(Self::HEIGHT)]));
        area
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = BlockWidget::new().style(style::BUTTON);
        let inner = block.inner(area);
        block.render(area, buf);

        let vertical = Layout::vertical([Constraint::Length(1)]).flex(Flex::Center);
        let [label_area] = inner.layout(&vertical);
        Line::styled(self.label, style::BUTTON)
            .centered()
            .render(label_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::layout::Position;

    use super::*;

    #[test]
    fn test_area_is_centered() {
        let row = Rect::new(0, 10, 80, 3);
        let area = Button::area_in(row);
        assert_eq!(area, Rect::new(30, 10, 20, 3));
        assert!(area.contains(Position::new(30, 11)));
        assert!(!area.contains(Position::new(29, 11)));
    }

    #[test]
    fn test_area_is_clipped_to_small_rows() {
        let row = Rect::new(0, 0, 12, 1);
        let area = Button::area_in(row);
        assert!(area.width <= 12);
        assert_eq!(area.height, 1);
    }
}
