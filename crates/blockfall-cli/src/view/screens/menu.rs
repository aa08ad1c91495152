use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Block as BlockWidget, Widget},
};

use crate::view::{
    screens::DialogLayout,
    widgets::{Button, KeyBinding, KeyBindingDisplay, style},
};

/// Title screen shown before the first game.
#[derive(Debug)]
pub(crate) struct MenuScreen<'a> {
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> MenuScreen<'a> {
    pub(crate) fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { bindings }
    }

    /// Clickable area of the Start button when the screen fills `area`.
    pub(crate) fn start_button(area: Rect) -> Rect {
        DialogLayout::new(area).button
    }
}

impl Widget for MenuScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        BlockWidget::new().style(style::DEFAULT).render(area, buf);
        let layout = DialogLayout::new(area);

        Line::styled("B L O C K F A L L", style::TITLE)
            .centered()
            .render(layout.title, buf);
        Line::styled("Stack the falling pieces and clear full rows", style::DEFAULT)
            .centered()
            .render(layout.message, buf);
        Button::new("Start").render(layout.button, buf);
        KeyBindingDisplay::new(self.bindings).render(layout.help, buf);
    }
}
