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

#[derive(Debug)]
pub(crate) struct GameOverScreen<'a> {
    score: usize,
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> GameOverScreen<'a> {
    pub(crate) fn new(score: usize, bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { score, bindings }
    }

    /// Clickable area of the Play Again button when the screen fills `area`.
    pub(crate) fn play_again_button(area: Rect) -> Rect {
        DialogLayout::new(area).button
    }
}

impl Widget for GameOverScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        BlockWidget::new().style(style::DEFAULT).render(area, buf);
        let layout = DialogLayout::new(area);

        Line::styled("GAME OVER", style::TITLE)
            .centered()
            .render(layout.title, buf);
        Line::styled(format!("Final score: {}", self.score), style::DEFAULT)
            .centered()
            .render(layout.message, buf);
        Button::new("Play Again").render(layout.button, buf);
        KeyBindingDisplay::new(self.bindings).render(layout.help, buf);
    }
}
