//! Full-screen views, one per game phase.

use ratatui::layout::{Constraint, Flex, Layout, Rect};

pub(crate) use self::{game_over::*, menu::*, playing::*};

use crate::view::widgets::Button;

mod game_over;
mod menu;
mod playing;

/// Vertical stack used by the menu and game over screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct DialogLayout {
    pub(crate) title: Rect,
    pub(crate) message: Rect,
    pub(crate) button: Rect,
    pub(crate) help: Rect,
}

impl DialogLayout {
    pub(crate) fn new(area: Rect) -> Self {
        let vertical = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(Button::HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .flex(Flex::Center);
        let [title, _, message, _, button_row, _, help] = area.layout(&vertical);
        Self {
            title,
            message,
            button: Button::area_in(button_row),
            help,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dialog_is_centered() {
        let layout = DialogLayout::new(Rect::new(0, 0, 80, 25));
        // 9 rows centered in 25 leaves 8 above.
        assert_eq!(layout.title, Rect::new(0, 8, 80, 1));
        assert_eq!(layout.message.y, 10);
        assert_eq!(layout.button, Rect::new(30, 12, 20, 3));
        assert_eq!(layout.help.y, 16);
    }
}
