use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub(crate) use self::{
    board_display::*, button::*, cell_display::*, key_binding_display::*, stats_display::*,
};

mod board_display;
mod button;
mod cell_display;
mod key_binding_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const DARK_GRAY: Color = Color::Rgb(64, 64, 64);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const ACCENT: Color = Color::Rgb(0, 255, 255);
}

pub(crate) mod style {
    use blockfall_engine::{PieceColor, PieceKind};
    use ratatui::style::{Color, Modifier, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::DARK_GRAY, color::BLACK);
    pub const BORDER: Style = fg_bg(color::GRAY, color::BLACK);
    pub const TITLE: Style = fg_bg(color::ACCENT, color::BLACK).add_modifier(Modifier::BOLD);
    pub const BUTTON: Style = fg_bg(color::BLACK, color::ACCENT).add_modifier(Modifier::BOLD);

    pub const fn piece(kind: PieceKind) -> Style {
        let PieceColor { r, g, b } = kind.color();
        bg_only(Color::Rgb(r, g, b))
    }
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
