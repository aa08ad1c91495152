use blockfall_engine::Game;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, Widget},
};

use crate::view::widgets::{BoardDisplay, KeyBinding, KeyBindingDisplay, StatsDisplay, style};

/// Board, statistics panel and key help.
#[derive(Debug)]
pub(crate) struct PlayingScreen<'a> {
    game: &'a Game,
    bindings: &'a [KeyBinding<'a>],
}

impl<'a> PlayingScreen<'a> {
    pub(crate) fn new(game: &'a Game, bindings: &'a [KeyBinding<'a>]) -> Self {
        Self { game, bindings }
    }
}

impl Widget for PlayingScreen<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        BlockWidget::new().style(style::DEFAULT).render(area, buf);

        let board = BoardDisplay::new(self.game.grid())
            .falling_piece(self.game.falling_piece().copied())
            .block(
                BlockWidget::bordered()
                    .title(" BLOCKFALL ")
                    .border_style(style::BORDER),
            );
        let stats = StatsDisplay::new(self.game.stats()).block(
            BlockWidget::bordered()
                .title(" STATS ")
                .border_style(style::BORDER),
        );

        let vertical = Layout::vertical([Constraint::Length(board.height()), Constraint::Length(1)])
            .flex(Flex::Center);
        let [main_area, help_area] = area.layout(&vertical);

        let horizontal = Layout::horizontal([
            Constraint::Length(board.width()),
            Constraint::Length(stats.width()),
        ])
        .spacing(2)
        .flex(Flex::Center);
        let [board_area, stats_column] = main_area.layout(&horizontal);
        let [stats_area] =
            stats_column.layout(&Layout::vertical([Constraint::Length(stats.height())]));

        board.render(board_area, buf);
        stats.render(stats_area, buf);
        KeyBindingDisplay::new(self.bindings).render(help_area, buf);
    }
}
