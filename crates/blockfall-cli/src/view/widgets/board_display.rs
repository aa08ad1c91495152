use std::iter;

use blockfall_engine::{GRID_HEIGHT, GRID_WIDTH, Grid, Piece};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};

use crate::view::widgets::CellDisplay;

/// The locked cells with the falling piece drawn on top.
#[derive(Debug)]
pub(crate) struct BoardDisplay<'a> {
    grid: &'a Grid,
    falling_piece: Option<Piece>,
    block: Option<BlockWidget<'a>>,
}

impl<'a> BoardDisplay<'a> {
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            falling_piece: None,
            block: None,
        }
    }

    pub(crate) fn falling_piece(self, piece: Option<Piece>) -> Self {
        Self {
            falling_piece: piece,
            ..self
        }
    }

    pub(crate) fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn width(&self) -> u16 {
        GRID_WIDTH as u16 * CellDisplay::WIDTH + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub(crate) fn height(&self) -> u16 {
        GRID_HEIGHT as u16 * CellDisplay::HEIGHT + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for BoardDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        // Only cells inside the grid are drawn; rows above the top stay hidden.
        let mut grid = self.grid.clone();
        if let Some(piece) = &self.falling_piece {
            grid.fill_piece(piece);
        }

        let horizontal =
            Layout::horizontal((0..GRID_WIDTH).map(|_| Constraint::Length(CellDisplay::WIDTH)))
                .flex(Flex::Center);
        let vertical =
            Layout::vertical((0..GRID_HEIGHT).map(|_| Constraint::Length(CellDisplay::HEIGHT)));

        let screen_rows = area
            .layout::<GRID_HEIGHT>(&vertical)
            .into_iter()
            .map(|row| row.layout::<GRID_WIDTH>(&horizontal));

        for (screen_row, row) in iter::zip(screen_rows, grid.rows()) {
            for (screen_cell, cell) in iter::zip(screen_row, row) {
                CellDisplay::from_cell(*cell).render(screen_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use blockfall_engine::{Cell, PieceKind};

    use super::*;
    use crate::view::widgets::style;

    #[test]
    fn test_size_includes_border() {
        let grid = Grid::EMPTY;
        assert_eq!(BoardDisplay::new(&grid).width(), 20);
        assert_eq!(BoardDisplay::new(&grid).height(), 20);

        let bordered = BoardDisplay::new(&grid).block(BlockWidget::bordered());
        assert_eq!(bordered.width(), 22);
        assert_eq!(bordered.height(), 22);
    }

    #[test]
    fn test_renders_locked_cells_and_falling_piece() {
        let mut grid = Grid::EMPTY;
        grid.set(0, 19, Cell::Filled(PieceKind::Z));
        let piece = Piece::new(PieceKind::O).moved(1, 0);

        let area = Rect::new(0, 0, 20, 20);
        let mut buf = Buffer::empty(area);
        BoardDisplay::new(&grid)
            .falling_piece(Some(piece))
            .render(area, &mut buf);

        assert_eq!(buf[(0, 19)].style().bg, style::piece(PieceKind::Z).bg);
        // O cells at grid (4, 0) and (5, 1) are terminal columns 8 and 10.
        assert_eq!(buf[(8, 0)].style().bg, style::piece(PieceKind::O).bg);
        assert_eq!(buf[(10, 1)].style().bg, style::piece(PieceKind::O).bg);
        assert_eq!(buf[(2, 19)].style().bg, style::EMPTY_DOT.bg);
    }
}
