use blockfall_engine::Cell;
use ratatui::{
    prelude::{Buffer, Rect},
    style::Style,
    widgets::{Paragraph, Widget},
};

use crate::view::widgets::style;

/// One grid cell, two terminal columns wide so squares look square.
#[derive(Debug)]
pub(crate) struct CellDisplay {
    style: Style,
    symbol: &'static str,
}

impl CellDisplay {
    pub(crate) const WIDTH: u16 = 2;
    pub(crate) const HEIGHT: u16 = 1;

    pub(crate) const fn from_cell(cell: Cell) -> Self {
        match cell {
            Cell::Empty => Self {
                style: style::EMPTY_DOT,
                symbol: " .",
            },
            Cell::Filled(kind) => Self {
                style: style::piece(kind),
                symbol: "",
            },
        }
    }
}

impl Widget for CellDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Paragraph fills the whole area, not just the cells holding the symbol
        Paragraph::new(self.symbol)
            .style(self.style)
            .render(area, buf);
    }
}
