use super::{
    GRID_HEIGHT, GRID_WIDTH,
    piece::{Piece, PieceKind},
};

/// A single cell of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cell {
    #[default]
    Empty,
    /// Cell locked by a piece of the given kind.
    Filled(PieceKind),
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the color identifier (`1..=7`) of a filled cell.
    #[must_use]
    pub const fn color_id(self) -> Option<u8> {
        match self {
            Cell::Empty => None,
            Cell::Filled(kind) => Some(kind.color_id()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct GridRow {
    cells: [Cell; GRID_WIDTH],
}

impl GridRow {
    const EMPTY: Self = Self {
        cells: [Cell::Empty; GRID_WIDTH],
    };

    fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }
}

/// The fixed 10×20 matrix of locked cells.
///
/// Coordinates are `(x, y)` with `x` growing rightward and `y` growing downward from
/// the top-left cell `(0, 0)`. Queries take signed coordinates so callers can check
/// positions hanging off the edges; anything outside the grid reads as unoccupied
/// and writes there are ignored. Bounds are enforced by [`collides`](super::collides)
/// before anything is written.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Cell, Grid, PieceKind};
///
/// let mut grid = Grid::EMPTY;
/// grid.set(0, 19, Cell::Filled(PieceKind::T));
/// assert!(grid.is_occupied(0, 19));
/// assert!(!grid.is_occupied(0, -1));
/// assert_eq!(grid.clear_full_rows(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: [GridRow; GRID_HEIGHT],
}

impl Default for Grid {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl Grid {
    pub const WIDTH: usize = GRID_WIDTH;
    pub const HEIGHT: usize = GRID_HEIGHT;

    pub const EMPTY: Self = Self {
        rows: [GridRow::EMPTY; GRID_HEIGHT],
    };

    /// Empties every cell.
    pub fn clear(&mut self) {
        self.rows.fill(GridRow::EMPTY);
    }

    /// Returns the cell at `(x, y)`, or `None` when the coordinate is off the grid.
    #[must_use]
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        let (x, y) = index(x, y)?;
        Some(self.rows[y].cells[x])
    }

    /// Returns whether `(x, y)` lies on the grid and holds a locked cell.
    ///
    /// Rows above the top (`y < 0`) are never occupied.
    #[must_use]
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        self.cell(x, y).is_some_and(|cell| !cell.is_empty())
    }

    /// Writes a cell. Off-grid coordinates are ignored.
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) {
        if let Some((x, y)) = index(x, y) {
            self.rows[y].cells[x] = cell;
        }
    }

    /// Copies every on-grid cell of the piece into the grid with the piece's kind.
    pub fn fill_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.occupied_positions() {
            self.set(x, y, Cell::Filled(piece.kind()));
        }
    }

    /// Removes every full row and returns how many were removed.
    ///
    /// Rows above a removed row shift down, keeping their order, and the rows
    /// vacated at the top become empty.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut count = 0;
        for y in (0..GRID_HEIGHT).rev() {
            if self.rows[y].is_full() {
                count += 1;
                continue;
            }
            if count > 0 {
                self.rows[y + count] = self.rows[y];
            }
        }
        self.rows[..count].fill(GridRow::EMPTY);
        count
    }

    /// Returns an iterator over the rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell; GRID_WIDTH]> {
        self.rows.iter().map(|row| &row.cells)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| *row == GridRow::EMPTY)
    }

    /// Number of non-empty cells.
    #[must_use]
    pub fn filled_cell_count(&self) -> usize {
        self.rows()
            .flat_map(|row| row.iter())
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

fn index(x: i32, y: i32) -> Option<(usize, usize)> {
    let x = usize::try_from(x).ok().filter(|x| *x < GRID_WIDTH)?;
    let y = usize::try_from(y).ok().filter(|y| *y < GRID_HEIGHT)?;
    Some((x, y))
}
