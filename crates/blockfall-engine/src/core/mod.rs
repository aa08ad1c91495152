pub use self::{collision::*, grid::*, piece::*, shape::*};

pub(crate) mod collision;
pub(crate) mod grid;
pub(crate) mod piece;
pub(crate) mod shape;

/// Number of columns on the grid.
pub const GRID_WIDTH: usize = 10;
/// Number of rows on the grid.
pub const GRID_HEIGHT: usize = 20;
