use super::{GRID_HEIGHT, GRID_WIDTH, grid::Grid, piece::Piece, shape::Shape};

/// Tests whether `shape` placed with its top-left corner at `(x, y)` would collide.
///
/// A placement collides when any occupied cell lands left of column 0, right of the
/// last column, below the last row, or on a locked cell. Cells above the top row are
/// not a collision by themselves, so pieces may straddle the top edge.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Grid, PieceKind, collides};
///
/// let grid = Grid::EMPTY;
/// let shape = PieceKind::O.base_shape();
/// assert!(!collides(&shape, 0, -1, &grid));
/// assert!(collides(&shape, -1, 0, &grid));
/// assert!(collides(&shape, 0, 19, &grid));
/// ```
#[must_use]
pub fn collides(shape: &Shape, x: i32, y: i32, grid: &Grid) -> bool {
    shape.occupied_offsets().any(|(dx, dy)| {
        let (cx, cy) = (x + dx, y + dy);
        !(0..WIDTH).contains(&cx) || cy >= HEIGHT || (cy >= 0 && grid.is_occupied(cx, cy))
    })
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const WIDTH: i32 = GRID_WIDTH as i32;
#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const HEIGHT: i32 = GRID_HEIGHT as i32;

impl Grid {
    /// Shorthand for [`collides`] with the piece's own shape and position.
    #[must_use]
    pub fn is_colliding(&self, piece: &Piece) -> bool {
        collides(piece.shape(), piece.x(), piece.y(), self)
    }
}
