use std::fmt;

/// Occupancy of a piece within its 4×4 rotation frame.
///
/// `rows[i][j]` is the cell at row `i`, column `j` of the frame. Placed on the grid
/// with its top-left corner at `(x, y)`, that cell lands on `(x + j, y + i)`.
///
/// Rotation always turns the whole 4×4 frame, so pieces that use only the top-left
/// 3×3 or 2×2 area drift inside the frame as they rotate.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: [[bool; Shape::SIZE]; Shape::SIZE],
}

impl Shape {
    /// Side length of the rotation frame.
    pub const SIZE: usize = 4;

    pub const EMPTY: Self = Self {
        rows: [[false; Self::SIZE]; Self::SIZE],
    };

    #[must_use]
    pub const fn from_rows(rows: [[bool; Self::SIZE]; Self::SIZE]) -> Self {
        Self { rows }
    }

    #[must_use]
    pub const fn rows(&self) -> &[[bool; Self::SIZE]; Self::SIZE] {
        &self.rows
    }

    #[must_use]
    pub const fn is_occupied(&self, row: usize, col: usize) -> bool {
        row < Self::SIZE && col < Self::SIZE && self.rows[row][col]
    }

    /// Returns the frame turned 90° clockwise.
    ///
    /// Cell `(i, j)` moves to `(j, 3 - i)`.
    #[must_use]
    pub const fn rotated_cw(&self) -> Self {
        let mut rows = [[false; Self::SIZE]; Self::SIZE];
        let mut i = 0;
        while i < Self::SIZE {
            let mut j = 0;
            while j < Self::SIZE {
                rows[j][Self::SIZE - 1 - i] = self.rows[i][j];
                j += 1;
            }
            i += 1;
        }
        Self { rows }
    }

    /// Returns an iterator of occupied `(col, row)` offsets inside the frame.
    pub fn occupied_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, occupied)| **occupied)
                .map(move |(col, _)| (col, row))
        })
    }

    /// Like [`Self::occupied_cells`], as signed offsets for grid arithmetic.
    pub fn occupied_offsets(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.occupied_cells()
            .map(|(col, row)| (frame_offset(col), frame_offset(row)))
    }

    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.occupied_cells().count()
    }
}

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
const fn frame_offset(index: usize) -> i32 {
    // Frame indices are below Shape::SIZE.
    index as i32
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // One line per row, e.g. `Shape[.#.. ###. .... ....]`
        f.write_str("Shape[")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            for &cell in row {
                f.write_str(if cell { "#" } else { "." })?;
            }
        }
        f.write_str("]")
    }
}
