use rand::{Rng, distr::StandardUniform, prelude::Distribution};
use serde::{Deserialize, Serialize};

use super::{GRID_WIDTH, shape::Shape};

#[expect(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
pub(crate) const PIECE_SPAWN_X: i32 = (GRID_WIDTH / 2) as i32 - 2;
pub(crate) const PIECE_SPAWN_Y: i32 = 0;

/// The falling piece: a rotation frame placed on the grid.
///
/// `x` and `y` give the grid coordinate of the frame's top-left corner. They are signed
/// because empty frame columns and rows may hang over the left edge or the top of the
/// grid. Pieces are values; movement and rotation return new `Piece`s and leave
/// collision checks to the caller.
///
/// # Example
///
/// ```
/// use blockfall_engine::{Piece, PieceKind};
///
/// let piece = Piece::new(PieceKind::T);
/// assert_eq!(piece.position(), (3, 0));
///
/// let moved = piece.moved(-1, 1).rotated_cw();
/// assert_eq!(moved.position(), (2, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    shape: Shape,
    x: i32,
    y: i32,
}

impl Piece {
    /// Creates a piece of the given kind in its base orientation at the spawn position.
    #[must_use]
    pub const fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: kind.base_shape(),
            x: PIECE_SPAWN_X,
            y: PIECE_SPAWN_Y,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    #[must_use]
    pub const fn shape(&self) -> &Shape {
        &self.shape
    }

    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    #[must_use]
    pub const fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Grid coordinates of every occupied cell.
    pub fn occupied_positions(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .occupied_offsets()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }

    #[must_use]
    pub const fn moved(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    #[must_use]
    pub const fn rotated_cw(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }
}

/// The seven tetromino kinds.
///
/// Each kind carries a fixed base shape, a color identifier and a display color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, derive_more::Display,
)]
#[repr(u8)]
pub enum PieceKind {
    /// I-piece.
    I = 0,
    /// O-piece.
    O = 1,
    /// T-piece.
    T = 2,
    /// S-piece.
    S = 3,
    /// Z-piece.
    Z = 4,
    /// J-piece.
    J = 5,
    /// L-piece.
    L = 6,
}

impl Distribution<PieceKind> for StandardUniform {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> PieceKind {
        PieceKind::ALL[rng.random_range(0..PieceKind::LEN)]
    }
}

/// RGB display color of a piece kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl PieceKind {
    /// Number of piece kinds (7).
    pub const LEN: usize = 7;

    pub const ALL: [Self; Self::LEN] = [
        Self::I,
        Self::O,
        Self::T,
        Self::S,
        Self::Z,
        Self::J,
        Self::L,
    ];

    /// Returns the shape the piece spawns with.
    #[must_use]
    pub const fn base_shape(self) -> Shape {
        BASE_SHAPES[self as usize]
    }

    /// Returns the identifier stored in grid cells locked by this kind, in `1..=7`.
    #[must_use]
    pub const fn color_id(self) -> u8 {
        self as u8 + 1
    }

    #[must_use]
    pub const fn color(self) -> PieceColor {
        PIECE_COLORS[self as usize]
    }
}

const BASE_SHAPES: [Shape; PieceKind::LEN] = {
    const C: bool = true;
    const E: bool = false;
    const EEEE: [bool; 4] = [E; 4];
    [
        // I-piece
        Shape::from_rows([EEEE, [C, C, C, C], EEEE, EEEE]),
        // O-piece
        Shape::from_rows([[C, C, E, E], [C, C, E, E], EEEE, EEEE]),
        // T-piece
        Shape::from_rows([[E, C, E, E], [C, C, C, E], EEEE, EEEE]),
        // S-piece
        Shape::from_rows([[E, C, C, E], [C, C, E, E], EEEE, EEEE]),
        // Z-piece
        Shape::from_rows([[C, C, E, E], [E, C, C, E], EEEE, EEEE]),
        // J-piece
        Shape::from_rows([[C, E, E, E], [C, C, C, E], EEEE, EEEE]),
        // L-piece
        Shape::from_rows([[E, E, C, E], [C, C, C, E], EEEE, EEEE]),
    ]
};

const PIECE_COLORS: [PieceColor; PieceKind::LEN] = {
    const fn rgb(r: u8, g: u8, b: u8) -> PieceColor {
        PieceColor { r, g, b }
    }
    [
        rgb(0, 255, 255),   // I: cyan
        rgb(255, 255, 0),   // O: yellow
        rgb(128, 0, 128),   // T: purple
        rgb(0, 255, 0),     // S: green
        rgb(255, 0, 0),     // Z: red
        rgb(0, 0, 255),     // J: blue
        rgb(255, 165, 0),   // L: orange
    ]
};
