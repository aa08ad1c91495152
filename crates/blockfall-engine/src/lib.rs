//! Simulation engine for a single-player falling-block puzzle game.
//!
//! The crate is split into two layers:
//!
//! - [`core`] - Plain data structures: the [`Grid`], piece [`Shape`]s, the active
//!   [`Piece`] and the [`collides`] predicate.
//! - [`engine`] - The [`Game`] state machine that owns those structures and applies
//!   player input and gravity ticks to them.
//!
//! The engine does no timing and no rendering. A presentation layer feeds it
//! [`GameEvent`]s and reads back the [`Phase`], grid contents, falling piece and score.

pub use self::{core::*, engine::*};

pub mod core;
pub mod engine;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("piece colliding with the grid")]
pub struct PieceCollisionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EventError {
    #[display("{event} is not accepted in the {phase} phase")]
    UnexpectedEvent { event: GameEvent, phase: Phase },
    #[display("no falling piece in the {phase} phase")]
    NotPlaying { phase: Phase },
    #[display("piece colliding with the grid")]
    PieceCollision(PieceCollisionError),
}

impl From<PieceCollisionError> for EventError {
    fn from(err: PieceCollisionError) -> Self {
        Self::PieceCollision(err)
    }
}
