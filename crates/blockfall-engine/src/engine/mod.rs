//! Game engine logic and state management.
//!
//! This module builds the gameplay rules on top of the [`core`](crate::core) data
//! structures:
//!
//! - [`Game`] - The simulation engine: phase state machine, falling piece, locking
//! - [`GameEvent`] - Discrete inputs accepted by [`Game::handle_event`]
//! - [`GameStats`] - Score and line clear counters for the current game
//! - [`PieceGenerator`] - Seeded uniform random piece selection
//! - [`PieceSeed`] - Seed for deterministic piece generation
//!
//! # Game Flow
//!
//! 1. A [`Game`] starts in [`Phase::Menu`]
//! 2. [`GameEvent::Start`] clears the grid and spawns the first piece
//! 3. Moves, rotations and gravity ticks manipulate the falling piece
//! 4. A blocked downward step locks the piece, clears full rows and spawns the next one
//! 5. When a freshly spawned piece collides, the game enters [`Phase::GameOver`]
//! 6. [`GameEvent::Restart`] starts over
//!
//! # Example
//!
//! ```
//! use blockfall_engine::{Game, GameEvent, Phase};
//!
//! let mut game = Game::new();
//! game.handle_event(GameEvent::Start).unwrap();
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! // Rejected moves are reported but leave the game untouched.
//! _ = game.handle_event(GameEvent::MoveLeft);
//! _ = game.handle_event(GameEvent::RotateCw);
//! _ = game.handle_event(GameEvent::Tick);
//! ```

pub use self::{game::*, piece_generator::*, stats::*};

mod game;
mod piece_generator;
mod stats;
