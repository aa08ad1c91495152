use tracing::{debug, info, trace};

use crate::{
    EventError, PieceCollisionError,
    core::{Grid, Piece},
};

use super::{GameStats, PieceGenerator, PieceSeed};

/// Top-level state of a [`Game`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display, derive_more::IsVariant,
)]
pub enum Phase {
    /// Waiting for [`GameEvent::Start`]. Initial phase.
    #[default]
    Menu,
    /// A piece is falling and gameplay input is accepted.
    Playing,
    /// A freshly spawned piece collided. Waiting for [`GameEvent::Restart`].
    GameOver,
}

/// Discrete inputs accepted by [`Game::handle_event`].
///
/// Quitting is not an engine event; the presentation layer simply stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameEvent {
    Start,
    Restart,
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    /// Fixed-cadence gravity step.
    Tick,
}

impl GameEvent {
    /// The only phase in which this event does anything.
    #[must_use]
    pub const fn accepted_in(self) -> Phase {
        match self {
            GameEvent::Start => Phase::Menu,
            GameEvent::Restart => Phase::GameOver,
            GameEvent::MoveLeft
            | GameEvent::MoveRight
            | GameEvent::SoftDrop
            | GameEvent::RotateCw
            | GameEvent::Tick => Phase::Playing,
        }
    }
}

/// Result of a successful downward or sideways step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveOutcome {
    /// The piece moved to the new position.
    Moved,
    /// The piece could not move down and was locked into the grid.
    Locked(LockOutcome),
}

/// What happened when a piece was locked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockOutcome {
    /// Rows removed by the lock.
    pub cleared_lines: usize,
    /// Whether the follow-up spawn collided and ended the game.
    pub game_over: bool,
}

/// The simulation engine.
///
/// Owns the grid, the falling piece, the statistics and the piece generator, and moves
/// between [`Phase`]s in response to [`GameEvent`]s. Every mutation of the falling
/// piece is checked with [`collides`](crate::collides) first, so the piece never
/// overlaps locked cells or leaves the grid sideways or through the floor.
///
/// The falling piece exists exactly while the phase is [`Phase::Playing`].
///
/// # Example
///
/// ```
/// use blockfall_engine::{Game, GameEvent, PieceSeed};
///
/// let seed: PieceSeed = "000102030405060708090a0b0c0d0e0f".parse().unwrap();
/// let mut game = Game::with_seed(seed);
/// game.start().unwrap();
///
/// // Drop the first piece to the floor.
/// while game.tick().unwrap().is_moved() {}
/// assert_eq!(game.stats().completed_pieces(), 1);
/// assert_eq!(game.grid().filled_cell_count(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    phase: Phase,
    grid: Grid,
    falling_piece: Option<Piece>,
    stats: GameStats,
    generator: PieceGenerator,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a game in the menu phase with a randomly seeded piece generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::new())
    }

    /// Like [`Self::new`], but every piece sequence is fixed by `seed`.
    #[must_use]
    pub fn with_seed(seed: PieceSeed) -> Self {
        Self::with_generator(PieceGenerator::with_seed(seed))
    }

    fn with_generator(generator: PieceGenerator) -> Self {
        Self {
            phase: Phase::Menu,
            grid: Grid::EMPTY,
            falling_piece: None,
            stats: GameStats::new(),
            generator,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Mutable access to the locked cells, for setting up positions.
    ///
    /// Edits are not validated against the falling piece.
    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    /// Returns the falling piece while playing.
    #[must_use]
    pub fn falling_piece(&self) -> Option<&Piece> {
        self.falling_piece.as_ref()
    }

    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    #[must_use]
    pub fn score(&self) -> usize {
        self.stats.score()
    }

    /// Applies one event.
    ///
    /// Events delivered outside [`GameEvent::accepted_in`] and rejected moves leave the
    /// game unchanged and are reported as errors; callers driving the game from user
    /// input usually ignore them.
    pub fn handle_event(&mut self, event: GameEvent) -> Result<(), EventError> {
        match event {
            GameEvent::Start => self.start(),
            GameEvent::Restart => self.restart(),
            GameEvent::MoveLeft => self.try_move_left(),
            GameEvent::MoveRight => self.try_move_right(),
            GameEvent::SoftDrop => self.soft_drop().map(|_| ()),
            GameEvent::RotateCw => self.try_rotate_cw(),
            GameEvent::Tick => self.tick().map(|_| ()),
        }
    }

    /// Leaves the menu and starts the first game.
    pub fn start(&mut self) -> Result<(), EventError> {
        self.ensure_accepted(GameEvent::Start)?;
        info!("starting game");
        self.reset_and_spawn();
        Ok(())
    }

    /// Starts a new game after game over.
    pub fn restart(&mut self) -> Result<(), EventError> {
        self.ensure_accepted(GameEvent::Restart)?;
        info!(previous_score = self.score(), "restarting game");
        self.reset_and_spawn();
        Ok(())
    }

    pub fn try_move_left(&mut self) -> Result<(), EventError> {
        self.move_piece(GameEvent::MoveLeft, -1, 0).map(|_| ())
    }

    pub fn try_move_right(&mut self) -> Result<(), EventError> {
        self.move_piece(GameEvent::MoveRight, 1, 0).map(|_| ())
    }

    /// Moves the piece down one row, locking it if it cannot move.
    pub fn soft_drop(&mut self) -> Result<MoveOutcome, EventError> {
        self.move_piece(GameEvent::SoftDrop, 0, 1)
    }

    /// Gravity step. Behaves exactly like [`Self::soft_drop`].
    pub fn tick(&mut self) -> Result<MoveOutcome, EventError> {
        self.move_piece(GameEvent::Tick, 0, 1)
    }

    /// Rotates the piece 90° clockwise in place.
    ///
    /// There are no wall kicks: a rotation that would collide is rejected.
    pub fn try_rotate_cw(&mut self) -> Result<(), EventError> {
        let piece = self.active_piece(GameEvent::RotateCw)?;
        let rotated = piece.rotated_cw();
        if self.grid.is_colliding(&rotated) {
            trace!(kind = %piece.kind(), "rotation rejected");
            return Err(PieceCollisionError.into());
        }
        self.falling_piece = Some(rotated);
        Ok(())
    }

    /// Replaces the falling piece, if the new piece fits.
    pub fn set_falling_piece(&mut self, piece: Piece) -> Result<(), EventError> {
        if !self.phase.is_playing() {
            return Err(EventError::NotPlaying { phase: self.phase });
        }
        if self.grid.is_colliding(&piece) {
            return Err(PieceCollisionError.into());
        }
        self.falling_piece = Some(piece);
        Ok(())
    }

    fn ensure_accepted(&self, event: GameEvent) -> Result<(), EventError> {
        if event.accepted_in() == self.phase {
            return Ok(());
        }
        trace!(%event, phase = %self.phase, "event ignored");
        Err(EventError::UnexpectedEvent {
            event,
            phase: self.phase,
        })
    }

    fn active_piece(&self, event: GameEvent) -> Result<Piece, EventError> {
        self.ensure_accepted(event)?;
        self.falling_piece
            .ok_or(EventError::NotPlaying { phase: self.phase })
    }

    fn reset_and_spawn(&mut self) {
        self.grid.clear();
        self.stats = GameStats::new();
        self.phase = Phase::Playing;
        self.spawn();
    }

    fn spawn(&mut self) {
        let piece = Piece::new(self.generator.next_kind());
        if self.grid.is_colliding(&piece) {
            info!(kind = %piece.kind(), score = self.score(), "spawn blocked, game over");
            self.falling_piece = None;
            self.phase = Phase::GameOver;
            return;
        }
        debug!(kind = %piece.kind(), "spawned piece");
        self.falling_piece = Some(piece);
    }

    fn move_piece(&mut self, event: GameEvent, dx: i32, dy: i32) -> Result<MoveOutcome, EventError> {
        let piece = self.active_piece(event)?;
        let moved = piece.moved(dx, dy);
        if !self.grid.is_colliding(&moved) {
            self.falling_piece = Some(moved);
            return Ok(MoveOutcome::Moved);
        }
        if dy == 1 {
            return Ok(MoveOutcome::Locked(self.lock(piece)));
        }
        trace!(%event, kind = %piece.kind(), "move rejected");
        Err(PieceCollisionError.into())
    }

    fn lock(&mut self, piece: Piece) -> LockOutcome {
        let (x, y) = piece.position();
        debug!(kind = %piece.kind(), x, y, "locking piece");
        self.grid.fill_piece(&piece);
        let cleared_lines = self.grid.clear_full_rows();
        if cleared_lines > 0 {
            debug!(cleared_lines, "cleared rows");
        }
        self.stats.complete_piece_drop(cleared_lines);
        self.spawn();
        LockOutcome {
            cleared_lines,
            game_over: self.phase.is_game_over(),
        }
    }
}
