/// Largest number of rows a single lock can clear: a piece spans at most four rows.
pub const MAX_CLEARED_ROWS: usize = 4;

/// Points awarded for clearing `cleared_rows` rows with one lock: `cleared_rows² × 100`.
///
/// ```
/// use blockfall_engine::line_clear_score;
///
/// assert_eq!(line_clear_score(0), 0);
/// assert_eq!(line_clear_score(1), 100);
/// assert_eq!(line_clear_score(4), 1600);
/// ```
#[must_use]
pub const fn line_clear_score(cleared_rows: usize) -> usize {
    cleared_rows * cleared_rows * 100
}

/// Score and line clear counters for the current game.
///
/// - **Score**: sum of [`line_clear_score`] over every lock
/// - **Completed pieces**: number of pieces locked into the grid
/// - **Line clear distribution**: how many locks cleared 0, 1, 2, 3 or 4 rows
///
/// The counters only describe the game; nothing in the rules reads them back.
///
/// # Example
///
/// ```
/// use blockfall_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(2);
/// stats.complete_piece_drop(0);
///
/// assert_eq!(stats.score(), 400);
/// assert_eq!(stats.completed_pieces(), 2);
/// assert_eq!(stats.line_cleared_counter()[2], 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameStats {
    score: usize,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; MAX_CLEARED_ROWS + 1],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; MAX_CLEARED_ROWS + 1],
        }
    }

    #[must_use]
    pub const fn score(&self) -> usize {
        self.score
    }

    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of locks by number of rows cleared.
    ///
    /// Index `n` counts the locks that cleared exactly `n` rows.
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; MAX_CLEARED_ROWS + 1] {
        &self.line_cleared_counter
    }

    /// Records one lock that cleared `cleared_lines` rows.
    pub fn complete_piece_drop(&mut self, cleared_lines: usize) {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if let Some(count) = self.line_cleared_counter.get_mut(cleared_lines) {
            *count += 1;
        }
        self.score += line_clear_score(cleared_lines);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_stats_are_zero() {
        let stats = GameStats::new();
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.completed_pieces(), 0);
        assert_eq!(stats.total_cleared_lines(), 0);
        assert_eq!(stats.line_cleared_counter(), &[0; 5]);
    }

    #[test]
    fn test_score_is_quadratic_in_cleared_rows() {
        for k in 0..=MAX_CLEARED_ROWS {
            let mut stats = GameStats::new();
            stats.complete_piece_drop(k);
            assert_eq!(stats.score(), 100 * k * k);
        }
    }

    #[test]
    fn test_counters_accumulate() {
        let mut stats = GameStats::new();
        for cleared in [0, 1, 1, 3, 0, 4] {
            stats.complete_piece_drop(cleared);
        }
        assert_eq!(stats.completed_pieces(), 6);
        assert_eq!(stats.total_cleared_lines(), 9);
        assert_eq!(stats.line_cleared_counter(), &[2, 2, 0, 1, 1]);
        assert_eq!(stats.score(), 100 + 100 + 900 + 1600);
    }
}
