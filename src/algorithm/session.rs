//! Session state: one owned board plus its seeded RNG
//!
//! A session owns the current grid and the random source feeding the spawn
//! step, and serializes moves against them: each command resolves to
//! completion (transform, merge, inverse transform, spawn) before the next
//! one is looked at, so no partial board is ever observable. Win and
//! game-over classification stay outside; callers that want them inspect the
//! grid between moves, e.g. via [`crate::is_stuck`].

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::algorithm::dispatch::{Direction, apply_move, initial_grid, is_stuck};
use crate::board::grid::Grid;
use crate::io::error::Result;

/// One play session: the current grid and the RNG driving spawns
#[derive(Debug)]
pub struct Session {
    grid: Grid,
    rng: StdRng,
}

impl Session {
    /// Start a session with a deterministic seed
    ///
    /// The board begins empty and immediately receives its first spawned
    /// tile. The same seed and move sequence reproduce the same game.
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::InvalidDimension`] when `size` is zero
    /// or exceeds the configured maximum.
    pub fn new(size: usize, seed: u64) -> Result<Self> {
        Self::with_rng(size, StdRng::seed_from_u64(seed))
    }

    /// Start a session with a caller-provided RNG
    ///
    /// # Errors
    ///
    /// Returns [`crate::EngineError::InvalidDimension`] when `size` is zero
    /// or exceeds the configured maximum.
    pub fn with_rng(size: usize, mut rng: StdRng) -> Result<Self> {
        let grid = initial_grid(size, &mut rng)?;
        Ok(Self { grid, rng })
    }

    /// Resolve one directional command and return the new board
    ///
    /// Runs the full move pipeline and publishes the result as the session
    /// state. The spawn fires whether or not the slide changed anything.
    pub fn apply_move(&mut self, direction: Direction) -> &Grid {
        self.grid = apply_move(&self.grid, direction, &mut self.rng);
        &self.grid
    }

    /// Current board state
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// True when no direction's slide would change the current board
    pub fn is_stuck(&self) -> bool {
        is_stuck(&self.grid)
    }
}

#[cfg(test)]
mod tests {
    use super::Session;
    use crate::algorithm::dispatch::Direction;

    #[test]
    fn new_session_starts_with_one_tile() {
        let session = Session::new(4, 42).unwrap();
        assert_eq!(session.grid().size(), 4);
        assert_eq!(session.grid().count_tiles(), 1);
    }

    #[test]
    fn same_seed_reproduces_the_same_game() {
        let mut first = Session::new(4, 9).unwrap();
        let mut second = Session::new(4, 9).unwrap();
        for direction in [Direction::Left, Direction::Up, Direction::Right] {
            first.apply_move(direction);
            second.apply_move(direction);
        }
        assert_eq!(first.grid(), second.grid());
    }

    #[test]
    fn moves_never_shrink_the_board_below_one_tile() {
        let mut session = Session::new(2, 1).unwrap();
        for _ in 0..8 {
            session.apply_move(Direction::Left);
            assert!(session.grid().count_tiles() >= 1);
        }
    }
}
