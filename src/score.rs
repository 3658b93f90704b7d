//! Score tracking driven by merge events

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::MoveOutcome;

/// Running score of a game session. Never decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Score(u64);

impl Score {
    pub fn new(value: u64) -> Self {
        Score(value)
    }

    pub fn value(self) -> u64 {
        self.0
    }

    /// Add the value of every tile created by a merge in `outcome`.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminal_2048::Score;
    /// use terminal_2048::board::{Direction, Grid, apply_move};
    ///
    /// let grid = Grid::from_rows([[2, 2, 4, 4], [0; 4], [0; 4], [0; 4]])?;
    /// let score = Score::default().apply(&apply_move(grid, Direction::Left));
    /// assert_eq!(score.value(), 12);
    /// # Ok::<(), terminal_2048::Error>(())
    /// ```
    pub fn apply(self, outcome: &MoveOutcome) -> Score {
        Score(self.0.saturating_add(outcome.merge_total()))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
