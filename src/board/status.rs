//! Terminal-state detection

use serde::{Deserialize, Serialize};

use super::grid::{Grid, SIZE};

/// Tile value that wins the game unless configured otherwise
pub const DEFAULT_WIN_TILE: u32 = 2048;

/// Status derived from a grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Whether any direction could change the grid: an empty cell exists, or two
/// horizontally or vertically adjacent cells hold the same tile.
pub fn can_move(grid: &Grid) -> bool {
    for r in 0..SIZE {
        for c in 0..SIZE {
            let cell = grid.get(r, c);
            if cell.is_empty() {
                return true;
            }
            if c + 1 < SIZE && grid.get(r, c + 1) == cell {
                return true;
            }
            if r + 1 < SIZE && grid.get(r + 1, c) == cell {
                return true;
            }
        }
    }
    false
}

/// Classify a grid.
///
/// `Won` when any tile reaches `win_tile`; this takes precedence over `Lost`.
/// `Lost` when no move can change the grid. The result is advisory: whether
/// play continues after a win is decided by the controller.
///
/// # Examples
///
/// ```
/// use terminal_2048::board::{DEFAULT_WIN_TILE, GameStatus, Grid, status};
///
/// let checkerboard = Grid::from_rows([
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
///     [2, 4, 2, 4],
///     [4, 2, 4, 2],
/// ])?;
/// assert_eq!(status(&checkerboard, DEFAULT_WIN_TILE), GameStatus::Lost);
/// # Ok::<(), terminal_2048::Error>(())
/// ```
pub fn status(grid: &Grid, win_tile: u32) -> GameStatus {
    if grid.highest_tile() >= win_tile {
        GameStatus::Won
    } else if can_move(grid) {
        GameStatus::InProgress
    } else {
        GameStatus::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: [[u32; 4]; 4]) -> Grid {
        Grid::from_rows(rows).unwrap()
    }

    #[test]
    fn test_can_move() {
        assert!(can_move(&grid([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]])));

        // Full but with a vertical pair
        let vertical = grid([[2, 4, 8, 16], [2, 8, 16, 32], [4, 16, 32, 64], [8, 32, 64, 128]]);
        assert!(can_move(&vertical));

        // Full but with a horizontal pair on the last row
        let horizontal = grid([[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 8, 8]]);
        assert!(can_move(&horizontal));

        let locked = grid([[2, 4, 8, 16], [16, 8, 4, 2], [2, 4, 8, 16], [16, 8, 4, 2]]);
        assert!(!can_move(&locked));
    }

    #[test]
    fn test_status_in_progress() {
        let g = grid([[2, 2, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(status(&g, DEFAULT_WIN_TILE), GameStatus::InProgress);
    }

    #[test]
    fn test_status_won() {
        let g = grid([[2048, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(status(&g, DEFAULT_WIN_TILE), GameStatus::Won);
    }

    #[test]
    fn test_status_won_beats_lost() {
        let g = grid([[2048, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]]);
        assert_eq!(status(&g, DEFAULT_WIN_TILE), GameStatus::Won);
    }

    #[test]
    fn test_status_respects_custom_threshold() {
        let g = grid([[64, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert_eq!(status(&g, 64), GameStatus::Won);
        assert_eq!(status(&g, 128), GameStatus::InProgress);
    }

    #[test]
    fn test_is_terminal() {
        assert!(!GameStatus::InProgress.is_terminal());
        assert!(GameStatus::Won.is_terminal());
        assert!(GameStatus::Lost.is_terminal());
    }
}
