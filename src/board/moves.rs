//! Applying a direction to the whole grid

use log::debug;
use serde::{Deserialize, Serialize};

use super::{
    grid::{Cell, Grid, SIZE},
    line::slide_line,
    status::can_move,
};

/// Direction tiles travel in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Map a WASD key (case-insensitive) to a direction
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_lowercase() {
            'w' => Some(Direction::Up),
            's' => Some(Direction::Down),
            'a' => Some(Direction::Left),
            'd' => Some(Direction::Right),
            _ => None,
        }
    }

    fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    /// Whether the leading edge sits at the high index of the line
    fn toward_high_index(self) -> bool {
        matches!(self, Direction::Right | Direction::Down)
    }
}

/// One merge: two equal tiles combined into `value`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MergeEvent {
    pub value: u32,
}

/// Result of applying a direction to a grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    /// True iff `grid` differs cell-for-cell from the input
    pub changed: bool,
    pub merges: Vec<MergeEvent>,
}

impl MoveOutcome {
    /// Sum of all merged tile values; this is the score gained by the move
    pub fn merge_total(&self) -> u64 {
        self.merges.iter().map(|m| u64::from(m.value)).sum()
    }
}

/// Slide every line of `grid` toward `direction`.
///
/// Lines are handled independently. `changed` is computed by comparing the
/// resulting grid with the input, never from the merge list. A grid with no
/// legal move at all comes back unchanged with `changed == false`.
///
/// # Examples
///
/// ```
/// use terminal_2048::board::{Direction, Grid, apply_move};
///
/// let grid = Grid::from_rows([
///     [2, 2, 4, 4],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
///     [0, 0, 0, 0],
/// ])?;
/// let outcome = apply_move(grid, Direction::Left);
/// assert!(outcome.changed);
/// assert_eq!(outcome.grid.to_rows()[0], [4, 8, 0, 0]);
/// assert_eq!(outcome.merge_total(), 12);
/// # Ok::<(), terminal_2048::Error>(())
/// ```
pub fn apply_move(grid: Grid, direction: Direction) -> MoveOutcome {
    if !can_move(&grid) {
        debug!("move {direction:?} requested on a locked grid; ignoring");
        return MoveOutcome {
            grid,
            changed: false,
            merges: Vec::new(),
        };
    }

    let mut result = grid;
    let mut merges = Vec::new();

    for index in 0..SIZE {
        let mut line: [Cell; SIZE] = if direction.is_horizontal() {
            grid.row(index)
        } else {
            grid.column(index)
        };
        if direction.toward_high_index() {
            line.reverse();
        }

        let outcome = slide_line(line);
        merges.extend(outcome.merges.into_iter().map(|value| MergeEvent { value }));

        let mut slid = outcome.line;
        if direction.toward_high_index() {
            slid.reverse();
        }
        if direction.is_horizontal() {
            result.set_row(index, slid);
        } else {
            result.set_column(index, slid);
        }
    }

    MoveOutcome {
        changed: result != grid,
        grid: result,
        merges,
    }
}
