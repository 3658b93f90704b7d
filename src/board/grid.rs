//! Grid representation and basic queries

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side length of the board
pub const SIZE: usize = 4;

/// Largest tile a 4x4 board can hold
pub const MAX_TILE: u32 = 131_072;

/// A single square on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    /// An occupied cell. The value is always a power of two >= 2.
    Tile(u32),
}

impl Cell {
    /// Tile value, or `None` for an empty cell
    pub fn value(self) -> Option<u32> {
        match self {
            Cell::Empty => None,
            Cell::Tile(v) => Some(v),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Raw encoding where 0 stands for an empty cell
    pub fn raw(self) -> u32 {
        self.value().unwrap_or(0)
    }
}

/// The 4x4 board.
///
/// `Grid` is `Copy` (64 bytes) so engine functions take it by value and hand
/// back a new one; nothing is mutated behind the caller's back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Grid {
    cells: [[Cell; SIZE]; SIZE],
}

impl Grid {
    /// An all-empty grid
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a grid from raw values, `0` meaning empty.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidTile`] if any non-zero value is not a
    /// power of two between 2 and [`MAX_TILE`].
    ///
    /// # Examples
    ///
    /// ```
    /// use terminal_2048::board::{Cell, Grid};
    ///
    /// let grid = Grid::from_rows([
    ///     [2, 0, 0, 0],
    ///     [0, 4, 0, 0],
    ///     [0, 0, 0, 0],
    ///     [0, 0, 0, 2048],
    /// ])?;
    /// assert_eq!(grid.get(1, 1), Cell::Tile(4));
    /// assert_eq!(grid.empty_cells().len(), 13);
    /// # Ok::<(), terminal_2048::Error>(())
    /// ```
    pub fn from_rows(rows: [[u32; SIZE]; SIZE]) -> Result<Self, crate::Error> {
        let mut cells = [[Cell::Empty; SIZE]; SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                cells[r][c] = match value {
                    0 => Cell::Empty,
                    v if (2..=MAX_TILE).contains(&v) && v.is_power_of_two() => Cell::Tile(v),
                    v => {
                        return Err(crate::Error::InvalidTile {
                            value: v,
                            row: r,
                            col: c,
                        });
                    }
                };
            }
        }
        Ok(Self { cells })
    }

    /// Inverse of [`Grid::from_rows`]
    pub fn to_rows(&self) -> [[u32; SIZE]; SIZE] {
        let mut rows = [[0; SIZE]; SIZE];
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                rows[r][c] = cell.raw();
            }
        }
        rows
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Return a copy with one cell replaced
    pub fn with_cell(mut self, row: usize, col: usize, cell: Cell) -> Self {
        self.cells[row][col] = cell;
        self
    }

    pub fn row(&self, row: usize) -> [Cell; SIZE] {
        self.cells[row]
    }

    pub fn column(&self, col: usize) -> [Cell; SIZE] {
        std::array::from_fn(|r| self.cells[r][col])
    }

    pub(crate) fn set_row(&mut self, row: usize, line: [Cell; SIZE]) {
        self.cells[row] = line;
    }

    pub(crate) fn set_column(&mut self, col: usize, line: [Cell; SIZE]) {
        for (r, cell) in line.into_iter().enumerate() {
            self.cells[r][col] = cell;
        }
    }

    /// Coordinates of every empty cell in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut empty = Vec::with_capacity(SIZE * SIZE);
        for r in 0..SIZE {
            for c in 0..SIZE {
                if self.cells[r][c].is_empty() {
                    empty.push((r, c));
                }
            }
        }
        empty
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// Largest tile on the board (0 when empty)
    pub fn highest_tile(&self) -> u32 {
        self.cells.iter().flatten().map(|cell| cell.raw()).max().unwrap_or(0)
    }

    /// Sum of all tile values
    pub fn total(&self) -> u64 {
        self.cells
            .iter()
            .flatten()
            .map(|cell| u64::from(cell.raw()))
            .sum()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|cell| !cell.is_empty()).count()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, cell) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                match cell {
                    Cell::Empty => write!(f, "{:>5}", ".")?,
                    Cell::Tile(v) => write!(f, "{v:>5}")?,
                }
            }
        }
        Ok(())
    }
}
