//! Slide and merge for a single line of four cells

use super::grid::{Cell, SIZE};

/// Result of sliding one line toward its leading edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineOutcome {
    pub line: [Cell; SIZE],
    /// Value of each tile produced by a merge, in scan order
    pub merges: Vec<u32>,
}

/// Slide a line toward index 0.
///
/// Index 0 is the edge tiles travel toward. Empty cells are dropped, then equal
/// neighbours are merged scanning from the leading edge. A merged tile never
/// merges again in the same slide, so `[2, 2, 2, 2]` becomes `[4, 4, _, _]`.
/// A pair whose sum would not fit in a `u32` stays unmerged.
///
/// # Examples
///
/// ```
/// use terminal_2048::board::{Cell, slide_line};
///
/// let out = slide_line([Cell::Tile(2), Cell::Empty, Cell::Tile(2), Cell::Tile(2)]);
/// assert_eq!(out.line, [Cell::Tile(4), Cell::Tile(2), Cell::Empty, Cell::Empty]);
/// assert_eq!(out.merges, vec![4]);
/// ```
pub fn slide_line(line: [Cell; SIZE]) -> LineOutcome {
    let compacted: Vec<u32> = line.iter().filter_map(|cell| cell.value()).collect();

    let mut merged = Vec::with_capacity(SIZE);
    let mut merges = Vec::new();
    let mut i = 0;
    while i < compacted.len() {
        let value = compacted[i];
        match (compacted.get(i + 1), value.checked_mul(2)) {
            (Some(&next), Some(doubled)) if next == value => {
                merged.push(doubled);
                merges.push(doubled);
                i += 2;
            }
            _ => {
                merged.push(value);
                i += 1;
            }
        }
    }

    let mut out = [Cell::Empty; SIZE];
    for (slot, value) in out.iter_mut().zip(merged) {
        *slot = Cell::Tile(value);
    }

    LineOutcome { line: out, merges }
}
