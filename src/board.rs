//! Board engine: the 4x4 grid, the slide/merge transform, tile spawning and
//! terminal-state detection.
//!
//! Every operation here is a pure function over [`Grid`] values. Randomness is
//! injected by the caller, so a seeded generator replays a game exactly.

pub mod grid;
pub mod line;
pub mod moves;
pub mod spawn;
pub mod status;

pub use grid::{Cell, Grid, MAX_TILE, SIZE};
pub use line::{LineOutcome, slide_line};
pub use moves::{Direction, MergeEvent, MoveOutcome, apply_move};
pub use spawn::{SPAWN_FOUR_PROBABILITY, initialize, spawn_tile};
pub use status::{DEFAULT_WIN_TILE, GameStatus, can_move, status};
