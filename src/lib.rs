//! 2048 sliding-tile puzzle for the terminal
//!
//! This crate provides:
//! - A pure board engine (slide, merge, spawn, win/loss detection)
//! - Score tracking and a persisted top-10 high-score table
//! - A turn-based game controller behind input, renderer and store ports
//! - A crossterm front end and a headless simulation mode
//!
//! ```
//! use terminal_2048::board::{Direction, Grid, apply_move};
//! use terminal_2048::Score;
//!
//! let grid = Grid::from_rows([[2, 2, 4, 0], [0; 4], [0; 4], [0; 4]])?;
//! let outcome = apply_move(grid, Direction::Left);
//! assert_eq!(outcome.grid.row(0)[0].value(), Some(4));
//! assert_eq!(Score::default().apply(&outcome).value(), 4);
//! # Ok::<(), terminal_2048::Error>(())
//! ```

pub mod adapters;
pub mod app;
pub mod board;
pub mod cli;
pub mod controller;
pub mod error;
pub mod high_scores;
pub mod ports;
pub mod score;
pub mod simulation;

pub use app::{App, GameConfig};
pub use board::{Direction, GameStatus, Grid};
pub use controller::{Command, ControllerState, GameController, WinPolicy};
pub use error::{Error, Result};
pub use high_scores::{HighScoreEntry, HighScores};
pub use score::Score;
pub use simulation::Strategy;
