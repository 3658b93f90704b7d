//! terminal-2048 - The 2048 sliding-tile puzzle in the terminal
//!
//! Commands:
//! - `play` (default): interactive game with persisted high scores
//! - `scores`: print the high-score table
//! - `simulate`: headless autoplay with summary and CSV export

use anyhow::Result;
use clap::Parser;
use terminal_2048::cli::Cli;

fn main() -> Result<()> {
    Cli::parse().execute()
}
