//! CLI infrastructure for the terminal 2048 game
//!
//! The interactive game is the default command; `scores` and `simulate` work
//! without a terminal UI.

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{play::PlayArgs, scores::ScoresArgs, simulate::SimulateArgs};

#[derive(Parser, Debug)]
#[command(name = "terminal-2048")]
#[command(version, about = "The 2048 sliding-tile puzzle in your terminal", long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub play: PlayArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play an interactive game (the default)
    Play(PlayArgs),

    /// Show the high-score table
    Scores(ScoresArgs),

    /// Autoplay games headlessly and summarise the results
    Simulate(SimulateArgs),
}

impl Cli {
    /// Dispatch to the selected command; no subcommand means `play`.
    pub fn execute(self) -> Result<()> {
        match self.command {
            Some(Commands::Play(args)) => commands::play::execute(args),
            Some(Commands::Scores(args)) => commands::scores::execute(args),
            Some(Commands::Simulate(args)) => commands::simulate::execute(args),
            None => commands::play::execute(self.play),
        }
    }
}
