//! Scores command - Print the persisted high-score table

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::JsonHighScoreStore,
    cli::output::{format_high_scores, print_section},
    high_scores::MAX_ENTRIES,
    ports::HighScoreStore,
};

#[derive(Parser, Debug)]
#[command(about = "Show the high-score table")]
pub struct ScoresArgs {
    /// High-score file (defaults to ~/.2048_high_scores.json)
    #[arg(long)]
    pub scores_file: Option<PathBuf>,
}

pub fn execute(args: ScoresArgs) -> Result<()> {
    let store = match args.scores_file {
        Some(path) => JsonHighScoreStore::new(path),
        None => JsonHighScoreStore::at_default_location(),
    };

    print_section(&format!("High Scores ({})", store.path().display()));
    print!("{}", format_high_scores(&store.load_top(MAX_ENTRIES)));
    Ok(())
}
