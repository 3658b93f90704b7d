//! Play command - Interactive game in the terminal

use std::{
    fs::File,
    io::{IsTerminal, stdout},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::{Env, Target};

use crate::{
    adapters::{KeyboardInput, TerminalGuard, TerminalRenderer},
    app::{App, GameConfig},
    board::DEFAULT_WIN_TILE,
    controller::{SessionSummary, WinPolicy},
};

#[derive(Parser, Debug)]
#[command(about = "Play 2048 in the terminal")]
pub struct PlayArgs {
    /// Random seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Tile value that counts as a win
    #[arg(long, default_value_t = DEFAULT_WIN_TILE)]
    pub win_tile: u32,

    /// End the game as soon as the win tile appears
    #[arg(long)]
    pub stop_on_win: bool,

    /// High-score file (defaults to ~/.2048_high_scores.json)
    #[arg(long)]
    pub scores_file: Option<PathBuf>,

    /// Write log output to this file (RUST_LOG sets the filter)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl PlayArgs {
    pub fn config(&self) -> GameConfig {
        let policy = if self.stop_on_win {
            WinPolicy::Stop
        } else {
            WinPolicy::Continue
        };
        let mut config = GameConfig::new()
            .with_win_tile(self.win_tile)
            .with_win_policy(policy);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        if let Some(path) = &self.scores_file {
            config = config.with_high_score_path(path);
        }
        config
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    if !stdout().is_terminal() {
        eprintln!("2048 needs an interactive terminal; try `terminal-2048 simulate` instead.");
        return Ok(());
    }

    if let Some(path) = &args.log_file {
        init_file_logging(path)?;
    }

    let config = args.config();
    let app = App::from_config(&config);
    let mut game = app.create_game(&config)?;
    let store = app.high_score_store();

    let summary = {
        let _guard = TerminalGuard::enter().context("setting up the terminal")?;
        let mut input = KeyboardInput::new();
        let mut renderer = TerminalRenderer::stdout();
        game.run(&mut input, &mut renderer, &*store)?
    };

    print_farewell(&summary);
    Ok(())
}

fn init_file_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("creating log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("installing the logger")?;
    Ok(())
}

fn print_farewell(summary: &SessionSummary) {
    if summary.games_played == 0 {
        println!("Thanks for stopping by!");
        return;
    }
    println!(
        "Thanks for playing! Final score: {} (highest tile {}), best: {}",
        summary.final_score, summary.highest_tile, summary.best_score
    );
    if let Some(rank) = summary.last_rank {
        println!("Your last game placed #{rank} on the high-score table.");
    }
}
