//! Simulate command - Autoplay games headlessly and summarise them

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use crate::{
    app::GameConfig,
    cli::output::{create_simulation_progress, print_simulation_report},
    controller::WinPolicy,
    simulation::{SimulationConfig, SimulationReport, Strategy, export_csv, run_simulation},
};

#[derive(Parser, Debug)]
#[command(about = "Autoplay games without a terminal UI")]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 100)]
    pub games: usize,

    /// Move-picking strategy (random, greedy)
    #[arg(long, short = 's', default_value = "random")]
    pub strategy: Strategy,

    /// Base random seed; game i uses seed + i
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Tile value that counts as a win
    #[arg(long, default_value_t = crate::board::DEFAULT_WIN_TILE)]
    pub win_tile: u32,

    /// End each game as soon as the win tile appears
    #[arg(long)]
    pub stop_on_win: bool,

    /// Write one CSV row per game to this file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

impl SimulateArgs {
    pub fn config(&self) -> SimulationConfig {
        let policy = if self.stop_on_win {
            WinPolicy::Stop
        } else {
            WinPolicy::Continue
        };
        SimulationConfig {
            games: self.games,
            strategy: self.strategy,
            seed: self.seed,
            game: GameConfig::new()
                .with_win_tile(self.win_tile)
                .with_win_policy(policy),
        }
    }
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let config = args.config();
    config.game.validate()?;

    println!(
        "Simulating {} game(s) with the {} strategy (seed {})",
        config.games, config.strategy, config.seed
    );

    let pb = create_simulation_progress(config.games as u64)?;
    let mut best = 0;
    let records = run_simulation(&config, |record| {
        best = best.max(record.score);
        pb.set_message(format!("best {best}"));
        pb.inc(1);
    })?;
    pb.finish_with_message(format!("best {best}"));

    print_simulation_report(&SimulationReport::from_records(&records));

    if let Some(path) = &args.export {
        export_csv(&records, path)
            .with_context(|| format!("exporting results to {}", path.display()))?;
        println!("\nExported {} game(s) to: {}", records.len(), path.display());
    }

    Ok(())
}
