//! Headless autoplay: run whole games through the controller with a simple
//! move-picking strategy and summarise the results.

use std::{
    fmt,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
    str::FromStr,
};

use log::info;
use rand::{SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use crate::{
    Result,
    adapters::InMemoryHighScoreStore,
    app::GameConfig,
    board::{Direction, Grid, apply_move},
    controller::{Command, GameController},
    error::Error,
};

/// Fixed preference order used by the greedy strategy to break ties
const GREEDY_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Left,
    Direction::Right,
    Direction::Down,
];

/// How the autoplayer picks a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Strategy {
    /// Uniformly random among the moves that change the grid
    #[default]
    Random,
    /// The move with the largest immediate merge total
    Greedy,
}

impl Strategy {
    /// Pick a move that changes `grid`, or `None` if no such move exists.
    pub fn choose(self, grid: &Grid, rng: &mut StdRng) -> Option<Direction> {
        let legal: Vec<(Direction, u64)> = GREEDY_ORDER
            .iter()
            .filter_map(|&direction| {
                let outcome = apply_move(*grid, direction);
                outcome.changed.then(|| (direction, outcome.merge_total()))
            })
            .collect();

        match self {
            Strategy::Random => legal.choose(rng).map(|&(direction, _)| direction),
            Strategy::Greedy => {
                let mut best: Option<(Direction, u64)> = None;
                for &(direction, gain) in &legal {
                    if best.is_none_or(|(_, best_gain)| gain > best_gain) {
                        best = Some((direction, gain));
                    }
                }
                best.map(|(direction, _)| direction)
            }
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strategy::Random => write!(f, "random"),
            Strategy::Greedy => write!(f, "greedy"),
        }
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "random" => Ok(Strategy::Random),
            "greedy" => Ok(Strategy::Greedy),
            _ => Err(Error::UnknownStrategy {
                input: s.to_string(),
                expected: "random, greedy".to_string(),
            }),
        }
    }
}

/// Parameters for a batch of autoplayed games
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub games: usize,
    pub strategy: Strategy,
    /// Base seed; game `i` uses `seed + i`
    pub seed: u64,
    pub game: GameConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            games: 100,
            strategy: Strategy::default(),
            seed: 0,
            game: GameConfig::default(),
        }
    }
}

/// Result of one autoplayed game; one row of the CSV export
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub game: usize,
    pub seed: u64,
    pub score: u64,
    pub highest_tile: u32,
    pub moves: u32,
    pub won: bool,
}

/// Aggregate over a batch of games
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub games: usize,
    pub wins: usize,
    pub mean_score: f64,
    pub max_score: u64,
    pub highest_tile: u32,
    pub total_moves: u64,
}

impl SimulationReport {
    pub fn from_records(records: &[GameRecord]) -> Self {
        if records.is_empty() {
            return Self::default();
        }
        let total_score: u64 = records.iter().map(|r| r.score).sum();
        Self {
            games: records.len(),
            wins: records.iter().filter(|r| r.won).count(),
            mean_score: total_score as f64 / records.len() as f64,
            max_score: records.iter().map(|r| r.score).max().unwrap_or(0),
            highest_tile: records.iter().map(|r| r.highest_tile).max().unwrap_or(0),
            total_moves: records.iter().map(|r| u64::from(r.moves)).sum(),
        }
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            return 0.0;
        }
        self.wins as f64 / self.games as f64
    }
}

/// Play one game to completion and describe it as game number `game`.
///
/// # Errors
///
/// Returns an error if the game configuration is invalid.
pub fn play_game(
    game_config: &GameConfig,
    strategy: Strategy,
    game: usize,
    seed: u64,
) -> Result<GameRecord> {
    game_config.validate()?;

    let store = InMemoryHighScoreStore::new();
    let mut controller = GameController::new(game_config, StdRng::seed_from_u64(seed));
    let mut picker = StdRng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);
    let mut won = false;

    controller.start();
    while !controller.is_game_over() {
        let Some(direction) = strategy.choose(&controller.grid(), &mut picker) else {
            break;
        };
        controller.handle(Command::Move(direction), &store);
        won |= controller.grid().highest_tile() >= game_config.win_tile;
    }

    Ok(GameRecord {
        game,
        seed,
        score: controller.score().value(),
        highest_tile: controller.grid().highest_tile(),
        moves: controller.moves(),
        won,
    })
}

/// Run `config.games` games, calling `on_game` after each one.
///
/// # Errors
///
/// Returns an error if the game configuration is invalid.
pub fn run_simulation<F>(config: &SimulationConfig, mut on_game: F) -> Result<Vec<GameRecord>>
where
    F: FnMut(&GameRecord),
{
    info!(
        "simulating {} game(s) with the {} strategy from seed {}",
        config.games, config.strategy, config.seed
    );

    let mut records = Vec::with_capacity(config.games);
    for game in 0..config.games {
        let seed = config.seed.wrapping_add(game as u64);
        let record = play_game(&config.game, config.strategy, game, seed)?;
        on_game(&record);
        records.push(record);
    }
    Ok(records)
}

/// Write one CSV row per game, with a header.
///
/// # Errors
///
/// Returns an error if the file cannot be created or written.
pub fn export_csv(records: &[GameRecord], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| Error::Io {
        operation: format!("create CSV export {path:?}"),
        source,
    })?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "game,seed,score,highest_tile,moves,won")?;
    for record in records {
        writeln!(
            writer,
            "{},{},{},{},{},{}",
            record.game,
            record.seed,
            record.score,
            record.highest_tile,
            record.moves,
            record.won
        )?;
    }

    writer.flush()?;
    Ok(())
}
