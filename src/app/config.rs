//! Configuration for a game session.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    board::{DEFAULT_WIN_TILE, MAX_TILE},
    controller::WinPolicy,
    error::Error,
};

/// Largest win tile accepted by [`GameConfig::validate`]
pub const MAX_WIN_TILE: u32 = MAX_TILE;

/// Configuration for creating a game controller.
///
/// Builder-style, validated before use by the [`App`](super::App) container.
///
/// # Examples
///
/// ```
/// use terminal_2048::app::GameConfig;
/// use terminal_2048::controller::WinPolicy;
///
/// let config = GameConfig::new()
///     .with_seed(42)
///     .with_win_tile(1024)
///     .with_win_policy(WinPolicy::Stop);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Tile value that counts as a win
    pub win_tile: u32,
    /// Whether reaching the win tile ends the game
    pub win_policy: WinPolicy,
    /// Random seed for reproducible games
    pub seed: Option<u64>,
    /// High-score file; `None` means the default location in the home directory
    pub high_score_path: Option<PathBuf>,
}

impl GameConfig {
    /// Default configuration:
    /// - Win tile: 2048
    /// - Win policy: `WinPolicy::Continue`
    /// - Seed: None (non-deterministic)
    /// - High-score file: default location
    pub fn new() -> Self {
        Self {
            win_tile: DEFAULT_WIN_TILE,
            win_policy: WinPolicy::default(),
            seed: None,
            high_score_path: None,
        }
    }

    pub fn with_win_tile(mut self, win_tile: u32) -> Self {
        self.win_tile = win_tile;
        self
    }

    pub fn with_win_policy(mut self, policy: WinPolicy) -> Self {
        self.win_policy = policy;
        self
    }

    /// Set the random seed for deterministic games.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_high_score_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.high_score_path = Some(path.into());
        self
    }

    /// Check the win tile is a reachable power of two.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if the win tile is not a power
    /// of two between 4 and [`MAX_WIN_TILE`].
    pub fn validate(&self) -> Result<()> {
        if !self.win_tile.is_power_of_two() || !(4..=MAX_WIN_TILE).contains(&self.win_tile) {
            return Err(Error::InvalidConfiguration {
                message: format!(
                    "win tile {} must be a power of two between 4 and {MAX_WIN_TILE}",
                    self.win_tile
                ),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GameConfig::default();
        assert_eq!(config.win_tile, 2048);
        assert_eq!(config.win_policy, WinPolicy::Continue);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_rejects_bad_win_tiles() {
        for tile in [0, 2, 3, 1000, MAX_WIN_TILE * 2] {
            let config = GameConfig::new().with_win_tile(tile);
            assert!(config.validate().is_err(), "win tile {tile} should be rejected");
        }
    }

    #[test]
    fn test_serde_roundtrip() {
        let config = GameConfig::new().with_seed(7).with_high_score_path("/tmp/s.json");
        let json = serde_json::to_string(&config).unwrap();
        let back: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
