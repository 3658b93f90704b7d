//! Dependency injection container for the game application.
//!
//! The container owns infrastructure dependencies (the high-score store) and
//! builds seeded game controllers from a [`GameConfig`].

use std::sync::Arc;

use rand::{SeedableRng, rngs::StdRng};

use super::config::GameConfig;
use crate::{
    Result,
    adapters::JsonHighScoreStore,
    controller::GameController,
    high_scores::{HighScores, MAX_ENTRIES},
    ports::HighScoreStore,
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use terminal_2048::app::{App, GameConfig};
///
/// let app = App::new();
/// let game = app.create_game(&GameConfig::new())?;
/// # Ok::<(), terminal_2048::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use terminal_2048::app::{App, GameConfig};
/// use terminal_2048::adapters::InMemoryHighScoreStore;
///
/// let app = App::for_testing()
///     .with_store(InMemoryHighScoreStore::new())
///     .with_default_seed(42)
///     .build();
/// let game = app.create_game(&GameConfig::new())?;
/// # Ok::<(), terminal_2048::Error>(())
/// ```
pub struct App {
    /// Store for the persisted high-score table
    high_score_store: Arc<dyn HighScoreStore + Send + Sync>,
    /// Default random seed (None = non-deterministic)
    default_seed: Option<u64>,
}

impl App {
    /// Create an app with production defaults.
    ///
    /// Uses:
    /// - `JsonHighScoreStore` at the default location in the home directory
    /// - No default seed (non-deterministic RNG)
    pub fn new() -> Self {
        Self {
            high_score_store: Arc::new(JsonHighScoreStore::at_default_location()),
            default_seed: None,
        }
    }

    /// Create an app whose store honours `config.high_score_path`.
    pub fn from_config(config: &GameConfig) -> Self {
        let store = match &config.high_score_path {
            Some(path) => JsonHighScoreStore::new(path),
            None => JsonHighScoreStore::at_default_location(),
        };
        Self {
            high_score_store: Arc::new(store),
            default_seed: None,
        }
    }

    /// Create a builder for constructing the app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    /// Shared handle to the high-score store.
    pub fn high_score_store(&self) -> Arc<dyn HighScoreStore + Send + Sync> {
        Arc::clone(&self.high_score_store)
    }

    /// Current top-10 table.
    pub fn high_scores(&self) -> HighScores {
        self.high_score_store.load_top(MAX_ENTRIES)
    }

    /// Create a game controller for `config`.
    ///
    /// The seed comes from the config, then the container default, then OS
    /// entropy. The controller's high score is primed from the store.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn create_game(&self, config: &GameConfig) -> Result<GameController<StdRng>> {
        config.validate()?;

        let rng = match config.seed.or(self.default_seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut game = GameController::new(config, rng);
        game.set_high_score(self.high_scores().top());
        Ok(game)
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing the app with custom dependencies.
///
/// Primarily used for testing to inject in-memory stores and control randomness.
pub struct AppBuilder {
    high_score_store: Option<Arc<dyn HighScoreStore + Send + Sync>>,
    default_seed: Option<u64>,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            high_score_store: None,
            default_seed: None,
        }
    }

    /// Set a custom high-score store.
    pub fn with_store<S: HighScoreStore + Send + Sync + 'static>(mut self, store: S) -> Self {
        self.high_score_store = Some(Arc::new(store));
        self
    }

    /// Set a default random seed for every game created by this app.
    pub fn with_default_seed(mut self, seed: u64) -> Self {
        self.default_seed = Some(seed);
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no store was specified, uses `JsonHighScoreStore` at the default
    /// location.
    pub fn build(self) -> App {
        App {
            high_score_store: self
                .high_score_store
                .unwrap_or_else(|| Arc::new(JsonHighScoreStore::at_default_location())),
            default_seed: self.default_seed,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
