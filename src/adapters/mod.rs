//! Adapters implementing the game's ports.
//!
//! Infrastructure lives here: the crossterm terminal front end, the JSON
//! high-score file, and in-memory doubles used by tests and simulations.

pub mod in_memory_high_scores;
pub mod json_high_scores;
pub mod recording_renderer;
pub mod scripted_input;
pub mod terminal;

pub use in_memory_high_scores::InMemoryHighScoreStore;
pub use json_high_scores::{JsonHighScoreStore, default_high_score_path};
pub use recording_renderer::RecordingRenderer;
pub use scripted_input::ScriptedInput;
pub use terminal::{KeyboardInput, TerminalGuard, TerminalRenderer, decode_key};
