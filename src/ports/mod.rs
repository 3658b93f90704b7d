//! Ports (trait boundaries) for the game's external collaborators.
//!
//! The controller drives a session purely through these traits. Terminal,
//! keyboard and filesystem access live in the adapters that implement them.

pub mod high_scores;
pub mod input;
pub mod renderer;

pub use high_scores::{HighScoreStore, RecordOutcome};
pub use input::InputSource;
pub use renderer::Renderer;
