pub mod play;
pub mod scores;
pub mod simulate;
