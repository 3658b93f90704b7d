//! High-score store port.
//!
//! The store owns the persisted table. The controller reads the current best
//! score at session start and offers a final score when a game ends; it never
//! edits the table directly.

use crate::{
    Result,
    high_scores::{HighScoreEntry, HighScores},
};

/// What happened when a final score was offered to the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordOutcome {
    /// 1-based rank the score earned, `None` if it did not qualify
    pub rank: Option<usize>,
    /// The table after recording
    pub table: HighScores,
}

/// Port for loading and recording high scores.
///
/// # Examples
///
/// ```
/// use terminal_2048::adapters::InMemoryHighScoreStore;
/// use terminal_2048::high_scores::HighScoreEntry;
/// use terminal_2048::ports::HighScoreStore;
///
/// let store = InMemoryHighScoreStore::new();
/// let outcome = store.record(HighScoreEntry::new(1024, 128, "2024-05-01 12:00:00"))?;
/// assert_eq!(outcome.rank, Some(1));
/// assert_eq!(store.load_top(10).top(), 1024);
/// # Ok::<(), terminal_2048::Error>(())
/// ```
pub trait HighScoreStore {
    /// Load at most `n` best entries.
    ///
    /// Never fails: a missing or unreadable table loads as empty.
    fn load_top(&self, n: usize) -> HighScores;

    /// Offer a finished game to the table and persist the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the updated table cannot be written. The returned
    /// error never affects the in-progress session; callers log and move on.
    fn record(&self, entry: HighScoreEntry) -> Result<RecordOutcome>;
}
