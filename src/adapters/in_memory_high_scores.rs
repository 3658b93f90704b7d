//! In-memory high-score store for testing.
//!
//! This adapter keeps the table in memory, so tests and headless simulations
//! never touch the file system.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    Result,
    high_scores::{HighScoreEntry, HighScores},
    ports::{HighScoreStore, RecordOutcome},
};

/// In-memory store.
///
/// Clones share the same table, so a test can keep one handle for assertions
/// while the controller writes through another.
///
/// # Examples
///
/// ```
/// use terminal_2048::adapters::InMemoryHighScoreStore;
/// use terminal_2048::high_scores::HighScoreEntry;
/// use terminal_2048::ports::HighScoreStore;
///
/// let store = InMemoryHighScoreStore::new();
/// let view = store.clone();
/// store.record(HighScoreEntry::new(64, 16, "2024-01-01 00:00:00"))?;
/// assert_eq!(view.load_top(10).len(), 1);
/// # Ok::<(), terminal_2048::Error>(())
/// ```
#[derive(Clone, Default)]
pub struct InMemoryHighScoreStore {
    table: Arc<Mutex<HighScores>>,
}

impl InMemoryHighScoreStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `table`.
    pub fn with_table(table: HighScores) -> Self {
        Self {
            table: Arc::new(Mutex::new(table)),
        }
    }

    /// Number of entries currently held.
    pub fn count(&self) -> usize {
        self.lock().len()
    }

    /// Drop every entry.
    pub fn clear(&self) {
        *self.lock() = HighScores::new();
    }

    fn lock(&self) -> MutexGuard<'_, HighScores> {
        // A poisoned lock only means another test thread panicked mid-update;
        // the table itself is always left consistent.
        self.table.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl HighScoreStore for InMemoryHighScoreStore {
    fn load_top(&self, n: usize) -> HighScores {
        self.lock().top_n(n)
    }

    fn record(&self, entry: HighScoreEntry) -> Result<RecordOutcome> {
        let mut table = self.lock();
        let rank = table.insert(entry);
        Ok(RecordOutcome {
            rank,
            table: table.clone(),
        })
    }
}
