//! The top-10 high score table

use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::board::Grid;

/// Maximum number of entries kept in the table
pub const MAX_ENTRIES: usize = 10;

/// Format used for [`HighScoreEntry::date`]
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One finished game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScoreEntry {
    pub score: u64,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub highest_tile: u32,
}

impl HighScoreEntry {
    pub fn new(score: u64, highest_tile: u32, date: impl Into<String>) -> Self {
        Self {
            score,
            date: date.into(),
            highest_tile,
        }
    }

    /// Entry for a game finishing now, in local time
    pub fn now(score: u64, grid: &Grid) -> Self {
        Self::new(
            score,
            grid.highest_tile(),
            Local::now().format(DATE_FORMAT).to_string(),
        )
    }
}

/// Descending, bounded list of entries.
///
/// Serializes as `{"scores": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScores {
    scores: Vec<HighScoreEntry>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from arbitrary entries, sorting and truncating them
    pub fn from_entries(mut scores: Vec<HighScoreEntry>) -> Self {
        scores.sort_by(|a, b| b.score.cmp(&a.score));
        scores.truncate(MAX_ENTRIES);
        Self { scores }
    }

    pub fn entries(&self) -> &[HighScoreEntry] {
        &self.scores
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    /// Best recorded score, 0 when the table is empty
    pub fn top(&self) -> u64 {
        self.scores.first().map_or(0, |entry| entry.score)
    }

    /// The first `n` entries
    pub fn top_n(&self, n: usize) -> HighScores {
        Self {
            scores: self.scores.iter().take(n).cloned().collect(),
        }
    }

    /// Whether `score` would earn a place in the table
    pub fn qualifies(&self, score: u64) -> bool {
        if self.scores.len() < MAX_ENTRIES {
            return true;
        }
        score > self.scores.last().map_or(0, |entry| entry.score)
    }

    /// 1-based rank `score` would take if inserted now.
    ///
    /// Ties rank below existing entries with the same score.
    pub fn rank_of(&self, score: u64) -> usize {
        self.scores.iter().filter(|entry| entry.score >= score).count() + 1
    }

    /// Insert an entry, keeping the table sorted and bounded.
    ///
    /// Returns the 1-based rank of the new entry, or `None` if it fell off the
    /// bottom of the table.
    ///
    /// # Examples
    ///
    /// ```
    /// use terminal_2048::high_scores::{HighScoreEntry, HighScores};
    ///
    /// let mut table = HighScores::new();
    /// table.insert(HighScoreEntry::new(500, 64, "2024-01-01 10:00:00"));
    /// let rank = table.insert(HighScoreEntry::new(900, 128, "2024-01-02 10:00:00"));
    /// assert_eq!(rank, Some(1));
    /// assert_eq!(table.top(), 900);
    /// ```
    pub fn insert(&mut self, entry: HighScoreEntry) -> Option<usize> {
        if !self.qualifies(entry.score) {
            return None;
        }
        let position = self.rank_of(entry.score) - 1;
        self.scores.insert(position, entry);
        self.scores.truncate(MAX_ENTRIES);
        Some(position + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(score: u64) -> HighScoreEntry {
        HighScoreEntry::new(score, 2, "2024-01-01 00:00:00")
    }

    fn full_table() -> HighScores {
        HighScores::from_entries((1..=10).map(|i| entry(i * 100)).collect())
    }

    #[test]
    fn test_from_entries_sorts_and_truncates() {
        let table = HighScores::from_entries((0..15).map(entry).collect());
        assert_eq!(table.len(), MAX_ENTRIES);
        assert_eq!(table.top(), 14);
        assert_eq!(table.entries().last().unwrap().score, 5);
    }

    #[test]
    fn test_empty_table_qualifies_anything() {
        let table = HighScores::new();
        assert!(table.qualifies(0));
        assert_eq!(table.top(), 0);
        assert_eq!(table.rank_of(10), 1);
    }

    #[test]
    fn test_full_table_requires_beating_lowest() {
        let table = full_table();
        assert!(!table.qualifies(100));
        assert!(!table.qualifies(50));
        assert!(table.qualifies(101));
    }

    #[test]
    fn test_insert_returns_rank() {
        let mut table = full_table();
        assert_eq!(table.insert(entry(550)), Some(6));
        assert_eq!(table.len(), MAX_ENTRIES);
        // Lowest entry (100) was pushed out
        assert_eq!(table.entries().last().unwrap().score, 200);
    }

    #[test]
    fn test_insert_non_qualifying_is_rejected() {
        let mut table = full_table();
        assert_eq!(table.insert(entry(100)), None);
        assert_eq!(table, full_table());
    }

    #[test]
    fn test_ties_rank_after_existing() {
        let mut table = HighScores::new();
        table.insert(HighScoreEntry::new(300, 32, "first"));
        let rank = table.insert(HighScoreEntry::new(300, 64, "second"));
        assert_eq!(rank, Some(2));
        assert_eq!(table.entries()[0].date, "first");
    }

    #[test]
    fn test_top_n() {
        let table = full_table();
        let top3 = table.top_n(3);
        assert_eq!(top3.len(), 3);
        assert_eq!(top3.top(), 1000);
    }

    #[test]
    fn test_entry_now_records_highest_tile() {
        let grid = Grid::from_rows([[2, 0, 0, 0], [0, 512, 0, 0], [0; 4], [0; 4]]).unwrap();
        let entry = HighScoreEntry::now(1234, &grid);
        assert_eq!(entry.highest_tile, 512);
        assert_eq!(entry.date.len(), "2024-01-01 00:00:00".len());
    }

    #[test]
    fn test_serialized_shape() {
        let mut table = HighScores::new();
        table.insert(entry(42));
        let json: serde_json::Value = serde_json::to_value(&table).unwrap();
        assert_eq!(json["scores"][0]["score"], 42);
        assert_eq!(json["scores"][0]["highest_tile"], 2);
    }
}
