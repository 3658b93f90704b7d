//! JSON file implementation of the high-score store.
//!
//! The table lives in `~/.2048_high_scores.json` unless another path is
//! configured. Reads are forgiving: a missing, unreadable or corrupt file
//! loads as an empty table so persistence trouble never blocks play.

use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use log::warn;
use serde::Deserialize;

use crate::{
    Result,
    error::Error,
    high_scores::{HighScoreEntry, HighScores},
    ports::{HighScoreStore, RecordOutcome},
};

/// File name used inside the home directory
pub const DEFAULT_FILE_NAME: &str = ".2048_high_scores.json";

/// Default location of the high-score file, `None` if no home directory is known
pub fn default_high_score_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DEFAULT_FILE_NAME))
}

/// Accepted on-disk shapes: the current `{"scores": [...]}` object, or a bare
/// list of entries written by older versions.
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredTable {
    Table { scores: Vec<HighScoreEntry> },
    Legacy(Vec<HighScoreEntry>),
}

impl From<StoredTable> for HighScores {
    fn from(stored: StoredTable) -> Self {
        match stored {
            StoredTable::Table { scores } | StoredTable::Legacy(scores) => {
                HighScores::from_entries(scores)
            }
        }
    }
}

/// JSON-file-backed store.
///
/// # Examples
///
/// ```no_run
/// use terminal_2048::adapters::JsonHighScoreStore;
/// use terminal_2048::high_scores::HighScoreEntry;
/// use terminal_2048::ports::HighScoreStore;
///
/// let store = JsonHighScoreStore::new("scores.json");
/// store.record(HighScoreEntry::new(2048, 256, "2024-01-01 09:30:00"))?;
/// assert_eq!(store.load_top(10).top(), 2048);
/// # Ok::<(), terminal_2048::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct JsonHighScoreStore {
    path: PathBuf,
}

impl JsonHighScoreStore {
    /// Store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at [`default_high_score_path`], falling back to the working
    /// directory when no home directory is available.
    pub fn at_default_location() -> Self {
        Self::new(default_high_score_path().unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole table, reporting why it could not be read.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid JSON.
    /// A file that does not exist is an empty table, not an error.
    pub fn read_table(&self) -> Result<HighScores> {
        if !self.path.exists() {
            return Ok(HighScores::new());
        }

        let data = fs::read_to_string(&self.path).map_err(|source| Error::Io {
            operation: format!("read high scores from {:?}", self.path),
            source,
        })?;
        if data.trim().is_empty() {
            return Ok(HighScores::new());
        }

        let stored: StoredTable = serde_json::from_str(&data)?;
        Ok(stored.into())
    }

    /// Write the whole table, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory or file cannot be created or
    /// written.
    pub fn write_table(&self, table: &HighScores) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                operation: format!("create directory {parent:?}"),
                source,
            })?;
        }

        let file = File::create(&self.path).map_err(|source| Error::Io {
            operation: format!("create file {:?}", self.path),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, table)?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("write high scores to {:?}", self.path),
            source,
        })?;
        Ok(())
    }

    fn load_or_empty(&self) -> HighScores {
        self.read_table().unwrap_or_else(|e| {
            warn!("ignoring unreadable high score file: {e}");
            HighScores::new()
        })
    }
}

impl Default for JsonHighScoreStore {
    fn default() -> Self {
        Self::at_default_location()
    }
}

impl HighScoreStore for JsonHighScoreStore {
    fn load_top(&self, n: usize) -> HighScores {
        self.load_or_empty().top_n(n)
    }

    fn record(&self, entry: HighScoreEntry) -> Result<RecordOutcome> {
        let mut table = self.load_or_empty();
        let rank = table.insert(entry);
        if rank.is_some() {
            self.write_table(&table)?;
        }
        Ok(RecordOutcome { rank, table })
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    fn entry(score: u64) -> HighScoreEntry {
        HighScoreEntry::new(score, 128, "2024-03-01 08:00:00")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let store = JsonHighScoreStore::new(temp_dir.path().join("absent.json"));
        assert!(store.load_top(10).is_empty());
    }

    #[test]
    fn test_record_roundtrip() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("scores.json");
        let store = JsonHighScoreStore::new(&path);

        store.record(entry(400)).expect("Failed to record");
        store.record(entry(800)).expect("Failed to record");

        let reopened = JsonHighScoreStore::new(&path);
        let table = reopened.load_top(10);
        assert_eq!(table.len(), 2);
        assert_eq!(table.top(), 800);
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("scores.json");
        fs::write(&path, "{ not json").unwrap();

        let store = JsonHighScoreStore::new(&path);
        assert!(store.read_table().is_err());
        assert!(store.load_top(10).is_empty());

        // Recording over a corrupt file starts a fresh table
        let outcome = store.record(entry(10)).unwrap();
        assert_eq!(outcome.rank, Some(1));
        assert_eq!(store.read_table().unwrap().len(), 1);
    }

    #[test]
    fn test_legacy_list_format() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("scores.json");
        fs::write(
            &path,
            r#"[{"score": 16, "date": "2023-12-31 23:59:59", "highest_tile": 8}, {"score": 64}]"#,
        )
        .unwrap();

        let table = JsonHighScoreStore::new(&path).load_top(10);
        assert_eq!(table.len(), 2);
        assert_eq!(table.top(), 64);
        assert_eq!(table.entries()[1].highest_tile, 8);
    }

    #[test]
    fn test_non_qualifying_score_does_not_write() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("scores.json");
        let store = JsonHighScoreStore::new(&path);
        for score in 1..=10 {
            store.record(entry(score * 100)).unwrap();
        }
        let before = fs::read_to_string(&path).unwrap();

        let outcome = store.record(entry(5)).unwrap();
        assert_eq!(outcome.rank, None);
        assert_eq!(fs::read_to_string(&path).unwrap(), before);
    }

    #[test]
    fn test_save_to_invalid_path_returns_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let blocker = temp_dir.path().join("file");
        fs::write(&blocker, "x").unwrap();
        // A regular file cannot act as a directory
        let store = JsonHighScoreStore::new(blocker.join("scores.json"));
        assert!(store.record(entry(1)).is_err());
    }
}
