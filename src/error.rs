//! Error types for the terminal 2048 crate

use thiserror::Error;

/// Main error type for the terminal 2048 crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid tile {value} at row {row}, column {col} (tiles must be powers of two >= 2)")]
    InvalidTile { value: u32, row: usize, col: usize },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("unknown strategy '{input}'. Expected one of: {expected}")]
    UnknownStrategy { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
