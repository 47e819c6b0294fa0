use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serde(String),

    /// User-initiated import of data that could not be parsed. Distinct from
    /// the silent defaulting applied when loading the persisted snapshot.
    #[error("Invalid snapshot format")]
    InvalidSnapshot,
}
