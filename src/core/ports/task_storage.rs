//! Task storage port
//!
//! Defines where the board's task list is persisted.

use std::path::PathBuf;

use thiserror::Error;

use crate::core::models::Task;

/// Errors raised by a storage backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading the backing file failed
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that could not be read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the backing file failed
    #[error("failed to write {path}: {source}")]
    Write {
        /// File that could not be written
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Stored data is not a valid task list
    #[error("corrupt task list in {path}: {source}")]
    Corrupt {
        /// File holding the bad data
        path: PathBuf,
        /// Parse error
        #[source]
        source: serde_json::Error,
    },

    /// Task list could not be serialized
    #[error("failed to serialize tasks: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Backend refused the write (quota, read-only medium, ...)
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Persistence for the full task list
///
/// The board always reads and writes the list as a whole; there is no
/// per-task update.
pub trait TaskStorage: Send {
    /// Load the stored list. A store with nothing in it yields an empty list.
    fn load(&self) -> Result<Vec<Task>, StorageError>;

    /// Overwrite the stored list
    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError>;
}
