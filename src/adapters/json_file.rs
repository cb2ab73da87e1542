//! JSON file storage
//!
//! Keeps the whole task list as one JSON array in `<dir>/<key>.json`,
//! overwritten on every save.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::core::models::Task;
use crate::core::ports::{StorageError, TaskStorage};
use crate::paths::TASKS_KEY;

/// Task storage backed by a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    /// Store under the default `tasks` key in `dir`
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self::with_key(dir, TASKS_KEY)
    }

    /// Store under `key` in `dir`
    #[must_use]
    pub fn with_key(dir: &Path, key: &str) -> Self {
        Self {
            path: dir.join(format!("{key}.json")),
        }
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TaskStorage for JsonFileStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            debug!("No task file at {}, starting empty", self.path.display());
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|source| StorageError::Read {
            path: self.path.clone(),
            source,
        })?;

        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        // A stored `null` is an empty board
        let tasks: Option<Vec<Task>> =
            serde_json::from_str(&content).map_err(|source| StorageError::Corrupt {
                path: self.path.clone(),
                source,
            })?;
        Ok(tasks.unwrap_or_default())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, content).map_err(|source| StorageError::Write {
            path: self.path.clone(),
            source,
        })?;
        debug!("Saved {} task(s) to {}", tasks.len(), self.path.display());
        Ok(())
    }
}
