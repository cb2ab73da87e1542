//! In-memory storage
//!
//! Nothing outlives the process. Clones share the same list, so a test can
//! keep a handle and inspect what the board saved.

use std::sync::{Arc, Mutex, PoisonError};

use crate::core::models::Task;
use crate::core::ports::{StorageError, TaskStorage};

#[derive(Debug, Default)]
struct Inner {
    tasks: Vec<Task>,
    saves: usize,
    fail_saves: bool,
}

/// Task storage kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStorage {
    /// Empty storage
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-filled with `tasks`
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let storage = Self::default();
        storage.lock().tasks = tasks;
        storage
    }

    /// What was last saved (or pre-filled)
    #[must_use]
    pub fn stored(&self) -> Vec<Task> {
        self.lock().tasks.clone()
    }

    /// Number of successful saves
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.lock().saves
    }

    /// Make subsequent saves fail, as a full or read-only medium would
    pub fn set_fail_saves(&self, fail: bool) {
        self.lock().fail_saves = fail;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TaskStorage for MemoryStorage {
    fn load(&self) -> Result<Vec<Task>, StorageError> {
        Ok(self.lock().tasks.clone())
    }

    fn save(&mut self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut inner = self.lock();
        if inner.fail_saves {
            return Err(StorageError::Unavailable("storage quota exceeded".to_string()));
        }
        inner.tasks = tasks.to_vec();
        inner.saves += 1;
        Ok(())
    }
}
