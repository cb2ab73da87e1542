//! Task board store
//!
//! [`TaskBoard`] owns the task list, persists it through a [`TaskStorage`]
//! and keeps the derived [`Partition`] in sync. Every mutation builds a new
//! list from the current one, saves it, and only then swaps it in. A
//! snapshot taken before a mutation is never partially updated.

use std::sync::Arc;

use log::{debug, info, warn};
use thiserror::Error;

use crate::core::models::{Notification, Status, Task, TaskId};
use crate::core::ports::{FieldInput, Notifier, StorageError, TaskStorage};

use super::partition::{Partition, partition};

/// Errors surfaced to the host by board mutations
#[derive(Debug, Error)]
pub enum BoardError {
    /// The new list could not be persisted; nothing changed
    #[error("could not save tasks: {0}")]
    Storage(#[from] StorageError),

    /// A task was submitted without a name
    #[error("task must always have a name")]
    NameRequired,

    /// The largest numeric id is taken, so no next id exists
    #[error("no numeric task id left to assign")]
    IdsExhausted,
}

/// Result of a status change request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The task now has status `to`
    Moved {
        /// Status before the move
        from: Status,
        /// Status after the move
        to: Status,
    },
    /// No task has that id
    NotFound,
}

/// Replacement values for an edit
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EditRequest {
    /// New name
    pub name: FieldInput,
    /// New description
    pub description: FieldInput,
}

/// Result of an edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditOutcome {
    /// The task after the edit
    pub task: Task,
    /// An empty name was submitted and ignored
    pub name_rejected: bool,
    /// Some field actually changed (and the list was saved)
    pub changed: bool,
}

/// Result of a removal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The task was deleted
    Removed(Task),
    /// No task has that id
    NotFound,
}

/// The board: task list, storage, notifications and derived columns
pub struct TaskBoard {
    tasks: Arc<Vec<Task>>,
    columns: Partition,
    storage: Box<dyn TaskStorage>,
    notifier: Box<dyn Notifier>,
}

impl std::fmt::Debug for TaskBoard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskBoard")
            .field("tasks", &self.tasks)
            .field("columns", &self.columns)
            .finish_non_exhaustive()
    }
}

impl TaskBoard {
    /// Create a board over an already-loaded list. `None` is an empty board.
    #[must_use]
    pub fn new(
        tasks: Option<Vec<Task>>,
        storage: Box<dyn TaskStorage>,
        notifier: Box<dyn Notifier>,
    ) -> Self {
        let tasks = tasks.unwrap_or_default();
        let columns = partition(Some(&tasks));
        Self {
            tasks: Arc::new(tasks),
            columns,
            storage,
            notifier,
        }
    }

    /// Load the list from `storage` and create a board over it
    pub fn open(
        storage: Box<dyn TaskStorage>,
        notifier: Box<dyn Notifier>,
    ) -> Result<Self, StorageError> {
        let tasks = storage.load()?;
        debug!("Loaded {} task(s)", tasks.len());
        Ok(Self::new(Some(tasks), storage, notifier))
    }

    /// Current list. Cheap to clone and unaffected by later mutations.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Vec<Task>> {
        Arc::clone(&self.tasks)
    }

    /// Current list as a slice
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Derived columns
    #[must_use]
    pub const fn columns(&self) -> &Partition {
        &self.columns
    }

    /// Look up a task
    #[must_use]
    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == *id)
    }

    /// Adopt a list supplied by the host without persisting it
    ///
    /// Columns are recomputed only if the list differs from the current one.
    /// Returns whether anything changed.
    pub fn sync(&mut self, tasks: Option<Vec<Task>>) -> bool {
        let tasks = tasks.unwrap_or_default();
        if *self.tasks == tasks {
            return false;
        }
        self.swap(tasks);
        true
    }

    /// Move a task to the column `status`
    ///
    /// Moving a task onto its own column still saves and notifies.
    pub fn move_task(&mut self, id: &TaskId, status: Status) -> Result<MoveOutcome, BoardError> {
        let Some(index) = self.position(id) else {
            debug!("Move ignored, no task {id}");
            return Ok(MoveOutcome::NotFound);
        };

        let mut updated = self.tasks.as_ref().clone();
        let from = updated[index].status;
        updated[index].status = status;

        self.commit(updated)?;
        info!("Moved task {id}: {from} -> {status}");
        self.notifier.notify(&Notification::task_moved());
        Ok(MoveOutcome::Moved { from, to: status })
    }

    /// Apply an edit to a task
    ///
    /// A declined field keeps its value. An empty (or blank) name is
    /// rejected with a notification and leaves the name unchanged, without
    /// affecting the description. An empty description is accepted.
    /// Returns `None` when no task has that id.
    pub fn edit_task(
        &mut self,
        id: &TaskId,
        request: &EditRequest,
    ) -> Result<Option<EditOutcome>, BoardError> {
        let Some(index) = self.position(id) else {
            debug!("Edit ignored, no task {id}");
            return Ok(None);
        };
        let current = self.tasks[index].clone();

        let mut edited = current.clone();
        let mut name_rejected = false;

        match request.name.submitted() {
            Some(name) if name.trim().is_empty() => {
                warn!("Rejected empty name for task {id}");
                self.notifier.notify(&Notification::name_required());
                name_rejected = true;
            },
            Some(name) => edited.name = name.to_string(),
            None => {},
        }

        if let Some(description) = request.description.submitted() {
            edited.description = description.to_string();
        }

        let changed = edited != current;
        if changed {
            let mut updated = self.tasks.as_ref().clone();
            updated[index] = edited.clone();
            self.commit(updated)?;
            info!("Edited task {id}");
        }

        Ok(Some(EditOutcome {
            task: edited,
            name_rejected,
            changed,
        }))
    }

    /// Delete a task
    pub fn remove_task(&mut self, id: &TaskId) -> Result<RemoveOutcome, BoardError> {
        let Some(index) = self.position(id) else {
            debug!("Remove ignored, no task {id}");
            return Ok(RemoveOutcome::NotFound);
        };

        let mut remaining = self.tasks.as_ref().clone();
        let removed = remaining.remove(index);
        self.commit(remaining)?;
        info!("Removed task {id}");
        self.notifier.notify(&Notification::task_removed());
        Ok(RemoveOutcome::Removed(removed))
    }

    /// Append a new task with the next free numeric id
    ///
    /// The id is one past the largest non-negative numeric id, or 1.
    pub fn add_task(
        &mut self,
        name: &str,
        description: &str,
        status: Status,
    ) -> Result<Task, BoardError> {
        if name.trim().is_empty() {
            warn!("Rejected task without a name");
            self.notifier.notify(&Notification::name_required());
            return Err(BoardError::NameRequired);
        }

        let highest = self.tasks.iter().filter_map(|t| t.id.as_number()).max();
        let Some(next_id) = highest.unwrap_or(0).max(0).checked_add(1) else {
            warn!("Cannot add task, numeric ids are exhausted");
            return Err(BoardError::IdsExhausted);
        };
        let task = Task::new(next_id, name)
            .with_description(description)
            .with_status(status);

        let mut updated = self.tasks.as_ref().clone();
        updated.push(task.clone());
        self.commit(updated)?;
        info!("Added task {} to {status}", task.id);
        self.notifier.notify(&Notification::task_added());
        Ok(task)
    }

    /// Index of the first task with `id`; later duplicates are never touched
    fn position(&self, id: &TaskId) -> Option<usize> {
        self.tasks.iter().position(|t| t.id == *id)
    }

    /// Save `tasks` and make them current. On failure nothing changes.
    fn commit(&mut self, tasks: Vec<Task>) -> Result<(), BoardError> {
        if let Err(e) = self.storage.save(&tasks) {
            warn!("Failed to save tasks: {e}");
            self.notifier.notify(&Notification::save_failed());
            return Err(e.into());
        }
        self.swap(tasks);
        Ok(())
    }

    fn swap(&mut self, tasks: Vec<Task>) {
        self.columns = partition(Some(&tasks));
        self.tasks = Arc::new(tasks);
        debug!(
            "Columns: {} todo, {} in progress, {} archived",
            self.columns.todo.len(),
            self.columns.in_progress.len(),
            self.columns.archived.len()
        );
    }
}
