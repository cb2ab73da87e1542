//! Column partitioning
//!
//! Splits the task list into one ordered list per status. This is a stable
//! filter: tasks keep their relative order inside each column.

use serde::Serialize;

use crate::core::models::{Status, Task};

/// The tasks of one status, in list order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Column {
    /// Status shared by every task in the column
    pub status: Status,
    /// Tasks in original list order
    pub tasks: Vec<Task>,
}

impl Column {
    const fn empty(status: Status) -> Self {
        Self {
            status,
            tasks: Vec::new(),
        }
    }

    /// Number of tasks in the column
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the column has no tasks
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// The three columns derived from a task list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Partition {
    /// Tasks with status `todo`
    pub todo: Column,
    /// Tasks with status `in-progress`
    pub in_progress: Column,
    /// Tasks with status `archived`
    pub archived: Column,
}

impl Default for Partition {
    fn default() -> Self {
        Self {
            todo: Column::empty(Status::Todo),
            in_progress: Column::empty(Status::InProgress),
            archived: Column::empty(Status::Archived),
        }
    }
}

impl Partition {
    /// The column for `status`
    #[must_use]
    pub const fn column(&self, status: Status) -> &Column {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Archived => &self.archived,
        }
    }

    fn column_mut(&mut self, status: Status) -> &mut Column {
        match status {
            Status::Todo => &mut self.todo,
            Status::InProgress => &mut self.in_progress,
            Status::Archived => &mut self.archived,
        }
    }

    /// All columns in board order (todo, in-progress, archived)
    #[must_use]
    pub const fn columns(&self) -> [&Column; 3] {
        [&self.todo, &self.in_progress, &self.archived]
    }

    /// Total number of tasks across columns
    #[must_use]
    pub fn total(&self) -> usize {
        self.columns().iter().map(|c| c.len()).sum()
    }
}

/// Partition `tasks` by status. An absent list gives three empty columns.
#[must_use]
pub fn partition(tasks: Option<&[Task]>) -> Partition {
    let mut result = Partition::default();
    for task in tasks.unwrap_or_default() {
        result.column_mut(task.status).tasks.push(task.clone());
    }
    result
}
