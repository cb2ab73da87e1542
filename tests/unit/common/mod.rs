//! Shared test fixtures and helpers

use taskboard::adapters::{MemoryStorage, ToastQueue};
use taskboard::core::models::{Status, Task};
use taskboard::core::services::TaskBoard;

/// A board over in-memory storage, with handles to inspect what it did
pub struct TestBoard {
    pub board: TaskBoard,
    pub storage: MemoryStorage,
    pub toasts: ToastQueue,
}

impl TestBoard {
    /// Board whose storage already holds `tasks`
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        let storage = MemoryStorage::with_tasks(tasks);
        let toasts = ToastQueue::default();
        let board = TaskBoard::open(Box::new(storage.clone()), Box::new(toasts.clone()))
            .expect("memory storage never fails to load");
        Self {
            board,
            storage,
            toasts,
        }
    }

    /// Empty board
    pub fn empty() -> Self {
        Self::with_tasks(Vec::new())
    }

    /// Messages of the toasts raised so far (drains the queue)
    pub fn messages(&self) -> Vec<String> {
        self.toasts.drain().into_iter().map(|n| n.message).collect()
    }
}

/// Four tasks spread over every column:
/// 1 todo, 2 in-progress, 3 todo, 4 archived
pub fn sample_tasks() -> Vec<Task> {
    vec![
        Task::new(1, "Draft outline").with_description("first draft"),
        Task::new(2, "Build parser").with_status(Status::InProgress),
        Task::new(3, "Review"),
        Task::new(4, "Ship v0").with_status(Status::Archived),
    ]
}

/// Names of `tasks`, in order
pub fn names(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|t| t.name.as_str()).collect()
}
