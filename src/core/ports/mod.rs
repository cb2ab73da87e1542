//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the board logic and the
//! outside world: where tasks are stored, where toasts go, and how edit
//! values are collected.
//!
//! Implementations live in the `adapters` module (or in the host, for the
//! prompter).

mod notifier;
mod prompter;
mod task_storage;

pub use notifier::Notifier;
pub use prompter::{FieldInput, Prompter};
pub use task_storage::{StorageError, TaskStorage};
