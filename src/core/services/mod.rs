//! Board services
//!
//! - [`partition`] - Split the task list into columns
//! - [`board`] - The task store and its mutations
//! - [`drag`] - Drag-and-drop state machine
//! - [`editor`] - Prompt-driven editing

pub mod board;
pub mod drag;
pub mod editor;
pub mod partition;

pub use board::{BoardError, EditOutcome, EditRequest, MoveOutcome, RemoveOutcome, TaskBoard};
pub use drag::{DragCoordinator, DragDrop, DragState};
pub use editor::edit_interactive;
pub use partition::{Column, Partition, partition};
