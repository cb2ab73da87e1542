//! Domain models for taskboard
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Task`] - One card on the board
//! - [`Status`] - Which column a task belongs to
//! - [`Notification`] - Toast raised after a mutation

mod notification;
mod status;
mod task;

pub use notification::{Notification, NotificationKind};
pub use status::{ColumnColor, Status};
pub use task::{Task, TaskId};
