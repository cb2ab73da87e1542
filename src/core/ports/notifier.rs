//! Notifier port
//!
//! Receives toasts raised by the board.

use crate::core::models::Notification;

/// Sink for user-visible notifications
pub trait Notifier: Send {
    /// Show (or queue) a notification
    fn notify(&mut self, notification: &Notification);
}
