//! Notifier adapters
//!
//! - [`LogNotifier`] - writes toasts to the log
//! - [`ConsoleNotifier`] - prints toasts for the CLI
//! - [`ToastQueue`] - keeps recent toasts for the web UI to poll

use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use log::{info, warn};

use crate::core::models::Notification;
use crate::core::ports::Notifier;

/// Sends notifications to the `log` facade
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notification: &Notification) {
        if notification.is_rejection() {
            warn!("{notification}");
        } else {
            info!("{notification}");
        }
    }
}

/// Prints notifications, rejections to stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier {
    quiet: bool,
}

impl ConsoleNotifier {
    /// A notifier that prints nothing (for JSON output)
    #[must_use]
    pub const fn quiet() -> Self {
        Self { quiet: true }
    }
}

impl Notifier for ConsoleNotifier {
    fn notify(&mut self, notification: &Notification) {
        if self.quiet {
            return;
        }
        if notification.is_rejection() {
            eprintln!("{notification}");
        } else {
            println!("{notification}");
        }
    }
}

/// Default number of toasts kept before the oldest is dropped
pub const DEFAULT_TOAST_CAPACITY: usize = 32;

/// Bounded queue of pending toasts
///
/// Clones share the queue: the board pushes through one handle while the
/// host drains through another.
#[derive(Debug, Clone)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Notification>>>,
    capacity: usize,
}

impl Default for ToastQueue {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_TOAST_CAPACITY)
    }
}

impl ToastQueue {
    /// Queue keeping at most `capacity` toasts
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Mutex::new(VecDeque::with_capacity(capacity))),
            capacity: capacity.max(1),
        }
    }

    /// Take every pending toast, oldest first
    #[must_use]
    pub fn drain(&self) -> Vec<Notification> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .drain(..)
            .collect()
    }

    /// Number of pending toasts
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    /// Whether no toast is pending
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, notification: &Notification) {
        LogNotifier.notify(notification);
        let mut queue = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        if queue.len() == self.capacity {
            queue.pop_front();
        }
        queue.push_back(notification.clone());
    }
}
