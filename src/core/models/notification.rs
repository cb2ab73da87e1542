//! Toast notifications
//!
//! Short, transient messages shown after a mutation or a rejected edit.

use serde::Serialize;

/// Whether a notification confirms something or turns it down
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    /// An action went through
    Success,
    /// An action was refused or failed
    Rejection,
}

/// A toast-style message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    /// Success or rejection
    pub kind: NotificationKind,
    /// Short message
    pub message: String,
    /// Symbolic icon
    pub icon: String,
    /// When it was raised (RFC3339)
    pub created_at: String,
}

impl Notification {
    fn new(kind: NotificationKind, message: &str, icon: &str) -> Self {
        Self {
            kind,
            message: message.to_string(),
            icon: icon.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// A task changed column
    #[must_use]
    pub fn task_moved() -> Self {
        Self::new(NotificationKind::Success, "Task Moved", "👍")
    }

    /// A task was deleted
    #[must_use]
    pub fn task_removed() -> Self {
        Self::new(NotificationKind::Success, "Task Removed", "❌")
    }

    /// A task was created
    #[must_use]
    pub fn task_added() -> Self {
        Self::new(NotificationKind::Success, "Task Added", "✅")
    }

    /// An edit or creation was submitted without a name
    #[must_use]
    pub fn name_required() -> Self {
        Self::new(NotificationKind::Rejection, "Task must always have a Name", "👎")
    }

    /// Persisting the board failed
    #[must_use]
    pub fn save_failed() -> Self {
        Self::new(NotificationKind::Rejection, "Could not save tasks", "⚠️")
    }

    /// Whether this is a rejection
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        self.kind == NotificationKind::Rejection
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.icon, self.message)
    }
}
