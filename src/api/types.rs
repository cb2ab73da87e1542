//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use serde::{Deserialize, Serialize};

use crate::core::models::{Notification, Status, Task, TaskId};
use crate::core::services::DragState;
use crate::output::BoardView;

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for creating a task
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task name
    pub name: String,
    /// Optional description
    #[serde(default)]
    pub description: Option<String>,
    /// Optional starting column (default: todo)
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for editing a task
///
/// An absent or `null` field is a declined prompt and keeps the current
/// value; an empty string is a submitted value.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateTaskRequest {
    /// New name
    #[serde(default)]
    pub name: Option<String>,
    /// New description
    #[serde(default)]
    pub description: Option<String>,
}

/// Request body naming a column (move, hover, drop)
#[derive(Debug, Deserialize)]
pub struct ColumnRequest {
    /// Target status
    pub status: String,
}

/// Request body for picking up a task
#[derive(Debug, Deserialize)]
pub struct DragStartRequest {
    /// Task being dragged
    pub id: TaskId,
}

// =============================================================================
// RESPONSE DATA TYPES
// =============================================================================

/// Board endpoint response data
#[derive(Debug, Serialize)]
pub struct BoardData {
    /// Columns in board order
    pub board: BoardView,
    /// Total number of tasks
    pub total: usize,
    /// Drag state
    pub drag: DragState,
}

/// A single task
#[derive(Debug, Serialize)]
pub struct TaskData {
    /// The task
    pub task: Task,
}

/// Result of an edit
#[derive(Debug, Serialize)]
pub struct EditData {
    /// The task after the edit
    pub task: Task,
    /// An empty name was submitted and ignored
    pub name_rejected: bool,
    /// Some field actually changed
    pub changed: bool,
}

/// Result of a move
#[derive(Debug, Serialize)]
pub struct MoveData {
    /// Task that moved
    pub id: TaskId,
    /// Previous column
    pub from: Status,
    /// New column
    pub to: Status,
}

/// Result of a drop
#[derive(Debug, Serialize)]
pub struct DropData {
    /// Whether a task actually changed column
    pub moved: bool,
    /// Board after the drop
    pub board: BoardData,
}

/// Pending toasts
#[derive(Debug, Serialize)]
pub struct NotificationsData {
    /// Oldest first
    pub notifications: Vec<Notification>,
}
