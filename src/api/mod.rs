//! HTTP-agnostic API layer
//!
//! Typed request/response structures and handlers that any HTTP server
//! implementation (or a test) can drive directly.
//!
//! ## Design
//!
//! - **Handlers are plain functions**: Take a [`BoardSession`] and typed input,
//!   return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ApiErrorData, ErrorCode};
pub use handlers::{
    BoardSession, create_task, delete_task, drag_cancel, drag_drop, drag_hover, drag_leave,
    drag_start, get_board, move_task, take_notifications, update_task,
};
pub use types::{
    ApiResponse, BoardData, ColumnRequest, CreateTaskRequest, DragStartRequest, DropData,
    EditData, MoveData, NotificationsData, TaskData, UpdateTaskRequest,
};
