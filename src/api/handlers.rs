//! Pure API handlers
//!
//! These handlers contain the request logic and are HTTP-agnostic.
//! They take a [`BoardSession`] plus typed input and return
//! `Result<T, ApiError>`.

use log::debug;

use crate::adapters::ToastQueue;
use crate::core::models::{Status, TaskId};
use crate::core::ports::FieldInput;
use crate::core::services::{
    DragCoordinator, DragDrop, EditRequest, MoveOutcome, RemoveOutcome, TaskBoard,
};
use crate::output::BoardView;

use super::error::ApiError;
use super::types::{
    BoardData, ColumnRequest, CreateTaskRequest, DragStartRequest, DropData, EditData, MoveData,
    NotificationsData, TaskData, UpdateTaskRequest,
};

/// Everything one board host keeps between requests
#[derive(Debug)]
pub struct BoardSession {
    /// The task board
    pub board: TaskBoard,
    /// Drag state of the (single) client
    pub drag: DragCoordinator,
    /// Toasts not yet picked up by the client
    pub toasts: ToastQueue,
}

impl BoardSession {
    /// Wrap `board`; `toasts` should be the queue the board notifies into
    #[must_use]
    pub fn new(board: TaskBoard, toasts: ToastQueue) -> Self {
        Self {
            board,
            drag: DragCoordinator::new(),
            toasts,
        }
    }
}

fn parse_status(raw: &str) -> Result<Status, ApiError> {
    raw.parse().map_err(ApiError::bad_request)
}

fn not_found(id: &TaskId) -> ApiError {
    ApiError::not_found(format!("Task '{id}' not found"))
}

// =============================================================================
// BOARD
// =============================================================================

/// Get the board, with drag decorations
#[must_use]
pub fn get_board(session: &BoardSession) -> BoardData {
    BoardData {
        board: BoardView::with_drag(session.board.columns(), &session.drag),
        total: session.board.tasks().len(),
        drag: session.drag.state().clone(),
    }
}

/// Take pending toasts
#[must_use]
pub fn take_notifications(session: &BoardSession) -> NotificationsData {
    NotificationsData {
        notifications: session.toasts.drain(),
    }
}

// =============================================================================
// TASKS
// =============================================================================

/// Create a task
pub fn create_task(
    session: &mut BoardSession,
    req: &CreateTaskRequest,
) -> Result<TaskData, ApiError> {
    let status = req.status.as_deref().map(parse_status).transpose()?.unwrap_or_default();
    let task = session.board.add_task(
        &req.name,
        req.description.as_deref().unwrap_or_default(),
        status,
    )?;
    Ok(TaskData { task })
}

/// Edit a task's name and/or description
pub fn update_task(
    session: &mut BoardSession,
    id: &str,
    req: &UpdateTaskRequest,
) -> Result<EditData, ApiError> {
    let id = TaskId::from(id);
    let request = EditRequest {
        name: FieldInput::from_option(req.name.clone()),
        description: FieldInput::from_option(req.description.clone()),
    };

    let outcome = session.board.edit_task(&id, &request)?.ok_or_else(|| not_found(&id))?;
    Ok(EditData {
        task: outcome.task,
        name_rejected: outcome.name_rejected,
        changed: outcome.changed,
    })
}

/// Delete a task
pub fn delete_task(session: &mut BoardSession, id: &str) -> Result<TaskData, ApiError> {
    let id = TaskId::from(id);
    match session.board.remove_task(&id)? {
        RemoveOutcome::Removed(task) => Ok(TaskData { task }),
        RemoveOutcome::NotFound => Err(not_found(&id)),
    }
}

/// Move a task to another column without going through a drag
pub fn move_task(
    session: &mut BoardSession,
    id: &str,
    req: &ColumnRequest,
) -> Result<MoveData, ApiError> {
    let id = TaskId::from(id);
    let status = parse_status(&req.status)?;
    match session.board.move_task(&id, status)? {
        MoveOutcome::Moved { from, to } => Ok(MoveData { id, from, to }),
        MoveOutcome::NotFound => Err(not_found(&id)),
    }
}

// =============================================================================
// DRAG AND DROP
// =============================================================================

/// A task was picked up
pub fn drag_start(
    session: &mut BoardSession,
    req: &DragStartRequest,
) -> Result<BoardData, ApiError> {
    session.drag.on_drag_start(req.id.clone());
    Ok(get_board(session))
}

/// The drag entered a column
pub fn drag_hover(session: &mut BoardSession, req: &ColumnRequest) -> Result<BoardData, ApiError> {
    let status = parse_status(&req.status)?;
    session.drag.on_hover_column(status);
    Ok(get_board(session))
}

/// The drag left its column
#[must_use]
pub fn drag_leave(session: &mut BoardSession) -> BoardData {
    session.drag.on_leave_column();
    get_board(session)
}

/// The drag was cancelled or released outside the board
#[must_use]
pub fn drag_cancel(session: &mut BoardSession) -> BoardData {
    session.drag.on_cancel();
    get_board(session)
}

/// The task was released over a column
///
/// A drop for a task that no longer exists is silently ignored.
pub fn drag_drop(session: &mut BoardSession, req: &ColumnRequest) -> Result<DropData, ApiError> {
    let status = parse_status(&req.status)?;
    let outcome = session.drag.on_drop(status, &mut session.board)?;
    let moved = matches!(outcome, Some(MoveOutcome::Moved { .. }));
    if !moved {
        debug!("Drop on {status} changed nothing");
    }
    Ok(DropData {
        moved,
        board: get_board(session),
    })
}
