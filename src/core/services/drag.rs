//! Drag-and-drop coordination
//!
//! Tracks one drag at a time: `Idle -> Dragging -> Idle`. A drop on a
//! column turns into a status change on the board; a cancel (or a drop
//! outside any column) just returns to idle.

use log::debug;
use serde::Serialize;

use crate::core::models::{Status, TaskId};

use super::board::{BoardError, MoveOutcome, TaskBoard};

/// Pointer-backend independent drag events
pub trait DragDrop {
    /// A task was picked up
    fn on_drag_start(&mut self, task: TaskId);

    /// The drag entered a column
    fn on_hover_column(&mut self, status: Status);

    /// The task was released over a column
    ///
    /// Returns `None` if no drag was in progress.
    fn on_drop(
        &mut self,
        status: Status,
        board: &mut TaskBoard,
    ) -> Result<Option<MoveOutcome>, BoardError>;
}

/// Where the coordinator is in a drag
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DragState {
    /// Nothing is being dragged
    #[default]
    Idle,
    /// A task is being dragged
    Dragging {
        /// The dragged task
        task: TaskId,
        /// Column currently under the pointer
        over: Option<Status>,
    },
}

/// Drag state machine for a board
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    /// A coordinator with no drag in progress
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &DragState {
        &self.state
    }

    /// Whether a drag is in progress
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging { .. })
    }

    /// The task being dragged, shown faded while in flight
    #[must_use]
    pub const fn in_flight(&self) -> Option<&TaskId> {
        match &self.state {
            DragState::Dragging { task, .. } => Some(task),
            DragState::Idle => None,
        }
    }

    /// Whether `id` is the task being dragged
    #[must_use]
    pub fn is_in_flight(&self, id: &TaskId) -> bool {
        self.in_flight() == Some(id)
    }

    /// The column a drag is hovering, highlighted while armed
    #[must_use]
    pub const fn armed_column(&self) -> Option<Status> {
        match &self.state {
            DragState::Dragging { over, .. } => *over,
            DragState::Idle => None,
        }
    }

    /// The drag left the column it was over
    pub fn on_leave_column(&mut self) {
        if let DragState::Dragging { over, .. } = &mut self.state {
            *over = None;
        }
    }

    /// The drag was cancelled or released outside any column
    pub fn on_cancel(&mut self) {
        if self.is_dragging() {
            debug!("Drag cancelled");
        }
        self.state = DragState::Idle;
    }
}

impl DragDrop for DragCoordinator {
    fn on_drag_start(&mut self, task: TaskId) {
        debug!("Drag started for task {task}");
        self.state = DragState::Dragging { task, over: None };
    }

    fn on_hover_column(&mut self, status: Status) {
        if let DragState::Dragging { over, .. } = &mut self.state {
            *over = Some(status);
        }
    }

    fn on_drop(
        &mut self,
        status: Status,
        board: &mut TaskBoard,
    ) -> Result<Option<MoveOutcome>, BoardError> {
        let DragState::Dragging { task, .. } = std::mem::take(&mut self.state) else {
            debug!("Drop on {status} ignored, nothing is being dragged");
            return Ok(None);
        };

        debug!("Task {task} dropped on {status}");
        board.move_task(&task, status).map(Some)
    }
}
