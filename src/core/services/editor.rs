//! Interactive task editing
//!
//! Collects replacement values through a [`Prompter`] and applies them to
//! the board as a single [`EditRequest`].

use crate::core::models::TaskId;
use crate::core::ports::Prompter;

use super::board::{BoardError, EditOutcome, EditRequest, TaskBoard};

/// Prompt for a new name and description for task `id`, then apply them
///
/// Returns `None` when no task has that id; nothing is prompted in that case.
pub fn edit_interactive(
    board: &mut TaskBoard,
    id: &TaskId,
    prompter: &mut dyn Prompter,
) -> Result<Option<EditOutcome>, BoardError> {
    let Some(task) = board.get(id) else {
        return Ok(None);
    };

    let name = prompter.prompt("Enter new name", &task.name);
    let description = prompter.prompt("Enter new description", &task.description);

    board.edit_task(id, &EditRequest { name, description })
}
