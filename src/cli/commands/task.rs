//! Task commands - add, move, edit, remove

use std::io;

use super::{Context, parse_status};
use taskboard::adapters::LinePrompter;
use taskboard::core::models::TaskId;
use taskboard::core::ports::FieldInput;
use taskboard::core::services::{
    DragCoordinator, DragDrop, EditRequest, MoveOutcome, RemoveOutcome, edit_interactive,
};
use taskboard::output::OperationResult;

/// Add a task
pub fn add(ctx: &Context, name: &str, description: &str, status: &str) -> anyhow::Result<()> {
    let status = parse_status(status)?;
    let mut board = ctx.open_board()?;
    let task = board.add_task(name, description, status)?;

    OperationResult::ok(format!("Added task {} to {}", task.id, status.label()), Some(task))
        .render(ctx.mode);
    Ok(())
}

/// Move a task, as a drag from its column dropped on `status`
pub fn move_task(ctx: &Context, id: &str, status: &str) -> anyhow::Result<()> {
    let status = parse_status(status)?;
    let id = TaskId::from(id);
    let mut board = ctx.open_board()?;

    let mut drag = DragCoordinator::new();
    drag.on_drag_start(id.clone());
    drag.on_hover_column(status);

    match drag.on_drop(status, &mut board)? {
        Some(MoveOutcome::Moved { from, to }) => {
            let task = board.get(&id).cloned();
            OperationResult::ok(format!("Moved task {id}: {from} -> {to}"), task).render(ctx.mode);
            Ok(())
        },
        Some(MoveOutcome::NotFound) | None => anyhow::bail!("Task not found: {id}"),
    }
}

/// Edit a task's fields, from flags or interactively
pub fn edit(
    ctx: &Context,
    id: &str,
    name: Option<String>,
    description: Option<String>,
    interactive: bool,
) -> anyhow::Result<()> {
    let id = TaskId::from(id);
    let mut board = ctx.open_board()?;

    let outcome = if interactive {
        let stdin = io::stdin();
        let mut prompter = LinePrompter::new(stdin.lock(), io::stdout());
        edit_interactive(&mut board, &id, &mut prompter)?
    } else {
        let request = EditRequest {
            name: FieldInput::from_option(name),
            description: FieldInput::from_option(description),
        };
        board.edit_task(&id, &request)?
    };

    let Some(outcome) = outcome else {
        anyhow::bail!("Task not found: {id}");
    };

    let message = if outcome.changed {
        format!("Updated task {id}")
    } else {
        format!("No changes to task {id}")
    };
    OperationResult::ok(message, Some(outcome.task)).render(ctx.mode);
    Ok(())
}

/// Remove a task
pub fn remove(ctx: &Context, id: &str) -> anyhow::Result<()> {
    let id = TaskId::from(id);
    let mut board = ctx.open_board()?;

    match board.remove_task(&id)? {
        RemoveOutcome::Removed(task) => {
            OperationResult::ok(format!("Removed task {id}"), Some(task)).render(ctx.mode);
            Ok(())
        },
        RemoveOutcome::NotFound => anyhow::bail!("Task not found: {id}"),
    }
}
