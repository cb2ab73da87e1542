//! Output formatting for human and JSON modes
//!
//! The board view is a pure function of the three columns plus the static
//! label/color of each status. It can be rendered either as colored text or
//! as JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::core::models::{ColumnColor, Status, Task, TaskId};
use crate::core::services::{DragCoordinator, Partition};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// One task as shown on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCard {
    /// Task ID
    pub id: TaskId,
    /// Task name
    pub name: String,
    /// Task description
    pub description: String,
    /// Being dragged right now (rendered faded)
    pub in_flight: bool,
}

/// One column of the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    /// Status tag of the column
    pub status: Status,
    /// Header label
    pub label: &'static str,
    /// Header color
    pub color: ColumnColor,
    /// Number of tasks in the column
    pub count: usize,
    /// A drag is hovering this column
    pub armed: bool,
    /// Tasks in order
    pub tasks: Vec<TaskCard>,
}

/// The whole board, columns in fixed order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    /// Todo, in-progress, archived
    pub columns: Vec<ColumnView>,
}

impl BoardView {
    /// Build the view of `partition` with no drag in progress
    #[must_use]
    pub fn from_partition(partition: &Partition) -> Self {
        Self::build(partition, None, None)
    }

    /// Build the view of `partition`, marking the dragged task and the
    /// hovered column
    #[must_use]
    pub fn with_drag(partition: &Partition, drag: &DragCoordinator) -> Self {
        Self::build(partition, drag.in_flight(), drag.armed_column())
    }

    fn build(partition: &Partition, in_flight: Option<&TaskId>, armed: Option<Status>) -> Self {
        let columns = partition
            .columns()
            .into_iter()
            .map(|column| ColumnView {
                status: column.status,
                label: column.status.label(),
                color: column.status.color(),
                count: column.len(),
                armed: armed == Some(column.status),
                tasks: column.tasks.iter().map(|t| card(t, in_flight)).collect(),
            })
            .collect();
        Self { columns }
    }

    /// The column for `status`
    #[must_use]
    pub fn column(&self, status: Status) -> Option<&ColumnView> {
        self.columns.iter().find(|c| c.status == status)
    }

    /// Render the board based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => self.render_json(),
        }
    }

    /// Human rendering as a string
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        for (i, column) in self.columns.iter().enumerate() {
            if i > 0 {
                out.push('\n');
            }
            let (r, g, b) = column.color.rgb();
            let header = format!(" {} ", column.label.to_uppercase());
            let _ = writeln!(
                out,
                "{} ({})",
                header.white().bold().on_truecolor(r, g, b),
                column.count
            );

            for task in &column.tasks {
                let line = format!("  [{}] {}", task.id, task.name);
                if task.in_flight {
                    let _ = writeln!(out, "{}", line.dimmed());
                } else {
                    let _ = writeln!(out, "{}", line.bold());
                }
                if !task.description.is_empty() {
                    let _ = writeln!(out, "      {}", task.description);
                }
            }
        }
        out
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

fn card(task: &Task, in_flight: Option<&TaskId>) -> TaskCard {
    TaskCard {
        id: task.id.clone(),
        name: task.name.clone(),
        description: task.description.clone(),
        in_flight: in_flight == Some(&task.id),
    }
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
    /// Task the operation touched, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl OperationResult {
    /// A successful result
    #[must_use]
    pub fn ok(message: impl Into<String>, task: Option<Task>) -> Self {
        Self {
            success: true,
            message: message.into(),
            task,
        }
    }

    /// A failed result
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            task: None,
        }
    }

    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
