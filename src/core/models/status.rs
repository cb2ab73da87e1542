//! Task status
//!
//! The three fixed columns of the board, with their static label and color.

use serde::{Deserialize, Serialize};

/// Status of a task, and the column it is shown in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    /// Not started yet
    #[default]
    Todo,
    /// Being worked on
    InProgress,
    /// Put away
    Archived,
}

/// Color tag shown on a column header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnColor {
    /// Used by the todo column
    Red,
    /// Used by the in-progress column
    Orange,
    /// Used by the archived column
    Gray,
}

impl Status {
    /// All statuses in board order
    pub const ALL: [Self; 3] = [Self::Todo, Self::InProgress, Self::Archived];

    /// Wire name, exactly as persisted
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Archived => "archived",
        }
    }

    /// Human column label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Archived => "Archived",
        }
    }

    /// Column header color
    #[must_use]
    pub const fn color(self) -> ColumnColor {
        match self {
            Self::Todo => ColumnColor::Red,
            Self::InProgress => ColumnColor::Orange,
            Self::Archived => ColumnColor::Gray,
        }
    }
}

impl ColumnColor {
    /// RGB triple used when rendering to a terminal
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Red => (239, 68, 68),
            Self::Orange => (249, 115, 22),
            Self::Gray => (107, 114, 128),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "todo" | "to-do" => Ok(Self::Todo),
            "in-progress" | "inprogress" | "started" | "doing" => Ok(Self::InProgress),
            "archived" | "archive" | "done" => Ok(Self::Archived),
            _ => Err(format!("Invalid status: {s}. Use: todo, in-progress, archived")),
        }
    }
}
