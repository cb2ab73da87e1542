//! Command implementations

use std::path::PathBuf;

use anyhow::Context as _;

use taskboard::adapters::{ConsoleNotifier, JsonFileStorage};
use taskboard::config::GlobalConfig;
use taskboard::core::models::Status;
use taskboard::core::ports::Notifier;
use taskboard::core::services::TaskBoard;
use taskboard::output::OutputMode;

mod board;
mod task;
#[cfg(feature = "ui")]
mod ui;

pub use board::board;
pub use task::{add, edit, move_task, remove};
#[cfg(feature = "ui")]
pub use ui::ui;

/// Settings shared by every command
#[derive(Debug)]
pub struct Context {
    /// Human or JSON output
    pub mode: OutputMode,
    /// Directory holding tasks.json
    pub data_dir: PathBuf,
    /// Loaded global config
    #[cfg_attr(not(feature = "ui"), allow(dead_code))]
    pub config: GlobalConfig,
}

impl Context {
    fn storage(&self) -> JsonFileStorage {
        JsonFileStorage::in_dir(&self.data_dir)
    }

    /// Open the board with toasts printed to the console
    fn open_board(&self) -> anyhow::Result<TaskBoard> {
        let notifier: Box<dyn Notifier> = match self.mode {
            OutputMode::Human => Box::new(ConsoleNotifier::default()),
            OutputMode::Json => Box::new(ConsoleNotifier::quiet()),
        };
        let storage = self.storage();
        let path = storage.path().display().to_string();
        TaskBoard::open(Box::new(storage), notifier)
            .with_context(|| format!("Failed to load tasks from {path}"))
    }
}

fn parse_status(raw: &str) -> anyhow::Result<Status> {
    raw.parse().map_err(|e: String| anyhow::anyhow!(e))
}
