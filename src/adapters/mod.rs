//! Adapter implementations for port traits
//!
//! - `json_file` - Task list as a JSON array on disk
//! - `memory` - Task list held in memory
//! - `notifier` - Log, console and queued toast sinks
//! - `prompt` - Line-based prompter for interactive edits

mod json_file;
mod memory;
mod notifier;
mod prompt;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use notifier::{ConsoleNotifier, DEFAULT_TOAST_CAPACITY, LogNotifier, ToastQueue};
pub use prompt::LinePrompter;
