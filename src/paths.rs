//! Centralized path definitions for taskboard
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.config/taskboard/
//! └── config.toml               # User preferences (storage dir, UI port)
//!
//! ~/.local/share/taskboard/     # Default data directory
//! └── tasks.json                # The task list, one JSON array
//! ```
//!
//! `TASKBOARD_CONFIG_DIR` overrides the config directory.

use std::path::PathBuf;

/// Storage key of the task list; the file is `<data dir>/tasks.json`
pub const TASKS_KEY: &str = "tasks";

/// Application directory name
const APP_DIR: &str = "taskboard";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "TASKBOARD_CONFIG_DIR";

/// Get the global taskboard config directory.
///
/// Returns `$TASKBOARD_CONFIG_DIR` if set, else `~/.config/taskboard/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::config_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}

/// Get the global config file path.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

/// Default directory holding `tasks.json`.
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_local_dir().unwrap_or_else(|| PathBuf::from(".")).join(APP_DIR)
}
