//! Global configuration management
//!
//! User preferences stored at `~/.config/taskboard/config.toml`:
//!
//! ```toml
//! [storage]
//! dir = "/home/me/boards/work"
//!
//! [ui]
//! port = 7420
//! open = true
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

use crate::paths;

/// Global taskboard configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Where the task list lives
    #[serde(default)]
    pub storage: StorageConfig,
    /// Web UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

/// Storage preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding `tasks.json` (default: platform data dir)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Web UI preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Port the local server listens on
    #[serde(default = "default_port")]
    pub port: u16,
    /// Open a browser when the server starts
    #[serde(default)]
    pub open: bool,
}

const fn default_port() -> u16 {
    7420
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            open: false,
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk, or defaults if missing or unreadable
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load config from `path`, or defaults if missing or unreadable
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path).map(|content| toml::from_str(&content)) {
            Ok(Ok(config)) => config,
            Ok(Err(e)) => {
                warn!("Ignoring invalid config {}: {e}", path.display());
                Self::default()
            },
            Err(e) => {
                warn!("Could not read config {}: {e}", path.display());
                Self::default()
            },
        }
    }

    /// Save config to `path`
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Directory holding the task list: `override_dir`, then the configured
    /// directory, then the platform default
    #[must_use]
    pub fn data_dir(&self, override_dir: Option<&Path>) -> PathBuf {
        override_dir
            .map(Path::to_path_buf)
            .or_else(|| self.storage.dir.clone())
            .unwrap_or_else(paths::default_data_dir)
    }
}
