// Console settings
// Loaded from ~/.config/dbgkit/settings.toml

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Prompt printed at the start of every console line
    pub prompt: String,

    /// Maximum history entries kept in memory (0 disables history)
    pub history_limit: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            prompt: "(dbgkit) ".to_string(),
            history_limit: 500,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dbgkit")
            .join("settings.toml")
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load settings from a specific path. A missing file is not an
    /// error; a malformed one is reported and ignored.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(settings) => settings,
                Err(err) => {
                    log::warn!("ignoring malformed {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("cannot read {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}
