use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Persistent configuration for panel-markup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Color for untagged lines and `message` without `--color`.
    #[serde(default = "default_color")]
    pub default_color: String,

    /// Include entry timestamps in JSON output.
    #[serde(default)]
    pub timestamps: bool,
}

fn default_color() -> String {
    "black".to_string()
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            timestamps: false,
        }
    }
}

impl PanelConfig {
    /// Load config from the default location (~/.config/panel-markup/config.json).
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no config directory, using defaults");
                Self::default()
            }
        }
    }

    /// Load config from an explicit path, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Self::default();
        }
        match std::fs::read_to_string(path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "invalid config, using defaults");
                Self::default()
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable config, using defaults");
                Self::default()
            }
        }
    }

    /// Save config to the default location.
    pub fn save(&self) -> anyhow::Result<()> {
        let path = Self::config_path().context("No config directory found for this user")?;
        self.save_to(&path)
    }

    /// Save config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Get the default config file path, if the platform has a config directory.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_path_in(dirs::config_dir())
    }

    /// Config file path under `config_dir`.
    pub fn config_path_in(config_dir: Option<PathBuf>) -> Option<PathBuf> {
        config_dir.map(|dir| dir.join("panel-markup").join("config.json"))
    }
}
