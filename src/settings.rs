//! Plugin settings with persistence
//!
//! Settings are saved to `~/.config/simple-zoom/settings.toml`

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use zoom_game::ZoomConfig;

/// All plugin settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginSettings {
    pub general: ZoomConfig,
}

impl PluginSettings {
    /// Get the config directory path
    fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("simple-zoom"))
    }

    /// Get the settings file path
    pub fn settings_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("settings.toml"))
    }

    /// Load settings from disk, or return defaults if missing or invalid
    pub fn load() -> Self {
        let Some(path) = Self::settings_path() else {
            warn!("Could not determine config directory");
            return Self::default();
        };

        if !path.exists() {
            info!("No settings file found, using defaults");
            return Self::default();
        }

        match fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) => {
                warn!("Failed to read settings file: {}, using defaults", e);
                Self::default()
            }
        }
    }

    /// Parse and validate settings, falling back to defaults on any problem
    pub fn from_toml(content: &str) -> Self {
        let settings: Self = match toml::from_str(content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse settings: {}, using defaults", e);
                return Self::default();
            }
        };

        if let Err(e) = settings.general.validate() {
            warn!("Invalid settings: {}, using defaults", e);
            return Self::default();
        }
        settings
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let Some(dir) = Self::config_dir() else {
            anyhow::bail!("Could not determine config directory");
        };

        let path = dir.join("settings.toml");

        if !dir.exists() {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&path, content).with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Saved settings to {:?}", path);
        Ok(())
    }
}
