//! # Configuration Persistence
//!
//! Manages user configuration stored in `~/.config/crew/config.json`.
//!
//! ## Overview
//!
//! The [`Config`] struct is serialized to / deserialized from a JSON file in
//! the user's XDG config directory. Command-line flags take precedence over
//! anything stored here.
//!
//! ## File Location
//!
//! ```text
//! ~/.config/crew/config.json
//! ```
//!
//! The `directories` crate is used to resolve the platform-appropriate config
//! directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::ui::showcase::DEFAULT_BREAKPOINT;

/// Persisted user configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// The name of the selected theme (must match a built-in theme name).
    #[serde(default = "default_theme_name")]
    pub theme: String,

    /// Brand label shown in the top bar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    /// Team roster file replacing the built-in roster.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team_file: Option<PathBuf>,

    /// Terminal width (columns) at which cards switch to large sizing.
    #[serde(default = "default_breakpoint")]
    pub breakpoint: u16,
}

fn default_theme_name() -> String {
    "Catppuccin Mocha".to_string()
}

fn default_breakpoint() -> u16 {
    DEFAULT_BREAKPOINT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            brand: None,
            team_file: None,
            breakpoint: default_breakpoint(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path. Returns `Config::default()` if
    /// the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Save the current configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Return the default path to the config file.
    pub fn default_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "crew")
            .context("Could not determine config directory")?;
        Ok(dirs.config_dir().join("config.json"))
    }
}
