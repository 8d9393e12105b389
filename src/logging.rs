//! # Logging
//!
//! Structured logging through `tracing`. The TUI owns stdout, so events go to
//! a log file instead:
//!
//! ```text
//! ~/.local/share/crew/crew.log   (or the path given with --log-file)
//! ```
//!
//! The level is controlled by `RUST_LOG` and defaults to `info`.

use anyhow::{anyhow, Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Default log file location in the XDG data directory.
pub fn default_log_path() -> Result<PathBuf> {
    let dirs = directories::ProjectDirs::from("", "", "crew")
        .context("Could not determine data directory")?;
    Ok(dirs.data_dir().join("crew.log"))
}

/// Install the global subscriber writing to `path`.
pub fn init(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open log file: {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to install log subscriber: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_log_path_is_named_after_app() {
        if let Ok(path) = default_log_path() {
            assert_eq!(
                path.file_name().and_then(|n| n.to_str()),
                Some("crew.log")
            );
        }
    }

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("logs").join("crew.log");

        // Another test may already have installed a subscriber; the file is
        // opened before that check either way.
        let _ = init(&path);
        assert!(path.exists());
    }
}
