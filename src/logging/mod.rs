//! Diagnostic logging to disk.
//!
//! When enabled, `tracing` events are written to a daily log file named
//! `modalkit_<date>.log` in the configured log directory (default:
//! `~/.local/share/modalkit/logs/`). The terminal belongs to the UI, so
//! nothing is ever logged to stdout or stderr.

use crate::config::{expand_home, LoggingConfig};
use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Path of today's log file for `config`.
pub fn log_file_path(config: &LoggingConfig) -> PathBuf {
    let date = chrono::Local::now().format("%Y-%m-%d").to_string();
    expand_home(&config.log_dir).join(format!("modalkit_{}.log", date))
}

/// Filter from the configured level; `RUST_LOG` wins when set.
pub fn env_filter(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns the log file path when logging is
/// enabled, `None` otherwise.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = log_file_path(config);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(config))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install log subscriber: {}", e))?;

    tracing::info!(path = %path.display(), "logging started");
    Ok(Some(path))
}
