//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::modal::transition::{Easing, TransitionConfig};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub modal: ModalConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if !(1..=240).contains(&self.ui.frame_rate) {
            bail!(
                "ui.frame_rate must be between 1 and 240, got {}",
                self.ui.frame_rate
            );
        }
        if self.modal.duration_ms > 5000 {
            bail!(
                "modal.duration_ms must be at most 5000, got {}",
                self.modal.duration_ms
            );
        }
        if self.modal.max_width == Some(0) {
            bail!("modal.max_width must be positive");
        }
        Ok(())
    }
}

/// Modal transition and dismissal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModalConfig {
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
    #[serde(default = "default_true")]
    pub allow_escape: bool,
    /// Panel width cap in pixels.
    #[serde(default)]
    pub max_width: Option<u16>,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_duration_ms(),
            easing: Easing::default(),
            allow_escape: true,
            max_width: None,
        }
    }
}

impl ModalConfig {
    pub fn transition(&self) -> TransitionConfig {
        TransitionConfig {
            duration: Duration::from_millis(self.duration_ms),
            easing: self.easing,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Animation frames per second while a transition runs.
    #[serde(default = "default_frame_rate")]
    pub frame_rate: u32,
    #[serde(default = "default_true")]
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_rate: default_frame_rate(),
            mouse: true,
        }
    }
}

/// Diagnostic log settings. The terminal is never written to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_level(),
            log_dir: default_log_dir(),
        }
    }
}

fn default_true() -> bool {
    true
}
fn default_duration_ms() -> u64 {
    250
}
fn default_frame_rate() -> u32 {
    60
}
fn default_level() -> String {
    "info".to_string()
}
fn default_log_dir() -> String {
    "~/.local/share/modalkit/logs".to_string()
}
