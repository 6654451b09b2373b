pub mod model;

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub use model::{AppConfig, LoggingConfig};

fn config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("modalkit")
        .join("config.toml")
}

pub fn load_config() -> Result<AppConfig> {
    load_from(&config_path())
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config from {}", path.display()))?;
    let config: AppConfig =
        toml::from_str(&contents).with_context(|| "Failed to parse config file")?;
    config
        .validate()
        .with_context(|| format!("Invalid config in {}", path.display()))?;
    Ok(config)
}

/// Expand a leading `~/` against the home directory.
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("modalkit-missing-config.toml");
        let _ = std::fs::remove_file(&path);
        let config = load_from(&path).unwrap();
        assert_eq!(config.modal.duration_ms, 250);
    }

    #[test]
    fn invalid_file_reports_path() {
        let path = std::env::temp_dir().join(format!("modalkit-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[ui]\nframe_rate = 0\n").unwrap();
        let err = load_from(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(err.to_string().contains("Invalid config"));
    }

    #[test]
    fn expand_home_leaves_plain_paths() {
        assert_eq!(expand_home("/var/log"), PathBuf::from("/var/log"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_home("~/logs"), home.join("logs"));
        }
    }
}
