use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Wait between the two system-wide counter samples.
    pub sample_interval_ms: u64,
    pub default_sort: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            sample_interval_ms: 1000,
            default_sort: "cpu".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub max_processes: usize,
    pub command_width: usize,
    pub show_header: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            max_processes: 20,
            command_width: 40,
            show_header: true,
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("jiffytop").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "invalid config, using defaults");
            Config::default()
        }),
        Err(_) => Config::default(),
    }
}
