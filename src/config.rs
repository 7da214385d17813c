use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Alternative portfolio content (YAML or JSON); built-in sample if unset
    pub content_path: Option<String>,
    /// Simulated network delay of the mock submission backend
    pub submit_delay_ms: u64,
    /// How long a toast stays on screen
    pub toast_duration_ms: u64,
    /// Event poll timeout
    pub tick_rate_ms: u64,
    pub splash_duration_ms: u64,
    /// Default tracing level for this crate, `RUST_LOG` wins if set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_path: None,
            submit_delay_ms: 1000,
            toast_duration_ms: 4000,
            tick_rate_ms: 100,
            splash_duration_ms: 1500,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".folio-tui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    /// Load the user config, falling back to defaults when absent or unreadable
    pub fn load() -> Config {
        match Self::config_path() {
            Some(path) => Self::load_from(&path).unwrap_or_default(),
            None => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Option<Config> {
        if !path.exists() {
            return None;
        }

        let contents = fs::read_to_string(path).ok()?;
        serde_json::from_str(&contents).ok()
    }

    /// Save the config to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir)?;
            }
        }

        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents)?;

        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }
}
