use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::messages::Messages;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub recent: RecentConfig,
    pub messages: Messages,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the stored recent entries. Defaults to the platform data dir.
    pub dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct RecentConfig {
    /// Upper bound on remembered entries per widget; 0 = unbounded
    pub max_entries: usize,
    /// Delay before the dropdown is told about a deletion
    pub notify_delay_ms: u64,
}

impl Default for RecentConfig {
    fn default() -> Self {
        Self {
            max_entries: 0,
            notify_delay_ms: 20,
        }
    }
}

impl RecentConfig {
    pub fn notify_delay(&self) -> Duration {
        Duration::from_millis(self.notify_delay_ms)
    }
}

impl StorageConfig {
    /// Configured directory, else `<data dir>/combo-input`, else a relative fallback
    pub fn resolved_dir(&self) -> PathBuf {
        if let Some(dir) = &self.dir {
            return dir.clone();
        }
        dirs::data_dir()
            .map(|dir| dir.join("combo-input"))
            .unwrap_or_else(|| PathBuf::from(".combo-input"))
    }
}

pub fn load() -> Config {
    let Some(path) = config_path() else {
        tracing::warn!("Could not determine home directory, using default config");
        return Config::default();
    };
    if !path.exists() {
        tracing::info!("No config file found at {:?}, using defaults", path);
        return Config::default();
    }
    match std::fs::read_to_string(&path) {
        Ok(contents) => match parse(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                tracing::warn!("Failed to parse config: {}, using defaults", e);
                Config::default()
            }
        },
        Err(e) => {
            tracing::warn!("Failed to read config file: {}, using defaults", e);
            Config::default()
        }
    }
}

pub fn parse(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

fn config_path() -> Option<PathBuf> {
    // ~/.config/ (XDG convention) on every platform
    dirs::home_dir().map(|home| home.join(".config").join("combo-input").join("config.toml"))
}
