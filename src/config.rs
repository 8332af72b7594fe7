use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::spatial::rooms::DEFAULT_ROOM_THRESHOLD;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AtriaConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub pipeline: PipelineConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StorageConfig {
    pub lobby_path: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct PipelineConfig {
    /// Cosine distance below which a profile joins an existing room.
    pub room_threshold: f32,
    /// Neighbor count when the caller does not pass `-k`.
    pub default_neighbors: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        let lobby_path = default_atria_dir()
            .join("lobby.json")
            .to_string_lossy()
            .into_owned();
        Self { lobby_path }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            room_threshold: DEFAULT_ROOM_THRESHOLD,
            default_neighbors: 5,
        }
    }
}

/// Returns `~/.atria/`
pub fn default_atria_dir() -> PathBuf {
    dirs::home_dir()
        .expect("home directory must exist")
        .join(".atria")
}

/// Returns the default config file path: `~/.atria/config.toml`
pub fn default_config_path() -> PathBuf {
    default_atria_dir().join("config.toml")
}

impl AtriaConfig {
    /// Load config from TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents =
                std::fs::read_to_string(path).context("failed to read config file")?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            AtriaConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (ATRIA_LOBBY, ATRIA_LOG_LEVEL,
    /// ATRIA_ROOM_THRESHOLD).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("ATRIA_LOBBY") {
            self.storage.lobby_path = val;
        }
        if let Ok(val) = std::env::var("ATRIA_LOG_LEVEL") {
            self.server.log_level = val;
        }
        if let Ok(val) = std::env::var("ATRIA_ROOM_THRESHOLD") {
            if let Ok(threshold) = val.parse() {
                self.pipeline.room_threshold = threshold;
            }
        }
    }

    /// Resolve the lobby path, expanding `~` if needed.
    pub fn resolved_lobby_path(&self) -> PathBuf {
        expand_tilde(&self.storage.lobby_path)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        dirs::home_dir()
            .expect("home directory must exist")
            .join(rest)
    } else {
        PathBuf::from(path)
    }
}
