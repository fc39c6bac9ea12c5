//! Client configuration
//!
//! Loaded from `config.ron` in the platform config directory, with the
//! `HYPIXEL_API_KEY` environment variable taking precedence for the key.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Environment variable holding the Hypixel API key
pub const API_KEY_ENV: &str = "HYPIXEL_API_KEY";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("Serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Hypixel API key (get one at https://developer.hypixel.net/)
    pub api_key: Option<String>,
    /// Single-profile endpoint
    pub profile_url: String,
    /// Profile list endpoint
    pub profiles_url: String,
    /// Username to uuid lookup; the name is appended
    pub mojang_url: String,
    /// Per-request timeout
    pub timeout_secs: u64,
    /// Debug-level logging
    pub debug: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            profile_url: "https://api.hypixel.net/v2/skyblock/profile".to_string(),
            profiles_url: "https://api.hypixel.net/v2/skyblock/profiles".to_string(),
            mojang_url: "https://api.mojang.com/users/profiles/minecraft".to_string(),
            timeout_secs: 10,
            debug: false,
        }
    }
}

impl Config {
    /// Default config file location
    pub fn path() -> PathBuf {
        use directories::ProjectDirs;

        if let Some(proj_dirs) = ProjectDirs::from("net", "skyblock-stats", "SkyblockStats") {
            let mut path = proj_dirs.config_dir().to_path_buf();
            path.push("config.ron");
            path
        } else {
            PathBuf::from("./config.ron")
        }
    }

    /// Load from the default location, then apply environment overrides.
    ///
    /// A missing or unreadable file falls back to defaults.
    pub fn load() -> Self {
        let mut config = Self::load_or_default(&Self::path());
        config.apply_env(std::env::var(API_KEY_ENV).ok());
        config
    }

    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            log::info!("No config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(config) => {
                log::info!("Config loaded from {:?}", path);
                config
            }
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Ok(ron::from_str(&content)?)
    }

    /// Non-empty `api_key` overrides the file's key
    pub fn apply_env(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
    }

    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?;
        fs::write(path, content)?;
        log::info!("Config saved to {:?}", path);
        Ok(())
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_secs)
    }
}
