// src/config.rs
// File-based configuration from ~/.holocron/config.toml

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, warn};

/// What `add` does when the (item_type, item_id) pair already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DuplicatePolicy {
    /// Reject the second add with a duplicate-entry error (default).
    #[default]
    Reject,
    /// Treat the second add as an update of the existing entry's notes.
    Update,
}

/// Top-level config structure
#[derive(Debug, Deserialize, Default)]
pub struct HolocronConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Favorites store configuration section
#[derive(Debug, Deserialize, Default)]
pub struct StoreConfig {
    /// Path to the favorites JSON file
    pub path: Option<PathBuf>,
    #[serde(default)]
    pub on_duplicate: DuplicatePolicy,
}

/// Search behavior configuration section
#[derive(Debug, Deserialize, Default)]
pub struct SearchConfig {
    /// Also match queries against the synthesized "{type} {id}" label,
    /// not just notes text
    #[serde(default)]
    pub match_labels: bool,
}

/// Catalog gateway configuration section
#[derive(Debug, Deserialize, Default)]
pub struct CatalogConfig {
    /// Base URL of the remote catalog API
    pub base_url: Option<String>,
    /// Per-request timeout in seconds
    pub timeout_secs: Option<u64>,
}

impl HolocronConfig {
    /// Load config from ~/.holocron/config.toml
    pub fn load() -> Self {
        let path = Self::config_path();

        match std::fs::read_to_string(&path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    debug!(path = %path.display(), "Loaded config from file");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Failed to parse config file");
                    Self::default()
                }
            },
            Err(_) => {
                debug!(path = %path.display(), "Config file not found, using defaults");
                Self::default()
            }
        }
    }

    /// Get the config file path
    fn config_path() -> PathBuf {
        Self::home_dir().join(".holocron").join("config.toml")
    }

    fn home_dir() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
    }

    /// Favorites file path: env override, then config, then
    /// ~/.holocron/favorites.json
    pub fn favorites_path(&self) -> PathBuf {
        if let Ok(path) = std::env::var("HOLOCRON_FAVORITES_PATH") {
            return PathBuf::from(path);
        }
        self.store
            .path
            .clone()
            .unwrap_or_else(|| Self::home_dir().join(".holocron").join("favorites.json"))
    }

    /// Catalog base URL: env override, then config, then the public SWAPI
    /// endpoint
    pub fn catalog_base_url(&self) -> String {
        if let Ok(url) = std::env::var("SWAPI_BASE_URL") {
            return url;
        }
        self.catalog
            .base_url
            .clone()
            .unwrap_or_else(|| "https://swapi.dev/api".to_string())
    }

    /// Per-request catalog timeout
    pub fn catalog_timeout(&self) -> Duration {
        self.catalog
            .timeout_secs
            .map(Duration::from_secs)
            .unwrap_or(crate::http::DEFAULT_TIMEOUT)
    }
}
