use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

fn default_genre_debounce_ms() -> u64 {
    250
}

fn default_year_debounce_ms() -> u64 {
    500
}

fn default_artist_search_debounce_ms() -> u64 {
    200
}

fn default_artist_search_limit() -> usize {
    300
}

/// Timing and size settings for the album filter panel (YAML)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterPanelConfig {
    /// Quiet period before a genre selection commits
    #[serde(default = "default_genre_debounce_ms")]
    pub genre_debounce_ms: u64,
    /// Quiet period before a year edit commits
    #[serde(default = "default_year_debounce_ms")]
    pub year_debounce_ms: u64,
    /// Quiet period before the artist search box issues a query
    #[serde(default = "default_artist_search_debounce_ms")]
    pub artist_search_debounce_ms: u64,
    /// Maximum number of artists requested per search
    #[serde(default = "default_artist_search_limit")]
    pub artist_search_limit: usize,
}

impl Default for FilterPanelConfig {
    fn default() -> Self {
        Self {
            genre_debounce_ms: default_genre_debounce_ms(),
            year_debounce_ms: default_year_debounce_ms(),
            artist_search_debounce_ms: default_artist_search_debounce_ms(),
            artist_search_limit: default_artist_search_limit(),
        }
    }
}

impl FilterPanelConfig {
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigError::Serialization(e.to_string()))
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        info!("Loading filter panel config from {}", path.display());
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    pub fn genre_debounce(&self) -> Duration {
        Duration::from_millis(self.genre_debounce_ms)
    }

    pub fn year_debounce(&self) -> Duration {
        Duration::from_millis(self.year_debounce_ms)
    }

    pub fn artist_search_debounce(&self) -> Duration {
        Duration::from_millis(self.artist_search_debounce_ms)
    }
}
