//! Configuration for seqview.
//!
//! Loaded from an optional YAML file. Every field has a default, so an
//! empty file (or no file at all) gives the stock behavior.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("invalid view settings: {0}")]
    Invalid(String),
}

/// Marker durations in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingsConfig {
    pub insert_ms: u64,
    pub delete_grace_ms: u64,
    pub search_highlight_ms: u64,
    pub update_highlight_ms: u64,
}

impl Default for TimingsConfig {
    fn default() -> Self {
        Self {
            insert_ms: 300,
            delete_grace_ms: 200,
            search_highlight_ms: 1400,
            update_highlight_ms: 700,
        }
    }
}

impl TimingsConfig {
    pub fn insert(&self) -> Duration {
        Duration::from_millis(self.insert_ms)
    }

    pub fn delete_grace(&self) -> Duration {
        Duration::from_millis(self.delete_grace_ms)
    }

    pub fn search_highlight(&self) -> Duration {
        Duration::from_millis(self.search_highlight_ms)
    }

    pub fn update_highlight(&self) -> Duration {
        Duration::from_millis(self.update_highlight_ms)
    }
}

/// Box sizing for the sequence row (terminal columns of value text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub min_cell_width: u16,
    pub max_cell_width: u16,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            min_cell_width: 3,
            max_cell_width: 16,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub timings: TimingsConfig,
    pub view: ViewConfig,
}

impl Config {
    /// Parse YAML. An empty document yields the defaults.
    pub fn from_yaml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = if text.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(text)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or return the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Config::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_yaml(&text)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let view = &self.view;
        if view.min_cell_width == 0 {
            return Err(ConfigError::Invalid("min_cell_width must be at least 1".into()));
        }
        if view.max_cell_width < view.min_cell_width {
            return Err(ConfigError::Invalid(format!(
                "max_cell_width ({}) is below min_cell_width ({})",
                view.max_cell_width, view.min_cell_width
            )));
        }
        Ok(())
    }
}
