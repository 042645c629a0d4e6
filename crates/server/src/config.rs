//! Application configuration.
//!
//! Every field has a default, so a config file only needs the keys it
//! changes:
//!
//! ```json
//! { "engine": { "max_results": 8 }, "path": { "courses_per_path": 3 } }
//! ```

use catalog::Catalog;
use engine::EngineConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Learning path shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathConfig {
    /// How many top recommendations a learning path carries
    pub courses_per_path: usize,
    /// Progress gained per completed course, in percent
    pub progress_per_course: u8,
}

impl Default for PathConfig {
    fn default() -> Self {
        Self {
            courses_per_path: 5,
            progress_per_course: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub max_history_length: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            max_history_length: coach::DEFAULT_MAX_HISTORY,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    pub path: PathConfig,
    pub chat: ChatConfig,
    /// JSON course list to use instead of the built-in catalog
    pub catalog_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The configured course list, or the built-in catalog when none is set.
    pub fn load_catalog(&self) -> catalog::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load_from_file(path),
            None => Ok(Catalog::builtin()),
        }
    }
}
