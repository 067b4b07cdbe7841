//! Configuration loading.
//!
//! Settings come from `.lexigraph/config.json` in the working directory,
//! then `<config dir>/lexigraph/config.json`, then built-in defaults. Every
//! field is optional.

use lexigraph_graph::{PageRankConfig, DEFAULT_MAX_STEPS};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Directory created by `lexigraph init`.
pub const CONFIG_DIR: &str = ".lexigraph";

/// File name inside the config directory.
pub const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Random walk settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalkSettings {
    /// Maximum edges followed once no dead end is reachable, 0 = unlimited.
    pub max_steps: usize,
    /// Fixed seed for reproducible walks.
    pub seed: Option<u64>,
}

impl Default for WalkSettings {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pagerank: PageRankConfig,
    pub walk: WalkSettings,
}

impl Config {
    /// Loads the configuration.
    ///
    /// An explicit path must exist. Without one, the first existing default
    /// location wins, and no file at all means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        match Self::search_paths().into_iter().find(|path| path.is_file()) {
            Some(path) => Self::from_file(&path),
            None => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Reads and parses a single config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Default locations, in priority order.
    fn search_paths() -> Vec<PathBuf> {
        let mut paths = vec![Path::new(CONFIG_DIR).join(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("lexigraph").join(CONFIG_FILE));
        }
        paths
    }

    /// Writes the default configuration into `<root>/.lexigraph/config.json`.
    ///
    /// Returns `false` without touching anything if the file already exists.
    pub fn write_default(root: &Path) -> Result<bool, ConfigError> {
        let dir = root.join(CONFIG_DIR);
        let path = dir.join(CONFIG_FILE);
        if path.exists() {
            return Ok(false);
        }

        let io_error = |source: io::Error| ConfigError::Io {
            path: path.clone(),
            source,
        };
        fs::create_dir_all(&dir).map_err(io_error)?;

        let text = serde_json::to_string_pretty(&Self::default()).map_err(|source| {
            ConfigError::Parse {
                path: path.clone(),
                source,
            }
        })?;
        fs::write(&path, text).map_err(io_error)?;

        Ok(true)
    }
}
