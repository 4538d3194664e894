use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::render::{DEFAULT_MAX_DEPTH, DEFAULT_PARALLEL_DEPTH};
use crate::tree::InputFormat;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub render: RenderConfig,
    pub input: InputConfig,
    pub dir: DirConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Deepest tree level accepted before rendering is refused
    pub max_depth: usize,
    /// Render sibling subtrees on a thread pool
    pub parallel: bool,
    /// Levels below the root that fan out onto the thread pool
    pub parallel_depth: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Format assumed for `render` input: auto, json, outline
    pub default_format: InputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DirConfig {
    /// Maximum depth to display (0 = unlimited)
    pub max_depth: usize,
    /// Show hidden files by default
    pub include_hidden: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            parallel: false,
            parallel_depth: DEFAULT_PARALLEL_DEPTH,
        }
    }
}

impl Default for DirConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            include_hidden: false,
        }
    }
}

impl Config {
    /// Location of the user config file, `<config dir>/treeprint/config.toml`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("treeprint").join("config.toml"))
    }

    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit path must exist. A missing default file yields the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Some(path) if path.exists() => path,
                _ => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        Ok(config)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.render.max_depth == 0 {
            return Err(ConfigError::Invalid(
                "render.max_depth must be at least 1".to_string(),
            ));
        }
        if self.render.parallel_depth > self.render.max_depth {
            return Err(ConfigError::Invalid(format!(
                "render.parallel_depth ({}) exceeds render.max_depth ({})",
                self.render.parallel_depth, self.render.max_depth
            )));
        }
        Ok(())
    }
}
