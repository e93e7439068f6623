use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::git::DEFAULT_GIT_BINARY;
use crate::script::DEFAULT_INDEX_WIDTH;

/// Widest zero padding accepted for the sequence number
const MAX_INDEX_WIDTH: usize = 9;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid config value: {0}")]
    InvalidValue(String),
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Config {
    pub git: GitConfig,
    pub output: OutputConfig,
    pub log: LogConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct GitConfig {
    pub binary: String,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    pub index_width: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LogConfig {
    pub filter: String,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            binary: DEFAULT_GIT_BINARY.to_string(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            index_width: DEFAULT_INDEX_WIDTH,
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
            return Some(PathBuf::from(xdg).join("git-snapshots"));
        }
        let home = std::env::var_os("HOME")?;
        Some(PathBuf::from(home).join(".config").join("git-snapshots"))
    }

    /// Get the default config file path
    pub fn config_path() -> Option<PathBuf> {
        Some(Self::config_dir()?.join("config.toml"))
    }

    /// Load the config file at `path`; it must exist.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path.as_ref())?;
        Self::parse(&contents)
    }

    /// Load `explicit` if given, else the default file if it exists, else defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(path),
            _ => Ok(Self::default()),
        }
    }

    /// Parse and validate TOML text
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.git.binary.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "git.binary must not be empty".to_string(),
            ));
        }

        if self.output.index_width == 0 || self.output.index_width > MAX_INDEX_WIDTH {
            return Err(ConfigError::InvalidValue(format!(
                "output.index_width must be between 1 and {}, got {}",
                MAX_INDEX_WIDTH, self.output.index_width
            )));
        }

        if self.log.filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue(
                "log.filter must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
