//! Configuration file loading for the terminal front end.
//!
//! The file holds a [`GameConfig`] table in TOML. Command-line flags are
//! applied on top of whatever the file provides.

use chess_engine::{GameConfig, RuleOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Default configuration file, looked up in the working directory.
pub fn default_path() -> PathBuf {
    PathBuf::from("chess.toml")
}

/// Loads the game configuration.
///
/// An explicit `path` must exist. Without one, `chess.toml` in the working
/// directory is used when present and the defaults otherwise.
pub fn load(path: Option<&Path>) -> Result<GameConfig, ConfigError> {
    let (path, required) = match path {
        Some(p) => (p.to_path_buf(), true),
        None => (default_path(), false),
    };
    if !required && !path.exists() {
        tracing::debug!("no {} found, using defaults", path.display());
        return Ok(GameConfig::default());
    }
    let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
        path: path.clone(),
        source,
    })?;
    let config = parse(&content)?;
    tracing::debug!(?config, "loaded config from {}", path.display());
    Ok(config)
}

/// Parses configuration text.
pub fn parse(content: &str) -> Result<GameConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Command-line overrides.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub clock_seconds: Option<u32>,
    pub legacy_rules: bool,
}

impl Overrides {
    /// Applies the overrides to a loaded configuration.
    pub fn apply(self, mut config: GameConfig) -> GameConfig {
        if let Some(seconds) = self.clock_seconds {
            config.clock_seconds = seconds;
        }
        if self.legacy_rules {
            config.rules = RuleOptions::LEGACY;
        }
        config
    }
}
