//! Configuration file for carat

use crate::CaratError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub diamond: DiamondConfig,
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// Where to find the diamond executable
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DiamondConfig {
    /// Explicit path to the binary; `PATH` is searched when unset
    #[serde(default)]
    pub binary: Option<PathBuf>,
}

/// Defaults applied to every facade built from this configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DefaultsConfig {
    #[serde(default)]
    pub database: Option<PathBuf>,
    #[serde(default = "default_threads")]
    pub threads: usize,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default)]
    pub log: bool,
    #[serde(default)]
    pub header: bool,
}

fn default_threads() -> usize {
    1
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            database: None,
            threads: default_threads(),
            quiet: false,
            log: false,
            header: false,
        }
    }
}

pub fn default_config() -> Config {
    Config::default()
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, CaratError> {
    let contents = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&contents)
        .map_err(|e| CaratError::Configuration(format!("Failed to parse config: {}", e)))?;
    if config.defaults.threads == 0 {
        return Err(CaratError::Configuration(
            "defaults.threads must be a positive integer".to_string(),
        ));
    }
    Ok(config)
}

/// Load the configuration at `path`, or the defaults when no file exists there
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<Config, CaratError> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::debug!(path = %path.display(), "No config file, using defaults");
        return Ok(default_config());
    }
    load_config(path)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &Config) -> Result<(), CaratError> {
    let contents = toml::to_string_pretty(config)
        .map_err(|e| CaratError::Configuration(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
