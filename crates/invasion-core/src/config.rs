//! Configuration loading and typed config structures for the invasion.
//!
//! The optional configuration file is `invasion-config.yaml` in the working
//! directory. It covers where the map comes from, where the result goes,
//! how the random source is seeded, and the default log level. The rules
//! themselves (destruction threshold, turn limit, starting crowding) are
//! fixed constants and cannot be configured.

use std::path::{Path, PathBuf};

use invasion_world::{DEFAULT_MAP_PATH, DEFAULT_RESULT_PATH};
use serde::Deserialize;

/// File name looked up in the working directory when no config path is
/// given.
pub const DEFAULT_CONFIG_PATH: &str = "invasion-config.yaml";

/// Environment variable overriding `io.map_path`.
pub const MAP_PATH_ENV: &str = "INVASION_MAP";

/// Environment variable overriding `io.result_path`.
pub const RESULT_PATH_ENV: &str = "INVASION_RESULT";

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level invasion configuration.
///
/// Mirrors the structure of `invasion-config.yaml`. Every section may be
/// omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct InvasionConfig {
    /// Random source settings.
    #[serde(default)]
    pub world: WorldConfig,

    /// Map and result file locations.
    #[serde(default)]
    pub io: IoConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl InvasionConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Environment variables override YAML values for file locations:
    /// - `INVASION_MAP` overrides `io.map_path`
    /// - `INVASION_RESULT` overrides `io.result_path`
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config: Self = serde_yml::from_str(&contents)?;
        config.io.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        let mut config: Self = serde_yml::from_str(yaml)?;
        config.io.apply_env_overrides();
        Ok(config)
    }
}

/// Random source configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WorldConfig {
    /// Seed for the run's random source. Without one, every run draws
    /// fresh entropy from the operating system.
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Map and result file locations.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IoConfig {
    /// The map read at startup.
    #[serde(default = "default_map_path")]
    pub map_path: PathBuf,

    /// Where the surviving map is written.
    #[serde(default = "default_result_path")]
    pub result_path: PathBuf,
}

impl IoConfig {
    /// Apply environment variable overrides for file locations.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply file location overrides looked up by variable name.
    ///
    /// `lookup` receives [`MAP_PATH_ENV`] and [`RESULT_PATH_ENV`]; a `None`
    /// keeps the current value.
    pub fn apply_overrides_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(MAP_PATH_ENV) {
            self.map_path = PathBuf::from(path);
        }
        if let Some(path) = lookup(RESULT_PATH_ENV) {
            self.result_path = PathBuf::from(path);
        }
    }
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            map_path: default_map_path(),
            result_path: default_result_path(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes
    /// precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_map_path() -> PathBuf {
    PathBuf::from(DEFAULT_MAP_PATH)
}

fn default_result_path() -> PathBuf {
    PathBuf::from(DEFAULT_RESULT_PATH)
}

fn default_log_level() -> String {
    "info".to_owned()
}
