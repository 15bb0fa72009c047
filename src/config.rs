//! Drill Configuration
//!
//! Handles parsing and management of dsa.toml configuration files.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// File name searched for by [`DrillsConfig::find_and_load`].
pub const CONFIG_FILE: &str = "dsa.toml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to write config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config file not found: {0}")]
    NotFound(String),

    #[error("Unknown drill in [samples]: {0}")]
    UnknownDrill(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Root configuration structure matching dsa.toml.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DrillsConfig {
    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Step tracing of the algorithms
    #[serde(default)]
    pub trace: TraceConfig,

    /// Per-drill replacements for the built-in samples, keyed by drill name
    #[serde(default)]
    pub samples: BTreeMap<String, SampleOverride>,
}

impl DrillsConfig {
    /// Load configuration from a file path.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let content = std::fs::read_to_string(path)?;
        let config: DrillsConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from the current directory or parents.
    pub fn load_from_cwd() -> ConfigResult<Self> {
        let cwd = std::env::current_dir().map_err(ConfigError::Io)?;
        Self::find_and_load(&cwd)
    }

    /// Find and load configuration by searching up from the given directory.
    pub fn find_and_load(start_dir: &Path) -> ConfigResult<Self> {
        match Self::find(start_dir) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Locate the nearest dsa.toml at or above `start_dir`.
    pub fn find(start_dir: &Path) -> Option<std::path::PathBuf> {
        start_dir
            .ancestors()
            .map(|dir| dir.join(CONFIG_FILE))
            .find(|candidate| candidate.exists())
    }

    /// Save configuration to a file.
    pub fn save(&self, path: &Path) -> ConfigResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject sample overrides for drills that do not exist.
    pub fn validate(&self) -> ConfigResult<()> {
        for name in self.samples.keys() {
            if name.parse::<crate::drill::Drill>().is_err() {
                return Err(ConfigError::UnknownDrill(name.clone()));
            }
        }
        Ok(())
    }

    /// Sample override for a drill, if configured.
    pub fn sample_for(&self, drill: crate::drill::Drill) -> Option<&SampleOverride> {
        self.samples.get(drill.name())
    }
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Filter directive, overridden by RUST_LOG
    #[serde(default = "default_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Step tracing settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TraceConfig {
    /// Report intermediate algorithm states for every run
    #[serde(default)]
    pub enabled: bool,
}

/// Replacement input for one drill.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SampleOverride {
    pub input: Vec<i64>,

    /// Rotation offset for the rotation drills
    #[serde(default)]
    pub offset: Option<i64>,
}
