//! Configuration for SafeTypes.
//!
//! Shuffling and random element selection take any `rand::Rng`. This crate
//! builds that generator from a TOML or YAML file so runs can be made
//! reproducible without code changes.
//!
//! # Examples
//!
//! ```
//! use rand::Rng;
//! use safetypes_config::{EnvironmentMode, SafeTypesConfig};
//!
//! let config = SafeTypesConfig::from_toml_str(r#"
//!     environment_mode = "reproducible"
//!     random_seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.environment_mode, EnvironmentMode::Reproducible);
//! let a: u64 = config.rng().random();
//! let b: u64 = config.rng().random();
//! assert_eq!(a, b);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use safetypes_config::SafeTypesConfig;
//!
//! let config = SafeTypesConfig::load("safetypes.toml").unwrap_or_default();
//! ```

use std::path::Path;

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Seed used in reproducible mode when none is configured.
pub const DEFAULT_SEED: u64 = 0;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Settings for randomized collection operations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SafeTypesConfig {
    /// Whether random operations must repeat across runs.
    #[serde(default)]
    pub environment_mode: EnvironmentMode,

    /// Random seed for reproducible results.
    #[serde(default)]
    pub random_seed: Option<u64>,
}

impl SafeTypesConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading TOML configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading YAML configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the random seed and switches to reproducible mode.
    pub fn with_random_seed(mut self, seed: u64) -> Self {
        self.environment_mode = EnvironmentMode::Reproducible;
        self.random_seed = Some(seed);
        self
    }

    /// Sets the environment mode.
    pub fn with_environment_mode(mut self, mode: EnvironmentMode) -> Self {
        self.environment_mode = mode;
        self
    }

    /// Checks that the settings do not contradict each other.
    ///
    /// A seed only makes sense in reproducible mode.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match (self.environment_mode, self.random_seed) {
            (EnvironmentMode::NonReproducible, Some(seed)) => Err(ConfigError::Invalid(format!(
                "random_seed = {seed} requires environment_mode = \"reproducible\""
            ))),
            _ => Ok(()),
        }
    }

    /// Returns the seed random operations will use, if any.
    pub fn effective_seed(&self) -> Option<u64> {
        match self.environment_mode {
            EnvironmentMode::Reproducible => Some(self.random_seed.unwrap_or(DEFAULT_SEED)),
            EnvironmentMode::NonReproducible => None,
        }
    }

    /// Builds a fresh random number generator.
    ///
    /// In reproducible mode every call returns a generator that yields the
    /// same sequence; otherwise it is seeded from OS entropy.
    pub fn rng(&self) -> StdRng {
        match self.effective_seed() {
            Some(seed) => {
                debug!(seed, "creating seeded generator");
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_os_rng(),
        }
    }
}

/// Environment mode affecting reproducibility.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EnvironmentMode {
    /// Generators are seeded from OS entropy.
    #[default]
    NonReproducible,

    /// Generators are seeded from `random_seed` (or [`DEFAULT_SEED`]).
    Reproducible,
}
