//! Generator Configuration Module
//!
//! Provides configuration loading for the order code creators.
//! Supports loading from TOML files with environment variable overrides.

use crate::codes::{multi_seller, sequence, ENV_PREFIX, ENV_SEPARATOR};
use anyhow::{Context, Result};
use config_crate::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Main generator configuration structure
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Sequence-type creator settings
    pub sequence: SequenceConfig,

    /// Multi-seller creator settings
    pub multi_seller: MultiSellerConfig,

    /// Logging settings for binaries
    pub logging: LoggingConfig,
}

/// Sequence-type creator settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct SequenceConfig {
    /// Literal prepended to every sequence-type code
    pub prefix: String,

    /// Width applied when a caller does not pass one
    pub default_width: usize,
}

/// Multi-seller creator settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct MultiSellerConfig {
    /// Literal prepended to every multi-seller code
    pub prefix: String,

    /// Skip the random suffix; codes become a pure function of clock and counter
    pub debug: bool,

    /// Digits kept from the tail of the seller id and of the buyer id
    pub id_digits: usize,

    /// Random digits appended when `debug` is off
    pub random_digits: usize,
}

/// Logging settings
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset
    pub level: String,

    /// Emit JSON log lines instead of human-readable ones
    pub json: bool,
}

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            default_width: sequence::DEFAULT_WIDTH,
        }
    }
}

impl Default for MultiSellerConfig {
    fn default() -> Self {
        Self {
            prefix: String::new(),
            debug: false,
            id_digits: multi_seller::DEFAULT_ID_DIGITS,
            random_digits: multi_seller::DEFAULT_RANDOM_DIGITS,
        }
    }
}

impl MultiSellerConfig {
    /// Debug configuration with the given prefix
    pub fn debug(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            debug: true,
            ..Self::default()
        }
    }

    /// Length of every code produced with this configuration, for ids that fit
    /// in `id_digits` digits
    pub fn code_len(&self) -> usize {
        let random = if self.debug { 0 } else { self.random_digits };
        self.prefix.len()
            + multi_seller::TIMESTAMP_PATTERN_LEN
            + 2 * self.id_digits
            + multi_seller::COUNTER_WIDTH
            + random
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from an optional TOML file with environment overrides
    ///
    /// Sources, lowest precedence first: built-in defaults, the file at `path`
    /// (required when given), then `ORDER_CODES__<SECTION>__<KEY>` variables.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(path, ENV_PREFIX)
    }

    /// Same as [`GeneratorConfig::load`] with a custom environment prefix
    pub fn load_with_env_prefix(path: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder();

        if let Some(path) = path {
            info!("Loading generator config: {:?}", path);
            builder = builder.add_source(File::from(path).required(true));
        } else {
            debug!("No config file given, using defaults");
        }

        builder = builder.add_source(
            Environment::with_prefix(env_prefix)
                .prefix_separator(ENV_SEPARATOR)
                .separator(ENV_SEPARATOR),
        );

        let config = builder
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }

    /// Render the effective configuration as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize configuration")
    }
}
