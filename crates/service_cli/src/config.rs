//! Forecaster configuration.
//!
//! Loaded from a TOML file (every field optional) with `FORECAST_*`
//! environment overrides applied on top. A missing file yields defaults.
//!
//! ```toml
//! iterations = 100000
//! seed = 42
//! price_column = "adj_close"
//! log_level = "info"
//! format = "text"
//! parallel = true
//! ```

use std::path::Path;

use forecast_engine::mc::DEFAULT_ITERATIONS;
use serde::Deserialize;
use thiserror::Error;

use crate::output::OutputFormat;

/// Valid values for `log_level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Forecaster configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForecastConfig {
    /// Number of simulated paths
    #[serde(default = "default_iterations")]
    pub iterations: usize,

    /// Fixed seed; `None` draws one from OS entropy
    #[serde(default)]
    pub seed: Option<u64>,

    /// Explicit CSV price column; `None` uses adj_close then close
    #[serde(default)]
    pub price_column: Option<String>,

    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Report format
    #[serde(default)]
    pub format: OutputFormat,

    /// Parallel path stepping
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_iterations() -> usize {
    DEFAULT_ITERATIONS
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_parallel() -> bool {
    true
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            seed: None,
            price_column: None,
            log_level: default_log_level(),
            format: OutputFormat::default(),
            parallel: default_parallel(),
        }
    }
}

impl ForecastConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&content)
    }

    /// Load configuration, falling back to defaults if the file is absent
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply `FORECAST_*` environment variable overrides
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("FORECAST_ITERATIONS") {
            self.iterations = parse_override("FORECAST_ITERATIONS", &value)?;
        }

        if let Some(value) = lookup("FORECAST_SEED") {
            self.seed = Some(parse_override("FORECAST_SEED", &value)?);
        }

        if let Some(value) = lookup("FORECAST_PRICE_COLUMN") {
            self.price_column = Some(value);
        }

        if let Some(value) = lookup("FORECAST_LOG_LEVEL") {
            self.log_level = value;
        }

        if let Some(value) = lookup("FORECAST_FORMAT") {
            self.format = value
                .parse()
                .map_err(|e| ConfigError::Override {
                    key: "FORECAST_FORMAT",
                    message: e,
                })?;
        }

        if let Some(value) = lookup("FORECAST_PARALLEL") {
            self.parallel = parse_override("FORECAST_PARALLEL", &value)?;
        }

        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, LOG_LEVELS
            ));
        }

        if self.iterations == 0 {
            errors.push("iterations must be greater than 0".to_string());
        }

        if let Some(column) = &self.price_column {
            if column.trim().is_empty() {
                errors.push("price_column cannot be empty".to_string());
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from file (or defaults), apply environment overrides and validate
    pub fn resolve(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override()?;
        config.validate()?;
        Ok(config)
    }
}

fn parse_override<T: std::str::FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse().map_err(|e: T::Err| ConfigError::Override {
        key,
        message: format!("'{}': {}", value, e),
    })
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unparseable environment override
    #[error("Invalid {key}: {message}")]
    Override {
        /// Environment variable name
        key: &'static str,
        /// Description of the failure
        message: String,
    },

    /// Validation errors
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
