//! CLI error types

use thiserror::Error;

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration file or override problem
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Price history could not be loaded
    #[error("Data loading error: {0}")]
    Loader(#[from] adapter_loader::LoaderError),

    /// Estimation, simulation or analysis failed
    #[error("Forecast error: {0}")]
    Forecast(#[from] forecast_core::ForecastError),

    /// Bad command line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON rendering failed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Logging could not be initialised
    #[error("Logging error: {0}")]
    Logging(String),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
