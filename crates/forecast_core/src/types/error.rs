//! Error types for structured error handling.
//!
//! This module provides:
//! - `ForecastError`: Errors from estimation, simulation and analysis
//! - `DateError`: Errors from date construction and parsing
//!
//! Every forecasting stage either fully succeeds or fails with one of the
//! variants below; no stage returns partial results and nothing is retried.

use thiserror::Error;

/// Categorised forecasting errors.
///
/// # Variants
/// - `InsufficientData`: fewer than two price observations
/// - `InvalidInput`: upstream data that makes a log return undefined
/// - `InvalidParameter`: non-positive horizon, path count or starting price
/// - `EmptyMatrix`: a zero-path simulation matrix reached the analyser
///
/// # Examples
/// ```
/// use forecast_core::types::ForecastError;
///
/// let err = ForecastError::InsufficientData { observations: 1 };
/// assert_eq!(
///     err.to_string(),
///     "Insufficient data: 1 price observation(s), at least 2 required"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForecastError {
    /// Fewer than two price observations; no return can be computed.
    #[error("Insufficient data: {observations} price observation(s), at least 2 required")]
    InsufficientData {
        /// Number of observations supplied.
        observations: usize,
    },

    /// Corrupt or invalid upstream data (e.g. a non-positive implied price).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Caller supplied an out-of-range parameter.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        reason: String,
    },

    /// The simulation matrix handed to the analyser has no paths.
    #[error("Simulation matrix contains no paths")]
    EmptyMatrix,
}

impl ForecastError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

/// Date-related errors.
///
/// # Examples
/// ```
/// use forecast_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_error_display() {
        let err = ForecastError::invalid_input("price drops to zero at index 3");
        assert_eq!(err.to_string(), "Invalid input: price drops to zero at index 3");

        let err = ForecastError::invalid_parameter("days", "must be at least 1, got 0");
        assert!(err.to_string().contains("'days'"));
        assert!(err.to_string().contains("got 0"));

        assert_eq!(
            ForecastError::EmptyMatrix.to_string(),
            "Simulation matrix contains no paths"
        );
    }

    #[test]
    fn test_invalid_parameter_matches_by_name() {
        let err = ForecastError::invalid_parameter("iterations", "must be at least 1");
        assert!(matches!(
            err,
            ForecastError::InvalidParameter {
                name: "iterations",
                ..
            }
        ));
    }

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("input contains invalid characters".to_string());
        assert!(err.to_string().starts_with("Date parse error"));
    }
}
