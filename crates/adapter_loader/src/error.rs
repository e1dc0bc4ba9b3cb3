//! Error types for price loading.

use forecast_core::ForecastError;
use thiserror::Error;

/// Price loading error type
#[derive(Debug, Error)]
pub enum LoaderError {
    /// IO error opening the source
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed CSV
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Required column missing from the header row
    #[error("Missing column '{column}' (available: {available})")]
    MissingColumn {
        /// Column looked up
        column: String,
        /// Comma-separated header row
        available: String,
    },

    /// Unparseable field
    #[error("Parse error on line {line}: {message}")]
    Parse {
        /// 1-based line number in the source
        line: u64,
        /// Description of the failure
        message: String,
    },

    /// Rows violate price series invariants
    #[error("Series error: {0}")]
    Series(#[from] ForecastError),

    /// Range bounds out of order
    #[error("Invalid date range: {0}")]
    InvalidRange(String),

    /// No rows fell inside the requested range
    #[error("No price data in range {0}")]
    NoData(String),
}

impl LoaderError {
    /// Create a parse error
    pub fn parse(line: u64, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LoaderError::parse(7, "price 'abc' is not a number");
        assert_eq!(err.to_string(), "Parse error on line 7: price 'abc' is not a number");

        let err = LoaderError::MissingColumn {
            column: "adj_close".to_string(),
            available: "date,open".to_string(),
        };
        assert!(err.to_string().contains("adj_close"));
    }

    #[test]
    fn test_from_forecast_error() {
        let err: LoaderError = ForecastError::invalid_input("bad").into();
        assert!(matches!(err, LoaderError::Series(_)));
    }
}
