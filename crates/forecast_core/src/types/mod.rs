//! Core time, price-history and error types.
//!
//! This module provides:
//! - `time`: [`Date`] wrapper around `chrono::NaiveDate`
//! - `series`: [`PriceSeries`], the immutable chronological price history
//! - `error`: [`ForecastError`] taxonomy shared by every forecasting stage
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod error;
pub mod series;
pub mod time;

pub use error::{DateError, ForecastError};
pub use series::{PricePoint, PriceSeries};
pub use time::Date;
