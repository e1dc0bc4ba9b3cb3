//! # forecast_core: Foundation Types for the Monte Carlo Forecaster
//!
//! ## Layer 1 (Foundation) Role
//!
//! forecast_core is the bottom layer of the forecaster and provides:
//! - Time types: [`Date`] (`types::time`)
//! - Historical price data: [`PriceSeries`], [`PricePoint`] (`types::series`)
//! - Error types: [`ForecastError`], [`DateError`] (`types::error`)
//! - Descriptive statistics: mean, population variance and linearly
//!   interpolated percentiles (`math::statistics`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other forecast crates, with minimal external dependencies:
//! - chrono: Date arithmetic
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use forecast_core::math::statistics::{mean, percentile};
//! use forecast_core::types::{Date, PriceSeries};
//!
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let series = PriceSeries::from_daily_prices(start, &[100.0, 102.0, 101.0]).unwrap();
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.last_price(), Some(101.0));
//!
//! let sorted = [1.0, 2.0, 3.0, 4.0];
//! assert_eq!(mean(&sorted), Some(2.5));
//! assert_eq!(percentile(&sorted, 50.0), Some(2.5));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for Date and PriceSeries

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod math;
pub mod types;

pub use types::{Date, DateError, ForecastError, PricePoint, PriceSeries};
