//! # forecast_engine: Monte Carlo GBM Forecasting Engine
//!
//! ## Layer 3 Role
//!
//! forecast_engine turns a historical [`PriceSeries`](forecast_core::PriceSeries)
//! into a distribution of future prices in three pure stages:
//!
//! 1. [`estimator`]: log returns and their mean / population variance
//! 2. [`mc`]: geometric Brownian motion paths from a single batched normal grid
//! 3. [`analyzer`]: mean and 5/25/50/75/95 percentiles of the terminal prices
//!
//! [`forecast::Forecaster`] chains the stages; [`rng::ForecastRng`] is the
//! explicit, seedable random source.
//!
//! ## Usage Example
//!
//! ```rust
//! use forecast_engine::analyzer::analyze;
//! use forecast_engine::estimator::estimate_prices;
//! use forecast_engine::mc::simulate;
//!
//! let stats = estimate_prices(&[100.0, 102.0, 101.0, 105.0, 103.0]).unwrap();
//! let matrix = simulate(&stats, 103.0, 2, 10_000, Some(42)).unwrap();
//! let summary = analyze(&matrix).unwrap();
//!
//! assert!(matrix.row(0).iter().all(|&p| p == 103.0));
//! assert!(summary.percentiles.p5 <= summary.mean && summary.mean <= summary.percentiles.p95);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Serialisation for [`estimator::ReturnStats`],
//!   [`analyzer::ForecastSummary`] and [`forecast::Forecast`]

#![deny(missing_docs)]

pub mod analyzer;
pub mod estimator;
pub mod forecast;
pub mod mc;
pub mod rng;

pub use analyzer::{analyze, analyze_terminal, ForecastSummary, Percentiles};
pub use estimator::{estimate, estimate_prices, log_returns, ReturnStats};
pub use forecast::{horizon_days, Forecast, Forecaster};
pub use mc::{simulate, PathSimulator, SimulationConfig, SimulationMatrix};
pub use rng::ForecastRng;
