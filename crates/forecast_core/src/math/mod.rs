//! Numerical helpers shared by the forecasting stages.
//!
//! - [`statistics`]: mean, population variance and percentile estimation

pub mod statistics;
