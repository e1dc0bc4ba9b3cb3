//! Return estimation: price history → log-return statistics.
//!
//! For consecutive prices the fractional change is `r_t = p_t / p_{t-1} − 1`
//! and the log return is `ln(1 + r_t)`. The first observation has no return.
//! Statistics use the population convention (divide by N).
//!
//! # Examples
//!
//! ```rust
//! use forecast_engine::estimator::estimate_prices;
//!
//! let stats = estimate_prices(&[100.0, 102.0, 101.0, 105.0, 103.0]).unwrap();
//! assert_eq!(stats.count(), 4);
//! assert!(stats.mean().is_finite());
//! assert!((stats.stddev() - stats.variance().sqrt()).abs() < 1e-15);
//! ```

use forecast_core::math::statistics::{mean, population_variance};
use forecast_core::{ForecastError, PriceSeries};

/// Summary statistics of a log-return series.
///
/// Invariants: all fields finite, `variance ≥ 0`, `stddev = sqrt(variance)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ReturnStats {
    mean: f64,
    variance: f64,
    stddev: f64,
    count: usize,
}

impl ReturnStats {
    /// Builds statistics from a mean and variance.
    ///
    /// `count` is the number of returns the figures describe.
    ///
    /// # Errors
    ///
    /// `ForecastError::InvalidParameter` if either value is not finite or
    /// the variance is negative.
    pub fn new(mean: f64, variance: f64, count: usize) -> Result<Self, ForecastError> {
        if !mean.is_finite() {
            return Err(ForecastError::invalid_parameter(
                "mean",
                format!("must be finite, got {}", mean),
            ));
        }
        if !variance.is_finite() || variance < 0.0 {
            return Err(ForecastError::invalid_parameter(
                "variance",
                format!("must be finite and non-negative, got {}", variance),
            ));
        }
        Ok(Self {
            mean,
            variance,
            stddev: variance.sqrt(),
            count,
        })
    }

    /// Mean log return per period.
    #[inline]
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population variance of log returns.
    #[inline]
    pub fn variance(&self) -> f64 {
        self.variance
    }

    /// Standard deviation of log returns.
    #[inline]
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Number of log returns the statistics were computed from.
    #[inline]
    pub fn count(&self) -> usize {
        self.count
    }

    /// GBM drift per period with Itô correction: `mean − 0.5 × variance`.
    #[inline]
    pub fn drift(&self) -> f64 {
        self.mean - 0.5 * self.variance
    }
}

/// Computes the log-return series of consecutive prices.
///
/// # Errors
///
/// - `InsufficientData` if fewer than two prices are supplied
/// - `InvalidInput` if a price is not positive, or some `1 + r_t` is not a
///   positive finite number
pub fn log_returns(prices: &[f64]) -> Result<Vec<f64>, ForecastError> {
    if prices.len() < 2 {
        return Err(ForecastError::InsufficientData {
            observations: prices.len(),
        });
    }

    // an all-negative series has positive ratios, so check each price
    if let Some((idx, &price)) = prices.iter().enumerate().find(|(_, &p)| !(p > 0.0)) {
        return Err(ForecastError::invalid_input(format!(
            "price at index {} must be positive, got {}",
            idx, price
        )));
    }

    prices
        .windows(2)
        .enumerate()
        .map(|(idx, pair)| {
            let change = pair[1] / pair[0] - 1.0;
            let growth = 1.0 + change;
            // also rejects NaN from 0/0
            if !(growth > 0.0 && growth.is_finite()) {
                return Err(ForecastError::invalid_input(format!(
                    "log return undefined between index {} ({}) and {} ({}): 1 + r = {}",
                    idx,
                    pair[0],
                    idx + 1,
                    pair[1],
                    growth
                )));
            }
            Ok(growth.ln())
        })
        .collect()
}

/// Estimates log-return statistics from a raw price slice.
pub fn estimate_prices(prices: &[f64]) -> Result<ReturnStats, ForecastError> {
    let returns = log_returns(prices)?;
    // log_returns guarantees at least one element
    let mu = mean(&returns).unwrap_or_default();
    let variance = population_variance(&returns).unwrap_or_default();
    ReturnStats::new(mu, variance, returns.len())
}

/// Estimates log-return statistics from a price series.
///
/// Pure function of the series; nothing is cached between calls.
pub fn estimate(series: &PriceSeries) -> Result<ReturnStats, ForecastError> {
    estimate_prices(series.prices())
}
