//! Terminal price distribution analysis.
//!
//! Only the final day row of a [`SimulationMatrix`] is inspected. The
//! summary carries the arithmetic mean and the 5th/25th/50th/75th/95th
//! percentiles computed by linear interpolation between order statistics.

use forecast_core::math::statistics::{mean, percentile, sorted};
use forecast_core::ForecastError;

use crate::mc::SimulationMatrix;

/// Percentile levels reported by [`ForecastSummary`], in percent.
pub const PERCENTILE_LEVELS: [f64; 5] = [5.0, 25.0, 50.0, 75.0, 95.0];

/// Percentile bands of the terminal price distribution.
///
/// Always ordered `p5 ≤ p25 ≤ p50 ≤ p75 ≤ p95`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Percentiles {
    /// 5th percentile.
    pub p5: f64,
    /// 25th percentile (lower quartile).
    pub p25: f64,
    /// 50th percentile (median).
    pub p50: f64,
    /// 75th percentile (upper quartile).
    pub p75: f64,
    /// 95th percentile.
    pub p95: f64,
}

/// Summary of the terminal-day price distribution.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ForecastSummary {
    /// Arithmetic mean terminal price.
    pub mean: f64,
    /// Percentile bands.
    pub percentiles: Percentiles,
    /// Number of paths summarised.
    pub paths: usize,
}

impl ForecastSummary {
    /// 5th–95th percentile range.
    pub fn band_90(&self) -> (f64, f64) {
        (self.percentiles.p5, self.percentiles.p95)
    }

    /// Interquartile range (25th–75th percentile).
    pub fn interquartile(&self) -> (f64, f64) {
        (self.percentiles.p25, self.percentiles.p75)
    }

    /// Level the terminal price stays below with 95% probability.
    pub fn upper_95(&self) -> f64 {
        self.percentiles.p95
    }
}

/// Summarises the final row of a simulation matrix.
///
/// Pure; calling it twice on the same matrix yields identical results.
///
/// # Errors
///
/// `ForecastError::EmptyMatrix` if the matrix has zero paths.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::analyzer::analyze;
/// use forecast_engine::mc::SimulationMatrix;
///
/// let matrix = SimulationMatrix::from_values(2, 4, vec![
///     10.0, 10.0, 10.0, 10.0,
///     9.0, 10.0, 11.0, 12.0,
/// ]).unwrap();
///
/// let summary = analyze(&matrix).unwrap();
/// assert_eq!(summary.mean, 10.5);
/// assert_eq!(summary.percentiles.p50, 10.5);
/// ```
pub fn analyze(matrix: &SimulationMatrix) -> Result<ForecastSummary, ForecastError> {
    if matrix.is_empty() {
        return Err(ForecastError::EmptyMatrix);
    }
    analyze_terminal(matrix.terminal_prices())
}

/// Summarises a raw vector of terminal prices.
///
/// # Errors
///
/// `ForecastError::EmptyMatrix` if `terminal` is empty.
pub fn analyze_terminal(terminal: &[f64]) -> Result<ForecastSummary, ForecastError> {
    let mean_price = mean(terminal).ok_or(ForecastError::EmptyMatrix)?;
    let ordered = sorted(terminal);

    let mut bands = [0.0; 5];
    for (slot, &level) in bands.iter_mut().zip(PERCENTILE_LEVELS.iter()) {
        *slot = percentile(&ordered, level).ok_or(ForecastError::EmptyMatrix)?;
    }
    let [p5, p25, p50, p75, p95] = bands;

    Ok(ForecastSummary {
        mean: mean_price,
        percentiles: Percentiles {
            p5,
            p25,
            p50,
            p75,
            p95,
        },
        paths: terminal.len(),
    })
}
