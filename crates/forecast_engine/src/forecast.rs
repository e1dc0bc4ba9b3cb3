//! End-to-end forecasting pipeline: Estimator → Simulator → Analyzer.
//!
//! The price series is fetched once at the boundary and moved into
//! [`Forecaster::run`]; every stage below it is a pure function of its
//! inputs.

use forecast_core::{Date, ForecastError, PriceSeries};
use tracing::{debug, info};

use crate::analyzer::{analyze, ForecastSummary};
use crate::estimator::{estimate, ReturnStats};
use crate::mc::{PathSimulator, SimulationConfig};
use crate::rng::ForecastRng;

/// Result of a complete forecast run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Forecast {
    /// Log-return statistics of the input history.
    pub stats: ReturnStats,
    /// Starting price of every simulated path.
    pub last_price: f64,
    /// Date of the last historical observation.
    pub last_date: Date,
    /// Number of day rows simulated (day 0 included).
    pub days: usize,
    /// Number of simulated paths.
    pub iterations: usize,
    /// Seed that reproduces this run.
    pub seed: u64,
    /// Terminal price distribution.
    pub summary: ForecastSummary,
}

/// Runs the forecasting pipeline for a fixed simulation configuration.
///
/// # Examples
///
/// ```rust
/// use forecast_core::{Date, PriceSeries};
/// use forecast_engine::forecast::Forecaster;
/// use forecast_engine::mc::SimulationConfig;
///
/// let start = Date::from_ymd(2024, 1, 1).unwrap();
/// let series =
///     PriceSeries::from_daily_prices(start, &[100.0, 102.0, 101.0, 105.0, 103.0]).unwrap();
///
/// let config = SimulationConfig::builder()
///     .days(2)
///     .iterations(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let forecast = Forecaster::new(config).run(series).unwrap();
/// let p = forecast.summary.percentiles;
/// assert!(p.p5 <= forecast.summary.mean && forecast.summary.mean <= p.p95);
/// ```
#[derive(Clone, Debug)]
pub struct Forecaster {
    simulator: PathSimulator,
}

impl Forecaster {
    /// Creates a forecaster from a validated simulation configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            simulator: PathSimulator::new(config),
        }
    }

    /// Returns the simulation configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        self.simulator.config()
    }

    /// Estimates, simulates from the last observed price and summarises.
    ///
    /// # Errors
    ///
    /// Any [`ForecastError`] raised by the three stages, unchanged.
    pub fn run(&self, series: PriceSeries) -> Result<Forecast, ForecastError> {
        let stats = estimate(&series)?;
        // estimate() guarantees at least two observations
        let last = series.last().ok_or(ForecastError::InsufficientData {
            observations: series.len(),
        })?;

        let mut rng = match self.config().seed() {
            Some(seed) => ForecastRng::from_seed(seed),
            None => ForecastRng::from_entropy(),
        };
        let seed = rng.seed();

        debug!(
            observations = series.len(),
            mean = stats.mean(),
            stddev = stats.stddev(),
            "estimated log-return statistics"
        );

        let matrix = self
            .simulator
            .simulate_with_rng(&stats, last.price, &mut rng)?;
        let summary = analyze(&matrix)?;

        info!(
            days = matrix.days(),
            paths = summary.paths,
            seed,
            mean = summary.mean,
            p5 = summary.percentiles.p5,
            p95 = summary.percentiles.p95,
            "forecast complete"
        );

        Ok(Forecast {
            stats,
            last_price: last.price,
            last_date: last.date,
            days: matrix.days(),
            iterations: matrix.iterations(),
            seed,
            summary,
        })
    }
}

/// Calendar days from the last observation to the prediction date.
///
/// # Errors
///
/// `ForecastError::InvalidParameter` if `target` is not after
/// `last_observation`.
///
/// # Examples
///
/// ```rust
/// use forecast_core::Date;
/// use forecast_engine::forecast::horizon_days;
///
/// let last = Date::from_ymd(2023, 12, 29).unwrap();
/// let target = Date::from_ymd(2024, 1, 31).unwrap();
/// assert_eq!(horizon_days(last, target).unwrap(), 33);
/// ```
pub fn horizon_days(last_observation: Date, target: Date) -> Result<usize, ForecastError> {
    let days = target - last_observation;
    if days < 1 {
        return Err(ForecastError::invalid_parameter(
            "target_date",
            format!(
                "{} must be after the last observation {}",
                target, last_observation
            ),
        ));
    }
    usize::try_from(days)
        .map_err(|_| ForecastError::invalid_parameter("target_date", "horizon too large"))
}
