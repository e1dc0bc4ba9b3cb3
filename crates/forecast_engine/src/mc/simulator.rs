//! Geometric Brownian motion path simulation.
//!
//! Uses the exact log-space step with per-period log-return statistics:
//! ```text
//! S[t][j] = S[t-1][j] × exp(μ + σ × Z[t][j]),   μ = mean − 0.5 × variance
//! ```
//!
//! # Algorithm
//!
//! 1. Validate the grid dimensions and the starting price
//! 2. Draw the full `days × iterations` standard-normal grid in one batch
//!    (row 0 of the grid is drawn but unused, day 0 is a fixed anchor)
//! 3. Set row 0 to the starting price
//! 4. For each day in order, evaluate the whole row from the previous row
//!
//! Step 4 is sequential across days and embarrassingly parallel across
//! paths. Because the random grid is complete before the day loop starts,
//! rows evaluated with rayon are bit-identical to sequential evaluation.

use forecast_core::ForecastError;
use rayon::prelude::*;
use tracing::debug;

use super::config::{validate_dimensions, SimulationConfig, PARALLEL_THRESHOLD};
use super::matrix::SimulationMatrix;
use crate::estimator::ReturnStats;
use crate::rng::ForecastRng;

/// Minimum paths handed to a single rayon task.
const MIN_PATHS_PER_TASK: usize = 1_024;

/// Zeroed grid of `cells` values; a failed reservation is reported instead
/// of aborting the process.
fn allocate_grid(cells: usize) -> Result<Vec<f64>, ForecastError> {
    let mut grid = Vec::new();
    grid.try_reserve_exact(cells).map_err(|e| {
        ForecastError::invalid_parameter(
            "iterations",
            format!("cannot allocate a grid of {} cells: {}", cells, e),
        )
    })?;
    grid.resize(cells, 0.0);
    Ok(grid)
}

/// Single GBM step shared by the sequential and parallel row kernels.
#[inline(always)]
fn gbm_step(previous: f64, shock: f64, drift: f64, volatility: f64) -> f64 {
    previous * (drift + volatility * shock).exp()
}

/// Monte Carlo path simulator bound to a [`SimulationConfig`].
///
/// # Examples
///
/// ```rust
/// use forecast_engine::estimator::estimate_prices;
/// use forecast_engine::mc::{PathSimulator, SimulationConfig};
///
/// let stats = estimate_prices(&[100.0, 102.0, 101.0, 105.0, 103.0]).unwrap();
/// let config = SimulationConfig::builder()
///     .days(2)
///     .iterations(10_000)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let matrix = PathSimulator::new(config).simulate(&stats, 103.0).unwrap();
/// assert!(matrix.row(0).iter().all(|&p| p == 103.0));
/// ```
#[derive(Clone, Debug)]
pub struct PathSimulator {
    config: SimulationConfig,
}

impl PathSimulator {
    /// Creates a simulator from a validated configuration.
    pub fn new(config: SimulationConfig) -> Self {
        Self { config }
    }

    /// Returns the simulator configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Simulates paths with a generator seeded from the configuration.
    ///
    /// Without a configured seed the generator is seeded from OS entropy.
    pub fn simulate(
        &self,
        stats: &ReturnStats,
        last_price: f64,
    ) -> Result<SimulationMatrix, ForecastError> {
        let mut rng = match self.config.seed() {
            Some(seed) => ForecastRng::from_seed(seed),
            None => ForecastRng::from_entropy(),
        };
        self.simulate_with_rng(stats, last_price, &mut rng)
    }

    /// Simulates paths drawing from a caller-supplied generator.
    pub fn simulate_with_rng(
        &self,
        stats: &ReturnStats,
        last_price: f64,
        rng: &mut ForecastRng,
    ) -> Result<SimulationMatrix, ForecastError> {
        generate_gbm_paths(
            stats,
            last_price,
            self.config.days(),
            self.config.iterations(),
            rng,
            self.config.parallel(),
        )
    }
}

/// Simulates `iterations` GBM paths over `days` rows.
///
/// With `seed = Some(s)` the result is bit-identical across runs for the
/// same inputs; `None` seeds from OS entropy.
///
/// # Errors
///
/// `ForecastError::InvalidParameter` if `days` or `iterations` is 0 or
/// `last_price` is not a positive finite number.
pub fn simulate(
    stats: &ReturnStats,
    last_price: f64,
    days: usize,
    iterations: usize,
    seed: Option<u64>,
) -> Result<SimulationMatrix, ForecastError> {
    let config = SimulationConfig::builder()
        .days(days)
        .iterations(iterations)
        .seed_opt(seed)
        .build()?;
    PathSimulator::new(config).simulate(stats, last_price)
}

/// Generates the full price matrix from an explicit random source.
///
/// `parallel` allows rows of at least [`PARALLEL_THRESHOLD`] paths to be
/// evaluated with rayon; the output does not depend on it.
pub fn generate_gbm_paths(
    stats: &ReturnStats,
    last_price: f64,
    days: usize,
    iterations: usize,
    rng: &mut ForecastRng,
    parallel: bool,
) -> Result<SimulationMatrix, ForecastError> {
    validate_dimensions(days, iterations)?;
    if !(last_price > 0.0 && last_price.is_finite()) {
        return Err(ForecastError::invalid_parameter(
            "last_price",
            format!("must be positive and finite, got {}", last_price),
        ));
    }

    let drift = stats.drift();
    let volatility = stats.stddev();
    let cells = days * iterations;
    let use_rayon = parallel && iterations >= PARALLEL_THRESHOLD;

    debug!(
        days,
        iterations,
        seed = rng.seed(),
        drift,
        volatility,
        parallel = use_rayon,
        "simulating GBM paths"
    );

    let mut shocks = allocate_grid(cells)?;
    rng.fill_normal(&mut shocks);

    let mut values = allocate_grid(cells)?;
    values[..iterations].fill(last_price);

    for day in 1..days {
        let (done, rest) = values.split_at_mut(day * iterations);
        let previous = &done[(day - 1) * iterations..];
        let current = &mut rest[..iterations];
        let row_shocks = &shocks[day * iterations..(day + 1) * iterations];

        if use_rayon {
            current
                .par_iter_mut()
                .zip(previous.par_iter())
                .zip(row_shocks.par_iter())
                .with_min_len(MIN_PATHS_PER_TASK)
                .for_each(|((price, &prev), &z)| *price = gbm_step(prev, z, drift, volatility));
        } else {
            for ((price, &prev), &z) in current.iter_mut().zip(previous).zip(row_shocks) {
                *price = gbm_step(prev, z, drift, volatility);
            }
        }
    }

    if let Some(bad) = values.iter().find(|v| !(v.is_finite() && **v > 0.0)) {
        return Err(ForecastError::invalid_parameter(
            "stats",
            format!(
                "drift {} / volatility {} drive prices out of range ({})",
                drift, volatility, bad
            ),
        ));
    }

    Ok(SimulationMatrix::from_parts(values, days, iterations))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimator::estimate_prices;
    use approx::assert_relative_eq;

    fn sample_stats() -> ReturnStats {
        ReturnStats::new(0.0005, 0.0004, 250).unwrap()
    }

    #[test]
    fn test_row_zero_is_last_price() {
        let matrix = simulate(&sample_stats(), 103.0, 10, 500, Some(42)).unwrap();
        assert_eq!(matrix.days(), 10);
        assert_eq!(matrix.iterations(), 500);
        assert!(matrix.row(0).iter().all(|&p| p == 103.0));
    }

    #[test]
    fn test_single_day_horizon_is_anchor_only() {
        let matrix = simulate(&sample_stats(), 50.0, 1, 100, Some(1)).unwrap();
        assert_eq!(matrix.terminal_prices(), &[50.0; 100][..]);
    }

    #[test]
    fn test_all_prices_positive_and_finite() {
        let matrix = simulate(&sample_stats(), 100.0, 60, 1_000, Some(7)).unwrap();
        for &price in matrix.as_slice() {
            assert!(price > 0.0 && price.is_finite(), "bad price {}", price);
        }
    }

    #[test]
    fn test_zero_volatility_is_exact() {
        let stats = estimate_prices(&[80.0; 20]).unwrap();
        let matrix = simulate(&stats, 80.0, 30, 200, Some(3)).unwrap();
        assert!(matrix.as_slice().iter().all(|&p| p == 80.0));
    }

    #[test]
    fn test_zero_volatility_with_drift_is_deterministic() {
        let stats = ReturnStats::new(0.01, 0.0, 10).unwrap();
        let a = simulate(&stats, 100.0, 5, 10, Some(1)).unwrap();
        let b = simulate(&stats, 100.0, 5, 10, Some(2)).unwrap();
        assert_eq!(a, b);
        assert_relative_eq!(a.get(4, 0).unwrap(), 100.0 * (0.04_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn test_same_seed_bit_identical() {
        let a = simulate(&sample_stats(), 100.0, 20, 300, Some(12345)).unwrap();
        let b = simulate(&sample_stats(), 100.0, 20, 300, Some(12345)).unwrap();
        assert_eq!(a.as_slice(), b.as_slice());
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = simulate(&sample_stats(), 100.0, 5, 100, Some(1)).unwrap();
        let b = simulate(&sample_stats(), 100.0, 5, 100, Some(2)).unwrap();
        assert_ne!(a.terminal_prices(), b.terminal_prices());
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let stats = sample_stats();
        let iterations = PARALLEL_THRESHOLD * 2;
        let parallel = generate_gbm_paths(
            &stats,
            100.0,
            8,
            iterations,
            &mut ForecastRng::from_seed(99),
            true,
        )
        .unwrap();
        let sequential = generate_gbm_paths(
            &stats,
            100.0,
            8,
            iterations,
            &mut ForecastRng::from_seed(99),
            false,
        )
        .unwrap();
        assert_eq!(parallel.as_slice(), sequential.as_slice());
    }

    #[test]
    fn test_step_uses_grid_row_for_day() {
        let stats = sample_stats();
        let days = 3;
        let iterations = 4;

        let mut grid = vec![0.0; days * iterations];
        ForecastRng::from_seed(5).fill_normal(&mut grid);

        let matrix = simulate(&stats, 10.0, days, iterations, Some(5)).unwrap();
        for path in 0..iterations {
            let mut expected = 10.0;
            for day in 1..days {
                expected = gbm_step(
                    expected,
                    grid[day * iterations + path],
                    stats.drift(),
                    stats.stddev(),
                );
                assert_eq!(matrix.get(day, path), Some(expected));
            }
        }
    }

    #[test]
    fn test_invalid_parameters() {
        let stats = sample_stats();
        assert!(matches!(
            simulate(&stats, 100.0, 0, 10, Some(1)),
            Err(ForecastError::InvalidParameter { name: "days", .. })
        ));
        assert!(matches!(
            simulate(&stats, 100.0, 10, 0, Some(1)),
            Err(ForecastError::InvalidParameter {
                name: "iterations",
                ..
            })
        ));
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                simulate(&stats, bad, 10, 10, Some(1)),
                Err(ForecastError::InvalidParameter {
                    name: "last_price",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_unallocatable_grid_rejected() {
        // fits in usize but not in the address space
        let mut rng = ForecastRng::from_seed(1);
        let iterations = usize::MAX / 4;
        let result = generate_gbm_paths(&sample_stats(), 100.0, 2, iterations, &mut rng, false);
        assert!(matches!(
            result,
            Err(ForecastError::InvalidParameter {
                name: "iterations",
                ..
            })
        ));
    }

    #[test]
    fn test_runaway_statistics_rejected() {
        let stats = ReturnStats::new(500.0, 0.0, 1).unwrap();
        let result = simulate(&stats, 100.0, 10, 10, Some(1));
        assert!(matches!(
            result,
            Err(ForecastError::InvalidParameter { name: "stats", .. })
        ));
    }

    #[test]
    fn test_simulate_with_rng_advances_caller_generator() {
        let config = SimulationConfig::builder()
            .days(3)
            .iterations(10)
            .build()
            .unwrap();
        let simulator = PathSimulator::new(config);
        let mut rng = ForecastRng::from_seed(11);

        let first = simulator
            .simulate_with_rng(&sample_stats(), 100.0, &mut rng)
            .unwrap();
        let second = simulator
            .simulate_with_rng(&sample_stats(), 100.0, &mut rng)
            .unwrap();
        assert_ne!(first.terminal_prices(), second.terminal_prices());
    }

    #[test]
    fn test_terminal_mean_tracks_lognormal_expectation() {
        // E[S_T] = S_0 × exp((days − 1) × (drift + σ²/2)) = S_0 × exp((days − 1) × mean)
        let stats = ReturnStats::new(0.001, 0.0001, 250).unwrap();
        let matrix = simulate(&stats, 100.0, 21, 50_000, Some(42)).unwrap();
        let terminal = matrix.terminal_prices();
        let mean = terminal.iter().sum::<f64>() / terminal.len() as f64;
        let expected = 100.0 * (20.0 * stats.mean()).exp();
        assert_relative_eq!(mean, expected, max_relative = 0.01);
    }
}
