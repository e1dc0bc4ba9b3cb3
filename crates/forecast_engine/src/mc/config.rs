//! Path simulation configuration.
//!
//! The horizon, path count and optional seed are supplied by the caller;
//! nothing here is read from the environment.

use forecast_core::ForecastError;

/// Default number of simulated paths.
pub const DEFAULT_ITERATIONS: usize = 100_000;

/// Minimum paths per day row before the row is evaluated in parallel.
pub const PARALLEL_THRESHOLD: usize = 4_096;

/// Monte Carlo simulation configuration.
///
/// Immutable and validated. Use [`SimulationConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .days(30)
///     .iterations(10_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.days(), 30);
/// assert_eq!(config.iterations(), 10_000);
/// assert_eq!(config.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of day rows in the simulated matrix, day 0 included.
    days: usize,
    /// Number of independent paths.
    iterations: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Allow rayon evaluation of large day rows.
    parallel: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of day rows (horizon).
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Returns the number of simulated paths.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether large rows may be evaluated in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// `ForecastError::InvalidParameter` if `days` or `iterations` is 0.
    pub fn validate(&self) -> Result<(), ForecastError> {
        validate_dimensions(self.days, self.iterations)
    }
}

/// Checks the simulation grid dimensions.
pub(crate) fn validate_dimensions(days: usize, iterations: usize) -> Result<(), ForecastError> {
    if days == 0 {
        return Err(ForecastError::invalid_parameter(
            "days",
            "must be at least 1, got 0",
        ));
    }
    if iterations == 0 {
        return Err(ForecastError::invalid_parameter(
            "iterations",
            "must be at least 1, got 0",
        ));
    }
    if days.checked_mul(iterations).is_none() {
        return Err(ForecastError::invalid_parameter(
            "iterations",
            format!("{} days × {} paths overflows the grid size", days, iterations),
        ));
    }
    Ok(())
}

/// Builder for [`SimulationConfig`].
///
/// `iterations` defaults to [`DEFAULT_ITERATIONS`] and parallel evaluation
/// is enabled unless switched off.
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    days: Option<usize>,
    iterations: usize,
    seed: Option<u64>,
    parallel: bool,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            days: None,
            iterations: DEFAULT_ITERATIONS,
            seed: None,
            parallel: true,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of day rows (day 0 included).
    #[inline]
    pub fn days(mut self, days: usize) -> Self {
        self.days = Some(days);
        self
    }

    /// Sets the number of simulated paths.
    #[inline]
    pub fn iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed; `None` draws one from OS entropy at run time.
    #[inline]
    pub fn seed_opt(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Enables or disables parallel row evaluation.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// `ForecastError::InvalidParameter` if `days` is missing or a dimension
    /// is zero.
    pub fn build(self) -> Result<SimulationConfig, ForecastError> {
        let days = self
            .days
            .ok_or_else(|| ForecastError::invalid_parameter("days", "must be specified"))?;

        let config = SimulationConfig {
            days,
            iterations: self.iterations,
            seed: self.seed,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}
