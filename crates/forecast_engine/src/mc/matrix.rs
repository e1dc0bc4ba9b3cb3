//! Simulated price grid.
//!
//! # Memory Layout
//!
//! Prices are stored day-major: `values[day * iterations + path]`, so each
//! day is one contiguous row and the terminal row is the last `iterations`
//! values. Row 0 holds the starting price for every path.

use forecast_core::ForecastError;

/// Grid of simulated prices indexed by (day, path).
///
/// Produced atomically by the path simulator; never exposed half-filled.
///
/// # Examples
///
/// ```rust
/// use forecast_engine::mc::SimulationMatrix;
///
/// let matrix = SimulationMatrix::from_values(2, 3, vec![
///     10.0, 10.0, 10.0,
///     11.0, 9.5, 10.2,
/// ]).unwrap();
///
/// assert_eq!(matrix.row(0), &[10.0, 10.0, 10.0]);
/// assert_eq!(matrix.terminal_prices(), &[11.0, 9.5, 10.2]);
/// assert_eq!(matrix.get(1, 1), Some(9.5));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationMatrix {
    values: Vec<f64>,
    days: usize,
    iterations: usize,
}

impl SimulationMatrix {
    /// Builds a matrix from day-major values.
    ///
    /// A zero-path matrix is representable so that the analyser can report
    /// it; a matrix must still have at least one day row.
    ///
    /// # Errors
    ///
    /// `ForecastError::InvalidParameter` if `days` is 0 or the value count
    /// is not `days × iterations`.
    pub fn from_values(
        days: usize,
        iterations: usize,
        values: Vec<f64>,
    ) -> Result<Self, ForecastError> {
        if days == 0 {
            return Err(ForecastError::invalid_parameter(
                "days",
                "must be at least 1, got 0",
            ));
        }
        let expected = days.checked_mul(iterations).ok_or_else(|| {
            ForecastError::invalid_parameter("iterations", "grid size overflows")
        })?;
        if values.len() != expected {
            return Err(ForecastError::invalid_parameter(
                "values",
                format!(
                    "expected {} values for {} days × {} paths, got {}",
                    expected,
                    days,
                    iterations,
                    values.len()
                ),
            ));
        }
        Ok(Self {
            values,
            days,
            iterations,
        })
    }

    /// Assembles a matrix the simulator has already shaped.
    #[inline]
    pub(crate) fn from_parts(values: Vec<f64>, days: usize, iterations: usize) -> Self {
        debug_assert_eq!(values.len(), days * iterations);
        Self {
            values,
            days,
            iterations,
        }
    }

    /// Number of day rows (day 0 included).
    #[inline]
    pub fn days(&self) -> usize {
        self.days
    }

    /// Number of simulated paths.
    #[inline]
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns `true` if the matrix has no paths.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.iterations == 0
    }

    /// Prices for every path on `day`.
    ///
    /// # Panics
    ///
    /// Panics if `day >= self.days()`.
    #[inline]
    pub fn row(&self, day: usize) -> &[f64] {
        assert!(day < self.days, "day {} out of range ({} days)", day, self.days);
        let start = day * self.iterations;
        &self.values[start..start + self.iterations]
    }

    /// Price on `day` for `path`, or `None` if out of range.
    #[inline]
    pub fn get(&self, day: usize, path: usize) -> Option<f64> {
        if day < self.days && path < self.iterations {
            Some(self.values[day * self.iterations + path])
        } else {
            None
        }
    }

    /// Prices on the final day (`days − 1`) across all paths.
    #[inline]
    pub fn terminal_prices(&self) -> &[f64] {
        self.row(self.days - 1)
    }

    /// All values in day-major order.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimulationMatrix {
        SimulationMatrix::from_values(3, 2, vec![1.0, 1.0, 2.0, 0.5, 4.0, 0.25]).unwrap()
    }

    #[test]
    fn test_rows_and_terminal() {
        let m = sample();
        assert_eq!(m.days(), 3);
        assert_eq!(m.iterations(), 2);
        assert_eq!(m.row(1), &[2.0, 0.5]);
        assert_eq!(m.terminal_prices(), &[4.0, 0.25]);
        assert_eq!(m.as_slice().len(), 6);
    }

    #[test]
    fn test_get_out_of_range() {
        let m = sample();
        assert_eq!(m.get(2, 1), Some(0.25));
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.get(0, 2), None);
    }

    #[test]
    fn test_from_values_shape_mismatch() {
        let result = SimulationMatrix::from_values(2, 2, vec![1.0; 3]);
        assert!(matches!(
            result,
            Err(ForecastError::InvalidParameter { name: "values", .. })
        ));
    }

    #[test]
    fn test_from_values_zero_days() {
        assert!(SimulationMatrix::from_values(0, 0, vec![]).is_err());
    }

    #[test]
    fn test_zero_path_matrix_is_representable() {
        let m = SimulationMatrix::from_values(4, 0, vec![]).unwrap();
        assert!(m.is_empty());
        assert!(m.terminal_prices().is_empty());
        assert_eq!(m.get(0, 0), None);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_row_out_of_range_panics() {
        sample().row(3);
    }
}
