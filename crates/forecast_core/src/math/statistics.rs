//! Descriptive statistics with pinned conventions.
//!
//! - Variance is the **population** variance (divide by N, not N − 1).
//! - Percentiles use **linear interpolation** between order statistics: the
//!   q-th percentile of `n` sorted values sits at fractional rank
//!   `q / 100 × (n − 1)` and interpolates between the two nearest values.
//!
//! All functions return `None` for empty input instead of producing NaN.

/// Arithmetic mean.
///
/// # Examples
///
/// ```
/// use forecast_core::math::statistics::mean;
///
/// assert_eq!(mean(&[1.0, 2.0, 6.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divides by N).
///
/// Two-pass evaluation around the mean, so the result is never negative.
///
/// # Examples
///
/// ```
/// use forecast_core::math::statistics::population_variance;
///
/// assert_eq!(population_variance(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]), Some(4.0));
/// ```
pub fn population_variance(values: &[f64]) -> Option<f64> {
    let mu = mean(values)?;
    let sum_sq: f64 = values.iter().map(|&x| (x - mu) * (x - mu)).sum();
    Some(sum_sq / values.len() as f64)
}

/// Returns a copy of `values` sorted ascending.
///
/// Uses IEEE total ordering so NaN never panics the sort.
pub fn sorted(values: &[f64]) -> Vec<f64> {
    let mut out = values.to_vec();
    out.sort_unstable_by(|a, b| a.total_cmp(b));
    out
}

/// Percentile of already-sorted data by linear interpolation.
///
/// `q` is expressed in percent and must lie in `[0, 100]`.
///
/// # Examples
///
/// ```
/// use forecast_core::math::statistics::percentile;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
/// assert_eq!(percentile(&sorted, 0.0), Some(1.0));
/// assert_eq!(percentile(&sorted, 50.0), Some(5.5));
/// assert_eq!(percentile(&sorted, 100.0), Some(10.0));
/// assert_eq!(percentile(&sorted, 101.0), None);
/// ```
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() || !(0.0..=100.0).contains(&q) {
        return None;
    }

    let rank = q / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        return Some(sorted[lo]);
    }

    let frac = rank - lo as f64;
    let (a, b) = (sorted[lo], sorted[hi]);
    // clamp absorbs rounding so results stay monotone across neighbouring ranks
    Some((a + (b - a) * frac).max(a).min(b))
}
