//! Historical price series.
//!
//! A [`PriceSeries`] is the immutable, chronologically ordered input of the
//! return estimator. Dates and prices are stored in separate contiguous
//! buffers so the estimator can operate on a plain `&[f64]`.
//!
//! Construction enforces strictly increasing dates and finite prices. Price
//! signs are checked by the estimator, which reports the first non-positive
//! price as [`ForecastError::InvalidInput`].

use super::error::ForecastError;
use super::time::Date;

/// A single dated price observation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PricePoint {
    /// Observation date.
    pub date: Date,
    /// Observed (typically adjusted close) price.
    pub price: f64,
}

impl PricePoint {
    /// Creates a new price point.
    #[inline]
    pub fn new(date: Date, price: f64) -> Self {
        Self { date, price }
    }
}

/// Chronologically ordered sequence of (date, price) observations.
///
/// # Examples
///
/// ```rust
/// use forecast_core::types::{Date, PricePoint, PriceSeries};
///
/// let d = |day| Date::from_ymd(2024, 1, day).unwrap();
/// let series = PriceSeries::new(vec![
///     PricePoint::new(d(2), 100.0),
///     PricePoint::new(d(3), 102.0),
///     PricePoint::new(d(4), 101.0),
/// ])
/// .unwrap();
///
/// assert_eq!(series.prices(), &[100.0, 102.0, 101.0]);
/// assert_eq!(series.last_date(), Some(d(4)));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PriceSeries {
    dates: Vec<Date>,
    prices: Vec<f64>,
}

impl PriceSeries {
    /// Builds a series from observations.
    ///
    /// # Errors
    ///
    /// Returns `ForecastError::InvalidInput` if dates are not strictly
    /// increasing or a price is NaN/infinite.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, ForecastError> {
        let mut dates = Vec::with_capacity(points.len());
        let mut prices = Vec::with_capacity(points.len());

        for (idx, point) in points.into_iter().enumerate() {
            if !point.price.is_finite() {
                return Err(ForecastError::invalid_input(format!(
                    "price {} on {} (index {}) is not finite",
                    point.price, point.date, idx
                )));
            }
            if let Some(&previous) = dates.last() {
                if point.date <= previous {
                    return Err(ForecastError::invalid_input(format!(
                        "dates must be strictly increasing: {} follows {} (index {})",
                        point.date, previous, idx
                    )));
                }
            }
            dates.push(point.date);
            prices.push(point.price);
        }

        Ok(Self { dates, prices })
    }

    /// Builds a series of consecutive calendar days starting at `start`.
    ///
    /// Convenient when only the price sequence matters.
    pub fn from_daily_prices(start: Date, prices: &[f64]) -> Result<Self, ForecastError> {
        let points = prices
            .iter()
            .enumerate()
            .map(|(offset, &price)| PricePoint::new(start.add_days(offset as i64), price))
            .collect();
        Self::new(points)
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns `true` if the series holds no observations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Prices in chronological order.
    #[inline]
    pub fn prices(&self) -> &[f64] {
        &self.prices
    }

    /// Observation dates in chronological order.
    #[inline]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Most recent observation.
    pub fn last(&self) -> Option<PricePoint> {
        match (self.dates.last(), self.prices.last()) {
            (Some(&date), Some(&price)) => Some(PricePoint::new(date, price)),
            _ => None,
        }
    }

    /// Most recent price.
    #[inline]
    pub fn last_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Most recent observation date.
    #[inline]
    pub fn last_date(&self) -> Option<Date> {
        self.dates.last().copied()
    }

    /// Iterates over observations in chronological order.
    pub fn iter(&self) -> impl Iterator<Item = PricePoint> + '_ {
        self.dates
            .iter()
            .zip(self.prices.iter())
            .map(|(&date, &price)| PricePoint::new(date, price))
    }
}
