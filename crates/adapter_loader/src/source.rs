//! Price provider contract.

use std::fmt;

use forecast_core::{Date, PriceSeries};

use crate::error::LoaderError;

/// Half-open observation window `[start, end)`.
///
/// Either bound may be open. The end bound is exclusive, matching how
/// historical downloads are usually requested.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DateRange {
    /// Inclusive lower bound.
    pub start: Option<Date>,
    /// Exclusive upper bound.
    pub end: Option<Date>,
}

impl DateRange {
    /// Creates a range, rejecting `start >= end`.
    pub fn new(start: Option<Date>, end: Option<Date>) -> Result<Self, LoaderError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s >= e {
                return Err(LoaderError::InvalidRange(format!(
                    "start {} must precede end {}",
                    s, e
                )));
            }
        }
        Ok(Self { start, end })
    }

    /// Range accepting every date.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Returns `true` if `date` falls inside the window.
    pub fn contains(&self, date: Date) -> bool {
        self.start.map_or(true, |s| date >= s) && self.end.map_or(true, |e| date < e)
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let start = self.start.map_or_else(|| "..".to_string(), |d| d.to_string());
        let end = self.end.map_or_else(|| "..".to_string(), |d| d.to_string());
        write!(f, "[{}, {})", start, end)
    }
}

/// Supplier of historical price series.
///
/// Implementations return prices in chronological order; validation of
/// ordering and finiteness happens in [`PriceSeries::new`].
pub trait PriceSource {
    /// Human-readable identifier used in logs.
    fn name(&self) -> String;

    /// Loads every observation inside `range`.
    ///
    /// # Errors
    ///
    /// [`LoaderError::NoData`] if the window is empty; other variants for
    /// I/O, format or series-invariant failures.
    fn load(&self, range: &DateRange) -> Result<PriceSeries, LoaderError>;
}
