//! Calendar date type for price history and forecast horizons.
//!
//! # Examples
//!
//! ```
//! use forecast_core::types::time::Date;
//!
//! let last_close = Date::from_ymd(2023, 12, 29).unwrap();
//! let target = Date::parse("2024-03-01").unwrap();
//! assert_eq!(target - last_close, 63);
//! ```

use chrono::{Datelike, Duration, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;

use super::error::DateError;

/// Type-safe date wrapper around chrono::NaiveDate.
///
/// Provides ISO 8601 parsing/formatting and day arithmetic.
///
/// # Examples
///
/// ```
/// use forecast_core::types::time::Date;
///
/// let date = Date::from_ymd(2024, 6, 15).unwrap();
/// assert_eq!(date.year(), 2024);
///
/// let parsed: Date = "2024-06-15".parse().unwrap();
/// assert_eq!(date, parsed);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a Date from year, month, and day components.
    ///
    /// # Returns
    /// `Ok(Date)` if the date is valid, `Err(DateError::InvalidDate)` otherwise.
    ///
    /// ```
    /// use forecast_core::types::time::Date;
    ///
    /// assert!(Date::from_ymd(2024, 2, 29).is_ok());
    /// assert!(Date::from_ymd(2024, 2, 30).is_err());
    /// ```
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or(DateError::InvalidDate { year, month, day })
    }

    /// Parses a date from ISO 8601 format string (YYYY-MM-DD).
    ///
    /// ```
    /// use forecast_core::types::time::Date;
    ///
    /// assert!(Date::parse("2024-06-15").is_ok());
    /// assert!(Date::parse("15/06/2024").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|e| DateError::ParseError(format!("'{}': {}", s, e)))
    }

    /// Returns the date `days` calendar days later.
    ///
    /// Negative values move backwards. Panics outside chrono's date range;
    /// see [`Date::checked_add_days`].
    pub fn add_days(self, days: i64) -> Self {
        Date(self.0 + Duration::days(days))
    }

    /// Like [`Date::add_days`], returning `None` on overflow.
    pub fn checked_add_days(self, days: i64) -> Option<Self> {
        let delta = Duration::try_days(days)?;
        self.0.checked_add_signed(delta).map(Date)
    }

    /// Returns the year component.
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }
}

impl Sub for Date {
    type Output = i64;

    /// Returns the number of calendar days between two dates.
    ///
    /// The result is positive if `self` is after `other`.
    fn sub(self, other: Self) -> Self::Output {
        (self.0 - other.0).num_days()
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display_round_trip() {
        let date = Date::parse("2023-12-29").unwrap();
        assert_eq!(date.to_string(), "2023-12-29");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let date = Date::parse(" 2024-01-02 ").unwrap();
        assert_eq!(date, Date::from_ymd(2024, 1, 2).unwrap());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Date::parse("yesterday").unwrap_err();
        assert!(matches!(err, DateError::ParseError(_)));
        assert!(err.to_string().contains("yesterday"));
    }

    #[test]
    fn test_sub_counts_calendar_days() {
        let start = Date::from_ymd(2024, 2, 28).unwrap();
        let end = Date::from_ymd(2024, 3, 1).unwrap();
        assert_eq!(end - start, 2); // leap year
        assert_eq!(start - end, -2);
    }

    #[test]
    fn test_add_days() {
        let date = Date::from_ymd(2023, 12, 31).unwrap();
        assert_eq!(date.add_days(1), Date::from_ymd(2024, 1, 1).unwrap());
        assert_eq!(date.add_days(-31), Date::from_ymd(2023, 11, 30).unwrap());
    }

    #[test]
    fn test_checked_add_days_overflow() {
        let date = Date::from_ymd(2024, 1, 1).unwrap();
        assert_eq!(date.checked_add_days(366), Some(Date::from_ymd(2025, 1, 1).unwrap()));
        assert_eq!(date.checked_add_days(i64::MAX), None);
        assert_eq!(date.checked_add_days(1_000_000_000), None);
    }

    #[test]
    fn test_ordering() {
        let a = Date::from_ymd(2024, 1, 1).unwrap();
        let b = Date::from_ymd(2024, 1, 2).unwrap();
        assert!(a < b);
    }
}
