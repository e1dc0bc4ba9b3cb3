//! Integration tests for module exports.
//!
//! Verifies that the public modules and types are reachable via absolute
//! paths and through the crate-root re-exports.

use chrono::NaiveDate;

#[test]
fn test_types_module_exports() {
    use forecast_core::types::error::{DateError, ForecastError};
    use forecast_core::types::series::{PricePoint, PriceSeries};
    use forecast_core::types::time::Date;

    let date: Date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().into();
    let series = PriceSeries::new(vec![PricePoint::new(date, 50.0)]).unwrap();
    assert_eq!(series.last_date(), Some(date));

    let _: ForecastError = ForecastError::EmptyMatrix;
    let _: DateError = DateError::ParseError(String::new());
}

#[test]
fn test_crate_root_reexports() {
    use forecast_core::{Date, ForecastError, PricePoint, PriceSeries};

    let start = Date::from_ymd(2024, 3, 1).unwrap();
    let series = PriceSeries::from_daily_prices(start, &[1.0, 2.0]).unwrap();
    let last: PricePoint = series.last().unwrap();
    assert_eq!(last.price, 2.0);

    let err = PriceSeries::from_daily_prices(start, &[f64::NAN]).unwrap_err();
    assert!(matches!(err, ForecastError::InvalidInput(_)));
}

#[test]
fn test_statistics_module_exports() {
    use forecast_core::math::statistics::{mean, percentile, population_variance, sorted};

    let data = sorted(&[4.0, 1.0, 3.0, 2.0]);
    assert_eq!(mean(&data), Some(2.5));
    assert_eq!(population_variance(&data), Some(1.25));
    assert_eq!(percentile(&data, 50.0), Some(2.5));
}
