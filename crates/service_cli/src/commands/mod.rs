//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod estimate;
pub mod run;

use std::path::Path;

use adapter_loader::{CsvPriceSource, DateRange, PriceSource};
use forecast_core::{Date, PriceSeries};

use crate::config::ForecastConfig;
use crate::Result;

/// Load the price history once, at the boundary.
pub(crate) fn load_series(
    prices: &Path,
    start: Option<Date>,
    end: Option<Date>,
    config: &ForecastConfig,
) -> Result<PriceSeries> {
    let range = DateRange::new(start, end)?;
    let mut source = CsvPriceSource::from_path(prices);
    if let Some(column) = &config.price_column {
        source = source.with_price_column(column.clone());
    }
    Ok(source.load(&range)?)
}
