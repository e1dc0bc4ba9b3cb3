//! Estimate command implementation
//!
//! Prints the log-return statistics of the loaded price history without
//! simulating.

use std::path::PathBuf;

use clap::Args;
use forecast_core::Date;
use forecast_engine::estimate;
use tracing::info;

use crate::config::ForecastConfig;
use crate::output::{render_estimate, EstimateReport, OutputFormat};
use crate::{CliError, Result};

/// Arguments for `forecast estimate`
#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Path to the price history CSV
    #[arg(short, long)]
    pub prices: PathBuf,

    /// First observation date to use (inclusive)
    #[arg(long)]
    pub start_date: Option<Date>,

    /// Observation cutoff date (exclusive)
    #[arg(long)]
    pub end_date: Option<Date>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

/// Run the estimate command
pub fn run(args: &EstimateArgs, config: &ForecastConfig) -> Result<()> {
    let report = build_report(args, config)?;
    let rendered = render_estimate(&report, args.format.unwrap_or(config.format))?;
    println!("{}", rendered.trim_end());
    Ok(())
}

pub(crate) fn build_report(args: &EstimateArgs, config: &ForecastConfig) -> Result<EstimateReport> {
    info!("Loading prices from {}", args.prices.display());
    let series = super::load_series(&args.prices, args.start_date, args.end_date, config)?;
    let stats = estimate(&series)?;

    let (first, last) = match (series.dates().first(), series.last()) {
        (Some(first), Some(last)) => (*first, last),
        _ => return Err(CliError::invalid_argument("price history is empty")),
    };

    Ok(EstimateReport {
        first_date: first,
        last_date: last.date,
        last_price: last.price,
        stats,
    })
}
