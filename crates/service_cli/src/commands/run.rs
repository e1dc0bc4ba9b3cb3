//! Run command implementation
//!
//! Loads the price history, then estimates, simulates and summarises the
//! terminal price distribution for the requested horizon.

use std::path::PathBuf;

use clap::Args;
use forecast_core::Date;
use forecast_engine::{horizon_days, Forecaster, SimulationConfig};
use tracing::info;

use crate::config::ForecastConfig;
use crate::output::{render_run, OutputFormat, RunReport};
use crate::{CliError, Result};

/// Arguments for `forecast run`
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Path to the price history CSV
    #[arg(short, long)]
    pub prices: PathBuf,

    /// Prediction date (YYYY-MM-DD), after the last observation
    #[arg(short, long, conflicts_with = "days", required_unless_present = "days")]
    pub target_date: Option<Date>,

    /// Horizon in days from the last observation
    #[arg(short, long)]
    pub days: Option<usize>,

    /// First observation date to use (inclusive)
    #[arg(long)]
    pub start_date: Option<Date>,

    /// Observation cutoff date (exclusive)
    #[arg(long)]
    pub end_date: Option<Date>,

    /// Number of simulated paths
    #[arg(short, long)]
    pub iterations: Option<usize>,

    /// Random seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Step paths on a single thread
    #[arg(long)]
    pub sequential: bool,
}

/// Run the forecast command
pub fn run(args: &RunArgs, config: &ForecastConfig) -> Result<()> {
    let report = build_report(args, config)?;
    let rendered = render_run(&report, args.format.unwrap_or(config.format))?;
    println!("{}", rendered.trim_end());
    Ok(())
}

pub(crate) fn build_report(args: &RunArgs, config: &ForecastConfig) -> Result<RunReport> {
    info!("Loading prices from {}", args.prices.display());
    let series = super::load_series(&args.prices, args.start_date, args.end_date, config)?;

    let last_date = series
        .last_date()
        .ok_or_else(|| CliError::invalid_argument("price history is empty"))?;

    let (target_date, horizon) = match (args.target_date, args.days) {
        (Some(target), _) => (target, horizon_days(last_date, target)?),
        (None, Some(days)) => {
            let target = i64::try_from(days)
                .ok()
                .and_then(|offset| last_date.checked_add_days(offset))
                .ok_or_else(|| {
                    CliError::invalid_argument(format!("--days {} is too large", days))
                })?;
            (target, days)
        }
        (None, None) => {
            return Err(CliError::invalid_argument(
                "either --target-date or --days is required",
            ))
        }
    };

    let sim_config = SimulationConfig::builder()
        .days(horizon)
        .iterations(args.iterations.unwrap_or(config.iterations))
        .seed_opt(args.seed.or(config.seed))
        .parallel(config.parallel && !args.sequential)
        .build()?;

    info!(
        "Forecasting {} ({} days, {} paths)",
        target_date,
        horizon,
        sim_config.iterations()
    );

    let forecast = Forecaster::new(sim_config).run(series)?;

    Ok(RunReport {
        target_date,
        horizon_days: horizon,
        forecast,
    })
}
