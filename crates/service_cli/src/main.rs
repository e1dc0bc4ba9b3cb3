//! Forecast CLI - Monte Carlo Stock Price Forecasting
//!
//! Operational entry point for the forecaster.
//!
//! # Commands
//!
//! - `forecast run --prices <csv> --target-date <date>` - Simulate the
//!   price distribution on a future date
//! - `forecast estimate --prices <csv>` - Print log-return statistics
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate fetches the price history
//! once through `adapter_loader` and hands it to the pure `forecast_engine`
//! pipeline.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::estimate::EstimateArgs;
use commands::run::RunArgs;
use config::ForecastConfig;

/// Monte Carlo stock price forecaster
#[derive(Parser)]
#[command(name = "forecast")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "forecast.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Forecast the price distribution on a future date
    Run(RunArgs),

    /// Print log-return statistics of the price history
    Estimate(EstimateArgs),
}

fn init_tracing(log_level: &str, verbose: bool) -> Result<()> {
    // RUST_LOG wins over the configured level
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let level = if verbose { "debug" } else { log_level };
            EnvFilter::try_new(level).map_err(|e| CliError::Logging(e.to_string()))?
        }
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()
        .map_err(|e| CliError::Logging(e.to_string()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = ForecastConfig::resolve(&cli.config)?;
    init_tracing(&config.log_level, cli.verbose)?;
    debug!(?config, "configuration resolved");

    match &cli.command {
        Commands::Run(args) => commands::run::run(args, &config),
        Commands::Estimate(args) => commands::estimate::run(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_run_with_target_date() {
        let cli = Cli::try_parse_from([
            "forecast",
            "run",
            "--prices",
            "aapl.csv",
            "--target-date",
            "2024-03-01",
            "--seed",
            "42",
            "--format",
            "json",
        ])
        .unwrap();

        assert_eq!(cli.config, PathBuf::from("forecast.toml"));
        match cli.command {
            Commands::Run(args) => {
                let expected = forecast_core::Date::from_ymd(2024, 3, 1).unwrap();
                assert_eq!(args.target_date, Some(expected));
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.format, Some(output::OutputFormat::Json));
                assert!(!args.sequential);
            }
            Commands::Estimate(_) => panic!("expected run"),
        }
    }

    #[test]
    fn test_run_requires_horizon() {
        assert!(Cli::try_parse_from(["forecast", "run", "--prices", "a.csv"]).is_err());
    }

    #[test]
    fn test_target_date_conflicts_with_days() {
        let result = Cli::try_parse_from([
            "forecast",
            "run",
            "--prices",
            "a.csv",
            "--target-date",
            "2024-03-01",
            "--days",
            "5",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_date_rejected() {
        let result = Cli::try_parse_from([
            "forecast",
            "run",
            "--prices",
            "a.csv",
            "--target-date",
            "03/01/2024",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_estimate_global_flags() {
        let cli = Cli::try_parse_from([
            "forecast",
            "estimate",
            "--prices",
            "a.csv",
            "--config",
            "custom.toml",
            "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
        assert!(matches!(cli.command, Commands::Estimate(_)));
    }
}
