//! Report rendering (text and JSON).

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use forecast_core::Date;
use forecast_engine::{Forecast, ReturnStats};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Report output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{}'. Supported: text, json", other)),
        }
    }
}

/// Outcome of `forecast run`
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    /// Date the forecast is for
    pub target_date: Date,
    /// Calendar days between last observation and target
    pub horizon_days: usize,
    /// Pipeline result
    pub forecast: Forecast,
}

/// Outcome of `forecast estimate`
#[derive(Debug, Clone, Serialize)]
pub struct EstimateReport {
    /// First observation used
    pub first_date: Date,
    /// Last observation used
    pub last_date: Date,
    /// Last observed price
    pub last_price: f64,
    /// Log-return statistics
    pub stats: ReturnStats,
}

/// Render a forecast report
pub fn render_run(report: &RunReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(report.to_string()),
    }
}

/// Render a statistics report
pub fn render_estimate(report: &EstimateReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        OutputFormat::Text => Ok(report.to_string()),
    }
}

impl fmt::Display for RunReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let forecast = &self.forecast;
        let summary = &forecast.summary;
        let (low, high) = summary.band_90();
        let (q1, q3) = summary.interquartile();

        writeln!(
            f,
            "Forecast for {} ({} days after {})",
            self.target_date, self.horizon_days, forecast.last_date
        )?;
        writeln!(
            f,
            "  Paths:              {} (seed {})",
            forecast.iterations, forecast.seed
        )?;
        writeln!(f, "  Last price:         ${:.2}", forecast.last_price)?;
        writeln!(
            f,
            "  Daily log return:   mean {:.6}, stddev {:.6}",
            forecast.stats.mean(),
            forecast.stats.stddev()
        )?;
        writeln!(f)?;
        writeln!(f, "  Expected price:     ${:.2}", summary.mean)?;
        writeln!(f, "  90% range:          ${:.2} to ${:.2}", low, high)?;
        writeln!(
            f,
            "  95% confidence:     will not exceed ${:.2}",
            summary.upper_95()
        )?;
        writeln!(
            f,
            "  Quartiles:          ${:.2} / ${:.2} / ${:.2}",
            q1, summary.percentiles.p50, q3
        )
    }
}

impl fmt::Display for EstimateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stats = &self.stats;

        writeln!(
            f,
            "Log returns {} to {} ({} returns)",
            self.first_date,
            self.last_date,
            stats.count()
        )?;
        writeln!(f, "  Last price:   ${:.2}", self.last_price)?;
        writeln!(f, "  Mean:         {:.6}", stats.mean())?;
        writeln!(f, "  Variance:     {:.6}", stats.variance())?;
        writeln!(f, "  Stddev:       {:.6}", stats.stddev())?;
        writeln!(f, "  Drift:        {:.6}", stats.drift())
    }
}
