//! CSV price source.
//!
//! Expects a header row with a `date` column (YYYY-MM-DD) and a price
//! column. The price column defaults to `adj_close` and falls back to
//! `close` when the adjusted column is absent. Header matching ignores case
//! and surrounding whitespace, and treats spaces as underscores, so
//! `Adj Close` matches `adj_close`.

use std::io::Read;
use std::path::PathBuf;

use forecast_core::{Date, PricePoint, PriceSeries};
use tracing::{debug, info};

use crate::error::LoaderError;
use crate::source::{DateRange, PriceSource};

/// Preferred price column.
pub const DEFAULT_PRICE_COLUMN: &str = "adj_close";

/// Column used when the preferred one is absent.
pub const FALLBACK_PRICE_COLUMN: &str = "close";

const DATE_COLUMN: &str = "date";

#[derive(Clone, Debug)]
enum Input {
    File(PathBuf),
    Inline(String),
}

/// Loads dated prices from CSV.
#[derive(Clone, Debug)]
pub struct CsvPriceSource {
    input: Input,
    price_column: Option<String>,
}

impl CsvPriceSource {
    /// Reads from a file on each [`load`](PriceSource::load).
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            input: Input::File(path.into()),
            price_column: None,
        }
    }

    /// Reads from in-memory CSV text.
    pub fn from_string(content: impl Into<String>) -> Self {
        Self {
            input: Input::Inline(content.into()),
            price_column: None,
        }
    }

    /// Uses an explicit price column, disabling the fallback.
    pub fn with_price_column(mut self, column: impl Into<String>) -> Self {
        self.price_column = Some(column.into());
        self
    }

    fn read_from<R: Read>(&self, reader: R, range: &DateRange) -> Result<PriceSeries, LoaderError> {
        let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
        let headers = reader.headers()?.clone();

        let date_idx = find_column(&headers, DATE_COLUMN)?;
        let price_idx = match &self.price_column {
            Some(column) => find_column(&headers, column)?,
            None => find_column(&headers, DEFAULT_PRICE_COLUMN)
                .or_else(|_| find_column(&headers, FALLBACK_PRICE_COLUMN))?,
        };

        let mut points = Vec::new();
        let mut skipped = 0usize;

        for result in reader.records() {
            let record = result?;
            let line = record.position().map_or(0, |p| p.line());

            let date_field = record.get(date_idx).unwrap_or_default();
            let date = Date::parse(date_field)
                .map_err(|e| LoaderError::parse(line, e.to_string()))?;

            if !range.contains(date) {
                skipped += 1;
                continue;
            }

            let price_field = record.get(price_idx).unwrap_or_default();
            let price: f64 = price_field.parse().map_err(|_| {
                LoaderError::parse(line, format!("price '{}' is not a number", price_field))
            })?;

            points.push(PricePoint::new(date, price));
        }

        debug!(rows = points.len(), skipped, "parsed price rows");

        if points.is_empty() {
            return Err(LoaderError::NoData(range.to_string()));
        }

        Ok(PriceSeries::new(points)?)
    }
}

impl PriceSource for CsvPriceSource {
    fn name(&self) -> String {
        match &self.input {
            Input::File(path) => format!("csv:{}", path.display()),
            Input::Inline(_) => "csv:<inline>".to_string(),
        }
    }

    fn load(&self, range: &DateRange) -> Result<PriceSeries, LoaderError> {
        let series = match &self.input {
            Input::File(path) => {
                let file = std::fs::File::open(path)?;
                self.read_from(file, range)?
            }
            Input::Inline(content) => self.read_from(content.as_bytes(), range)?,
        };

        info!(
            source = %self.name(),
            range = %range,
            observations = series.len(),
            "loaded price history"
        );
        Ok(series)
    }
}

fn normalise(header: &str) -> String {
    header.trim().to_lowercase().replace(' ', "_")
}

fn find_column(headers: &csv::StringRecord, column: &str) -> Result<usize, LoaderError> {
    let wanted = normalise(column);
    headers
        .iter()
        .position(|h| normalise(h) == wanted)
        .ok_or_else(|| LoaderError::MissingColumn {
            column: column.to_string(),
            available: headers.iter().collect::<Vec<_>>().join(","),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use forecast_core::ForecastError;

    const SAMPLE: &str = "\
Date,Open,Close,Adj Close
2023-12-27,99.0,100.0,99.5
2023-12-28,100.0,102.0,101.5
2023-12-29,102.0,101.0,100.5
2024-01-02,101.0,105.0,104.5
";

    #[test]
    fn test_prefers_adjusted_close() {
        let series = CsvPriceSource::from_string(SAMPLE)
            .load(&DateRange::unbounded())
            .unwrap();
        assert_eq!(series.prices(), &[99.5, 101.5, 100.5, 104.5]);
        assert_eq!(series.last_date(), Some(Date::parse("2024-01-02").unwrap()));
    }

    #[test]
    fn test_falls_back_to_close() {
        let csv = "date,close\n2024-01-02,10.0\n2024-01-03,11.0\n";
        let series = CsvPriceSource::from_string(csv)
            .load(&DateRange::unbounded())
            .unwrap();
        assert_eq!(series.prices(), &[10.0, 11.0]);
    }

    #[test]
    fn test_explicit_column() {
        let series = CsvPriceSource::from_string(SAMPLE)
            .with_price_column("open")
            .load(&DateRange::unbounded())
            .unwrap();
        assert_eq!(series.prices()[0], 99.0);
    }

    #[test]
    fn test_explicit_missing_column() {
        let result = CsvPriceSource::from_string(SAMPLE)
            .with_price_column("volume")
            .load(&DateRange::unbounded());
        assert!(matches!(result, Err(LoaderError::MissingColumn { .. })));
    }

    #[test]
    fn test_range_end_is_exclusive() {
        let range = DateRange::new(None, Some(Date::parse("2024-01-01").unwrap())).unwrap();
        let series = CsvPriceSource::from_string(SAMPLE).load(&range).unwrap();
        assert_eq!(series.len(), 3);
    }

    #[test]
    fn test_empty_range_is_no_data() {
        let range = DateRange::new(Some(Date::parse("2030-01-01").unwrap()), None).unwrap();
        let result = CsvPriceSource::from_string(SAMPLE).load(&range);
        assert!(matches!(result, Err(LoaderError::NoData(_))));
    }

    #[test]
    fn test_bad_price_reports_line() {
        let csv = "date,close\n2024-01-02,10.0\n2024-01-03,n/a\n";
        let err = CsvPriceSource::from_string(csv)
            .load(&DateRange::unbounded())
            .unwrap_err();
        match err {
            LoaderError::Parse { line, message } => {
                assert_eq!(line, 3);
                assert!(message.contains("n/a"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_out_of_order_rows_rejected() {
        let csv = "date,close\n2024-01-03,10.0\n2024-01-02,11.0\n";
        let result = CsvPriceSource::from_string(csv).load(&DateRange::unbounded());
        assert!(matches!(
            result,
            Err(LoaderError::Series(ForecastError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_name() {
        assert_eq!(CsvPriceSource::from_string("").name(), "csv:<inline>");
        assert_eq!(
            CsvPriceSource::from_path("prices/aapl.csv").name(),
            "csv:prices/aapl.csv"
        );
    }
}
