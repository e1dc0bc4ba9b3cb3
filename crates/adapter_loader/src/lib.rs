//! # adapter_loader: Historical Price Input
//!
//! ## Adapter Layer Role
//!
//! Supplies the forecaster with a [`PriceSeries`](forecast_core::PriceSeries)
//! fetched exactly once at the application boundary. The core never performs
//! I/O; everything it needs arrives through a [`PriceSource`].
//!
//! - [`PriceSource`]: provider contract
//! - [`DateRange`]: half-open `[start, end)` observation window
//! - [`CsvPriceSource`]: dated closing prices from a CSV file or reader
//!
//! No caching and no retries are performed here.
//!
//! ## Usage Example
//!
//! ```rust
//! use adapter_loader::{CsvPriceSource, DateRange, PriceSource};
//!
//! let csv = "date,close,adj_close\n2024-01-02,101.0,100.0\n2024-01-03,103.0,102.0\n";
//! let source = CsvPriceSource::from_string(csv);
//! let series = source.load(&DateRange::unbounded()).unwrap();
//! assert_eq!(series.prices(), &[100.0, 102.0]);
//! ```

pub mod csv_source;
pub mod error;
pub mod source;

pub use csv_source::{CsvPriceSource, DEFAULT_PRICE_COLUMN, FALLBACK_PRICE_COLUMN};
pub use error::LoaderError;
pub use source::{DateRange, PriceSource};
