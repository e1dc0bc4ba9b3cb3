//! Monte Carlo path simulation.
//!
//! # Architecture
//!
//! ```text
//! PathSimulator
//! ├── SimulationConfig  (days, iterations, seed, parallel)
//! ├── ForecastRng       (one batched normal grid per run)
//! └── generate_gbm_paths()
//!     └── SimulationMatrix (day-major price grid)
//! ```
//!
//! # Examples
//!
//! ```rust
//! use forecast_engine::estimator::ReturnStats;
//! use forecast_engine::mc::simulate;
//!
//! let stats = ReturnStats::new(0.0004, 0.0002, 252).unwrap();
//! let a = simulate(&stats, 100.0, 30, 1_000, Some(7)).unwrap();
//! let b = simulate(&stats, 100.0, 30, 1_000, Some(7)).unwrap();
//! assert_eq!(a, b);
//! ```

pub mod config;
pub mod matrix;
pub mod simulator;

pub use config::{SimulationConfig, SimulationConfigBuilder, DEFAULT_ITERATIONS};
pub use matrix::SimulationMatrix;
pub use simulator::{generate_gbm_paths, simulate, PathSimulator};
