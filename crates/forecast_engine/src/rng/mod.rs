//! # Random Number Generation
//!
//! Seeded pseudo-random number generation for the path simulator.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: every generator records its seed; the same seed
//!   always yields the same sequence
//! - **Batching**: the simulator draws its whole normal grid with a single
//!   [`ForecastRng::fill_normal`] call into a pre-allocated slice
//! - **Explicit state**: the generator is passed into the simulator, never
//!   held in a global
//!
//! ## Usage Example
//!
//! ```rust
//! use forecast_engine::rng::ForecastRng;
//!
//! let mut rng = ForecastRng::from_seed(12345);
//! let mut grid = vec![0.0; 1000];
//! rng.fill_normal(&mut grid);
//! ```

mod prng;

pub use prng::ForecastRng;
