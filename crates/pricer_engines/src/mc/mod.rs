//! Monte Carlo engine with antithetic variates.
//!
//! Simulates terminal prices under geometric Brownian motion in a single
//! step and discounts the average payoff. O(paths) time, O(1) space.
//!
//! # Architecture
//!
//! - [`price`] / [`price_with_stats`]: sequential, caller-supplied [`PricerRng`]
//! - [`price_parallel`]: rayon fold/reduce over seeded chunks
//! - [`price_with_config`]: dispatch from a validated [`SimulationConfig`]
//!
//! [`PricerRng`]: crate::rng::PricerRng
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::types::{OptionParameters, OptionType};
//! use pricer_engines::mc::{price_with_config, SimulationConfig};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let config = SimulationConfig::builder()
//!     .n_paths(100_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let result = price_with_config(&params, &config, OptionType::Call);
//! assert!((result.price - 10.4506).abs() < 4.0 * result.std_error.unwrap());
//! ```

mod antithetic;
mod config;
mod error;
mod parallel;

pub use antithetic::{price, price_with_stats};
pub use config::{SimulationConfig, SimulationConfigBuilder, MAX_SIMULATION_PATHS};
pub use error::ConfigError;
pub use parallel::{price_parallel, price_with_config, PAIRS_PER_CHUNK};
