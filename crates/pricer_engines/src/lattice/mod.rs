//! Binomial lattice engine.
//!
//! Cox-Ross-Rubinstein tree with backward induction and an optional
//! early-exercise check at every node. O(steps²) time, O(steps) space.
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::types::{ExerciseStyle, OptionParameters, OptionType};
//! use pricer_engines::lattice::{price_with_config, LatticeConfig};
//!
//! let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
//! let config = LatticeConfig::new(200).unwrap();
//! let put = price_with_config(&params, &config, OptionType::Put, ExerciseStyle::American);
//! assert!(put > 6.0);
//! ```

mod binomial;
mod config;

pub use binomial::{price, price_with_config, BinomialTree};
pub use config::{LatticeConfig, LatticeConfigError, MAX_LATTICE_STEPS};
