//! # Random Number Generation
//!
//! The simulation engine never touches a global random source. Every call
//! receives a [`PricerRng`] handle from its caller, which makes runs
//! reproducible whenever the handle was seeded.
//!
//! ## Usage Example
//!
//! ```rust
//! use pricer_engines::rng::PricerRng;
//!
//! // Create a seeded RNG for reproducible simulations
//! let mut rng = PricerRng::from_seed(12345);
//!
//! // Standard normal variate (mean=0, std=1)
//! let z = rng.gen_normal();
//! # let _ = z;
//!
//! // Raw 64-bit seed for a child generator
//! let child = PricerRng::from_seed(rng.next_seed());
//! # let _ = child;
//! ```
//!
//! Normal variates come from the Ziggurat sampler in
//! `rand_distr::StandardNormal`.

mod prng;

pub use prng::{derive_stream_seed, PricerRng};
