//! # pricer_engines: Vanilla Option Pricing Engines
//!
//! ## Layer 3 (Engines) Role
//!
//! Three independent numerical methods over one scalar parameter set:
//! - [`analytical`]: Black-Scholes closed form with Greeks
//! - [`lattice`]: Cox-Ross-Rubinstein binomial tree with early exercise
//! - [`mc`]: Monte Carlo with antithetic variates
//!
//! Supporting modules:
//! - [`rng`]: seedable generator handle passed into every simulation call
//! - [`greeks`]: `PriceResult` and `GreeksResult`
//!
//! ## Engine Contract
//!
//! Engines are pure functions. They do not validate inputs, do not log and
//! hold no state between calls. S, K, T and σ must be strictly positive;
//! overflow surfaces as NaN or infinity in the result. Use
//! [`OptionParameters::validated`](pricer_core::types::OptionParameters::validated)
//! before dispatch and [`ensure_finite`](pricer_core::types::ensure_finite)
//! after.
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::types::{ExerciseStyle, OptionType};
//! use pricer_engines::rng::PricerRng;
//! use pricer_engines::{closed_form, lattice, simulate};
//!
//! let bs = closed_form(100.0, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//! let bt = lattice(100.0, 100.0, 1.0, 0.05, 0.2, 500, OptionType::Call, ExerciseStyle::European);
//!
//! let mut rng = PricerRng::from_seed(42);
//! let mc = simulate(100.0, 100.0, 1.0, 0.05, 0.2, 200_000, OptionType::Call, &mut rng);
//!
//! assert!((bs - bt).abs() < 0.01);
//! assert!((bs - mc).abs() < 0.15);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for `PriceResult` and `GreeksResult`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod greeks;
pub mod lattice;
pub mod mc;
pub mod rng;

use pricer_core::types::{ExerciseStyle, OptionType};

pub use greeks::{GreeksResult, PriceResult};
pub use rng::PricerRng;

/// Black-Scholes price of a European option.
///
/// T ≤ 0 or σ ≤ 0 returns the discounted intrinsic value.
#[inline]
pub fn closed_form(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> f64 {
    analytical::price(spot, strike, maturity, rate, volatility, option_type)
}

/// Black-Scholes price with Delta, Gamma, Vega, Theta and Rho.
///
/// Greeks are NaN on the degenerate branch (T ≤ 0 or σ ≤ 0).
#[inline]
pub fn closed_form_with_greeks(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    option_type: OptionType,
) -> GreeksResult<f64> {
    analytical::greeks(spot, strike, maturity, rate, volatility, option_type)
}

/// CRR binomial price with `steps` time steps (≥ 1).
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn lattice(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    steps: usize,
    option_type: OptionType,
    style: ExerciseStyle,
) -> f64 {
    lattice::price(spot, strike, maturity, rate, volatility, steps, option_type, style)
}

/// Antithetic Monte Carlo price over `paths` terminal prices.
///
/// Odd `paths` are rounded up to the next even number.
#[allow(clippy::too_many_arguments)]
#[inline]
pub fn simulate(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    paths: usize,
    option_type: OptionType,
    rng: &mut PricerRng,
) -> f64 {
    mc::price(spot, strike, maturity, rate, volatility, paths, option_type, rng)
}
