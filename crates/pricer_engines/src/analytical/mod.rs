//! Analytical (closed-form) pricing.
//!
//! # Available Solutions
//!
//! - **Black-Scholes**: European call/put price and Greeks, O(1)
//!
//! # Usage
//!
//! ```rust
//! use pricer_core::types::OptionType;
//! use pricer_engines::analytical::{greeks, price};
//!
//! let call = price(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
//! let put_greeks = greeks(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Put);
//!
//! // Put-call parity: C - P = S - K·e^(-rT)
//! let parity = call - put_greeks.price - (100.0 - 100.0 * (-0.05_f64).exp());
//! assert!(parity.abs() < 1e-6);
//! ```

pub mod black_scholes;

pub use black_scholes::{d1_d2, greeks, greeks_params, price, price_params};
