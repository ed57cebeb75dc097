//! Engine result types.
//!
//! - [`PriceResult`]: price plus an optional standard error (simulation only)
//! - [`GreeksResult`]: closed-form price with Delta, Gamma, Vega, Theta, Rho

mod result;

pub use result::{GreeksResult, PriceResult};
