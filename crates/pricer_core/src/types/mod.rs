//! Core option and error types.
//!
//! This module provides:
//! - `option`: [`OptionParameters`], [`OptionType`] and [`ExerciseStyle`]
//! - `error`: [`PricingError`] for caller-side validation and output checks
//!
//! # Re-exports
//!
//! Commonly used types are re-exported at this module level.

pub mod error;
pub mod option;

pub use error::{ensure_finite, PricingError};
pub use option::{ExerciseStyle, OptionParameters, OptionType};
