//! # pricer_core: Foundation Types for Vanilla Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace and provides:
//! - Scalar option inputs: [`OptionParameters`](types::OptionParameters)
//! - Contract descriptors: [`OptionType`](types::OptionType),
//!   [`ExerciseStyle`](types::ExerciseStyle)
//! - Caller-side validation errors: [`PricingError`](types::PricingError)
//! - Standard normal distribution functions (`math::distributions`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::math::distributions::norm_cdf;
//! use pricer_core::types::{OptionParameters, OptionType};
//!
//! let params = OptionParameters::validated(100.0, 100.0, 1.0, 0.05, 0.2).unwrap();
//! assert!((params.discount_factor() - (-0.05_f64).exp()).abs() < 1e-15);
//!
//! assert_eq!(OptionType::Put.payoff(90.0, 100.0), 10.0);
//! assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for OptionType, ExerciseStyle and OptionParameters

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod types;
