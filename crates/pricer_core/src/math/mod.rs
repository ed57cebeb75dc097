//! Mathematical building blocks shared by the pricing engines.
//!
//! - `distributions`: Standard normal CDF and PDF, generic over `T: Float`

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
