//! Error types for structured error handling.
//!
//! The engines themselves never return errors: they are pure numerical
//! kernels that propagate NaN or infinity. [`PricingError`] is the vocabulary
//! used by callers when validating inputs before dispatch and when checking
//! engine output afterwards.

use thiserror::Error;

/// Categorised pricing errors.
///
/// # Variants
/// - `InvalidParameter`: A scalar input outside its valid domain
/// - `InvalidConfig`: Lattice or simulation sizing outside its bounds
/// - `NumericalInstability`: An engine produced a non-finite value
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidParameter {
///     name: "volatility",
///     value: -0.2,
/// };
/// assert_eq!(
///     err.to_string(),
///     "Invalid parameter 'volatility' = -0.2: must be positive and finite"
/// );
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum PricingError {
    /// A scalar input outside its valid domain.
    #[error("Invalid parameter '{name}' = {value}: must be positive and finite")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// Rejected value
        value: f64,
    },

    /// Lattice or simulation sizing outside its bounds.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// An engine produced NaN or infinity.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Unrecognised textual name for an enum such as `OptionType`.
    #[error("Unknown {kind} '{value}'")]
    UnknownVariant {
        /// Enum being parsed
        kind: &'static str,
        /// Rejected text
        value: String,
    },
}

/// Checks that an engine result is finite.
///
/// Overflow in the exponentials is propagated by the engines as NaN or
/// infinity; detecting it is the caller's job.
///
/// # Errors
/// Returns `PricingError::NumericalInstability` naming `what` when `value`
/// is NaN or infinite.
///
/// # Examples
/// ```
/// use pricer_core::types::ensure_finite;
///
/// assert_eq!(ensure_finite("price", 10.45).unwrap(), 10.45);
/// assert!(ensure_finite("price", f64::NAN).is_err());
/// ```
pub fn ensure_finite(what: &str, value: f64) -> Result<f64, PricingError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PricingError::NumericalInstability(format!(
            "{} evaluated to {}",
            what, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_display() {
        let err = PricingError::InvalidConfig("steps must be at least 1".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: steps must be at least 1"
        );
    }

    #[test]
    fn test_ensure_finite_rejects_infinity() {
        match ensure_finite("lattice call", f64::INFINITY) {
            Err(PricingError::NumericalInstability(msg)) => {
                assert!(msg.contains("lattice call"));
                assert!(msg.contains("inf"));
            }
            other => panic!("Expected NumericalInstability, got {:?}", other),
        }
    }

    #[test]
    fn test_error_trait_object() {
        let err = PricingError::InvalidParameter {
            name: "spot",
            value: 0.0,
        };
        let _: &dyn std::error::Error = &err;
    }
}
