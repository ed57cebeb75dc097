//! Lattice sizing.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Maximum number of time steps accepted by [`LatticeConfig::new`].
pub const MAX_LATTICE_STEPS: usize = 9_999;

/// Configuration error for the lattice engine.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LatticeConfigError {
    /// Step count outside [1, 9_999].
    #[error("Invalid step count {0}: must be in range [1, {max}]", max = MAX_LATTICE_STEPS)]
    InvalidStepCount(usize),
}

impl From<LatticeConfigError> for PricingError {
    fn from(err: LatticeConfigError) -> Self {
        PricingError::InvalidConfig(err.to_string())
    }
}

/// Validated number of lattice time steps.
///
/// # Examples
///
/// ```rust
/// use pricer_engines::lattice::LatticeConfig;
///
/// let config = LatticeConfig::new(100).expect("valid step count");
/// assert_eq!(config.steps(), 100);
/// assert!(LatticeConfig::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LatticeConfig {
    steps: usize,
}

impl LatticeConfig {
    /// Creates a configuration with `steps` time steps.
    ///
    /// # Errors
    ///
    /// Returns `LatticeConfigError::InvalidStepCount` if `steps` is 0 or
    /// greater than [`MAX_LATTICE_STEPS`].
    pub fn new(steps: usize) -> Result<Self, LatticeConfigError> {
        if steps == 0 || steps > MAX_LATTICE_STEPS {
            return Err(LatticeConfigError::InvalidStepCount(steps));
        }
        Ok(Self { steps })
    }

    /// Returns the number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self { steps: 100 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert!(LatticeConfig::new(1).is_ok());
        assert!(LatticeConfig::new(MAX_LATTICE_STEPS).is_ok());
        assert_eq!(
            LatticeConfig::new(0),
            Err(LatticeConfigError::InvalidStepCount(0))
        );
        assert_eq!(
            LatticeConfig::new(10_000),
            Err(LatticeConfigError::InvalidStepCount(10_000))
        );
    }

    #[test]
    fn test_default_steps() {
        assert_eq!(LatticeConfig::default().steps(), 100);
    }

    #[test]
    fn test_error_conversion() {
        let err: PricingError = LatticeConfigError::InvalidStepCount(0).into();
        match err {
            PricingError::InvalidConfig(msg) => {
                assert!(msg.contains("Invalid step count 0"));
                assert!(msg.contains("9999"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
