//! Error types for the simulation engine configuration.

use pricer_core::types::PricingError;
use thiserror::Error;

use super::config::MAX_SIMULATION_PATHS;

/// Configuration error for the Monte Carlo engine.
///
/// Raised by [`SimulationConfigBuilder::build`](super::SimulationConfigBuilder::build)
/// when the path count is missing or out of range.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Path count outside [1, 9_999_999].
    #[error("Invalid path count {0}: must be in range [1, {max}]", max = MAX_SIMULATION_PATHS)]
    InvalidPathCount(usize),

    /// Required builder field not set.
    #[error("Missing parameter '{0}': must be specified")]
    MissingParameter(&'static str),
}

impl From<ConfigError> for PricingError {
    fn from(err: ConfigError) -> Self {
        PricingError::InvalidConfig(err.to_string())
    }
}
