//! Monte Carlo simulation configuration.

use super::error::ConfigError;

/// Maximum number of simulated terminal prices.
pub const MAX_SIMULATION_PATHS: usize = 9_999_999;

/// Monte Carlo simulation configuration.
///
/// Immutable once built. Use [`SimulationConfigBuilder`] to construct
/// instances.
///
/// # Examples
///
/// ```rust
/// use pricer_engines::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_paths(100_000)
///     .seed(42)
///     .parallel(true)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_paths(), 100_000);
/// assert_eq!(config.seed(), Some(42));
/// assert!(config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of simulated terminal prices.
    n_paths: usize,
    /// Optional seed for reproducibility.
    seed: Option<u64>,
    /// Run on the rayon thread pool.
    parallel: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Returns the number of simulated terminal prices.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Returns the number of antithetic pairs, ⌈n_paths / 2⌉.
    #[inline]
    pub fn n_pairs(&self) -> usize {
        self.n_paths.div_ceil(2)
    }

    /// Returns the optional seed.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns `true` if the parallel estimator is selected.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPathCount` if `n_paths` is 0 or greater
    /// than [`MAX_SIMULATION_PATHS`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_paths == 0 || self.n_paths > MAX_SIMULATION_PATHS {
            return Err(ConfigError::InvalidPathCount(self.n_paths));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug, Default)]
pub struct SimulationConfigBuilder {
    n_paths: Option<usize>,
    seed: Option<u64>,
    parallel: bool,
}

impl SimulationConfigBuilder {
    /// Sets the number of simulated terminal prices.
    ///
    /// # Arguments
    ///
    /// * `n_paths` - Number of paths in [1, 9_999_999]
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets or clears the seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Selects the parallel estimator.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_paths` is not set or out of range.
    pub fn build(self) -> Result<SimulationConfig, ConfigError> {
        let n_paths = self
            .n_paths
            .ok_or(ConfigError::MissingParameter("n_paths"))?;

        let config = SimulationConfig {
            n_paths,
            seed: self.seed,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}
