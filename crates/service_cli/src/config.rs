//! CLI configuration loading
//!
//! Loads configuration from a TOML file. A missing file yields defaults.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{CliError, Result};

/// CLI configuration
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// General settings
    #[serde(default)]
    pub general: GeneralConfig,

    /// Pricing settings
    #[serde(default)]
    pub pricing: PricingConfig,
}

/// General CLI settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Pricing defaults for the `price` command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingConfig {
    /// Methods to run (`bs`, `bt`, `mc`)
    #[serde(default = "default_methods")]
    pub methods: Vec<String>,

    /// Binomial lattice time steps
    #[serde(default = "default_steps")]
    pub steps: usize,

    /// Monte Carlo terminal prices
    #[serde(default = "default_paths")]
    pub paths: usize,

    /// Monte Carlo seed; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Run Monte Carlo on the rayon thread pool
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            methods: default_methods(),
            steps: default_steps(),
            paths: default_paths(),
            seed: None,
            parallel: default_parallel(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_methods() -> Vec<String> {
    vec!["bs".to_string(), "bt".to_string(), "mc".to_string()]
}

fn default_steps() -> usize {
    100
}

fn default_paths() -> usize {
    100_000
}

fn default_parallel() -> bool {
    true
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            // Return default config if file doesn't exist
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| CliError::Parse(format!("Failed to parse config: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.general.log_level, "info");
        assert_eq!(config.pricing.methods, vec!["bs", "bt", "mc"]);
        assert_eq!(config.pricing.steps, 100);
        assert_eq!(config.pricing.paths, 100_000);
        assert_eq!(config.pricing.seed, None);
        assert!(config.pricing.parallel);
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        assert_eq!(CliConfig::from_toml("").unwrap(), CliConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = CliConfig::from_toml(
            r#"
            [general]
            log_level = "debug"

            [pricing]
            steps = 500
            seed = 42
            "#,
        )
        .unwrap();

        assert_eq!(config.general.log_level, "debug");
        assert_eq!(config.pricing.steps, 500);
        assert_eq!(config.pricing.seed, Some(42));
        assert_eq!(config.pricing.paths, 100_000);
        assert!(config.pricing.parallel);
    }

    #[test]
    fn test_methods_and_parallel() {
        let config = CliConfig::from_toml(
            r#"
            [pricing]
            methods = ["bt"]
            parallel = false
            "#,
        )
        .unwrap();
        assert_eq!(config.pricing.methods, vec!["bt"]);
        assert!(!config.pricing.parallel);
    }

    #[test]
    fn test_invalid_toml() {
        let err = CliConfig::from_toml("[pricing]\nsteps = \"many\"").unwrap_err();
        assert!(matches!(err, CliError::Parse(_)));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = CliConfig::from_file("this-file-does-not-exist.toml").unwrap();
        assert_eq!(config, CliConfig::default());
    }
}
