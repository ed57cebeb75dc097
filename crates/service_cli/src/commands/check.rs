//! Check command: report resolved configuration and the thread pool.

use pricer_engines::lattice::LatticeConfig;
use pricer_engines::mc::SimulationConfig;
use tracing::info;

use crate::config::CliConfig;
use crate::input::parse_methods;
use crate::{CliError, Result};

/// Run the check command
pub fn run(config: &CliConfig, config_path: &str) -> Result<()> {
    info!("Checking configuration...");
    info!("  Config file: {}", config_path);
    info!("  Log level: {}", config.general.log_level);

    let methods = parse_methods(config.pricing.methods.as_slice())?;
    let codes: Vec<String> = methods.iter().map(ToString::to_string).collect();
    info!("  Methods: {}", codes.join(", "));

    let lattice = LatticeConfig::new(config.pricing.steps)
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    info!("  Lattice steps: {}", lattice.steps());
    let simulation = SimulationConfig::builder()
        .n_paths(config.pricing.paths)
        .maybe_seed(config.pricing.seed)
        .parallel(config.pricing.parallel)
        .build()
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;
    info!("  Monte Carlo paths: {}", simulation.n_paths());
    match simulation.seed() {
        Some(seed) => info!("  Seed: {}", seed),
        None => info!("  Seed: entropy"),
    }
    info!("  Parallel simulation: {}", simulation.parallel());
    info!("  Rayon threads: {}", rayon::current_num_threads());
    info!("  Logical CPUs: {}", num_cpus::get());

    info!("Configuration OK");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_defaults() {
        assert!(run(&CliConfig::default(), "vanilla.toml").is_ok());
    }

    #[test]
    fn test_check_rejects_unknown_method() {
        let mut config = CliConfig::default();
        config.pricing.methods = vec!["fd".to_string()];
        assert!(run(&config, "vanilla.toml").is_err());
    }

    #[test]
    fn test_check_rejects_zero_steps() {
        let mut config = CliConfig::default();
        config.pricing.steps = 0;
        assert!(matches!(
            run(&config, "vanilla.toml"),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_check_rejects_path_count_out_of_range() {
        let mut config = CliConfig::default();
        config.pricing.paths = 20_000_000;
        assert!(matches!(
            run(&config, "vanilla.toml"),
            Err(CliError::InvalidArgument(_))
        ));
        config.pricing.paths = 0;
        assert!(run(&config, "vanilla.toml").is_err());
    }
}
