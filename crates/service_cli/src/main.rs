//! Vanilla CLI - Command Line Pricing for Vanilla Options
//!
//! This is the operational entry point for the vanilla option engines.
//!
//! # Commands
//!
//! - `vanilla price --spot <S> --strike <K> ...` - Price a call and put with
//!   Black-Scholes, the binomial lattice and Monte Carlo
//! - `vanilla demo` - Walk through all three engines on reference inputs
//! - `vanilla check` - Show resolved configuration
//!
//! # Architecture
//!
//! As part of the **S**ervice layer, this crate validates inputs, gates
//! methods by exercise style and renders results. All numerics live in
//! `pricer_engines`.

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod report;
mod service;

pub use error::{CliError, Result};

use commands::price::PriceArgs;
use config::CliConfig;

/// Vanilla Option Pricer CLI
#[derive(Parser)]
#[command(name = "vanilla")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "vanilla.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a call and a put with every enabled method
    Price(PriceArgs),

    /// Run the pricing walkthrough on reference parameters
    Demo,

    /// Check configuration and thread pool
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = CliConfig::from_file(&cli.config)?;

    // RUST_LOG wins over the config file
    let level = if cli.verbose {
        "debug"
    } else {
        config.general.log_level.as_str()
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    // Initialise tracing; stdout is reserved for rendered reports
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Loaded configuration from {}", cli.config);

    match cli.command {
        Commands::Price(args) => commands::price::run(&args, &config),
        Commands::Demo => {
            let summary = commands::demo::run()?;
            info!(
                "Demo complete: BS-BT gap {:.4}, BS-MC gap {:.4}, put premium {:.4}",
                summary.black_scholes_call - summary.binomial_call,
                summary.black_scholes_call - summary.monte_carlo_call,
                summary.early_exercise_premium
            );
            Ok(())
        }
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
