//! Price command implementation
//!
//! Prices a call and a put with every enabled method and prints the
//! comparison table. Only the rendered report goes to stdout; logs go to
//! stderr.

use std::io::Write;

use clap::Args;
use pricer_core::types::ExerciseStyle;
use tracing::{info, warn};

use crate::config::CliConfig;
use crate::input::{parse_methods, PricingRequest, RawInputs};
use crate::report::{OutputFormat, PriceReport};
use crate::service::PricingService;
use crate::Result;

/// Arguments for `vanilla price`
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    /// Spot price of the underlying
    #[arg(short = 'S', long)]
    pub spot: f64,

    /// Strike price
    #[arg(short = 'K', long)]
    pub strike: f64,

    /// Time to maturity in years
    #[arg(short = 'T', long)]
    pub maturity: f64,

    /// Continuously compounded risk-free rate
    #[arg(short, long, allow_hyphen_values = true)]
    pub rate: f64,

    /// Annualised volatility
    #[arg(long, alias = "sigma")]
    pub volatility: f64,

    /// Exercise style (european, american)
    #[arg(long, default_value = "european")]
    pub style: String,

    /// Comma-separated methods (bs, bt, mc); defaults to the config file
    #[arg(short, long, value_delimiter = ',')]
    pub methods: Option<Vec<String>>,

    /// Binomial lattice steps
    #[arg(long)]
    pub steps: Option<usize>,

    /// Monte Carlo paths
    #[arg(short, long)]
    pub paths: Option<usize>,

    /// Monte Carlo seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format (json, csv, table)
    #[arg(short, long, default_value = "table")]
    pub format: String,

    /// Also print closed-form Greeks
    #[arg(short, long)]
    pub greeks: bool,
}

/// Run the price command
pub fn run(args: &PriceArgs, config: &CliConfig) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_report(args, config, &mut out)
}

/// Prices and writes the rendered report to `out`.
pub fn write_report<W: Write>(args: &PriceArgs, config: &CliConfig, out: &mut W) -> Result<()> {
    let format: OutputFormat = args.format.parse()?;
    let style: ExerciseStyle = args.style.parse()?;
    let methods = match &args.methods {
        Some(codes) => parse_methods(codes.as_slice())?,
        None => parse_methods(config.pricing.methods.as_slice())?,
    };
    let steps = args.steps.unwrap_or(config.pricing.steps);
    let paths = args.paths.unwrap_or(config.pricing.paths);
    let seed = args.seed.or(config.pricing.seed);

    info!("Starting pricing...");
    info!(
        "  S={} K={} T={} r={} sigma={}",
        args.spot, args.strike, args.maturity, args.rate, args.volatility
    );
    info!("  Style: {}", style);
    info!("  Lattice steps: {}", steps);
    info!("  Monte Carlo paths: {}", paths);

    let raw = RawInputs {
        spot: args.spot,
        strike: args.strike,
        maturity: args.maturity,
        rate: args.rate,
        volatility: args.volatility,
    };
    let request = PricingRequest::new(
        raw,
        style,
        &methods,
        steps,
        paths,
        seed,
        config.pricing.parallel,
    )?;

    for method in &request.skipped {
        warn!("{} does not support {} exercise; skipping", method.label(), style);
    }

    let service = PricingService::new(&request);
    let report = PriceReport {
        quotes: service.quote(),
        greeks: if args.greeks { service.greeks() } else { None },
    };
    writeln!(out, "{}", report.render(format)?)?;
    out.flush()?;

    info!("Pricing complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CliError;

    fn args() -> PriceArgs {
        PriceArgs {
            spot: 100.0,
            strike: 100.0,
            maturity: 1.0,
            rate: 0.05,
            volatility: 0.2,
            style: "european".to_string(),
            methods: Some(vec!["bs".to_string(), "bt".to_string()]),
            steps: Some(50),
            paths: None,
            seed: Some(1),
            format: "csv".to_string(),
            greeks: true,
        }
    }

    #[test]
    fn test_run_european() {
        assert!(run(&args(), &CliConfig::default()).is_ok());
    }

    #[test]
    fn test_run_american_with_simulation_requested() {
        let args = PriceArgs {
            style: "american".to_string(),
            methods: Some(vec!["bt".to_string(), "mc".to_string()]),
            paths: Some(1_000),
            format: "json".to_string(),
            ..args()
        };
        assert!(run(&args, &CliConfig::default()).is_ok());
    }

    fn rendered(args: &PriceArgs) -> String {
        let mut out = Vec::new();
        write_report(args, &CliConfig::default(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_json_output_parses() {
        let args = PriceArgs {
            methods: None,
            paths: Some(10_000),
            format: "json".to_string(),
            ..args()
        };
        let output = rendered(&args);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["black_scholes"]["call"], 10.4506);
        assert!(value["monte_carlo"]["put"].is_f64());
        assert!(value["monte_carlo_ci95"]["call"].is_f64());
        assert_eq!(value["greeks"]["put"]["delta"], -0.3632);
    }

    #[test]
    fn test_csv_output_starts_with_header() {
        let output = rendered(&args());
        let mut lines = output.lines();
        assert_eq!(lines.next(), Some("option,black_scholes,binomial,monte_carlo"));
        assert_eq!(lines.next(), Some("call,10.4506,10.4107,"));
        assert!(output.lines().any(|line| line == "greek,call,put"));
    }

    #[test]
    fn test_rejects_unknown_format() {
        let args = PriceArgs {
            format: "xml".to_string(),
            ..args()
        };
        assert!(matches!(
            run(&args, &CliConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_rejects_unknown_style() {
        let args = PriceArgs {
            style: "bermudan".to_string(),
            ..args()
        };
        assert!(matches!(
            run(&args, &CliConfig::default()),
            Err(CliError::Pricing(_))
        ));
    }

    #[test]
    fn test_rejects_negative_volatility() {
        let args = PriceArgs {
            volatility: -0.2,
            ..args()
        };
        assert!(matches!(
            run(&args, &CliConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
    }
}
