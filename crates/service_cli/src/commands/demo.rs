//! Demo command: a walkthrough of all three engines.
//!
//! Uses the reference parameters S=K=100, T=1, r=5%, σ=20% and prints
//! closed-form prices and Greeks, European and American lattice prices with
//! the put's early-exercise premium, Monte Carlo prices, and a comparison
//! of the three methods for the European call.

use pricer_core::types::{ExerciseStyle, OptionType};
use pricer_engines::rng::PricerRng;
use pricer_engines::{closed_form, closed_form_with_greeks, lattice, simulate};
use tracing::info;

use crate::Result;

const SPOT: f64 = 100.0;
const STRIKE: f64 = 100.0;
const MATURITY: f64 = 1.0;
const RATE: f64 = 0.05;
const VOLATILITY: f64 = 0.2;
const STEPS: usize = 100;
const PATHS: usize = 100_000;
const SEED: u64 = 42;

/// Prices shown in the final comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DemoSummary {
    /// Closed-form European call
    pub black_scholes_call: f64,
    /// Lattice European call
    pub binomial_call: f64,
    /// Simulated European call
    pub monte_carlo_call: f64,
    /// American minus European lattice put
    pub early_exercise_premium: f64,
}

fn section(title: &str) {
    println!();
    println!("{}", "-".repeat(60));
    println!("{}", title);
    println!("{}", "-".repeat(60));
}

/// Runs the walkthrough and returns the comparison figures.
pub fn run() -> Result<DemoSummary> {
    info!("Running engine walkthrough");

    println!("{}", "=".repeat(60));
    println!("Option Pricing Examples");
    println!("{}", "=".repeat(60));
    println!();
    println!("Parameters:");
    println!("  Stock Price (S): ${}", SPOT);
    println!("  Strike Price (K): ${}", STRIKE);
    println!("  Time to Maturity (T): {} year", MATURITY);
    println!("  Risk-free Rate (r): {}%", RATE * 100.0);
    println!("  Volatility (σ): {}%", VOLATILITY * 100.0);

    section("BLACK-SCHOLES MODEL (European Options)");
    let bs_call = closed_form(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, OptionType::Call);
    let bs_put = closed_form(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, OptionType::Put);
    println!("Call Price: ${:.4}", bs_call);
    println!("Put Price:  ${:.4}", bs_put);

    let greeks = closed_form_with_greeks(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, OptionType::Call);
    println!();
    println!("Greeks (Call):");
    println!("  Delta: {:.4}", greeks.delta);
    println!("  Gamma: {:.4}", greeks.gamma);
    println!("  Vega:  {:.4}", greeks.vega);
    println!("  Theta: {:.4}", greeks.theta);
    println!("  Rho:   {:.4}", greeks.rho);

    let bt = |option_type, style| {
        lattice(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, STEPS, option_type, style)
    };

    section("BINOMIAL TREE MODEL (European Options)");
    let bt_call_euro = bt(OptionType::Call, ExerciseStyle::European);
    let bt_put_euro = bt(OptionType::Put, ExerciseStyle::European);
    println!("Call Price: ${:.4}", bt_call_euro);
    println!("Put Price:  ${:.4}", bt_put_euro);

    section("BINOMIAL TREE MODEL (American Options)");
    let bt_call_amer = bt(OptionType::Call, ExerciseStyle::American);
    let bt_put_amer = bt(OptionType::Put, ExerciseStyle::American);
    println!("Call Price: ${:.4}", bt_call_amer);
    println!("Put Price:  ${:.4}", bt_put_amer);
    println!();
    println!("Early Exercise Premium (Put): ${:.4}", bt_put_amer - bt_put_euro);

    section("MONTE CARLO SIMULATION (European Options)");
    let mut rng = PricerRng::from_seed(SEED);
    let mc_call = simulate(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, PATHS, OptionType::Call, &mut rng);
    let mc_put = simulate(SPOT, STRIKE, MATURITY, RATE, VOLATILITY, PATHS, OptionType::Put, &mut rng);
    println!("Call Price: ${:.4}", mc_call);
    println!("Put Price:  ${:.4}", mc_put);

    println!();
    println!("{}", "=".repeat(60));
    println!("MODEL COMPARISON (European Call)");
    println!("{}", "=".repeat(60));
    println!("Black-Scholes:   ${:.4}", bs_call);
    println!("Binomial Tree:   ${:.4}", bt_call_euro);
    println!("Monte Carlo:     ${:.4}", mc_call);
    println!();

    Ok(DemoSummary {
        black_scholes_call: bs_call,
        binomial_call: bt_call_euro,
        monte_carlo_call: mc_call,
        early_exercise_premium: bt_put_amer - bt_put_euro,
    })
}
