//! Input parsing and validation for the `price` command.
//!
//! Rejects non-positive S, K, T or σ, bounds the lattice and simulation
//! sizes, and decides which methods apply to the exercise style.

use pricer_core::types::{ExerciseStyle, OptionParameters};
use pricer_engines::lattice::LatticeConfig;
use pricer_engines::mc::SimulationConfig;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::{CliError, Result};

/// Pricing method selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Method {
    /// Closed form
    BlackScholes,
    /// CRR lattice
    Binomial,
    /// Antithetic simulation
    MonteCarlo,
}

impl Method {
    /// Display order of the report columns.
    pub const ALL: [Method; 3] = [Method::BlackScholes, Method::Binomial, Method::MonteCarlo];

    /// Column heading.
    pub fn label(self) -> &'static str {
        match self {
            Method::BlackScholes => "Black-Scholes",
            Method::Binomial => "Binomial",
            Method::MonteCarlo => "Monte Carlo",
        }
    }

    /// Whether the method can price the given exercise style.
    pub fn supports(self, style: ExerciseStyle) -> bool {
        match self {
            Method::Binomial => true,
            Method::BlackScholes | Method::MonteCarlo => !style.is_american(),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let code = match self {
            Method::BlackScholes => "bs",
            Method::Binomial => "bt",
            Method::MonteCarlo => "mc",
        };
        f.write_str(code)
    }
}

impl FromStr for Method {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bs" | "black-scholes" => Ok(Method::BlackScholes),
            "bt" | "binomial" => Ok(Method::Binomial),
            "mc" | "monte-carlo" => Ok(Method::MonteCarlo),
            other => Err(CliError::InvalidArgument(format!(
                "Unknown method: {}. Supported: bs, bt, mc",
                other
            ))),
        }
    }
}

/// Parses method codes, dropping duplicates and keeping column order.
pub fn parse_methods<S: AsRef<str>>(codes: &[S]) -> Result<Vec<Method>> {
    let requested = codes
        .iter()
        .map(|code| code.as_ref().parse())
        .collect::<Result<Vec<Method>>>()?;

    if requested.is_empty() {
        return Err(CliError::InvalidArgument(
            "At least one method must be selected".to_string(),
        ));
    }

    Ok(Method::ALL
        .into_iter()
        .filter(|m| requested.contains(m))
        .collect())
}

/// Raw numeric inputs as typed by the user.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RawInputs {
    /// Spot price
    pub spot: f64,
    /// Strike price
    pub strike: f64,
    /// Years to maturity
    pub maturity: f64,
    /// Risk-free rate
    pub rate: f64,
    /// Volatility
    pub volatility: f64,
}

/// Validated pricing request.
#[derive(Clone, Debug)]
pub struct PricingRequest {
    /// Option inputs
    pub params: OptionParameters,
    /// Exercise style
    pub style: ExerciseStyle,
    /// Methods that will run
    pub methods: Vec<Method>,
    /// Requested methods disabled by the exercise style
    pub skipped: Vec<Method>,
    /// Lattice sizing
    pub lattice: LatticeConfig,
    /// Simulation sizing
    pub simulation: SimulationConfig,
}

impl PricingRequest {
    /// Validates inputs and sizing, then gates methods by style.
    ///
    /// # Errors
    ///
    /// `CliError::InvalidArgument` for a non-positive or non-finite S, K, T
    /// or σ, a non-finite rate, or steps/paths out of range.
    pub fn new(
        raw: RawInputs,
        style: ExerciseStyle,
        requested: &[Method],
        steps: usize,
        paths: usize,
        seed: Option<u64>,
        parallel: bool,
    ) -> Result<Self> {
        let params = OptionParameters::validated(
            raw.spot,
            raw.strike,
            raw.maturity,
            raw.rate,
            raw.volatility,
        )
        .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

        let lattice =
            LatticeConfig::new(steps).map_err(|e| CliError::InvalidArgument(e.to_string()))?;
        let simulation = SimulationConfig::builder()
            .n_paths(paths)
            .maybe_seed(seed)
            .parallel(parallel)
            .build()
            .map_err(|e| CliError::InvalidArgument(e.to_string()))?;

        let (methods, skipped): (Vec<Method>, Vec<Method>) =
            requested.iter().copied().partition(|m| m.supports(style));

        Ok(Self {
            params,
            style,
            methods,
            skipped,
            lattice,
            simulation,
        })
    }

    /// Whether `method` will run.
    pub fn runs(&self, method: Method) -> bool {
        self.methods.contains(&method)
    }
}
