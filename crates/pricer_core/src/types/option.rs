//! Option contract descriptors and market inputs.
//!
//! All engines consume the same flat scalar set: spot, strike, maturity,
//! rate and volatility. Nothing here is term-structured.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::PricingError;

/// Call or put.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Both option types, call first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Returns `true` for a call.
    #[inline]
    pub fn is_call(self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Intrinsic value of the option against an asset price.
    ///
    /// - Call: max(asset − K, 0)
    /// - Put: max(K − asset, 0)
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionType;
    ///
    /// assert_eq!(OptionType::Call.payoff(110.0, 100.0), 10.0);
    /// assert_eq!(OptionType::Call.payoff(90.0, 100.0), 0.0);
    /// ```
    #[inline]
    pub fn payoff(self, asset: f64, strike: f64) -> f64 {
        match self {
            OptionType::Call => (asset - strike).max(0.0),
            OptionType::Put => (strike - asset).max(0.0),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "call"),
            OptionType::Put => write!(f, "put"),
        }
    }
}

impl FromStr for OptionType {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "call" | "c" => Ok(OptionType::Call),
            "put" | "p" => Ok(OptionType::Put),
            _ => Err(PricingError::UnknownVariant {
                kind: "option type",
                value: s.to_string(),
            }),
        }
    }
}

/// When the holder may exercise.
///
/// Only the lattice engine distinguishes the two; the closed form and the
/// simulation estimator are European by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExerciseStyle {
    /// Exercisable only at maturity.
    #[default]
    European,
    /// Exercisable at any time up to and including maturity.
    American,
}

impl ExerciseStyle {
    /// Returns `true` if early exercise is allowed.
    #[inline]
    pub fn is_american(self) -> bool {
        matches!(self, ExerciseStyle::American)
    }
}

impl fmt::Display for ExerciseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExerciseStyle::European => write!(f, "european"),
            ExerciseStyle::American => write!(f, "american"),
        }
    }
}

impl FromStr for ExerciseStyle {
    type Err = PricingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "european" | "eu" => Ok(ExerciseStyle::European),
            "american" | "am" => Ok(ExerciseStyle::American),
            _ => Err(PricingError::UnknownVariant {
                kind: "exercise style",
                value: s.to_string(),
            }),
        }
    }
}

/// Scalar market and contract inputs shared by every engine.
///
/// | Field | Symbol | Domain |
/// |-------|--------|--------|
/// | `spot` | S | > 0 |
/// | `strike` | K | > 0 |
/// | `maturity` | T (years) | > 0 |
/// | `rate` | r | any sign |
/// | `volatility` | σ | > 0 |
///
/// [`OptionParameters::new`] performs no checks so that the closed-form
/// degenerate branch (T ≤ 0 or σ ≤ 0) stays reachable. Callers that feed
/// the lattice or simulation engines should go through
/// [`OptionParameters::validated`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OptionParameters {
    /// Spot price of the underlying (S).
    pub spot: f64,
    /// Strike price (K).
    pub strike: f64,
    /// Time to maturity in years (T).
    pub maturity: f64,
    /// Continuously compounded risk-free rate (r).
    pub rate: f64,
    /// Annualised volatility (σ).
    pub volatility: f64,
}

impl OptionParameters {
    /// Creates parameters without validation.
    #[inline]
    pub fn new(spot: f64, strike: f64, maturity: f64, rate: f64, volatility: f64) -> Self {
        Self {
            spot,
            strike,
            maturity,
            rate,
            volatility,
        }
    }

    /// Creates parameters, rejecting anything the lattice or simulation
    /// engines cannot price.
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` if spot, strike, maturity or
    /// volatility is not strictly positive, or if any field (rate included)
    /// is not finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::types::OptionParameters;
    ///
    /// assert!(OptionParameters::validated(100.0, 100.0, 1.0, -0.01, 0.2).is_ok());
    /// assert!(OptionParameters::validated(100.0, 100.0, 0.0, 0.05, 0.2).is_err());
    /// ```
    pub fn validated(
        spot: f64,
        strike: f64,
        maturity: f64,
        rate: f64,
        volatility: f64,
    ) -> Result<Self, PricingError> {
        let params = Self::new(spot, strike, maturity, rate, volatility);
        params.validate()?;
        Ok(params)
    }

    /// Checks the invariants enforced by [`OptionParameters::validated`].
    ///
    /// # Errors
    /// `PricingError::InvalidParameter` naming the first offending field.
    pub fn validate(&self) -> Result<(), PricingError> {
        let positive = [
            ("spot", self.spot),
            ("strike", self.strike),
            ("maturity", self.maturity),
            ("volatility", self.volatility),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(PricingError::InvalidParameter { name, value });
            }
        }
        if !self.rate.is_finite() {
            return Err(PricingError::InvalidParameter {
                name: "rate",
                value: self.rate,
            });
        }
        Ok(())
    }

    /// Discount factor to maturity, e^(−rT).
    #[inline]
    pub fn discount_factor(&self) -> f64 {
        (-self.rate * self.maturity).exp()
    }

    /// Returns a copy with a different spot.
    #[inline]
    pub fn with_spot(self, spot: f64) -> Self {
        Self { spot, ..self }
    }

    /// Returns a copy with a different strike.
    #[inline]
    pub fn with_strike(self, strike: f64) -> Self {
        Self { strike, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_payoff_is_intrinsic_value() {
        assert_eq!(OptionType::Call.payoff(120.0, 100.0), 20.0);
        assert_eq!(OptionType::Put.payoff(120.0, 100.0), 0.0);
        assert_eq!(OptionType::Put.payoff(75.0, 100.0), 25.0);
        assert_eq!(OptionType::Call.payoff(100.0, 100.0), 0.0);
    }

    #[test]
    fn test_option_type_parse_and_display() {
        assert_eq!("Call".parse::<OptionType>().unwrap(), OptionType::Call);
        assert_eq!(" p ".parse::<OptionType>().unwrap(), OptionType::Put);
        assert_eq!(OptionType::Put.to_string(), "put");
        assert!(matches!(
            "straddle".parse::<OptionType>(),
            Err(PricingError::UnknownVariant { kind: "option type", .. })
        ));
    }

    #[test]
    fn test_exercise_style_parse_and_default() {
        assert_eq!(ExerciseStyle::default(), ExerciseStyle::European);
        assert_eq!(
            "AMERICAN".parse::<ExerciseStyle>().unwrap(),
            ExerciseStyle::American
        );
        assert!(ExerciseStyle::American.is_american());
        assert!("bermudan".parse::<ExerciseStyle>().is_err());
    }

    #[test]
    fn test_validated_accepts_negative_rate() {
        let params = OptionParameters::validated(50.0, 55.0, 0.5, -0.02, 0.3).unwrap();
        assert_eq!(params.rate, -0.02);
    }

    #[test]
    fn test_validated_names_first_bad_field() {
        let err = OptionParameters::validated(100.0, -5.0, 0.0, 0.05, 0.2).unwrap_err();
        assert_eq!(
            err,
            PricingError::InvalidParameter {
                name: "strike",
                value: -5.0
            }
        );

        let err = OptionParameters::validated(100.0, 100.0, 1.0, f64::NAN, 0.2).unwrap_err();
        assert!(matches!(
            err,
            PricingError::InvalidParameter { name: "rate", .. }
        ));

        assert!(OptionParameters::validated(f64::INFINITY, 100.0, 1.0, 0.05, 0.2).is_err());
    }

    #[test]
    fn test_discount_factor_and_builders() {
        let params = OptionParameters::new(100.0, 100.0, 2.0, 0.03, 0.25);
        assert_relative_eq!(params.discount_factor(), (-0.06_f64).exp(), epsilon = 1e-15);

        let bumped = params.with_spot(105.0).with_strike(95.0);
        assert_eq!(bumped.spot, 105.0);
        assert_eq!(bumped.strike, 95.0);
        assert_eq!(bumped.volatility, 0.25);
    }
}
