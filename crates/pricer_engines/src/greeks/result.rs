//! Price and sensitivity result types.

use num_traits::Float;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Price returned by an engine.
///
/// `std_error` is only populated by the simulation engine; deterministic
/// engines leave it as `None`.
///
/// # Examples
///
/// ```rust
/// use pricer_engines::greeks::PriceResult;
///
/// let result = PriceResult::with_std_error(10.45, 0.01);
/// assert!((result.confidence_95().unwrap() - 0.0196).abs() < 1e-12);
/// assert_eq!(PriceResult::new(5.57).std_error, None);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PriceResult {
    /// Present value.
    pub price: f64,
    /// Standard error of a statistical estimate.
    pub std_error: Option<f64>,
}

impl PriceResult {
    /// Deterministic price.
    #[inline]
    pub fn new(price: f64) -> Self {
        Self {
            price,
            std_error: None,
        }
    }

    /// Statistical price with its standard error.
    #[inline]
    pub fn with_std_error(price: f64, std_error: f64) -> Self {
        Self {
            price,
            std_error: Some(std_error),
        }
    }

    /// 95% confidence half-width (1.96 × standard error), if known.
    #[inline]
    pub fn confidence_95(&self) -> Option<f64> {
        self.std_error.map(|se| 1.96 * se)
    }
}

/// Closed-form price and first/second-order sensitivities.
///
/// On the degenerate branch (T ≤ 0 or σ ≤ 0) every Greek is NaN while the
/// price is still the discounted intrinsic value.
///
/// # First-Order Greeks
///
/// - `delta`: ∂V/∂S
/// - `vega`: ∂V/∂σ
/// - `theta`: time decay
/// - `rho`: ∂V/∂r
///
/// # Second-Order Greeks
///
/// - `gamma`: ∂²V/∂S²
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GreeksResult<T: Float = f64> {
    /// Present value of the option.
    pub price: T,
    /// Delta: ∂V/∂S.
    pub delta: T,
    /// Gamma: ∂²V/∂S².
    pub gamma: T,
    /// Vega: ∂V/∂σ (per unit of volatility).
    pub vega: T,
    /// Theta: time decay (per year).
    pub theta: T,
    /// Rho: ∂V/∂r (per unit of rate).
    pub rho: T,
}

impl<T: Float> GreeksResult<T> {
    /// Price with every Greek set to NaN.
    #[inline]
    pub fn undefined_greeks(price: T) -> Self {
        let nan = T::nan();
        Self {
            price,
            delta: nan,
            gamma: nan,
            vega: nan,
            theta: nan,
            rho: nan,
        }
    }

    /// Returns `true` if any sensitivity is NaN.
    #[inline]
    pub fn has_undefined_greeks(&self) -> bool {
        [self.delta, self.gamma, self.vega, self.theta, self.rho]
            .iter()
            .any(|g| g.is_nan())
    }
}
