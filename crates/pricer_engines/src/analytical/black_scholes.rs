//! Black-Scholes closed form for European calls and puts.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! ## Degenerate Inputs
//!
//! With T ≤ 0 or σ ≤ 0 the formula is replaced by discounted intrinsic
//! value, max(S − K·e^(−rT), 0) for a call and max(K·e^(−rT) − S, 0) for a
//! put, and every Greek is NaN. This is a defined branch rather than an
//! error.

use num_traits::Float;
use pricer_core::math::distributions::{norm_cdf, norm_pdf};
use pricer_core::types::{OptionParameters, OptionType};

use crate::greeks::GreeksResult;

/// Returns `true` when (T, σ) select the intrinsic-value branch.
#[inline]
fn is_degenerate<T: Float>(maturity: T, volatility: T) -> bool {
    maturity <= T::zero() || volatility <= T::zero()
}

/// Discounted intrinsic value used on the degenerate branch.
#[inline]
fn discounted_intrinsic<T: Float>(
    spot: T,
    strike: T,
    maturity: T,
    rate: T,
    option_type: OptionType,
) -> T {
    let pv_strike = strike * (-rate * maturity).exp();
    let intrinsic = match option_type {
        OptionType::Call => spot - pv_strike,
        OptionType::Put => pv_strike - spot,
    };
    intrinsic.max(T::zero())
}

/// Computes (d₁, d₂).
///
/// Only meaningful for T > 0 and σ > 0; callers on the degenerate branch
/// never reach it.
///
/// # Examples
/// ```
/// use pricer_engines::analytical::d1_d2;
///
/// let (d1, d2) = d1_d2(100.0_f64, 100.0, 1.0, 0.05, 0.2);
/// assert!((d1 - 0.35).abs() < 1e-12);
/// assert!((d2 - 0.15).abs() < 1e-12);
/// ```
#[inline]
pub fn d1_d2<T: Float>(spot: T, strike: T, maturity: T, rate: T, volatility: T) -> (T, T) {
    let half = T::from(0.5).unwrap();
    let vol_sqrt_t = volatility * maturity.sqrt();
    let drift = (rate + half * volatility * volatility) * maturity;
    let d1 = ((spot / strike).ln() + drift) / vol_sqrt_t;
    (d1, d1 - vol_sqrt_t)
}

/// Black-Scholes price of a European option.
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_engines::analytical::price;
///
/// let call = price(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// assert!((call - 10.4506).abs() < 1e-4);
///
/// // Expired: intrinsic value
/// assert_eq!(price(110.0_f64, 100.0, 0.0, 0.05, 0.2, OptionType::Call), 10.0);
/// ```
pub fn price<T: Float>(
    spot: T,
    strike: T,
    maturity: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> T {
    if is_degenerate(maturity, volatility) {
        return discounted_intrinsic(spot, strike, maturity, rate, option_type);
    }

    let (d1, d2) = d1_d2(spot, strike, maturity, rate, volatility);
    let pv_strike = strike * (-rate * maturity).exp();

    match option_type {
        OptionType::Call => spot * norm_cdf(d1) - pv_strike * norm_cdf(d2),
        OptionType::Put => pv_strike * norm_cdf(-d2) - spot * norm_cdf(-d1),
    }
}

/// Black-Scholes price together with Delta, Gamma, Vega, Theta and Rho.
///
/// - Call: Δ = N(d₁), Θ = −S·φ(d₁)·σ/(2√T) − r·K·e^(−rT)·N(d₂),
///   ρ = K·T·e^(−rT)·N(d₂)
/// - Put: Δ = −N(−d₁), Θ = −S·φ(d₁)·σ/(2√T) − r·K·e^(−rT)·N(−d₂),
///   ρ = −K·T·e^(−rT)·N(−d₂)
/// - Both: Γ = φ(d₁)/(S·σ·√T), Vega = S·√T·φ(d₁)
///
/// The put Theta keeps the call's sign on the carry term and swaps N(d₂)
/// for N(−d₂).
///
/// # Examples
/// ```
/// use pricer_core::types::OptionType;
/// use pricer_engines::analytical::greeks;
///
/// let g = greeks(100.0_f64, 100.0, 1.0, 0.05, 0.2, OptionType::Call);
/// assert!((g.delta - 0.6368).abs() < 1e-4);
///
/// let expired = greeks(100.0_f64, 90.0, 0.0, 0.05, 0.2, OptionType::Put);
/// assert_eq!(expired.price, 0.0);
/// assert!(expired.gamma.is_nan());
/// ```
pub fn greeks<T: Float>(
    spot: T,
    strike: T,
    maturity: T,
    rate: T,
    volatility: T,
    option_type: OptionType,
) -> GreeksResult<T> {
    if is_degenerate(maturity, volatility) {
        return GreeksResult::undefined_greeks(discounted_intrinsic(
            spot,
            strike,
            maturity,
            rate,
            option_type,
        ));
    }

    let two = T::from(2.0).unwrap();
    let sqrt_t = maturity.sqrt();
    let (d1, d2) = d1_d2(spot, strike, maturity, rate, volatility);
    let pv_strike = strike * (-rate * maturity).exp();
    let pdf_d1 = norm_pdf(d1);

    let gamma = pdf_d1 / (spot * volatility * sqrt_t);
    let vega = spot * sqrt_t * pdf_d1;
    let decay = -(spot * pdf_d1 * volatility) / (two * sqrt_t);

    let (price, delta, theta, rho) = match option_type {
        OptionType::Call => {
            let n_d2 = norm_cdf(d2);
            (
                spot * norm_cdf(d1) - pv_strike * n_d2,
                norm_cdf(d1),
                decay - rate * pv_strike * n_d2,
                pv_strike * maturity * n_d2,
            )
        }
        OptionType::Put => {
            let n_minus_d2 = norm_cdf(-d2);
            (
                pv_strike * n_minus_d2 - spot * norm_cdf(-d1),
                -norm_cdf(-d1),
                decay - rate * pv_strike * n_minus_d2,
                -pv_strike * maturity * n_minus_d2,
            )
        }
    };

    GreeksResult {
        price,
        delta,
        gamma,
        vega,
        theta,
        rho,
    }
}

/// [`price`] over an [`OptionParameters`] bundle.
#[inline]
pub fn price_params(params: &OptionParameters, option_type: OptionType) -> f64 {
    price(
        params.spot,
        params.strike,
        params.maturity,
        params.rate,
        params.volatility,
        option_type,
    )
}

/// [`greeks`] over an [`OptionParameters`] bundle.
#[inline]
pub fn greeks_params(params: &OptionParameters, option_type: OptionType) -> GreeksResult<f64> {
    greeks(
        params.spot,
        params.strike,
        params.maturity,
        params.rate,
        params.volatility,
        option_type,
    )
}
