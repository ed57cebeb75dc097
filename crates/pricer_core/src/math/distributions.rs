//! Standard normal distribution functions.
//!
//! Provides:
//! - `norm_cdf`: Φ(x), cumulative distribution function
//! - `norm_pdf`: φ(x), probability density function
//!
//! Both are generic over `T: Float` so the closed-form engine can be
//! instantiated for `f32` or `f64`.

use num_traits::Float;

/// 1 / sqrt(2π)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Abramowitz and Stegun 7.1.26 coefficients for erfc on [0, ∞).
const AS_P: f64 = 0.327_591_1;
const AS_A: [f64; 5] = [
    0.254_829_592,
    -0.284_496_736,
    1.421_413_741,
    -1.453_152_027,
    1.061_405_429,
];

/// Complementary error function, Abramowitz and Stegun 7.1.26.
///
/// Maximum absolute error 1.5e-7. Negative arguments use the reflection
/// erfc(-x) = 2 - erfc(x), so Φ(x) + Φ(-x) = 1 holds to rounding.
#[inline]
fn erfc<T: Float>(x: T) -> T {
    let one = T::one();
    let abs_x = x.abs();

    let t = one / (one + T::from(AS_P).unwrap() * abs_x);
    let poly = AS_A
        .iter()
        .rev()
        .fold(T::zero(), |acc, &a| T::from(a).unwrap() + t * acc);
    let tail = t * poly * (-abs_x * abs_x).exp();

    if x < T::zero() {
        T::from(2.0).unwrap() - tail
    } else {
        tail
    }
}

/// Standard normal cumulative distribution function.
///
/// Φ(x) = ½ · erfc(-x / √2)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_cdf;
///
/// assert!((norm_cdf(0.0_f64) - 0.5).abs() < 1e-7);
/// assert!((norm_cdf(1.959964_f64) - 0.975).abs() < 1e-6);
/// ```
#[inline]
pub fn norm_cdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    let sqrt_2 = T::from(std::f64::consts::SQRT_2).unwrap();
    half * erfc(-x / sqrt_2)
}

/// Standard normal probability density function.
///
/// φ(x) = exp(-x² / 2) / √(2π)
///
/// # Examples
/// ```
/// use pricer_core::math::distributions::norm_pdf;
///
/// assert!((norm_pdf(0.0_f64) - 0.398_942_280_4).abs() < 1e-10);
/// ```
#[inline]
pub fn norm_pdf<T: Float>(x: T) -> T {
    let half = T::from(0.5).unwrap();
    T::from(FRAC_1_SQRT_2PI).unwrap() * (-half * x * x).exp()
}
