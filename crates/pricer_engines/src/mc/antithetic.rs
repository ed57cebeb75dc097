//! Antithetic-variate terminal price estimator.
//!
//! Each pair draws one Z ~ N(0, 1) and evaluates the payoff at
//! S·e^(drift + vol·Z) and S·e^(drift − vol·Z), where drift = (r − σ²/2)T
//! and vol = σ√T. An odd path request simulates ⌈paths/2⌉ pairs and divides
//! by the number of terminal prices actually simulated.

use pricer_core::types::{OptionParameters, OptionType};

use crate::greeks::PriceResult;
use crate::rng::PricerRng;

/// Per-option constants shared by every pair.
#[derive(Clone, Copy, Debug)]
pub(crate) struct AntitheticKernel {
    spot: f64,
    strike: f64,
    drift: f64,
    vol: f64,
    discount: f64,
    option_type: OptionType,
}

impl AntitheticKernel {
    pub(crate) fn new(params: &OptionParameters, option_type: OptionType) -> Self {
        let sigma = params.volatility;
        Self {
            spot: params.spot,
            strike: params.strike,
            drift: (params.rate - 0.5 * sigma * sigma) * params.maturity,
            vol: sigma * params.maturity.sqrt(),
            discount: params.discount_factor(),
            option_type,
        }
    }

    /// Undiscounted payoff sum over the pair (Z, −Z).
    #[inline]
    pub(crate) fn pair_payoff(&self, z: f64) -> f64 {
        let up = self.spot * (self.drift + self.vol * z).exp();
        let down = self.spot * (self.drift - self.vol * z).exp();
        self.option_type.payoff(up, self.strike) + self.option_type.payoff(down, self.strike)
    }

    /// Simulates `pairs` pairs into `acc`.
    pub(crate) fn accumulate(&self, pairs: usize, rng: &mut PricerRng, acc: &mut PairAccumulator) {
        for _ in 0..pairs {
            acc.add(self.pair_payoff(rng.gen_normal()));
        }
    }

    #[inline]
    pub(crate) fn discount(&self) -> f64 {
        self.discount
    }
}

/// Running sums over antithetic pairs.
///
/// Pair averages are i.i.d., so the standard error is taken over them
/// rather than over the correlated individual terminal prices.
#[derive(Clone, Copy, Debug, Default)]
pub(crate) struct PairAccumulator {
    pairs: usize,
    sum: f64,
    sum_sq_avg: f64,
}

impl PairAccumulator {
    #[inline]
    pub(crate) fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn add(&mut self, pair_sum: f64) {
        let avg = 0.5 * pair_sum;
        self.pairs += 1;
        self.sum += pair_sum;
        self.sum_sq_avg += avg * avg;
    }

    #[inline]
    pub(crate) fn merge(&mut self, other: &Self) {
        self.pairs += other.pairs;
        self.sum += other.sum;
        self.sum_sq_avg += other.sum_sq_avg;
    }

    /// Discounted estimate with standard error.
    ///
    /// The divisor is the number of simulated terminal prices, 2 × pairs.
    /// A single pair has no sample variance, so no error is reported.
    pub(crate) fn finish(&self, discount: f64) -> PriceResult {
        if self.pairs == 0 {
            return PriceResult::new(f64::NAN);
        }
        let n = self.pairs as f64;
        let price = discount * self.sum / (2.0 * n);
        if self.pairs < 2 {
            return PriceResult::new(price);
        }
        let mean_avg = 0.5 * self.sum / n;
        let variance = ((self.sum_sq_avg - n * mean_avg * mean_avg) / (n - 1.0)).max(0.0);
        PriceResult::with_std_error(price, discount * (variance / n).sqrt())
    }
}

/// Monte Carlo price of a European option with antithetic variates.
///
/// `paths` is the number of terminal prices; odd counts are rounded up to
/// the next even number. Reproducible runs need a seeded `rng`.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::OptionType;
/// use pricer_engines::mc::price;
/// use pricer_engines::rng::PricerRng;
///
/// let mut rng = PricerRng::from_seed(42);
/// let call = price(100.0, 100.0, 1.0, 0.05, 0.2, 200_000, OptionType::Call, &mut rng);
/// assert!((call - 10.4506).abs() < 0.15);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    paths: usize,
    option_type: OptionType,
    rng: &mut PricerRng,
) -> f64 {
    let params = OptionParameters::new(spot, strike, maturity, rate, volatility);
    price_with_stats(&params, paths, option_type, rng).price
}

/// Sequential estimate with its standard error.
///
/// A `paths` of 0 yields a NaN price; callers bound it through
/// [`SimulationConfig`](super::SimulationConfig).
pub fn price_with_stats(
    params: &OptionParameters,
    paths: usize,
    option_type: OptionType,
    rng: &mut PricerRng,
) -> PriceResult {
    price_pairs(params, paths.div_ceil(2), option_type, rng)
}

/// Sequential estimate over an explicit number of antithetic pairs.
pub(crate) fn price_pairs(
    params: &OptionParameters,
    pairs: usize,
    option_type: OptionType,
    rng: &mut PricerRng,
) -> PriceResult {
    let kernel = AntitheticKernel::new(params, option_type);
    let mut acc = PairAccumulator::new();
    kernel.accumulate(pairs, rng, &mut acc);
    acc.finish(kernel.discount())
}
