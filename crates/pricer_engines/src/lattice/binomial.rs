//! Cox-Ross-Rubinstein binomial tree.
//!
//! Recombining lattice with u = e^(σ√dt), d = 1/u and risk-neutral up
//! probability p = (e^(r·dt) − d)/(u − d). Values are rolled back in place
//! over a single buffer of `steps + 1` nodes.

use pricer_core::types::{ExerciseStyle, OptionParameters, OptionType};

use super::config::LatticeConfig;

/// Derived lattice quantities for one option and step count.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ExerciseStyle, OptionParameters, OptionType};
/// use pricer_engines::lattice::BinomialTree;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let tree = BinomialTree::new(&params, 100);
///
/// assert!((tree.up() * tree.down() - 1.0).abs() < 1e-12);
/// let european = tree.price(OptionType::Put, ExerciseStyle::European);
/// let american = tree.price(OptionType::Put, ExerciseStyle::American);
/// assert!(american >= european);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BinomialTree {
    spot: f64,
    strike: f64,
    steps: usize,
    dt: f64,
    u: f64,
    d: f64,
    p: f64,
    discount: f64,
}

impl BinomialTree {
    /// Builds the lattice for `params` with `steps` time steps.
    ///
    /// `steps` must be at least 1 and `params.volatility` strictly positive;
    /// with σ = 0 the up and down factors coincide and `p` is not finite.
    pub fn new(params: &OptionParameters, steps: usize) -> Self {
        debug_assert!(steps >= 1, "lattice needs at least one step");

        let dt = params.maturity / steps as f64;
        let u = (params.volatility * dt.sqrt()).exp();
        let d = 1.0 / u;
        let p = ((params.rate * dt).exp() - d) / (u - d);
        let discount = (-params.rate * dt).exp();

        Self {
            spot: params.spot,
            strike: params.strike,
            steps,
            dt,
            u,
            d,
            p,
            discount,
        }
    }

    /// Number of time steps.
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Length of one time step in years.
    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Up factor.
    #[inline]
    pub fn up(&self) -> f64 {
        self.u
    }

    /// Down factor.
    #[inline]
    pub fn down(&self) -> f64 {
        self.d
    }

    /// Risk-neutral probability of an up move.
    #[inline]
    pub fn up_probability(&self) -> f64 {
        self.p
    }

    /// Per-step discount factor e^(−r·dt).
    #[inline]
    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Underlying price at layer `layer` after `ups` up moves.
    #[inline]
    pub fn asset_price(&self, layer: usize, ups: usize) -> f64 {
        self.spot * self.u.powi(ups as i32) * self.d.powi((layer - ups) as i32)
    }

    /// Rolls the payoff back to the root and returns the option value.
    ///
    /// For American exercise every node compares its continuation value
    /// with the intrinsic value at that node's own asset price.
    pub fn price(&self, option_type: OptionType, style: ExerciseStyle) -> f64 {
        let n = self.steps;
        let mut values: Vec<f64> = (0..=n)
            .map(|j| option_type.payoff(self.asset_price(n, j), self.strike))
            .collect();

        let p_up = self.discount * self.p;
        let p_down = self.discount * (1.0 - self.p);
        let early_exercise = style.is_american();

        for layer in (0..n).rev() {
            for j in 0..=layer {
                let continuation = p_up * values[j + 1] + p_down * values[j];
                values[j] = if early_exercise {
                    let intrinsic = option_type.payoff(self.asset_price(layer, j), self.strike);
                    continuation.max(intrinsic)
                } else {
                    continuation
                };
            }
        }

        values[0]
    }
}

/// Prices a vanilla option on a CRR lattice with `steps` time steps.
///
/// Inputs are not validated: S, K, T and σ must be strictly positive and
/// `steps` at least 1.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{ExerciseStyle, OptionType};
/// use pricer_engines::lattice::price;
///
/// let call = price(100.0, 100.0, 1.0, 0.05, 0.2, 500, OptionType::Call, ExerciseStyle::European);
/// assert!((call - 10.4506).abs() < 0.01);
/// ```
#[allow(clippy::too_many_arguments)]
pub fn price(
    spot: f64,
    strike: f64,
    maturity: f64,
    rate: f64,
    volatility: f64,
    steps: usize,
    option_type: OptionType,
    style: ExerciseStyle,
) -> f64 {
    let params = OptionParameters::new(spot, strike, maturity, rate, volatility);
    BinomialTree::new(&params, steps).price(option_type, style)
}

/// Prices with a validated [`LatticeConfig`].
pub fn price_with_config(
    params: &OptionParameters,
    config: &LatticeConfig,
    option_type: OptionType,
    style: ExerciseStyle,
) -> f64 {
    BinomialTree::new(params, config.steps()).price(option_type, style)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)
    }

    #[test]
    fn test_tree_parameters() {
        let tree = BinomialTree::new(&reference(), 4);
        assert_relative_eq!(tree.dt(), 0.25, epsilon = 1e-15);
        assert_relative_eq!(tree.up(), (0.2_f64 * 0.5).exp(), epsilon = 1e-15);
        assert_relative_eq!(tree.up() * tree.down(), 1.0, epsilon = 1e-15);
        assert_relative_eq!(tree.discount(), (-0.0125_f64).exp(), epsilon = 1e-15);
        assert!(tree.up_probability() > 0.0 && tree.up_probability() < 1.0);
        assert_eq!(tree.steps(), 4);
    }

    #[test]
    fn test_asset_price_recombines() {
        let tree = BinomialTree::new(&reference(), 10);
        assert_relative_eq!(tree.asset_price(0, 0), 100.0, epsilon = 1e-12);
        // up then down returns to spot
        assert_relative_eq!(tree.asset_price(2, 1), 100.0, epsilon = 1e-12);
        assert_relative_eq!(tree.asset_price(3, 3), 100.0 * tree.up().powi(3), epsilon = 1e-10);
    }

    #[test]
    fn test_one_step_matches_direct_formula() {
        let tree = BinomialTree::new(&reference(), 1);
        let (u, d, p) = (tree.up(), tree.down(), tree.up_probability());
        let disc = (-0.05_f64).exp();

        let call = disc * (p * (100.0 * u - 100.0).max(0.0) + (1.0 - p) * (100.0 * d - 100.0).max(0.0));
        let put = disc * (p * (100.0 - 100.0 * u).max(0.0) + (1.0 - p) * (100.0 - 100.0 * d).max(0.0));

        assert_relative_eq!(
            tree.price(OptionType::Call, ExerciseStyle::European),
            call,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            tree.price(OptionType::Put, ExerciseStyle::European),
            put,
            epsilon = 1e-12
        );
        assert_relative_eq!(call, 12.162284964623943, epsilon = 1e-10);
        assert_relative_eq!(put, 7.285227414695337, epsilon = 1e-10);
    }

    #[test]
    fn test_reference_values_100_steps() {
        let tree = BinomialTree::new(&reference(), 100);
        assert_relative_eq!(
            tree.price(OptionType::Call, ExerciseStyle::European),
            10.430611662249113,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            tree.price(OptionType::Put, ExerciseStyle::European),
            5.553554112321353,
            epsilon = 1e-8
        );
        assert_relative_eq!(
            tree.price(OptionType::Put, ExerciseStyle::American),
            6.082354409142444,
            epsilon = 1e-8
        );
    }

    #[test]
    fn test_converges_to_closed_form() {
        let call_500 = price(100.0, 100.0, 1.0, 0.05, 0.2, 500, OptionType::Call, ExerciseStyle::European);
        let put_500 = price(100.0, 100.0, 1.0, 0.05, 0.2, 500, OptionType::Put, ExerciseStyle::European);
        assert_abs_diff_eq!(call_500, 10.450583572185565, epsilon = 0.01);
        assert_abs_diff_eq!(put_500, 5.573526022256971, epsilon = 0.01);

        let call_100 = price(100.0, 100.0, 1.0, 0.05, 0.2, 100, OptionType::Call, ExerciseStyle::European);
        assert_abs_diff_eq!(call_100, 10.450583572185565, epsilon = 0.025);
        assert!((call_500 - 10.450583572185565).abs() < (call_100 - 10.450583572185565).abs());
    }

    #[test]
    fn test_american_call_equals_european_without_dividends() {
        let tree = BinomialTree::new(&reference(), 200);
        assert_relative_eq!(
            tree.price(OptionType::Call, ExerciseStyle::American),
            tree.price(OptionType::Call, ExerciseStyle::European),
            epsilon = 1e-10
        );
    }

    #[test]
    fn test_american_put_premium_out_of_the_money_strike() {
        let params = reference().with_strike(110.0);
        let tree = BinomialTree::new(&params, 100);
        let european = tree.price(OptionType::Put, ExerciseStyle::European);
        let american = tree.price(OptionType::Put, ExerciseStyle::American);
        assert_relative_eq!(european, 10.68846135479751, epsilon = 1e-8);
        assert_relative_eq!(american, 11.981187050381836, epsilon = 1e-8);
    }

    #[test]
    fn test_deep_itm_put_exercised_immediately() {
        let params = reference().with_spot(80.0);
        let tree = BinomialTree::new(&params, 200);
        let european = tree.price(OptionType::Put, ExerciseStyle::European);
        let american = tree.price(OptionType::Put, ExerciseStyle::American);
        assert_relative_eq!(european, 16.977271125129384, epsilon = 1e-8);
        assert_relative_eq!(american, 20.0, epsilon = 1e-12);
        assert!(american > european);
    }

    #[test]
    fn test_price_with_config() {
        let config = LatticeConfig::new(100).unwrap();
        let direct = BinomialTree::new(&reference(), 100).price(OptionType::Put, ExerciseStyle::American);
        let configured = price_with_config(&reference(), &config, OptionType::Put, ExerciseStyle::American);
        assert_eq!(direct, configured);
    }

    #[test]
    fn test_odd_and_even_steps_bracket_closed_form() {
        let even = price(100.0, 100.0, 1.0, 0.05, 0.2, 100, OptionType::Call, ExerciseStyle::European);
        let odd = price(100.0, 100.0, 1.0, 0.05, 0.2, 101, OptionType::Call, ExerciseStyle::European);
        assert!(even < 10.450583572185565);
        assert!(odd > 10.450583572185565);
    }

    #[test]
    fn test_zero_volatility_is_undefined() {
        let params = reference();
        let flat = OptionParameters { volatility: 0.0, ..params };
        let value = BinomialTree::new(&flat, 10).price(OptionType::Call, ExerciseStyle::European);
        assert!(!value.is_finite());
    }
}
