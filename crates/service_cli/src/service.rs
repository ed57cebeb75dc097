//! Pricing service: runs each enabled method for the call and put legs.

use std::time::Instant;

use pricer_core::types::{ensure_finite, OptionType};
use pricer_engines::rng::{derive_stream_seed, PricerRng};
use pricer_engines::{analytical, lattice, mc, GreeksResult, PriceResult};
use tracing::{debug, warn};

use crate::input::{Method, PricingRequest};
use crate::report::{GreeksReport, LegQuotes, MethodQuotes};

/// Decimal places kept in reported prices.
pub const DISPLAY_DECIMALS: usize = 4;

/// Rounds to [`DISPLAY_DECIMALS`] places.
///
/// Rounds the exact decimal expansion of `value`, so a binary value just
/// below a tie (2.00005 is stored as 2.0000499...) rounds down.
pub fn round_price(value: f64) -> f64 {
    format!("{:.*}", DISPLAY_DECIMALS, value)
        .parse()
        .unwrap_or(value)
}

fn round_greeks(g: GreeksResult<f64>) -> GreeksResult<f64> {
    GreeksResult {
        price: round_price(g.price),
        delta: round_price(g.delta),
        gamma: round_price(g.gamma),
        vega: round_price(g.vega),
        theta: round_price(g.theta),
        rho: round_price(g.rho),
    }
}

/// Prices a validated request with every enabled method.
pub struct PricingService<'a> {
    request: &'a PricingRequest,
}

impl<'a> PricingService<'a> {
    /// Creates a service over `request`.
    pub fn new(request: &'a PricingRequest) -> Self {
        Self { request }
    }

    /// Runs every enabled method. Skipped or failed methods stay empty.
    pub fn quote(&self) -> MethodQuotes {
        let mut quotes = MethodQuotes::default();
        for method in Method::ALL {
            if self.request.runs(method) {
                let (legs, ci95) = match self.price_method(method) {
                    Some((legs, ci95)) => (Some(legs), ci95),
                    None => (None, None),
                };
                quotes.set(method, legs);
                if method == Method::MonteCarlo {
                    quotes.monte_carlo_ci95 = ci95;
                }
            }
        }
        quotes
    }

    /// Closed-form Greeks for both legs, European style only.
    pub fn greeks(&self) -> Option<GreeksReport> {
        if self.request.style.is_american() {
            warn!("Greeks are only available for European exercise; skipping");
            return None;
        }
        let params = &self.request.params;
        Some(GreeksReport {
            call: round_greeks(analytical::greeks_params(params, OptionType::Call)),
            put: round_greeks(analytical::greeks_params(params, OptionType::Put)),
        })
    }

    /// Rounded legs plus their 95% confidence half-widths when the method
    /// reports a standard error.
    fn price_method(&self, method: Method) -> Option<(LegQuotes, Option<LegQuotes>)> {
        let params = &self.request.params;
        let start = Instant::now();

        let (call, put) = match method {
            Method::BlackScholes => (
                PriceResult::new(analytical::price_params(params, OptionType::Call)),
                PriceResult::new(analytical::price_params(params, OptionType::Put)),
            ),
            Method::Binomial => {
                let config = &self.request.lattice;
                let style = self.request.style;
                (
                    PriceResult::new(lattice::price_with_config(params, config, OptionType::Call, style)),
                    PriceResult::new(lattice::price_with_config(params, config, OptionType::Put, style)),
                )
            }
            Method::MonteCarlo => self.simulate_legs(),
        };

        debug!(
            method = %method,
            elapsed_us = start.elapsed().as_micros() as u64,
            "Method priced"
        );

        match (ensure_finite("call", call.price), ensure_finite("put", put.price)) {
            (Ok(call_price), Ok(put_price)) => {
                let legs = LegQuotes {
                    call: round_price(call_price),
                    put: round_price(put_price),
                };
                let ci95 = call
                    .confidence_95()
                    .zip(put.confidence_95())
                    .map(|(call, put)| LegQuotes {
                        call: round_price(call),
                        put: round_price(put),
                    });
                Some((legs, ci95))
            }
            (Err(e), _) | (_, Err(e)) => {
                warn!(method = %method, error = %e, "Discarding method column");
                None
            }
        }
    }

    /// Call and put legs on independent generators.
    fn simulate_legs(&self) -> (PriceResult, PriceResult) {
        let params = &self.request.params;
        let config = &self.request.simulation;
        let base = config
            .seed()
            .unwrap_or_else(|| PricerRng::from_entropy().next_seed());
        let (call_seed, put_seed) = (derive_stream_seed(base, 0), derive_stream_seed(base, 1));
        debug!(seed = base, paths = config.n_paths(), parallel = config.parallel(), "Simulating");

        if config.parallel() {
            rayon::join(
                || mc::price_parallel(params, config.n_paths(), OptionType::Call, call_seed),
                || mc::price_parallel(params, config.n_paths(), OptionType::Put, put_seed),
            )
        } else {
            let mut call_rng = PricerRng::from_seed(call_seed);
            let mut put_rng = PricerRng::from_seed(put_seed);
            (
                mc::price_with_stats(params, config.n_paths(), OptionType::Call, &mut call_rng),
                mc::price_with_stats(params, config.n_paths(), OptionType::Put, &mut put_rng),
            )
        }
    }
}
