//! Parallel antithetic estimator on the rayon thread pool.
//!
//! Pairs are split into fixed-size chunks. Each chunk owns a generator
//! seeded from the base seed and the chunk index, so the set of draws is
//! fixed by `(seed, paths)` regardless of thread count. Per-chunk sums are
//! combined with a fold/reduce; the reduction order is not fixed, so results
//! agree with each other to rounding rather than bit-for-bit.

use pricer_core::types::{OptionParameters, OptionType};
use rayon::prelude::*;

use super::antithetic::{self, AntitheticKernel, PairAccumulator};
use super::config::SimulationConfig;
use crate::greeks::PriceResult;
use crate::rng::{derive_stream_seed, PricerRng};

/// Number of antithetic pairs simulated per chunk.
pub const PAIRS_PER_CHUNK: usize = 8_192;

/// Parallel Monte Carlo estimate with its standard error.
///
/// # Examples
///
/// ```rust
/// use pricer_core::types::{OptionParameters, OptionType};
/// use pricer_engines::mc::price_parallel;
///
/// let params = OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2);
/// let result = price_parallel(&params, 400_000, OptionType::Put, 42);
/// assert!((result.price - 5.5735).abs() < 0.1);
/// assert!(result.std_error.is_some());
/// ```
pub fn price_parallel(
    params: &OptionParameters,
    paths: usize,
    option_type: OptionType,
    seed: u64,
) -> PriceResult {
    price_pairs_parallel(params, paths.div_ceil(2), option_type, seed)
}

fn price_pairs_parallel(
    params: &OptionParameters,
    total_pairs: usize,
    option_type: OptionType,
    seed: u64,
) -> PriceResult {
    let kernel = AntitheticKernel::new(params, option_type);
    let n_chunks = total_pairs.div_ceil(PAIRS_PER_CHUNK);

    let acc = (0..n_chunks)
        .into_par_iter()
        .fold(PairAccumulator::new, |mut acc, chunk| {
            let start = chunk * PAIRS_PER_CHUNK;
            let pairs = PAIRS_PER_CHUNK.min(total_pairs - start);
            let mut rng = PricerRng::from_seed(derive_stream_seed(seed, chunk as u64));
            kernel.accumulate(pairs, &mut rng, &mut acc);
            acc
        })
        .reduce(PairAccumulator::new, |mut a, b| {
            a.merge(&b);
            a
        });

    acc.finish(kernel.discount())
}

/// Prices with a validated [`SimulationConfig`].
///
/// Uses the configured seed, or operating-system entropy when none is set,
/// and dispatches to [`price_parallel`] or the sequential estimator.
pub fn price_with_config(
    params: &OptionParameters,
    config: &SimulationConfig,
    option_type: OptionType,
) -> PriceResult {
    if config.parallel() {
        let seed = config
            .seed()
            .unwrap_or_else(|| PricerRng::from_entropy().next_seed());
        price_pairs_parallel(params, config.n_pairs(), option_type, seed)
    } else {
        let mut rng = PricerRng::from_optional_seed(config.seed());
        antithetic::price_pairs(params, config.n_pairs(), option_type, &mut rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn reference() -> OptionParameters {
        OptionParameters::new(100.0, 100.0, 1.0, 0.05, 0.2)
    }

    #[test]
    fn test_parallel_is_reproducible() {
        let a = price_parallel(&reference(), 100_000, OptionType::Call, 2024);
        let b = price_parallel(&reference(), 100_000, OptionType::Call, 2024);
        assert_relative_eq!(a.price, b.price, max_relative = 1e-12);
    }

    #[test]
    fn test_parallel_converges() {
        let call = price_parallel(&reference(), 1_000_000, OptionType::Call, 11);
        let put = price_parallel(&reference(), 1_000_000, OptionType::Put, 12);
        assert_abs_diff_eq!(call.price, 10.450583572185565, epsilon = 0.05);
        assert_abs_diff_eq!(put.price, 5.573526022256971, epsilon = 0.05);
    }

    #[test]
    fn test_single_chunk_matches_sequential_stream() {
        // one chunk: same draws as a sequential run on the chunk's seed
        let seed = derive_stream_seed(77, 0);
        let parallel = price_parallel(&reference(), 1_000, OptionType::Put, 77);
        let mut rng = PricerRng::from_seed(seed);
        let sequential = antithetic::price_with_stats(&reference(), 1_000, OptionType::Put, &mut rng);
        assert_relative_eq!(parallel.price, sequential.price, max_relative = 1e-12);
    }

    #[test]
    fn test_partial_last_chunk() {
        let paths = 2 * PAIRS_PER_CHUNK + 3;
        let result = price_parallel(&reference(), paths, OptionType::Call, 3);
        assert!(result.price.is_finite());
        assert!(result.std_error.unwrap() > 0.0);
    }

    #[test]
    fn test_price_with_config_dispatch() {
        let sequential = SimulationConfig::builder()
            .n_paths(20_000)
            .seed(5)
            .build()
            .unwrap();
        let parallel = SimulationConfig::builder()
            .n_paths(20_000)
            .seed(5)
            .parallel(true)
            .build()
            .unwrap();

        let mut rng = PricerRng::from_seed(5);
        let expected = antithetic::price_with_stats(&reference(), 20_000, OptionType::Call, &mut rng);
        assert_eq!(
            price_with_config(&reference(), &sequential, OptionType::Call).price,
            expected.price
        );

        let expected = price_parallel(&reference(), 20_000, OptionType::Call, 5);
        assert_relative_eq!(
            price_with_config(&reference(), &parallel, OptionType::Call).price,
            expected.price,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_odd_config_paths_match_rounded_up_count() {
        let odd = SimulationConfig::builder().n_paths(10_001).seed(9).build().unwrap();
        let even = SimulationConfig::builder().n_paths(10_002).seed(9).build().unwrap();
        assert_eq!(
            price_with_config(&reference(), &odd, OptionType::Put),
            price_with_config(&reference(), &even, OptionType::Put)
        );
    }

    #[test]
    fn test_unseeded_config_still_prices() {
        let config = SimulationConfig::builder()
            .n_paths(50_000)
            .parallel(true)
            .build()
            .unwrap();
        let result = price_with_config(&reference(), &config, OptionType::Call);
        assert_abs_diff_eq!(result.price, 10.450583572185565, epsilon = 0.5);
    }
}
