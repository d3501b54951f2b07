//! Injected randomness for centroid initialization.
//!
//! Initialization is the only randomized step of the algorithm, so it is
//! modeled as a seam: production code draws uniformly without replacement,
//! tests supply a fixed seed or a deterministic sampler.

use rand::Rng;
use rand_chacha::ChaCha8Rng;

/// Source of initial centroid choices.
pub trait InitSampler {
    /// Choose `k` distinct indices from `0..n`.
    ///
    /// Callers guarantee `k <= n`; implementations must return exactly `k`
    /// distinct in-range indices.
    fn sample(&mut self, n: usize, k: usize) -> Vec<usize>;
}

/// Uniform without-replacement sampler backed by any [`Rng`].
#[derive(Debug, Clone)]
pub struct RandomInit<R: Rng> {
    rng: R,
}

impl RandomInit<ChaCha8Rng> {
    /// Deterministic sampler for a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        use rand::SeedableRng;
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> RandomInit<R> {
    /// Wrap an existing RNG.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> InitSampler for RandomInit<R> {
    fn sample(&mut self, n: usize, k: usize) -> Vec<usize> {
        rand::seq::index::sample(&mut self.rng, n, k).into_vec()
    }
}
