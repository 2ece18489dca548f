//! Random sources for burst sampling
//!
//! The animator never touches a global generator. It asks a [`RandomSource`]
//! for values so tests can script exact bursts.

use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Uniform sampling operations needed by the show
pub trait RandomSource {
    /// Uniform integer in `low..=high`
    fn uniform_int(&mut self, low: i32, high: i32) -> i32;

    /// Uniform index into a collection of `len` items (`len > 0`)
    fn choose_index(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<SmallRng> {
    /// Fast generator seeded from OS entropy
    pub fn from_entropy() -> Self {
        Self::new(SmallRng::from_entropy())
    }

    /// Reproducible generator for a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        self.rng.gen_range(low..=high)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn uniform_int(&mut self, low: i32, high: i32) -> i32 {
        (**self).uniform_int(low, high)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}
