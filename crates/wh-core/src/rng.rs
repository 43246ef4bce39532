//! The single deterministic RNG stream.
//!
//! # Determinism strategy
//!
//! The whole coordinator draws from ONE `SmallRng` seeded by the 64-bit run
//! seed, and every randomised choice happens at a fixed point in the tick:
//! lifecycle draws (dump-slot shuffle, dwell sample) in agent-index order,
//! then planner candidate shuffles in priority order.  Two runs with the
//! same inputs and seed therefore produce byte-identical traces.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level deterministic RNG.
///
/// Single-threaded by construction — the tick loop is sequential, so there
/// is exactly one drawing site at any moment.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Expose the inner `SmallRng` for use with `rand` distribution types.
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }
}
