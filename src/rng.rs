//! Per-worker pseudo-random source.
//!
//! The teacher reaches for `rand::rng()` (a thread-local generator) at every
//! call site, which makes render-thread streams and their seeds implicit.
//! Here the generator is an explicit value threaded through scene
//! construction and rendering instead, so a render is reproducible given a
//! seed, a thread count, and the sample/pixel iteration order (spec.md §5).

use rand::{Rng as _, SeedableRng};
use rand::rngs::SmallRng;

/// A seeded, explicitly-owned random source. Cheap to construct and to pass
/// by `&mut` down the call stack from a render worker into scattering code.
pub struct Rng {
    inner: SmallRng,
}

impl Rng {
    pub fn new(seed: u64) -> Rng {
        Rng {
            inner: SmallRng::seed_from_u64(seed),
        }
    }

    /// Uniform sample in `[0, 1)`.
    pub fn uniform(&mut self) -> f64 {
        self.inner.random()
    }

    /// Uniform sample in `[min, max)`.
    pub fn range(&mut self, min: f64, max: f64) -> f64 {
        self.inner.random_range(min..max)
    }

    /// Uniform integer sample in `[min, max)`.
    pub fn int_range(&mut self, min: i64, max: i64) -> i64 {
        self.inner.random_range(min..max)
    }

    /// Uniform choice of one of the three axes, used by BVH construction's
    /// axis-randomized split (spec.md §4.6).
    pub fn axis(&mut self) -> usize {
        self.inner.random_range(0..3)
    }
}
