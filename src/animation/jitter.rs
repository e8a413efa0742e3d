//! Per-tile duration staggering

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of per-tile tween durations.
///
/// The scheduler draws one duration per sub-animation; injecting the source
/// keeps test runs deterministic while production stays randomized.
pub trait DurationSource {
    /// Draw a duration for one sub-animation from the requested base.
    ///
    /// Implementations must return a value in `[base, 2·base)` so the
    /// scheduler's aggregate ticker (fixed at `2·base`) outlasts every
    /// sub-animation.
    fn sample(&mut self, base: Duration) -> Duration;
}

/// Uniform draw from `[base, 2·base)`, the reference stagger.
pub struct UniformJitter {
    rng: StdRng,
}

impl UniformJitter {
    /// Create a jitter source seeded from system entropy
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a reproducible jitter source from a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for UniformJitter {
    fn default() -> Self {
        Self::new()
    }
}

impl DurationSource for UniformJitter {
    fn sample(&mut self, base: Duration) -> Duration {
        base.mul_f32(self.rng.gen_range(1.0..2.0))
    }
}

/// Always returns the base duration unchanged. For deterministic tests.
pub struct FixedDuration;

impl DurationSource for FixedDuration {
    fn sample(&mut self, base: Duration) -> Duration {
        base
    }
}
