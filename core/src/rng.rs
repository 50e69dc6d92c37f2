use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

use crate::DisplacementSource;

// Production randomness behind the generator: a small-state PCG, fully
// determined by its seed.
pub struct SeededSource {
    rng: Pcg64Mcg,
}

impl SeededSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg64Mcg::seed_from_u64(seed),
        }
    }
}

impl DisplacementSource for SeededSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        if high <= low {
            return low;
        }
        self.rng.gen_range(low..=high)
    }
}

// Replays a scripted sequence of samples, clamped into the requested
// interval. Once the script runs out every sample is 0 (no displacement),
// which keeps goldens flat and predictable.
pub struct FixedSource {
    values: Vec<f64>,
    next: usize,
}

impl FixedSource {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values, next: 0 }
    }
}

impl DisplacementSource for FixedSource {
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        let value = self.values.get(self.next).copied().unwrap_or(0.0);
        self.next += 1;
        value.clamp(low, high)
    }
}
