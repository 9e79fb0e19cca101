//! Coherent 2D value source backing the terrain height-field.

use noise::{NoiseFn, OpenSimplex};

use super::seed::noise_seed;

/// Deterministic, spatially continuous noise in `[-1, 1]`.
pub struct NoiseField {
    source: OpenSimplex,
}

impl NoiseField {
    pub fn new(seed: u64) -> Self {
        Self { source: OpenSimplex::new(noise_seed(seed)) }
    }

    pub fn sample(&self, x: f64, y: f64) -> f64 {
        self.source.get([x, y]).clamp(-1.0, 1.0)
    }
}
