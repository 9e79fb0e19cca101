//! Seed derivation and the sequential random stream consumed by one generator.

use std::ops::Range;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

static RUNTIME_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Wall-clock derived seed, distinct per call within one process.
pub fn runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let counter = RUNTIME_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    mix_seed((now_nanos as u64) ^ ((now_nanos >> 64) as u64) ^ counter.rotate_left(7))
}

pub(super) fn noise_seed(seed: u64) -> u32 {
    let mixed = mix_seed(seed ^ 0x9E37_79B9_7F4A_7C15);
    (mixed ^ (mixed >> 32)) as u32
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

pub(crate) struct LevelRng {
    inner: ChaCha8Rng,
}

impl LevelRng {
    pub(crate) fn from_seed(seed: u64) -> Self {
        Self { inner: ChaCha8Rng::seed_from_u64(seed) }
    }

    /// Uniform index in `range`; callers guarantee the range is non-empty.
    pub(crate) fn index_in(&mut self, range: Range<usize>) -> usize {
        debug_assert!(range.start < range.end);
        range.start + (self.inner.next_u64() as usize % (range.end - range.start))
    }

    /// Uniform float in `[0, 1)`.
    pub(crate) fn unit(&mut self) -> f64 {
        (self.inner.next_u64() >> 11) as f64 * (1.0 / (1_u64 << 53) as f64)
    }

    pub(crate) fn float_in(&mut self, range: Range<f64>) -> f64 {
        range.start + self.unit() * (range.end - range.start)
    }

    pub(crate) fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_in_stays_inside_requested_bounds() {
        let mut rng = LevelRng::from_seed(12_345);
        for _ in 0..500 {
            let value = rng.index_in(7..13);
            assert!((7..13).contains(&value));
        }
    }

    #[test]
    fn float_in_stays_inside_half_open_range() {
        let mut rng = LevelRng::from_seed(9);
        for _ in 0..500 {
            let value = rng.float_in(0.02..0.045);
            assert!((0.02..0.045).contains(&value), "{value} escaped the range");
        }
    }

    #[test]
    fn same_seed_replays_the_same_stream() {
        let mut left = LevelRng::from_seed(77);
        let mut right = LevelRng::from_seed(77);
        for _ in 0..64 {
            assert_eq!(left.index_in(0..1000), right.index_in(0..1000));
        }
    }

    #[test]
    fn runtime_seed_changes_between_calls() {
        assert_ne!(runtime_seed(), runtime_seed());
    }
}
