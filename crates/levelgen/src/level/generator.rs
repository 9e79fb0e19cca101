//! Generate-and-test loop that rebuilds whole levels until one validates.

mod pipeline;

use std::path::Path;

use thiserror::Error;

use crate::level_file::persist_level;

use super::config::LevelConfig;
use super::model::{GeneratedLevel, GenerationStats};
use super::noise::NoiseField;
use super::seed::{LevelRng, runtime_seed};
use pipeline::{RejectReason, run_attempt};

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    #[error("invalid level configuration: {0}")]
    InvalidConfig(String),
    #[error("no level with a reachable exit after {attempts} attempts")]
    AttemptsExhausted { attempts: u32 },
}

/// A validated level together with whether it reached disk.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedLevel {
    pub level: GeneratedLevel,
    pub persisted: bool,
}

/// Owns the random stream and noise field for a run of level attempts.
///
/// Both are seeded once at construction and consumed sequentially, so two
/// generators built from the same seed and config produce the same levels.
pub struct LevelGenerator {
    config: LevelConfig,
    seed: u64,
    rng: LevelRng,
    noise: NoiseField,
}

impl LevelGenerator {
    pub fn new(config: LevelConfig) -> Result<Self, GenerationError> {
        Self::from_seed(config, runtime_seed())
    }

    pub fn from_seed(config: LevelConfig, seed: u64) -> Result<Self, GenerationError> {
        config.validate().map_err(GenerationError::InvalidConfig)?;
        Ok(Self { config, seed, rng: LevelRng::from_seed(seed), noise: NoiseField::new(seed) })
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&mut self) -> Result<GeneratedLevel, GenerationError> {
        let LevelConfig { width, height, max_attempts } = self.config;

        for attempt in 1..=max_attempts {
            match run_attempt(width, height, &self.noise, &mut self.rng) {
                Ok(accepted) => {
                    if accepted.placement.is_under_filled() {
                        tracing::warn!(
                            keys = accepted.placement.keys_placed,
                            key_quota = accepted.placement.key_quota,
                            spikes = accepted.placement.spikes_placed,
                            spike_quota = accepted.placement.spike_quota,
                            "placement budget ran out before quotas were met"
                        );
                    }
                    let level = GeneratedLevel {
                        grids: accepted.grids,
                        spawn: accepted.spawn,
                        exit: accepted.exit,
                        stats: GenerationStats {
                            seed: self.seed,
                            attempts: attempt,
                            frequency: accepted.frequency,
                            placement: accepted.placement,
                        },
                    };
                    tracing::info!(
                        attempts = attempt,
                        fingerprint = level.fingerprint(),
                        "level generated"
                    );
                    return Ok(level);
                }
                Err(reason) => {
                    tracing::debug!(
                        attempt,
                        reason = reason.describe(),
                        "discarding level attempt"
                    );
                }
            }
        }

        Err(GenerationError::AttemptsExhausted { attempts: max_attempts })
    }

    /// Generates a level and writes it to `path`. A failed write is logged
    /// and reported through [`SavedLevel::persisted`]; the level is still returned.
    pub fn generate_to_file(&mut self, path: &Path) -> Result<SavedLevel, GenerationError> {
        let level = self.generate()?;
        let persisted = persist_level(path, &level.grids);
        Ok(SavedLevel { level, persisted })
    }
}
