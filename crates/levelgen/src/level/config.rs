//! Construction parameters for a level generator.

use serde::{Deserialize, Serialize};

use super::tuning::{DEFAULT_HEIGHT, DEFAULT_MAX_ATTEMPTS, DEFAULT_WIDTH, MIN_GROUND_HEIGHT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub width: usize,
    pub height: usize,
    /// Upper bound on full regeneration attempts before giving up.
    pub max_attempts: u32,
}

impl LevelConfig {
    pub const MIN_WIDTH: usize = 2;
    pub const MIN_HEIGHT: usize = MIN_GROUND_HEIGHT + 2;

    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, ..Self::default() }
    }

    pub fn with_max_attempts(self, max_attempts: u32) -> Self {
        Self { max_attempts, ..self }
    }

    pub(super) fn validate(&self) -> Result<(), String> {
        if self.width < Self::MIN_WIDTH {
            return Err(format!("width {} is below the minimum of {}", self.width, Self::MIN_WIDTH));
        }
        if self.height < Self::MIN_HEIGHT {
            return Err(format!(
                "height {} is below the minimum of {}",
                self.height,
                Self::MIN_HEIGHT
            ));
        }
        if self.max_attempts == 0 {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self { width: DEFAULT_WIDTH, height: DEFAULT_HEIGHT, max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_a_hundred_by_ten() {
        let config = LevelConfig::default();
        assert_eq!((config.width, config.height), (100, 10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn degenerate_dimensions_are_rejected() {
        let err = LevelConfig::new(1, 10).validate().expect_err("width 1 is too narrow");
        assert!(err.contains("width"), "error should name the width: {err}");
        let err = LevelConfig::new(10, 2).validate().expect_err("height 2 is too short");
        assert!(err.contains("height"), "error should name the height: {err}");
        let err = LevelConfig::default().with_max_attempts(0).validate().expect_err("zero guard");
        assert!(err.contains("max_attempts"), "error should name the guard: {err}");
    }
}
