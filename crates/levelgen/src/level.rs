//! Procedural level generation split into one submodule per pipeline stage.

pub mod config;
pub mod model;
pub mod tuning;

mod generator;
mod grid;
mod noise;
mod placement;
mod platforms;
mod reachability;
mod seed;
mod terrain;

pub use config::LevelConfig;
pub use generator::{GenerationError, LevelGenerator, SavedLevel};
pub use grid::LevelGrids;
pub use model::{GeneratedLevel, GenerationStats};
pub use self::noise::NoiseField;
pub use placement::{PlacementReport, PlacementSlots};
pub use reachability::is_reachable;
pub use seed::runtime_seed;

pub fn generate_level(config: LevelConfig) -> Result<GeneratedLevel, GenerationError> {
    LevelGenerator::new(config)?.generate()
}

#[cfg(test)]
mod tests {
    use super::{LevelConfig, generate_level};
    use crate::types::ObjectTile;

    #[test]
    fn generate_level_uses_the_requested_dimensions() {
        let level = generate_level(LevelConfig::new(40, 8)).expect("40x8 generates");
        assert_eq!((level.width(), level.height()), (40, 8));
        assert_eq!(level.grids.count_objects(ObjectTile::Player), 1);
    }
}
