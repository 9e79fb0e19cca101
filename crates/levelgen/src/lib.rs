pub mod level;
pub mod level_file;
pub mod tally;
pub mod types;

pub use level::{
    GeneratedLevel, GenerationError, LevelConfig, LevelGenerator, LevelGrids, SavedLevel,
    generate_level, is_reachable,
};
pub use level_file::{LayerGrid, LevelLoadError, encode_level, load_layer, load_level};
pub use tally::{RunTally, TallyEvent};
pub use types::*;
