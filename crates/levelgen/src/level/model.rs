//! Public data models for validated levels and the statistics of their generation.

use serde::{Deserialize, Serialize};
use xxhash_rust::xxh3::xxh3_64;

use crate::types::{ObjectTile, Pos, TerrainTile};

use super::grid::LevelGrids;
use super::placement::PlacementReport;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    pub seed: u64,
    /// Attempts consumed, including the successful one.
    pub attempts: u32,
    pub frequency: f64,
    pub placement: PlacementReport,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedLevel {
    pub grids: LevelGrids,
    pub spawn: Pos,
    pub exit: Pos,
    pub stats: GenerationStats,
}

impl GeneratedLevel {
    pub fn width(&self) -> usize {
        self.grids.width()
    }

    pub fn height(&self) -> usize {
        self.grids.height()
    }

    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width() as u32).to_le_bytes());
        bytes.extend((self.height() as u32).to_le_bytes());
        for tile in self.grids.terrain() {
            bytes.push(match tile {
                TerrainTile::Empty => 0,
                TerrainTile::Ground => 1,
                TerrainTile::Platform => 2,
            });
        }
        for tile in self.grids.objects() {
            bytes.push(match tile {
                ObjectTile::Empty => 0,
                ObjectTile::Key => 1,
                ObjectTile::Spike => 2,
                ObjectTile::Door => 3,
                ObjectTile::Player => 4,
            });
        }
        bytes.extend(self.spawn.y.to_le_bytes());
        bytes.extend(self.spawn.x.to_le_bytes());
        bytes.extend(self.exit.y.to_le_bytes());
        bytes.extend(self.exit.x.to_le_bytes());
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }
}
