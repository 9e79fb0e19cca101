//! Height-field terrain built from one row of noise samples per attempt.

use crate::types::{Pos, TerrainTile};

use super::grid::LevelGrids;
use super::noise::NoiseField;
use super::tuning::{MAX_GROUND_HEIGHT, MIN_GROUND_HEIGHT};

pub(super) fn build_terrain(grids: &mut LevelGrids, noise: &NoiseField, frequency: f64) {
    let height = grids.height();
    for x in 0..grids.width() {
        let ground_height = column_ground_height(noise, x, frequency, height);
        for y in (height - ground_height)..height {
            grids.set_terrain(Pos::new(y, x), TerrainTile::Ground);
        }
    }
    promote_surfaces(grids);
}

/// Number of solid rows counted up from the bottom edge. Always leaves the
/// top row open so every column has air to place into.
pub(super) fn column_ground_height(
    noise: &NoiseField,
    x: usize,
    frequency: f64,
    grid_height: usize,
) -> usize {
    let normalized = (noise.sample(x as f64 * frequency, 0.0) + 1.0) / 2.0;
    let span = (MAX_GROUND_HEIGHT - MIN_GROUND_HEIGHT) as f64;
    let raw = MIN_GROUND_HEIGHT + (span * normalized) as usize;
    raw.clamp(MIN_GROUND_HEIGHT, MAX_GROUND_HEIGHT).min(grid_height.saturating_sub(1))
}

/// Reclassifies each column's topmost solid cell as `Platform` when it is bare `Ground`.
pub(super) fn promote_surfaces(grids: &mut LevelGrids) {
    for x in 0..grids.width() {
        let surface = (0..grids.height())
            .map(|y| Pos::new(y, x))
            .find(|&pos| grids.terrain_at(pos).is_solid());
        if let Some(pos) = surface
            && grids.terrain_at(pos) == TerrainTile::Ground
        {
            grids.set_terrain(pos, TerrainTile::Platform);
        }
    }
}
