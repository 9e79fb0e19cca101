//! Floating platform bands and gap carving layered over the base terrain.

use crate::types::{Pos, TerrainTile};

use super::grid::LevelGrids;
use super::seed::LevelRng;
use super::terrain::promote_surfaces;
use super::tuning::{
    GAP_CHANCE, GAP_LENGTH, GAP_PROTECTED_ROWS, GAP_RIGHT_MARGIN, PLATFORM_BAND_OFFSETS,
    PLATFORM_CHANCE, PLATFORM_MISS_STEP, PLATFORM_RUN_LENGTH, PLATFORM_TRAILING_GAP,
};

pub(super) fn carve_platforms(grids: &mut LevelGrids, rng: &mut LevelRng) {
    for offset in PLATFORM_BAND_OFFSETS {
        if let Some(row) = grids.height().checked_sub(offset) {
            place_band(grids, rng, row);
        }
    }
    carve_gaps(grids, rng);
    // A gap can take out a column's surface cell.
    promote_surfaces(grids);
}

fn place_band(grids: &mut LevelGrids, rng: &mut LevelRng, row: usize) {
    let width = grids.width();
    let mut x = 0;
    while x + 1 < width {
        if rng.chance(PLATFORM_CHANCE) {
            let run_length = rng.index_in(PLATFORM_RUN_LENGTH);
            for column in x..(x + run_length).min(width) {
                grids.set_terrain(Pos::new(row, column), TerrainTile::Platform);
            }
            x += run_length + rng.index_in(PLATFORM_TRAILING_GAP);
        } else {
            x += rng.index_in(PLATFORM_MISS_STEP);
        }
    }
}

fn carve_gaps(grids: &mut LevelGrids, rng: &mut LevelRng) {
    let carve_rows = grids.height().saturating_sub(GAP_PROTECTED_ROWS);
    let last_start = grids.width().saturating_sub(GAP_RIGHT_MARGIN);
    let mut x = 0;
    while x < last_start {
        if rng.chance(GAP_CHANCE) {
            let gap_length = rng.index_in(GAP_LENGTH);
            for column in x..(x + gap_length).min(grids.width()) {
                for y in 0..carve_rows {
                    let pos = Pos::new(y, column);
                    if grids.terrain_at(pos) == TerrainTile::Platform {
                        grids.set_terrain(pos, TerrainTile::Empty);
                    }
                }
            }
            x += gap_length;
        }
        x += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn platform_count(grids: &LevelGrids) -> usize {
        grids.terrain().iter().filter(|&&tile| tile == TerrainTile::Platform).count()
    }

    #[test]
    fn bands_only_write_their_own_rows() {
        let mut grids = LevelGrids::new(100, 10);
        let mut rng = LevelRng::from_seed(3);
        for offset in PLATFORM_BAND_OFFSETS {
            place_band(&mut grids, &mut rng, 10 - offset);
        }

        assert!(platform_count(&grids) > 0, "bands should place at least one run");
        for y in 0..10 {
            let is_band = PLATFORM_BAND_OFFSETS.iter().any(|offset| 10 - offset == y);
            if !is_band {
                assert!(grids.terrain_row(y).iter().all(|&tile| tile == TerrainTile::Empty));
            }
        }
    }

    #[test]
    fn bands_above_the_grid_are_skipped() {
        let mut grids = LevelGrids::new(20, 5);
        let mut rng = LevelRng::from_seed(11);
        carve_platforms(&mut grids, &mut rng);
        assert!(grids.terrain_row(0).iter().all(|&tile| tile == TerrainTile::Empty));
    }

    #[test]
    fn gaps_only_remove_platforms_above_the_protected_rows() {
        let mut grids = LevelGrids::new(60, 6);
        for y in 0..6 {
            for x in 0..60 {
                grids.set_terrain(Pos::new(y, x), TerrainTile::Platform);
            }
        }
        grids.set_terrain(Pos::new(0, 0), TerrainTile::Ground);
        let mut rng = LevelRng::from_seed(8);
        carve_gaps(&mut grids, &mut rng);

        assert!(platform_count(&grids) < 60 * 6 - 1, "some gap should be carved");
        assert_eq!(grids.terrain_at(Pos::new(0, 0)), TerrainTile::Ground);
        for y in 4..6 {
            assert!(grids.terrain_row(y).iter().all(|&tile| tile == TerrainTile::Platform));
        }
        for x in 58..60 {
            assert_eq!(grids.terrain_at(Pos::new(1, x)), TerrainTile::Platform, "column {x}");
        }
    }
}
