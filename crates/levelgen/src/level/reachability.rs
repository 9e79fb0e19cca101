//! Spawn-to-exit path existence over passable cells.

use crate::types::Pos;

use super::grid::LevelGrids;

/// Depth-first search from `spawn` to `exit` over 4-connected passable cells.
/// An unset slot on either end is unreachable.
pub fn is_reachable(grids: &LevelGrids, spawn: Option<Pos>, exit: Option<Pos>) -> bool {
    let (Some(spawn), Some(exit)) = (spawn, exit) else {
        return false;
    };

    let mut visited = vec![false; grids.width() * grids.height()];
    let mut stack = vec![spawn];
    while let Some(pos) = stack.pop() {
        if !grids.is_passable(pos) {
            continue;
        }
        let index = (pos.y as usize) * grids.width() + (pos.x as usize);
        if visited[index] {
            continue;
        }
        if pos == exit {
            return true;
        }
        visited[index] = true;

        // Reverse of the visiting order (down, up, right, left).
        stack.extend([
            Pos { y: pos.y, x: pos.x - 1 },
            Pos { y: pos.y, x: pos.x + 1 },
            Pos { y: pos.y - 1, x: pos.x },
            Pos { y: pos.y + 1, x: pos.x },
        ]);
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ObjectTile, TerrainTile};

    fn corridor(width: usize) -> LevelGrids {
        let mut grids = LevelGrids::new(width, 3);
        for x in 0..width {
            grids.set_terrain(Pos::new(0, x), TerrainTile::Ground);
            grids.set_terrain(Pos::new(2, x), TerrainTile::Ground);
        }
        grids
    }

    #[test]
    fn open_corridor_connects_both_ends() {
        let grids = corridor(8);
        assert!(is_reachable(&grids, Some(Pos::new(1, 0)), Some(Pos::new(1, 7))));
    }

    #[test]
    fn spike_in_a_one_tile_corridor_severs_the_path() {
        let mut grids = corridor(8);
        grids.set_object(Pos::new(1, 4), ObjectTile::Spike);
        assert!(!is_reachable(&grids, Some(Pos::new(1, 0)), Some(Pos::new(1, 7))));

        grids.set_object(Pos::new(1, 4), ObjectTile::Key);
        assert!(is_reachable(&grids, Some(Pos::new(1, 0)), Some(Pos::new(1, 7))));
    }

    #[test]
    fn unset_slots_are_unreachable() {
        let grids = corridor(4);
        assert!(!is_reachable(&grids, None, Some(Pos::new(1, 3))));
        assert!(!is_reachable(&grids, Some(Pos::new(1, 0)), None));
        assert!(!is_reachable(&grids, None, None));
    }

    #[test]
    fn solid_or_out_of_grid_start_is_a_dead_end() {
        let grids = corridor(4);
        assert!(!is_reachable(&grids, Some(Pos::new(0, 0)), Some(Pos::new(1, 3))));
        assert!(!is_reachable(&grids, Some(Pos { y: -1, x: 0 }), Some(Pos::new(1, 3))));
    }

    #[test]
    fn winding_path_through_open_air_is_found() {
        let mut grids = LevelGrids::new(5, 5);
        for y in 0..4 {
            grids.set_terrain(Pos::new(y, 1), TerrainTile::Ground);
        }
        for y in 1..5 {
            grids.set_terrain(Pos::new(y, 3), TerrainTile::Ground);
        }
        assert!(is_reachable(&grids, Some(Pos::new(0, 0)), Some(Pos::new(0, 4))));
    }
}
