//! Co-indexed terrain and object grids plus the predicates evaluated over them.

use crate::types::{ObjectTile, Pos, TerrainTile};

/// Terrain and object layers of one level, stored row-major with row 0 at the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LevelGrids {
    width: usize,
    height: usize,
    terrain: Vec<TerrainTile>,
    objects: Vec<ObjectTile>,
}

impl LevelGrids {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            terrain: vec![TerrainTile::Empty; width * height],
            objects: vec![ObjectTile::Empty; width * height],
        }
    }

    pub(crate) fn from_layers(
        width: usize,
        height: usize,
        terrain: Vec<TerrainTile>,
        objects: Vec<ObjectTile>,
    ) -> Self {
        debug_assert_eq!(terrain.len(), width * height);
        debug_assert_eq!(objects.len(), width * height);
        Self { width, height, terrain, objects }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    /// Out-of-grid positions read as empty.
    pub fn terrain_at(&self, pos: Pos) -> TerrainTile {
        if !self.in_bounds(pos) {
            return TerrainTile::Empty;
        }
        self.terrain[self.index(pos)]
    }

    pub fn object_at(&self, pos: Pos) -> ObjectTile {
        if !self.in_bounds(pos) {
            return ObjectTile::Empty;
        }
        self.objects[self.index(pos)]
    }

    pub fn set_terrain(&mut self, pos: Pos, tile: TerrainTile) {
        if self.in_bounds(pos) {
            let index = self.index(pos);
            self.terrain[index] = tile;
        }
    }

    pub fn set_object(&mut self, pos: Pos, tile: ObjectTile) {
        if self.in_bounds(pos) {
            let index = self.index(pos);
            self.objects[index] = tile;
        }
    }

    pub fn terrain(&self) -> &[TerrainTile] {
        &self.terrain
    }

    pub fn objects(&self) -> &[ObjectTile] {
        &self.objects
    }

    pub fn terrain_row(&self, y: usize) -> &[TerrainTile] {
        &self.terrain[y * self.width..(y + 1) * self.width]
    }

    pub fn object_row(&self, y: usize) -> &[ObjectTile] {
        &self.objects[y * self.width..(y + 1) * self.width]
    }

    pub fn count_objects(&self, kind: ObjectTile) -> usize {
        self.objects.iter().filter(|&&tile| tile == kind).count()
    }

    pub fn find_object(&self, kind: ObjectTile) -> Option<Pos> {
        self.objects
            .iter()
            .position(|&tile| tile == kind)
            .map(|index| Pos::new(index / self.width, index % self.width))
    }

    /// Empty air, resting on solid terrain, with no object yet.
    pub fn is_placeable(&self, pos: Pos) -> bool {
        let below = Pos { y: pos.y + 1, x: pos.x };
        self.in_bounds(pos)
            && self.in_bounds(below)
            && self.terrain_at(pos) == TerrainTile::Empty
            && self.terrain_at(below).is_solid()
            && self.object_at(pos) == ObjectTile::Empty
    }

    /// Crossable for path-existence checks. Spikes block here even though
    /// they are not solid terrain.
    pub fn is_passable(&self, pos: Pos) -> bool {
        self.in_bounds(pos)
            && self.terrain_at(pos) == TerrainTile::Empty
            && matches!(
                self.object_at(pos),
                ObjectTile::Empty | ObjectTile::Player | ObjectTile::Door | ObjectTile::Key
            )
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor_grid() -> LevelGrids {
        let mut grids = LevelGrids::new(4, 3);
        for x in 0..4 {
            grids.set_terrain(Pos::new(2, x), TerrainTile::Ground);
        }
        grids
    }

    #[test]
    fn placeable_requires_air_support_and_free_object_slot() {
        let mut grids = floor_grid();
        assert!(grids.is_placeable(Pos::new(1, 0)));
        assert!(!grids.is_placeable(Pos::new(0, 0)), "nothing underneath");
        assert!(!grids.is_placeable(Pos::new(2, 0)), "cell itself is solid");

        grids.set_object(Pos::new(1, 1), ObjectTile::Key);
        assert!(!grids.is_placeable(Pos::new(1, 1)), "object slot taken");

        grids.set_terrain(Pos::new(2, 2), TerrainTile::Platform);
        assert!(grids.is_placeable(Pos::new(1, 2)), "platforms support objects");
    }

    #[test]
    fn placeable_is_stable_on_an_unmutated_grid() {
        let grids = floor_grid();
        for y in 0..3 {
            for x in 0..4 {
                let pos = Pos::new(y, x);
                assert_eq!(grids.is_placeable(pos), grids.is_placeable(pos));
            }
        }
    }

    #[test]
    fn spikes_block_passability_but_keys_and_markers_do_not() {
        let mut grids = floor_grid();
        grids.set_object(Pos::new(1, 0), ObjectTile::Spike);
        grids.set_object(Pos::new(1, 1), ObjectTile::Key);
        grids.set_object(Pos::new(1, 2), ObjectTile::Door);
        grids.set_object(Pos::new(1, 3), ObjectTile::Player);

        assert!(!grids.is_passable(Pos::new(1, 0)));
        assert!(grids.is_passable(Pos::new(1, 1)));
        assert!(grids.is_passable(Pos::new(1, 2)));
        assert!(grids.is_passable(Pos::new(1, 3)));
        assert!(!grids.is_passable(Pos::new(2, 0)));
        assert!(!grids.is_passable(Pos { y: -1, x: 0 }));
    }
}
