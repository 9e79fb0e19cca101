//! Constrained random placement of spawn, exit, keys, and spikes into the object layer.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::types::{ObjectTile, Pos};

use super::grid::LevelGrids;
use super::seed::LevelRng;
use super::tuning::{
    KEY_QUOTA, PLACEMENT_ATTEMPTS, SPIKE_QUOTA, door_columns, player_columns, scatter_columns,
};

/// Spawn and exit coordinates recorded during one attempt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PlacementSlots {
    pub spawn: Option<Pos>,
    pub exit: Option<Pos>,
}

/// Placed counts against their targets for the quota-driven categories.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementReport {
    pub keys_placed: usize,
    pub key_quota: usize,
    pub spikes_placed: usize,
    pub spike_quota: usize,
}

impl PlacementReport {
    pub fn is_under_filled(&self) -> bool {
        self.keys_placed < self.key_quota || self.spikes_placed < self.spike_quota
    }
}

pub(super) fn populate_objects(
    grids: &mut LevelGrids,
    rng: &mut LevelRng,
) -> (PlacementSlots, PlacementReport) {
    let mut slots = PlacementSlots::default();
    let width = grids.width();

    place_singleton(grids, &mut slots, rng, ObjectTile::Player, player_columns(width));
    place_singleton(grids, &mut slots, rng, ObjectTile::Door, door_columns(width));

    let keys_placed =
        fill_quota(grids, &mut slots, rng, ObjectTile::Key, KEY_QUOTA, scatter_columns(width));
    let spike_quota = rng.index_in(SPIKE_QUOTA);
    let spikes_placed =
        fill_quota(grids, &mut slots, rng, ObjectTile::Spike, spike_quota, scatter_columns(width));

    let report = PlacementReport { keys_placed, key_quota: KEY_QUOTA, spikes_placed, spike_quota };
    (slots, report)
}

/// Drops `kind` onto a random placeable cell of one randomly chosen column
/// in `columns`. Leaves the grid untouched when that column has no candidate.
pub(crate) fn place(
    grids: &mut LevelGrids,
    slots: &mut PlacementSlots,
    rng: &mut LevelRng,
    kind: ObjectTile,
    columns: Range<usize>,
) -> bool {
    let columns = columns.start..columns.end.min(grids.width());
    if columns.is_empty() {
        return false;
    }

    let x = rng.index_in(columns);
    let candidates: Vec<Pos> = (0..grids.height())
        .map(|y| Pos::new(y, x))
        .filter(|&pos| grids.is_placeable(pos))
        .collect();
    if candidates.is_empty() {
        return false;
    }

    let pos = candidates[rng.index_in(0..candidates.len())];
    grids.set_object(pos, kind);
    match kind {
        ObjectTile::Player => {
            debug_assert!(slots.spawn.is_none(), "spawn recorded twice in one attempt");
            slots.spawn = Some(pos);
        }
        ObjectTile::Door => {
            debug_assert!(slots.exit.is_none(), "exit recorded twice in one attempt");
            slots.exit = Some(pos);
        }
        ObjectTile::Key | ObjectTile::Spike | ObjectTile::Empty => {}
    }
    true
}

fn place_singleton(
    grids: &mut LevelGrids,
    slots: &mut PlacementSlots,
    rng: &mut LevelRng,
    kind: ObjectTile,
    columns: Range<usize>,
) -> bool {
    (0..PLACEMENT_ATTEMPTS).any(|_| place(grids, slots, rng, kind, columns.clone()))
}

fn fill_quota(
    grids: &mut LevelGrids,
    slots: &mut PlacementSlots,
    rng: &mut LevelRng,
    kind: ObjectTile,
    quota: usize,
    columns: Range<usize>,
) -> usize {
    let mut placed = 0;
    let mut attempts = 0;
    while placed < quota && attempts < PLACEMENT_ATTEMPTS {
        if place(grids, slots, rng, kind, columns.clone()) {
            placed += 1;
        }
        attempts += 1;
    }
    placed
}
