//! Single-attempt pipeline: terrain, platforms, objects, then validation.

use crate::types::Pos;

use super::super::grid::LevelGrids;
use super::super::noise::NoiseField;
use super::super::placement::{PlacementReport, populate_objects};
use super::super::platforms::carve_platforms;
use super::super::reachability::is_reachable;
use super::super::seed::LevelRng;
use super::super::terrain::build_terrain;
use super::super::tuning::TERRAIN_FREQUENCY;

pub(super) struct AcceptedAttempt {
    pub(super) grids: LevelGrids,
    pub(super) spawn: Pos,
    pub(super) exit: Pos,
    pub(super) frequency: f64,
    pub(super) placement: PlacementReport,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum RejectReason {
    MissingSpawn,
    MissingExit,
    Unreachable,
}

impl RejectReason {
    pub(super) fn describe(self) -> &'static str {
        match self {
            Self::MissingSpawn => "no spawn tile could be placed",
            Self::MissingExit => "no exit tile could be placed",
            Self::Unreachable => "exit is not reachable from spawn",
        }
    }
}

pub(super) fn run_attempt(
    width: usize,
    height: usize,
    noise: &NoiseField,
    rng: &mut LevelRng,
) -> Result<AcceptedAttempt, RejectReason> {
    let mut grids = LevelGrids::new(width, height);
    let frequency = rng.float_in(TERRAIN_FREQUENCY);

    build_terrain(&mut grids, noise, frequency);
    carve_platforms(&mut grids, rng);
    let (slots, placement) = populate_objects(&mut grids, rng);

    let (Some(spawn), Some(exit)) = (slots.spawn, slots.exit) else {
        return Err(if slots.spawn.is_none() {
            RejectReason::MissingSpawn
        } else {
            RejectReason::MissingExit
        });
    };
    if !is_reachable(&grids, slots.spawn, slots.exit) {
        return Err(RejectReason::Unreachable);
    }

    Ok(AcceptedAttempt { grids, spawn, exit, frequency, placement })
}
