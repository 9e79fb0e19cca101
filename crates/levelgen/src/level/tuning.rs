//! Generation constants shared by the terrain, platform, and placement stages.

use std::ops::Range;

pub const DEFAULT_WIDTH: usize = 100;
pub const DEFAULT_HEIGHT: usize = 10;
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10_000;

pub const MIN_GROUND_HEIGHT: usize = 1;
pub const MAX_GROUND_HEIGHT: usize = 5;

/// Per-attempt terrain frequency, drawn uniformly. Smaller is smoother.
pub const TERRAIN_FREQUENCY: Range<f64> = 0.02..0.045;

/// Platform bands, as row offsets from the bottom edge.
pub(super) const PLATFORM_BAND_OFFSETS: [usize; 3] = [4, 6, 8];
pub(super) const PLATFORM_CHANCE: f64 = 0.3;
pub(super) const PLATFORM_RUN_LENGTH: Range<usize> = 1..5;
pub(super) const PLATFORM_TRAILING_GAP: Range<usize> = 0..2;
pub(super) const PLATFORM_MISS_STEP: Range<usize> = 1..5;

pub(super) const GAP_CHANCE: f64 = 0.15;
pub(super) const GAP_LENGTH: Range<usize> = 1..3;
/// Bottom rows never touched by gap carving.
pub(super) const GAP_PROTECTED_ROWS: usize = 2;
/// Columns at the right edge the gap cursor never starts in.
pub(super) const GAP_RIGHT_MARGIN: usize = 3;

pub const PLACEMENT_ATTEMPTS: usize = 1000;
pub(super) const PLAYER_COLUMNS: usize = 7;
pub(super) const DOOR_COLUMNS: usize = 10;
pub const KEY_QUOTA: usize = 10;
pub const SPIKE_QUOTA: Range<usize> = 5..11;

pub(super) fn player_columns(width: usize) -> Range<usize> {
    0..PLAYER_COLUMNS.min(width)
}

pub(super) fn door_columns(width: usize) -> Range<usize> {
    width.saturating_sub(DOOR_COLUMNS)..width.saturating_sub(1)
}

pub(super) fn scatter_columns(width: usize) -> Range<usize> {
    0..width.saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_ranges_stay_inside_narrow_grids() {
        assert_eq!(player_columns(4), 0..4);
        assert_eq!(door_columns(4), 0..3);
        assert_eq!(door_columns(100), 90..99);
        assert_eq!(scatter_columns(100), 0..99);
    }
}
