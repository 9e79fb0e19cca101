//! Win/lose bookkeeping for one play session of a generated level.
//!
//! The tally is an ordinary value owned by whoever runs the session and handed
//! to the code reacting to touched tiles; nothing here is global.

use crate::level::GeneratedLevel;
use crate::types::ObjectTile;

pub const START_LIVES: u32 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TallyEvent {
    KeyCollected,
    Damaged,
    DoorReached,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunTally {
    lives: u32,
    keys_collected: usize,
    keys_required: usize,
    door_reached: bool,
}

impl RunTally {
    pub fn new(keys_required: usize) -> Self {
        Self { lives: START_LIVES, keys_collected: 0, keys_required, door_reached: false }
    }

    /// Requires exactly the keys the generator managed to place, so an
    /// under-filled level stays winnable.
    pub fn for_level(level: &GeneratedLevel) -> Self {
        Self::new(level.grids.count_objects(ObjectTile::Key))
    }

    pub fn record(&mut self, event: TallyEvent) {
        match event {
            TallyEvent::KeyCollected => {
                self.keys_collected = (self.keys_collected + 1).min(self.keys_required);
            }
            TallyEvent::Damaged => self.lives = self.lives.saturating_sub(1),
            TallyEvent::DoorReached => self.door_reached = true,
        }
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn keys_collected(&self) -> usize {
        self.keys_collected
    }

    pub fn keys_required(&self) -> usize {
        self.keys_required
    }

    pub fn has_all_keys(&self) -> bool {
        self.keys_collected == self.keys_required
    }

    pub fn is_win(&self) -> bool {
        self.has_all_keys() && self.door_reached && !self.is_game_over()
    }

    pub fn is_game_over(&self) -> bool {
        self.lives == 0
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.keys_required);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn door_alone_does_not_win_without_every_key() {
        let mut tally = RunTally::new(2);
        tally.record(TallyEvent::DoorReached);
        assert!(!tally.is_win());

        tally.record(TallyEvent::KeyCollected);
        tally.record(TallyEvent::KeyCollected);
        assert!(tally.has_all_keys());
        assert!(tally.is_win());
    }

    #[test]
    fn losing_every_life_ends_the_run() {
        let mut tally = RunTally::new(0);
        for _ in 0..5 {
            tally.record(TallyEvent::Damaged);
        }
        assert_eq!(tally.lives(), 0);
        assert!(tally.is_game_over());

        tally.record(TallyEvent::DoorReached);
        assert!(!tally.is_win(), "a finished run cannot also be won");
    }

    #[test]
    fn keys_never_exceed_the_requirement_and_reset_restores_the_start() {
        let mut tally = RunTally::new(1);
        tally.record(TallyEvent::KeyCollected);
        tally.record(TallyEvent::KeyCollected);
        assert_eq!(tally.keys_collected(), 1);

        tally.record(TallyEvent::Damaged);
        tally.reset();
        assert_eq!(tally, RunTally::new(1));
    }
}
