use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn new(y: usize, x: usize) -> Self {
        Self { y: y as i32, x: x as i32 }
    }
}

/// Geometry layer cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TerrainTile {
    #[default]
    Empty,
    Ground,
    Platform,
}

impl TerrainTile {
    pub const ALL: [Self; 3] = [Self::Empty, Self::Ground, Self::Platform];

    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Ground => '#',
            Self::Platform => '~',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Empty),
            '#' => Some(Self::Ground),
            '~' => Some(Self::Platform),
            _ => None,
        }
    }

    /// Blocks movement for the physics layer.
    pub fn is_solid(self) -> bool {
        matches!(self, Self::Ground | Self::Platform)
    }
}

/// Interactive/hazard layer cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ObjectTile {
    #[default]
    Empty,
    Key,
    Spike,
    Door,
    Player,
}

impl ObjectTile {
    pub const ALL: [Self; 5] = [Self::Empty, Self::Key, Self::Spike, Self::Door, Self::Player];

    pub fn symbol(self) -> char {
        match self {
            Self::Empty => '.',
            Self::Key => '?',
            Self::Spike => '^',
            Self::Door => '0',
            Self::Player => '+',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '.' => Some(Self::Empty),
            '?' => Some(Self::Key),
            '^' => Some(Self::Spike),
            '0' => Some(Self::Door),
            '+' => Some(Self::Player),
            _ => None,
        }
    }
}
