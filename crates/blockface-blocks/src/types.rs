use serde::{Deserialize, Serialize};

use crate::direction::Direction;

pub type BlockId = u16;

/// Placement options carried by every block instance.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct BlockState {
    #[serde(default)]
    pub half: Half,
    #[serde(default)]
    pub facing: Facing,
}

impl BlockState {
    #[inline]
    pub const fn new(half: Half, facing: Facing) -> Self {
        Self { half, facing }
    }

    #[inline]
    pub const fn with_half(self, half: Half) -> Self {
        Self { half, ..self }
    }

    #[inline]
    pub const fn with_facing(self, facing: Facing) -> Self {
        Self { facing, ..self }
    }
}

// Compact voxel representation stored per cell
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct Block {
    pub id: BlockId,
    pub state: BlockState,
}

impl Block {
    pub const AIR: Block = Block {
        id: 0,
        state: BlockState::new(Half::Bottom, Facing::North),
    };

    #[inline]
    pub const fn new(id: BlockId) -> Self {
        Self {
            id,
            state: BlockState::new(Half::Bottom, Facing::North),
        }
    }

    #[inline]
    pub const fn with_state(id: BlockId, state: BlockState) -> Self {
        Self { id, state }
    }

    #[inline]
    pub fn is_air(self) -> bool {
        self.id == Block::AIR.id
    }
}

/// Which half of the cell a half-height shape occupies.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    #[default]
    Bottom,
    Top,
}

impl Half {
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Cardinal facing for oriented shapes. North is -Z, east is +X.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Facing {
    #[default]
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Facing {
    pub const ALL: [Facing; 4] = [Facing::North, Facing::East, Facing::South, Facing::West];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Number of clockwise quarter turns (seen from above) away from north.
    #[inline]
    pub fn quarter_turns(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn direction(self) -> Direction {
        match self {
            Facing::North => Direction::NegZ,
            Facing::East => Direction::PosX,
            Facing::South => Direction::PosZ,
            Facing::West => Direction::NegX,
        }
    }
}

/// Horizontal neighbours a connection-aware shape links up with.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default, Debug)]
pub struct Connections(u8);

impl Connections {
    pub const NONE: Connections = Connections(0);

    #[inline]
    pub fn with(self, side: Facing) -> Connections {
        Connections(self.0 | (1 << side.index()))
    }

    #[inline]
    pub fn has(self, side: Facing) -> bool {
        (self.0 >> side.index()) & 1 == 1
    }
}

// Closed set of geometry variants the catalog knows how to expand
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    None,
    Cube,
    Slab,
    Stairs,
    Fence,
    Ramp,
}

impl Shape {
    pub fn from_key(key: &str) -> Option<Shape> {
        match key {
            "none" | "air" => Some(Shape::None),
            "cube" => Some(Shape::Cube),
            "slab" => Some(Shape::Slab),
            "stairs" => Some(Shape::Stairs),
            "fence" => Some(Shape::Fence),
            "ramp" => Some(Shape::Ramp),
            _ => None,
        }
    }

    /// Opacity a type gets when its config does not say otherwise.
    #[inline]
    pub fn default_opaque(self) -> bool {
        matches!(self, Shape::Cube)
    }

    /// True when faces depend on the four horizontal neighbours.
    #[inline]
    pub fn needs_connections(self) -> bool {
        matches!(self, Shape::Fence)
    }
}
