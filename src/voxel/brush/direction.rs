//! Horizontal anchor directions for hanging vines

use crate::core::types::IVec3;
use crate::voxel::block::{BlockKind, BlockSpec, state};

/// Horizontal neighbor a vine can hang from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// All four directions, in the order anchors are checked
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// Unit offset to the neighbor cell
    pub const fn offset(self) -> IVec3 {
        match self {
            Direction::North => IVec3::new(0, 0, -1),
            Direction::South => IVec3::new(0, 0, 1),
            Direction::East => IVec3::new(1, 0, 0),
            Direction::West => IVec3::new(-1, 0, 0),
        }
    }

    /// Vine block attached to the face on this side
    pub const fn vine(self) -> BlockSpec {
        let face = match self {
            Direction::North => state::NORTH,
            Direction::South => state::SOUTH,
            Direction::East => state::EAST,
            Direction::West => state::WEST,
        };
        BlockSpec::with_state(BlockKind::VINE, face)
    }
}
