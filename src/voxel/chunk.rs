//! Chunk system for managing cubic regions of block space

use crate::core::types::IVec3;
use crate::math::Bounds;
use crate::voxel::block::BlockSpec;

/// Number of blocks per chunk side
pub const CHUNK_SIZE: i32 = 16;

/// Blocks stored per chunk
pub const CHUNK_VOLUME: usize = (CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE) as usize;

/// Integer coordinate identifying a chunk in the world grid
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl ChunkCoord {
    /// Create a new chunk coordinate
    pub fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Chunk containing a block position
    pub fn from_block_pos(pos: IVec3) -> Self {
        Self {
            x: pos.x.div_euclid(CHUNK_SIZE),
            y: pos.y.div_euclid(CHUNK_SIZE),
            z: pos.z.div_euclid(CHUNK_SIZE),
        }
    }

    /// Minimum corner block of this chunk
    pub fn block_origin(&self) -> IVec3 {
        IVec3::new(self.x, self.y, self.z) * CHUNK_SIZE
    }

    /// Block-space bounds of this chunk
    pub fn bounds(&self) -> Bounds {
        let origin = self.block_origin();
        Bounds::new(origin, origin + IVec3::splat(CHUNK_SIZE - 1))
    }
}

/// Dense 16³ block storage
#[derive(Clone)]
pub struct Chunk {
    /// Coordinate of this chunk in the world grid
    pub coord: ChunkCoord,
    blocks: Box<[BlockSpec; CHUNK_VOLUME]>,
    /// Number of non-air blocks
    solid_count: usize,
    /// Whether this chunk has been written since last save
    pub modified: bool,
}

/// Index of a block within its chunk, x fastest
fn local_index(pos: IVec3) -> usize {
    let x = pos.x.rem_euclid(CHUNK_SIZE) as usize;
    let y = pos.y.rem_euclid(CHUNK_SIZE) as usize;
    let z = pos.z.rem_euclid(CHUNK_SIZE) as usize;
    let size = CHUNK_SIZE as usize;
    (y * size + z) * size + x
}

impl Chunk {
    /// Create a new all-air chunk at the given coordinate
    pub fn new(coord: ChunkCoord) -> Self {
        Self {
            coord,
            blocks: Box::new([BlockSpec::AIR; CHUNK_VOLUME]),
            solid_count: 0,
            modified: false,
        }
    }

    /// Block at a world position inside this chunk
    pub fn get(&self, pos: IVec3) -> BlockSpec {
        debug_assert_eq!(ChunkCoord::from_block_pos(pos), self.coord);
        self.blocks[local_index(pos)]
    }

    /// Replace the block at a world position inside this chunk, returning the old one
    pub fn set(&mut self, pos: IVec3, block: BlockSpec) -> BlockSpec {
        debug_assert_eq!(ChunkCoord::from_block_pos(pos), self.coord);
        let slot = &mut self.blocks[local_index(pos)];
        let old = std::mem::replace(slot, block);
        match (old.is_air(), block.is_air()) {
            (true, false) => self.solid_count += 1,
            (false, true) => self.solid_count -= 1,
            _ => {}
        }
        self.modified = true;
        old
    }

    /// Number of non-air blocks
    pub fn solid_count(&self) -> usize {
        self.solid_count
    }

    pub fn is_empty(&self) -> bool {
        self.solid_count == 0
    }
}
