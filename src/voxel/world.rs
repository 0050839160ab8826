//! Block grid access and a chunked in-memory world

use std::collections::HashMap;

use crate::core::types::IVec3;
use crate::core::{Error, Result};
use crate::math::Bounds;
use super::block::BlockSpec;
use super::chunk::{Chunk, ChunkCoord};

/// Read/write access to blocks at integer coordinates.
///
/// Writes must be visible to subsequent reads immediately.
pub trait WorldGrid {
    /// Block at `pos`
    fn get(&self, pos: IVec3) -> Result<BlockSpec>;

    /// Replace the block at `pos`
    fn set(&mut self, pos: IVec3, block: BlockSpec) -> Result<()>;
}

impl<G: WorldGrid + ?Sized> WorldGrid for &mut G {
    fn get(&self, pos: IVec3) -> Result<BlockSpec> {
        (**self).get(pos)
    }

    fn set(&mut self, pos: IVec3, block: BlockSpec) -> Result<()> {
        (**self).set(pos, block)
    }
}

/// Default lowest buildable layer
pub const DEFAULT_MIN_Y: i32 = -64;
/// Default height limit (exclusive)
pub const DEFAULT_MAX_Y: i32 = 320;

/// Container for a world composed of lazily created chunks.
///
/// Horizontally unbounded; vertically limited to `[min_y, max_y)`. Reads in
/// chunks that were never written return air.
#[derive(Clone)]
pub struct World {
    /// Map from chunk coordinates to loaded chunks
    chunks: HashMap<ChunkCoord, Chunk>,
    /// Chunks written since the last `take_modified`
    modified_chunks: Vec<ChunkCoord>,
    min_y: i32,
    max_y: i32,
}

impl World {
    /// Create a new empty world with the default height range
    pub fn new() -> Self {
        Self::with_height_range(DEFAULT_MIN_Y, DEFAULT_MAX_Y)
    }

    /// Create a new empty world limited to `min_y..max_y`
    pub fn with_height_range(min_y: i32, max_y: i32) -> Self {
        Self {
            chunks: HashMap::new(),
            modified_chunks: Vec::new(),
            min_y,
            max_y,
        }
    }

    /// Vertical extent as `(min_y, max_y)`, max exclusive
    pub fn height_range(&self) -> (i32, i32) {
        (self.min_y, self.max_y)
    }

    pub fn in_bounds(&self, pos: IVec3) -> bool {
        pos.y >= self.min_y && pos.y < self.max_y
    }

    fn check_bounds(&self, pos: IVec3) -> Result<()> {
        if self.in_bounds(pos) {
            Ok(())
        } else {
            Err(Error::OutOfBounds { position: pos })
        }
    }

    /// Fill every block of `bounds` with `block`
    pub fn fill(&mut self, bounds: Bounds, block: BlockSpec) -> Result<()> {
        for pos in bounds.iter() {
            self.set(pos, block)?;
        }
        Ok(())
    }

    /// Get immutable reference to a chunk by coordinate
    pub fn get_chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Get the number of loaded chunks
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// Count non-air blocks across all chunks
    pub fn solid_count(&self) -> usize {
        self.chunks.values().map(Chunk::solid_count).sum()
    }

    /// Take the list of modified chunks and clear the internal list
    pub fn take_modified(&mut self) -> Vec<ChunkCoord> {
        for coord in &self.modified_chunks {
            if let Some(chunk) = self.chunks.get_mut(coord) {
                chunk.modified = false;
            }
        }
        std::mem::take(&mut self.modified_chunks)
    }
}

impl Default for World {
    fn default() -> Self {
        Self::new()
    }
}

impl WorldGrid for World {
    fn get(&self, pos: IVec3) -> Result<BlockSpec> {
        self.check_bounds(pos)?;
        Ok(self
            .chunks
            .get(&ChunkCoord::from_block_pos(pos))
            .map_or(BlockSpec::AIR, |chunk| chunk.get(pos)))
    }

    fn set(&mut self, pos: IVec3, block: BlockSpec) -> Result<()> {
        self.check_bounds(pos)?;
        let coord = ChunkCoord::from_block_pos(pos);
        let chunk = self.chunks.entry(coord).or_insert_with(|| Chunk::new(coord));
        chunk.set(pos, block);
        if !self.modified_chunks.contains(&coord) {
            self.modified_chunks.push(coord);
        }
        Ok(())
    }
}
