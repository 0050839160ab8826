//! Edit delta representation.

use crate::core::types::IVec3;
use crate::math::Bounds;
use crate::voxel::block::BlockSpec;
use crate::voxel::chunk::ChunkCoord;

/// A single block write with the value it replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EditDelta {
    pub position: IVec3,
    pub before: BlockSpec,
    pub after: BlockSpec,
}

impl EditDelta {
    pub fn new(position: IVec3, before: BlockSpec, after: BlockSpec) -> Self {
        Self { position, before, after }
    }

    /// Chunk containing the written block
    pub fn chunk(&self) -> ChunkCoord {
        ChunkCoord::from_block_pos(self.position)
    }

    /// Whether the write left the block unchanged
    pub fn is_noop(&self) -> bool {
        self.before == self.after
    }
}

/// Ordered set of writes made by one brush activation.
#[derive(Clone, Debug, Default)]
pub struct EditBatch {
    /// Assigned by `EditHistory::remember`, 0 until then
    pub id: u64,
    deltas: Vec<EditDelta>,
    bounds: Option<Bounds>,
}

impl EditBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a write
    pub fn push(&mut self, delta: EditDelta) {
        match &mut self.bounds {
            Some(bounds) => bounds.expand(delta.position),
            None => self.bounds = Some(Bounds::point(delta.position)),
        }
        self.deltas.push(delta);
    }

    /// Writes in the order they happened
    pub fn deltas(&self) -> &[EditDelta] {
        &self.deltas
    }

    /// Box enclosing every written block, `None` when empty
    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.deltas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deltas.is_empty()
    }

    /// Distinct chunks touched by this batch
    pub fn affected_chunks(&self) -> Vec<ChunkCoord> {
        let mut chunks: Vec<ChunkCoord> = Vec::new();
        for delta in &self.deltas {
            let chunk = delta.chunk();
            if !chunks.contains(&chunk) {
                chunks.push(chunk);
            }
        }
        chunks
    }
}
