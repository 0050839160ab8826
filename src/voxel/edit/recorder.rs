//! Grid wrapper that records every successful write.

use crate::core::types::IVec3;
use crate::core::Result;
use crate::voxel::block::BlockSpec;
use crate::voxel::world::WorldGrid;
use super::delta::{EditBatch, EditDelta};

/// Forwards reads and writes to an inner grid, keeping an [`EditBatch`] of
/// the writes that succeeded.
pub struct RecordingGrid<'a, G: WorldGrid + ?Sized> {
    inner: &'a mut G,
    batch: EditBatch,
}

impl<'a, G: WorldGrid + ?Sized> RecordingGrid<'a, G> {
    pub fn new(inner: &'a mut G) -> Self {
        Self {
            inner,
            batch: EditBatch::new(),
        }
    }

    /// Writes recorded so far
    pub fn batch(&self) -> &EditBatch {
        &self.batch
    }

    /// Release the inner grid and return the recorded writes
    pub fn finish(self) -> EditBatch {
        self.batch
    }
}

impl<G: WorldGrid + ?Sized> WorldGrid for RecordingGrid<'_, G> {
    fn get(&self, pos: IVec3) -> Result<BlockSpec> {
        self.inner.get(pos)
    }

    fn set(&mut self, pos: IVec3, block: BlockSpec) -> Result<()> {
        let before = self.inner.get(pos)?;
        self.inner.set(pos, block)?;
        self.batch.push(EditDelta::new(pos, before, block));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Error;
    use crate::voxel::block::BlockKind;
    use crate::voxel::world::World;

    #[test]
    fn test_records_writes() {
        let mut world = World::new();
        let stone = BlockSpec::new(BlockKind::STONE);
        let vine = BlockSpec::new(BlockKind::VINE);
        world.set(IVec3::new(0, 1, 0), stone).unwrap();

        let mut grid = RecordingGrid::new(&mut world);
        grid.set(IVec3::new(0, 0, 0), vine).unwrap();
        grid.set(IVec3::new(0, 1, 0), vine).unwrap();
        assert_eq!(grid.get(IVec3::new(0, 0, 0)).unwrap(), vine);
        let batch = grid.finish();

        assert_eq!(
            batch.deltas(),
            &[
                EditDelta::new(IVec3::new(0, 0, 0), BlockSpec::AIR, vine),
                EditDelta::new(IVec3::new(0, 1, 0), stone, vine),
            ]
        );
        assert_eq!(world.get(IVec3::new(0, 1, 0)).unwrap(), vine);
    }

    #[test]
    fn test_failed_write_not_recorded() {
        let mut world = World::with_height_range(0, 8);
        let vine = BlockSpec::new(BlockKind::VINE);

        let mut grid = RecordingGrid::new(&mut world);
        grid.set(IVec3::new(0, 0, 0), vine).unwrap();
        let err = grid.set(IVec3::new(0, -1, 0), vine);
        assert!(matches!(err, Err(Error::OutOfBounds { .. })));

        assert_eq!(grid.batch().len(), 1);
    }
}
