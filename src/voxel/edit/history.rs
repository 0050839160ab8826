//! History of finalized edit batches.

use super::delta::EditBatch;

/// Finalized brush activations, oldest first.
pub struct EditHistory {
    batches: Vec<EditBatch>,
    /// Next batch ID
    next_id: u64,
}

impl EditHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self {
            batches: Vec::new(),
            next_id: 1,
        }
    }

    /// Store a finished batch and return its ID. Empty batches are dropped
    /// and get ID 0.
    pub fn remember(&mut self, mut batch: EditBatch) -> u64 {
        if batch.is_empty() {
            return 0;
        }
        let id = self.next_id;
        self.next_id += 1;
        batch.id = id;
        self.batches.push(batch);
        id
    }

    /// Most recent batch
    pub fn last(&self) -> Option<&EditBatch> {
        self.batches.last()
    }

    /// Look up a batch by ID
    pub fn get(&self, id: u64) -> Option<&EditBatch> {
        self.batches.iter().find(|b| b.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &EditBatch> {
        self.batches.iter()
    }

    /// Number of stored batches
    pub fn len(&self) -> usize {
        self.batches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.batches.is_empty()
    }

    /// Block writes across all batches
    pub fn total_writes(&self) -> usize {
        self.batches.iter().map(EditBatch::len).sum()
    }

    /// Drop every stored batch.
    pub fn clear(&mut self) {
        self.batches.clear();
    }
}

impl Default for EditHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::IVec3;
    use crate::voxel::block::{BlockKind, BlockSpec};
    use crate::voxel::edit::EditDelta;

    fn batch_of(n: i32) -> EditBatch {
        let mut batch = EditBatch::new();
        for y in 0..n {
            batch.push(EditDelta::new(IVec3::new(0, y, 0), BlockSpec::AIR, BlockSpec::new(BlockKind::VINE)));
        }
        batch
    }

    #[test]
    fn test_remember_assigns_ids() {
        let mut history = EditHistory::new();
        let a = history.remember(batch_of(2));
        let b = history.remember(batch_of(3));

        assert_eq!((a, b), (1, 2));
        assert_eq!(history.len(), 2);
        assert_eq!(history.last().unwrap().id, 2);
        assert_eq!(history.get(1).unwrap().len(), 2);
        assert_eq!(history.total_writes(), 5);
    }

    #[test]
    fn test_empty_batch_dropped() {
        let mut history = EditHistory::new();
        assert_eq!(history.remember(EditBatch::new()), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut history = EditHistory::new();
        history.remember(batch_of(1));
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.total_writes(), 0);
    }

    #[test]
    fn test_ids_not_reused() {
        let mut history = EditHistory::default();
        assert_eq!(history.remember(batch_of(1)), 1);
        assert_eq!(history.remember(EditBatch::new()), 0);
        history.clear();
        assert_eq!(history.remember(batch_of(2)), 2);
        assert!(history.get(1).is_none());
        assert_eq!(history.get(2).unwrap().len(), 2);
    }
}
