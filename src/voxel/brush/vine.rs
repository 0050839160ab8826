//! Per-cell hanging vine placement

use crate::core::types::IVec3;
use crate::core::Result;
use crate::voxel::block::BlockSpec;
use crate::voxel::world::WorldGrid;
use super::config::GrowthConfig;
use super::direction::Direction;
use super::random::RandomSource;

/// Why a cell did not grow a strand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Density roll missed
    Density,
    /// Origin cell is not air
    Occupied,
    /// No horizontal neighbor can hold a vine
    NoAnchor,
}

/// Result of one placement decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthOutcome {
    Skipped(SkipReason),
    Grown {
        /// Block used for every cell of the strand
        material: BlockSpec,
        /// Cells stepped through, origin included
        length: u32,
        /// Cells actually written (air cells along the strand)
        written: u32,
    },
}

/// Decides, cell by cell, whether to hang a vine strand and writes it.
#[derive(Debug, Clone, Copy)]
pub struct VineGrowthPolicy {
    config: GrowthConfig,
}

impl VineGrowthPolicy {
    pub fn new(config: GrowthConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GrowthConfig {
        &self.config
    }

    /// Whether a neighbor block can anchor a strand: solid, full cube, and not
    /// the same material as the fill
    pub fn is_anchor(&self, neighbor: BlockSpec) -> bool {
        neighbor.is_solid_full_cube() && neighbor.kind != self.config.fill.kind()
    }

    /// Vine variants of every direction with an anchor next to `origin`
    pub fn anchor_variants<G: WorldGrid + ?Sized>(&self, grid: &G, origin: IVec3) -> Result<Vec<BlockSpec>> {
        let mut variants = Vec::with_capacity(Direction::ALL.len());
        for dir in Direction::ALL {
            if self.is_anchor(grid.get(origin + dir.offset())?) {
                variants.push(dir.vine());
            }
        }
        Ok(variants)
    }

    /// Run the placement decision for one cell and write the strand if it grows.
    ///
    /// The strand starts at `origin` and steps straight down. Non-air cells
    /// along the way are left alone but still count toward the length.
    pub fn grow_at<G, R>(&self, grid: &mut G, origin: IVec3, rng: &mut R) -> Result<GrowthOutcome>
    where
        G: WorldGrid + ?Sized,
        R: RandomSource + ?Sized,
    {
        if rng.uniform01() > self.config.density {
            return Ok(GrowthOutcome::Skipped(SkipReason::Density));
        }
        if !grid.get(origin)?.is_air() {
            return Ok(GrowthOutcome::Skipped(SkipReason::Occupied));
        }

        let candidates = self.anchor_variants(grid, origin)?;
        if candidates.is_empty() {
            return Ok(GrowthOutcome::Skipped(SkipReason::NoAnchor));
        }

        let material = self.config.fill.resolve(&candidates, rng);
        let sampled = rng.uniform_int(self.config.max_length.get());

        let mut written = 0;
        for step in 0..=sampled {
            let pos = origin - IVec3::new(0, step as i32, 0);
            if grid.get(pos)?.is_air() {
                grid.set(pos, material)?;
                written += 1;
            }
        }

        Ok(GrowthOutcome::Grown {
            material,
            length: sampled + 1,
            written,
        })
    }
}
