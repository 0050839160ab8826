//! Brush activation over an ellipsoidal region

use log::{debug, info, warn};

use crate::core::types::IVec3;
use crate::core::Result;
use crate::math::EllipsoidSpec;
use crate::voxel::edit::{EditHistory, RecordingGrid};
use crate::voxel::world::WorldGrid;
use super::config::{BrushSettings, GrowthConfig};
use super::random::RandomSource;
use super::vine::{GrowthOutcome, VineGrowthPolicy};

/// Counters for one brush activation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrushStats {
    /// Traversal points handed to the policy, repeats included
    pub points_visited: u64,
    pub strands_grown: u64,
    pub cells_written: u64,
}

/// A vine brush bound to one configuration
#[derive(Debug, Clone, Copy)]
pub struct VineBrush {
    policy: VineGrowthPolicy,
}

impl VineBrush {
    pub fn new(config: GrowthConfig) -> Self {
        Self {
            policy: VineGrowthPolicy::new(config),
        }
    }

    /// Resolve user settings and bind a brush to them
    pub fn from_settings(settings: &BrushSettings) -> Result<Self> {
        let config = settings.resolve()?;
        info!("Vine brush bound: {}", config);
        Ok(Self::new(config))
    }

    pub fn config(&self) -> &GrowthConfig {
        self.policy.config()
    }

    /// Solid sphere painted around `center`
    pub fn region(&self, center: IVec3) -> EllipsoidSpec {
        EllipsoidSpec::sphere(center, self.config().brush_size.get() as f64, false)
    }

    /// Paint vines around `center`.
    ///
    /// Every successful write is collected into one batch that is handed to
    /// `history` before returning, including when a grid error stops the
    /// activation part-way. Writes made before the error are kept.
    pub fn build<G, R>(
        &self,
        grid: &mut G,
        history: &mut EditHistory,
        center: IVec3,
        rng: &mut R,
    ) -> Result<BrushStats>
    where
        G: WorldGrid + ?Sized,
        R: RandomSource + ?Sized,
    {
        let mut recorder = RecordingGrid::new(grid);
        let result = self.paint(&mut recorder, center, rng);
        let batch = recorder.finish();
        let writes = batch.len();
        history.remember(batch);

        match &result {
            Ok(stats) => debug!(
                "Vine brush at {}: {} points, {} strands, {} cells",
                center, stats.points_visited, stats.strands_grown, stats.cells_written
            ),
            Err(e) => warn!("Vine brush at {} stopped after {} writes: {}", center, writes, e),
        }
        result
    }

    fn paint<G, R>(&self, grid: &mut G, center: IVec3, rng: &mut R) -> Result<BrushStats>
    where
        G: WorldGrid + ?Sized,
        R: RandomSource + ?Sized,
    {
        let mut stats = BrushStats::default();
        for point in self.region(center).points() {
            stats.points_visited += 1;
            if let GrowthOutcome::Grown { written, .. } = self.policy.grow_at(grid, point, rng)? {
                stats.strands_grown += 1;
                stats.cells_written += written as u64;
            }
        }
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::Error;
    use crate::core::types::DVec3;
    use crate::math::Bounds;
    use crate::voxel::block::{BlockKind, BlockSpec, state};
    use crate::voxel::brush::config::FillMaterial;
    use crate::voxel::brush::direction::Direction;
    use crate::voxel::brush::random::scripted::ScriptedRandom;
    use crate::voxel::world::World;

    fn brush(size: u32, density: f64, max_length: u32, fill: FillMaterial) -> VineBrush {
        VineBrush::new(GrowthConfig::new(
            NonZeroU32::new(size).unwrap(),
            density,
            NonZeroU32::new(max_length).unwrap(),
            fill,
        ))
    }

    /// Stone pillar at x = z = 0 from y = 0 to 31
    fn pillar_world() -> World {
        let mut world = World::new();
        let stone = BlockSpec::new(BlockKind::STONE);
        world.fill(Bounds::new(IVec3::ZERO, IVec3::new(0, 31, 0)), stone).unwrap();
        world
    }

    #[test]
    fn test_region_is_solid_sphere() {
        let brush = brush(4, 0.2, 12, FillMaterial::AutoVine);
        let region = brush.region(IVec3::new(1, 2, 3));
        assert_eq!(region.center, IVec3::new(1, 2, 3));
        assert_eq!(region.radii, DVec3::splat(4.0));
        assert!(!region.hollow);
    }

    #[test]
    fn test_zero_density_writes_nothing() {
        let brush = brush(5, 0.0, 12, FillMaterial::AutoVine);
        let mut world = pillar_world();
        let before = world.solid_count();
        let mut history = EditHistory::new();
        let mut rng = StdRng::seed_from_u64(3);

        let stats = brush.build(&mut world, &mut history, IVec3::new(1, 16, 0), &mut rng).unwrap();
        assert_eq!(stats.points_visited, brush.region(IVec3::ZERO).points().count() as u64);
        assert_eq!(stats.strands_grown, 0);
        assert_eq!(stats.cells_written, 0);
        assert_eq!(world.solid_count(), before);
        assert!(history.is_empty());
    }

    #[test]
    fn test_full_density_covers_anchored_cells() {
        let brush = brush(3, 1.0, 4, FillMaterial::AutoVine);
        let mut world = pillar_world();
        let mut history = EditHistory::new();
        let mut rng = StdRng::seed_from_u64(11);
        let center = IVec3::new(1, 16, 0);

        let stats = brush.build(&mut world, &mut history, center, &mut rng).unwrap();
        assert!(stats.strands_grown > 0);

        // Every visited cell touching the pillar ends up holding a vine
        for point in brush.region(center).points() {
            let touches_pillar = point.y >= 0
                && point.y <= 31
                && Direction::ALL.iter().any(|d| point + d.offset() == IVec3::new(0, point.y, 0));
            if touches_pillar {
                assert!(world.get(point).unwrap().is_vine(), "no vine at {}", point);
            }
        }

        let batch = history.last().unwrap();
        assert_eq!(batch.len() as u64, stats.cells_written);
        for delta in batch.deltas() {
            assert!(delta.before.is_air());
            assert!(delta.after.is_vine());
            assert_eq!(delta.after.state.count_ones(), 1);
        }
    }

    #[test]
    fn test_never_overwrites_solid_cells() {
        let brush = brush(3, 1.0, 6, FillMaterial::Specific(BlockSpec::new(BlockKind::OAK_PLANKS)));
        let mut world = pillar_world();
        let glass = BlockSpec::new(BlockKind::GLASS);
        // Scattered obstructions around the pillar
        for pos in [IVec3::new(1, 14, 0), IVec3::new(-1, 12, 0), IVec3::new(0, 13, 1)] {
            world.set(pos, glass).unwrap();
        }
        let mut history = EditHistory::new();
        let mut rng = StdRng::seed_from_u64(5);

        brush.build(&mut world, &mut history, IVec3::new(0, 15, 0), &mut rng).unwrap();

        assert_eq!(world.get(IVec3::new(1, 14, 0)).unwrap(), glass);
        assert_eq!(world.get(IVec3::new(-1, 12, 0)).unwrap(), glass);
        assert_eq!(world.get(IVec3::new(0, 13, 1)).unwrap(), glass);
        assert!(history.iter().flat_map(|b| b.deltas()).all(|d| d.before.is_air()));
    }

    #[test]
    fn test_no_anchor_no_writes() {
        let brush = brush(4, 1.0, 12, FillMaterial::AutoVine);
        let mut world = World::new();
        // Only non-full-cube blocks nearby
        world.fill(Bounds::new(IVec3::new(-6, 0, -6), IVec3::new(6, 0, 6)), BlockSpec::new(BlockKind::OAK_SLAB)).unwrap();
        world.set(IVec3::new(2, 5, 2), BlockSpec::new(BlockKind::OAK_FENCE)).unwrap();
        let mut history = EditHistory::new();
        let mut rng = StdRng::seed_from_u64(8);

        let stats = brush.build(&mut world, &mut history, IVec3::new(0, 4, 0), &mut rng).unwrap();
        assert_eq!(stats.strands_grown, 0);
        assert!(history.is_empty());
    }

    #[test]
    fn test_error_keeps_partial_batch() {
        let brush = brush(1, 1.0, 12, FillMaterial::AutoVine);
        let mut world = World::with_height_range(0, 64);
        world.set(IVec3::ZERO, BlockSpec::new(BlockKind::STONE)).unwrap();
        let mut history = EditHistory::new();
        // First point (1, 0, 0) is anchored west; a strand of 6 runs below y = 0
        let mut rng = ScriptedRandom::new(&[0.0], &[0, 5]);

        let result = brush.build(&mut world, &mut history, IVec3::new(1, 0, 0), &mut rng);
        assert!(matches!(result, Err(Error::OutOfBounds { position }) if position == IVec3::new(1, -1, 0)));

        let west = BlockSpec::with_state(BlockKind::VINE, state::WEST);
        assert_eq!(world.get(IVec3::new(1, 0, 0)).unwrap(), west);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last().unwrap().len(), 1);
        assert_eq!(history.last().unwrap().deltas()[0].after, west);
    }

    #[test]
    fn test_history_grows_per_activation() {
        let brush = brush(2, 1.0, 3, FillMaterial::AutoVine);
        let mut world = pillar_world();
        let mut history = EditHistory::new();
        let mut rng = StdRng::seed_from_u64(21);

        brush.build(&mut world, &mut history, IVec3::new(1, 25, 0), &mut rng).unwrap();
        brush.build(&mut world, &mut history, IVec3::new(-1, 8, 0), &mut rng).unwrap();

        assert_eq!(history.len(), 2);
        assert_eq!(history.iter().map(|b| b.id).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_from_settings() {
        let settings = BrushSettings { size: -1, max_length: 3, ..Default::default() };
        let brush = VineBrush::from_settings(&settings).unwrap();
        assert_eq!(brush.config().brush_size.get(), 6);
        assert_eq!(brush.config().max_length.get(), 3);

        let bad = BrushSettings { material: "vine[sideways=true]".into(), ..Default::default() };
        assert!(VineBrush::from_settings(&bad).is_err());
    }
}
