//! Vine brush demo: paints vines onto a small stone wall and reports what changed.
//!
//! Usage: cargo run --bin vinebrush -- [OPTIONS]
//!
//! Options:
//!   --settings <PATH>   Brush settings JSON (default: built-in defaults)
//!   --seed <SEED>       Random seed (default: 12345)
//!   --save <PATH>       Write the effective settings as JSON

use std::process::ExitCode;

use log::{error, info};
use rand::SeedableRng;
use rand::rngs::StdRng;

use vinebrush::core::logging;
use vinebrush::core::types::IVec3;
use vinebrush::core::Result;
use vinebrush::math::Bounds;
use vinebrush::voxel::block::{BlockKind, BlockSpec};
use vinebrush::voxel::brush::{BrushSettings, VineBrush};
use vinebrush::voxel::edit::EditHistory;
use vinebrush::voxel::world::World;

/// Wall runs along x at z = 0, 24 wide and 16 high
const WALL_WIDTH: i32 = 24;
const WALL_HEIGHT: i32 = 16;

fn main() -> ExitCode {
    logging::init();

    let args: Vec<String> = std::env::args().collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Vine brush demo failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<()> {
    let settings = match parse_str_arg(args, "--settings") {
        Some(path) => {
            info!("Loading brush settings from {}", path);
            BrushSettings::load(&path)?
        }
        None => BrushSettings::default(),
    };
    let seed = parse_u64_arg(args, "--seed").unwrap_or(12345);

    if let Some(path) = parse_str_arg(args, "--save") {
        settings.save(&path)?;
        info!("Saved brush settings to {}", path);
    }

    let brush = VineBrush::from_settings(&settings)?;
    let mut world = build_scene()?;
    world.take_modified();
    let mut history = EditHistory::new();
    let mut rng = StdRng::seed_from_u64(seed);

    // Click the face of the wall halfway up
    let center = IVec3::new(WALL_WIDTH / 2, WALL_HEIGHT / 2, 1);
    let stats = brush.build(&mut world, &mut history, center, &mut rng)?;

    info!(
        "Visited {} points, grew {} strands, wrote {} blocks",
        stats.points_visited, stats.strands_grown, stats.cells_written
    );
    if let Some(batch) = history.last() {
        if let Some(bounds) = batch.bounds() {
            info!("Edit #{} touched {} to {}", batch.id, bounds.min, bounds.max);
        }
        info!("Chunks to refresh: {:?}", batch.affected_chunks());
    }
    info!("Modified chunks: {}", world.take_modified().len());
    Ok(())
}

/// Grass floor at y = -1 with a stone wall standing on it
fn build_scene() -> Result<World> {
    let mut world = World::new();
    world.fill(
        Bounds::new(IVec3::new(-8, -1, -8), IVec3::new(WALL_WIDTH + 8, -1, 16)),
        BlockSpec::new(BlockKind::GRASS_BLOCK),
    )?;
    world.fill(
        Bounds::new(IVec3::ZERO, IVec3::new(WALL_WIDTH - 1, WALL_HEIGHT - 1, 0)),
        BlockSpec::new(BlockKind::STONE),
    )?;
    info!("Scene ready: {} chunks, {} blocks", world.chunk_count(), world.solid_count());
    Ok(world)
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
