//! Vine brush
//!
//! Walks a solid sphere around the clicked block and hangs vine strands from
//! solid surfaces inside it.

pub mod config;
pub mod direction;
pub mod random;
pub mod vine;
pub mod session;

// Re-exports
pub use config::{BrushSettings, FillMaterial, GrowthConfig};
pub use direction::Direction;
pub use random::RandomSource;
pub use vine::{GrowthOutcome, SkipReason, VineGrowthPolicy};
pub use session::{BrushStats, VineBrush};
