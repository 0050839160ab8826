//! Vinebrush - ellipsoid voxel traversal and a hanging-vine brush

pub mod core;
pub mod math;
pub mod voxel;
