//! Lattice geometry

pub mod bounds;
pub mod ellipsoid;

pub use bounds::Bounds;
pub use ellipsoid::{EllipsoidPoints, EllipsoidSpec, traverse};
