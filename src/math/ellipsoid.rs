//! Ellipsoid lattice traversal
//!
//! Enumerates the integer points inside (or, when hollow, on the shell of) an
//! axis-aligned ellipsoid. Radii are inflated by half a voxel before testing,
//! so a radius of N covers the same cells as a voxel sphere of radius N.5.
//!
//! Only the non-negative octant is walked. Every accepted offset is emitted at
//! all eight sign combinations around the center, so offsets lying on an axis
//! plane produce the same point more than once. Callers either tolerate the
//! repeats or deduplicate themselves.

use std::iter::FusedIterator;

use crate::core::types::{DVec3, IVec3};
use crate::math::Bounds;

/// Half-voxel inflation applied to every radius
pub const RADIUS_INFLATION: f64 = 0.5;

/// Sign patterns applied to each accepted octant offset, in emission order
const MIRRORS: [IVec3; 8] = [
    IVec3::new(1, 1, 1),
    IVec3::new(-1, 1, 1),
    IVec3::new(1, -1, 1),
    IVec3::new(1, 1, -1),
    IVec3::new(-1, -1, 1),
    IVec3::new(1, -1, -1),
    IVec3::new(-1, 1, -1),
    IVec3::new(-1, -1, -1),
];

#[inline]
fn length_sq(x: f64, y: f64, z: f64) -> f64 {
    x * x + y * y + z * z
}

/// Axis-aligned ellipsoid on the voxel lattice
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EllipsoidSpec {
    /// Center cell
    pub center: IVec3,
    /// Per-axis radii in cells, expected > 0
    pub radii: DVec3,
    /// Visit only shell cells
    pub hollow: bool,
}

impl EllipsoidSpec {
    pub fn new(center: IVec3, radii: DVec3, hollow: bool) -> Self {
        Self { center, radii, hollow }
    }

    /// Ellipsoid with the same radius on every axis
    pub fn sphere(center: IVec3, radius: f64, hollow: bool) -> Self {
        Self::new(center, DVec3::splat(radius), hollow)
    }

    /// Radii after half-voxel inflation
    pub fn inflated_radii(&self) -> DVec3 {
        self.radii + DVec3::splat(RADIUS_INFLATION)
    }

    /// Reciprocal of the inflated radii, used to normalize offsets
    pub fn inverse_radii(&self) -> DVec3 {
        DVec3::ONE / self.inflated_radii()
    }

    /// Largest offset the traversal will consider on each axis
    pub fn ceil_radii(&self) -> IVec3 {
        self.inflated_radii().ceil().as_ivec3()
    }

    /// Box enclosing every point the traversal can produce
    pub fn bounds(&self) -> Bounds {
        Bounds::from_center_half_extent(self.center, self.ceil_radii())
    }

    /// Normalized squared distance of an offset from the center.
    ///
    /// Uses the same arithmetic as the traversal, so `distance_sq(o) <= 1.0`
    /// agrees exactly with what [`EllipsoidPoints`] accepts.
    pub fn distance_sq(&self, offset: IVec3) -> f64 {
        let inv = self.inverse_radii();
        let a = offset.abs();
        length_sq(a.x as f64 * inv.x, a.y as f64 * inv.y, a.z as f64 * inv.z)
    }

    /// Whether an offset lies within the inflated ellipsoid
    pub fn contains_offset(&self, offset: IVec3) -> bool {
        self.distance_sq(offset) <= 1.0
    }

    /// Whether an offset counts as shell: inside, with at least one of its
    /// positive-direction neighbors (taken on the absolute offset) outside.
    ///
    /// Only the +x, +y, +z neighbors are consulted. Negative-direction
    /// neighbors are never tested.
    pub fn is_shell_offset(&self, offset: IVec3) -> bool {
        let a = offset.abs();
        self.contains_offset(a)
            && (!self.contains_offset(a + IVec3::X)
                || !self.contains_offset(a + IVec3::Y)
                || !self.contains_offset(a + IVec3::Z))
    }

    /// Lazy sequence of every visited point, repeats included
    pub fn points(&self) -> EllipsoidPoints {
        EllipsoidPoints::new(self)
    }
}

/// Call `visit` for every point of the ellipsoid, in traversal order.
///
/// Push-style counterpart of [`EllipsoidSpec::points`]. To stop early use the
/// iterator instead (`take_while`, `try_for_each`).
pub fn traverse(spec: &EllipsoidSpec, mut visit: impl FnMut(IVec3)) {
    for point in spec.points() {
        visit(point);
    }
}

/// Iterator over the points of an [`EllipsoidSpec`].
///
/// Walks x, then y, then z upward from zero. Because normalized distance never
/// shrinks as an index grows, the first rejected cell ends the innermost loop
/// that can still produce points: a rejection at `z == 0, y == 0` ends the
/// whole walk, at `z == 0` it ends the current x column, otherwise it ends the
/// current row.
#[derive(Clone, Debug)]
pub struct EllipsoidPoints {
    center: IVec3,
    inv: DVec3,
    ceil: IVec3,
    hollow: bool,
    x: i32,
    y: i32,
    z: i32,
    xn: f64,
    next_xn: f64,
    yn: f64,
    next_yn: f64,
    finished: bool,
    /// Octant offset currently being mirrored
    current: IVec3,
    /// Index of the next mirror to emit for `current`
    mirror: usize,
}

impl EllipsoidPoints {
    fn new(spec: &EllipsoidSpec) -> Self {
        let inv = spec.inverse_radii();
        Self {
            center: spec.center,
            inv,
            ceil: spec.ceil_radii(),
            hollow: spec.hollow,
            x: 0,
            y: 0,
            z: 0,
            xn: 0.0,
            next_xn: inv.x,
            yn: 0.0,
            next_yn: inv.y,
            finished: false,
            current: IVec3::ZERO,
            mirror: MIRRORS.len(),
        }
    }

    fn advance_x(&mut self) {
        self.x += 1;
        self.xn = self.next_xn;
        self.next_xn = (self.x + 1) as f64 * self.inv.x;
        self.y = 0;
        self.yn = 0.0;
        self.next_yn = self.inv.y;
        self.z = 0;
    }

    fn advance_y(&mut self) {
        self.y += 1;
        self.yn = self.next_yn;
        self.next_yn = (self.y + 1) as f64 * self.inv.y;
        self.z = 0;
    }

    /// Next accepted offset in the non-negative octant
    fn next_offset(&mut self) -> Option<IVec3> {
        while !self.finished {
            if self.x > self.ceil.x {
                self.finished = true;
                break;
            }
            if self.y > self.ceil.y {
                self.advance_x();
                continue;
            }
            if self.z > self.ceil.z {
                self.advance_y();
                continue;
            }

            let zn = self.z as f64 * self.inv.z;
            let next_zn = (self.z + 1) as f64 * self.inv.z;

            if length_sq(self.xn, self.yn, zn) > 1.0 {
                if self.z == 0 {
                    if self.y == 0 {
                        self.finished = true;
                        break;
                    }
                    self.advance_x();
                    continue;
                }
                self.advance_y();
                continue;
            }

            let offset = IVec3::new(self.x, self.y, self.z);
            self.z += 1;

            if self.hollow
                && length_sq(self.next_xn, self.yn, zn) <= 1.0
                && length_sq(self.xn, self.next_yn, zn) <= 1.0
                && length_sq(self.xn, self.yn, next_zn) <= 1.0
            {
                continue;
            }

            return Some(offset);
        }
        None
    }
}

impl Iterator for EllipsoidPoints {
    type Item = IVec3;

    fn next(&mut self) -> Option<IVec3> {
        if self.mirror >= MIRRORS.len() {
            self.current = self.next_offset()?;
            self.mirror = 0;
        }
        let point = self.center + self.current * MIRRORS[self.mirror];
        self.mirror += 1;
        Some(point)
    }
}

impl FusedIterator for EllipsoidPoints {}
