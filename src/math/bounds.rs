//! Integer axis-aligned bounding box

use crate::core::types::IVec3;

/// Inclusive integer box defined by min and max lattice corners
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: IVec3,
    pub max: IVec3,
}

impl Bounds {
    /// Create bounds from two corners (any order)
    pub fn new(a: IVec3, b: IVec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Bounds covering a single point
    pub fn point(p: IVec3) -> Self {
        Self { min: p, max: p }
    }

    /// Create bounds from center and half-extents
    pub fn from_center_half_extent(center: IVec3, half_extent: IVec3) -> Self {
        Self::new(center - half_extent, center + half_extent)
    }

    /// Number of lattice points along each axis
    pub fn size(&self) -> IVec3 {
        self.max - self.min + IVec3::ONE
    }

    /// Total number of lattice points
    pub fn volume(&self) -> u64 {
        let s = self.size();
        s.x as u64 * s.y as u64 * s.z as u64
    }

    /// Check if point is inside (inclusive)
    pub fn contains_point(&self, p: IVec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Check if two boxes overlap
    pub fn intersects(&self, other: &Bounds) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Grow to include point
    pub fn expand(&mut self, point: IVec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Iterate every lattice point, x fastest then z then y
    pub fn iter(&self) -> impl Iterator<Item = IVec3> + use<> {
        let Bounds { min, max } = *self;
        (min.y..=max.y).flat_map(move |y| {
            (min.z..=max.z).flat_map(move |z| {
                (min.x..=max.x).map(move |x| IVec3::new(x, y, z))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_orders_corners() {
        let b = Bounds::new(IVec3::new(2, -1, 5), IVec3::new(0, 3, 1));
        assert_eq!(b.min, IVec3::new(0, -1, 1));
        assert_eq!(b.max, IVec3::new(2, 3, 5));
    }

    #[test]
    fn test_size_and_volume() {
        let b = Bounds::from_center_half_extent(IVec3::ZERO, IVec3::ONE);
        assert_eq!(b.size(), IVec3::splat(3));
        assert_eq!(b.volume(), 27);
        assert_eq!(Bounds::point(IVec3::new(4, 4, 4)).volume(), 1);
    }

    #[test]
    fn test_contains_point() {
        let b = Bounds::new(IVec3::ZERO, IVec3::ONE);
        assert!(b.contains_point(IVec3::ONE));
        assert!(!b.contains_point(IVec3::splat(2)));
    }

    #[test]
    fn test_intersects() {
        let a = Bounds::new(IVec3::ZERO, IVec3::splat(2));
        let b = Bounds::new(IVec3::splat(2), IVec3::splat(4));
        let c = Bounds::new(IVec3::splat(3), IVec3::splat(4));
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_expand() {
        let mut b = Bounds::point(IVec3::ZERO);
        b.expand(IVec3::new(-2, 5, 1));
        assert_eq!(b.min, IVec3::new(-2, 0, 0));
        assert_eq!(b.max, IVec3::new(0, 5, 1));
    }

    #[test]
    fn test_iter_visits_every_point_once() {
        let b = Bounds::new(IVec3::new(-1, 0, 2), IVec3::new(1, 1, 3));
        let points: Vec<_> = b.iter().collect();
        assert_eq!(points.len() as u64, b.volume());
        assert!(points.iter().all(|p| b.contains_point(*p)));
        let unique: std::collections::HashSet<_> = points.iter().collect();
        assert_eq!(unique.len(), points.len());
    }
}
