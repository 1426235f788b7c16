//! # Axis-Aligned Bounding Box
//!
//! Min/max box used both for derived brush bounds and for the governing
//! world-bounds cube that every constructive operation validates against.

use config::constants::DEFAULT_WORLD_BOUNDS;
use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box defined by its min and max corners.
///
/// # Example
///
/// ```rust
/// use brush_math::Bbox3;
/// use glam::DVec3;
///
/// let world = Bbox3::cube(8192.0);
/// assert!(world.contains(DVec3::new(64.0, -64.0, 16.0), 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bbox3 {
    /// Minimum corner.
    pub min: DVec3,
    /// Maximum corner.
    pub max: DVec3,
}

impl Bbox3 {
    /// Creates a box from its min and max corners.
    pub fn new(min: DVec3, max: DVec3) -> Self {
        Self { min, max }
    }

    /// Creates the world-bounds cube with the given half-extent, centered
    /// at the origin.
    pub fn cube(half_extent: f64) -> Self {
        Self {
            min: DVec3::splat(-half_extent),
            max: DVec3::splat(half_extent),
        }
    }

    /// Returns the smallest box containing a set of points, or `None` for
    /// an empty set.
    pub fn from_points(points: &[DVec3]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bounds = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            bounds = bounds.merged(*p);
        }
        Some(bounds)
    }

    /// Returns this box grown to contain `point`.
    pub fn merged(&self, point: DVec3) -> Self {
        Self {
            min: self.min.min(point),
            max: self.max.max(point),
        }
    }

    /// Returns true if `point` lies inside the box, expanded by `epsilon`
    /// on every side.
    pub fn contains(&self, point: DVec3, epsilon: f64) -> bool {
        point.x >= self.min.x - epsilon
            && point.y >= self.min.y - epsilon
            && point.z >= self.min.z - epsilon
            && point.x <= self.max.x + epsilon
            && point.y <= self.max.y + epsilon
            && point.z <= self.max.z + epsilon
    }

    /// Returns the edge lengths of the box.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns true if the box has zero or negative extent on any axis.
    pub fn is_degenerate(&self) -> bool {
        let size = self.size();
        size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0
    }

    /// Returns the 8 corner positions of the box.
    ///
    /// Order: all min-z corners counter-clockwise, then all max-z corners.
    pub fn corners(&self) -> [DVec3; 8] {
        let (min, max) = (self.min, self.max);
        [
            DVec3::new(min.x, min.y, min.z),
            DVec3::new(max.x, min.y, min.z),
            DVec3::new(max.x, max.y, min.z),
            DVec3::new(min.x, max.y, min.z),
            DVec3::new(min.x, min.y, max.z),
            DVec3::new(max.x, min.y, max.z),
            DVec3::new(max.x, max.y, max.z),
            DVec3::new(min.x, max.y, max.z),
        ]
    }
}

impl Default for Bbox3 {
    /// The default world-bounds cube (±[`DEFAULT_WORLD_BOUNDS`]).
    fn default() -> Self {
        Self::cube(DEFAULT_WORLD_BOUNDS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube() {
        let world = Bbox3::cube(8192.0);
        assert_eq!(world.min, DVec3::splat(-8192.0));
        assert_eq!(world.max, DVec3::splat(8192.0));
        assert!(!world.is_degenerate());
    }

    #[test]
    fn test_from_points() {
        let bounds = Bbox3::from_points(&[
            DVec3::new(-1.0, 5.0, 2.0),
            DVec3::new(3.0, -2.0, 0.0),
            DVec3::new(0.0, 0.0, 7.0),
        ])
        .unwrap();
        assert_eq!(bounds.min, DVec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, DVec3::new(3.0, 5.0, 7.0));
    }

    #[test]
    fn test_from_points_empty() {
        assert!(Bbox3::from_points(&[]).is_none());
    }

    #[test]
    fn test_contains() {
        let bounds = Bbox3::new(DVec3::ZERO, DVec3::splat(10.0));
        assert!(bounds.contains(DVec3::splat(5.0), 0.0));
        assert!(bounds.contains(DVec3::splat(10.0), 0.0));
        assert!(!bounds.contains(DVec3::splat(10.1), 0.0));
        assert!(bounds.contains(DVec3::splat(10.1), 0.2));
    }

    #[test]
    fn test_degenerate() {
        let flat = Bbox3::new(DVec3::ZERO, DVec3::new(5.0, 5.0, 0.0));
        assert!(flat.is_degenerate());

        let inverted = Bbox3::new(DVec3::splat(1.0), DVec3::ZERO);
        assert!(inverted.is_degenerate());
    }

    #[test]
    fn test_corners() {
        let bounds = Bbox3::new(DVec3::splat(-1.0), DVec3::splat(1.0));
        let corners = bounds.corners();
        assert_eq!(corners.len(), 8);
        // Every corner coordinate is ±1.
        for c in corners {
            assert_eq!(c.x.abs(), 1.0);
            assert_eq!(c.y.abs(), 1.0);
            assert_eq!(c.z.abs(), 1.0);
        }
        // All corners are distinct.
        for (i, a) in corners.iter().enumerate() {
            for b in &corners[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
