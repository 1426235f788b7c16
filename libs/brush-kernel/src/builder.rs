//! # Brush Builder
//!
//! Factory for brushes: from an explicit vertex cloud (via convex hull)
//! or from an axis-aligned box. Every generated face carries the
//! supplied material tag.
//!
//! Both paths funnel through the topology builder, so face polygons are
//! always derived canonically from planes regardless of how the brush
//! was authored.

use crate::brush::Brush;
use crate::error::BrushError;
use crate::hull;
use crate::topology::{self, FaceSpec};
use brush_math::{Bbox3, Plane};
use glam::DVec3;

/// Builds brushes inside a fixed world-bounds volume.
#[derive(Debug, Clone)]
pub struct BrushBuilder {
    world_bounds: Bbox3,
}

impl BrushBuilder {
    /// Creates a builder for the given world bounds.
    pub fn new(world_bounds: Bbox3) -> Self {
        Self { world_bounds }
    }

    /// Returns the governing world bounds.
    #[inline]
    pub fn world_bounds(&self) -> &Bbox3 {
        &self.world_bounds
    }

    /// Creates a brush from the convex hull of a vertex cloud.
    ///
    /// The hull's facet planes are derived first, then the topology
    /// builder regenerates exact face polygons from those planes. This
    /// double pass is intentional: caller-supplied winding is never
    /// trusted verbatim.
    ///
    /// # Errors
    ///
    /// [`BrushError::DegenerateBrush`] if the cloud has fewer than 4
    /// affinely independent points (coplanar, collinear, or too few);
    /// [`BrushError::OutOfBounds`] if the hull leaves the world bounds.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let builder = BrushBuilder::new(Bbox3::cube(8192.0));
    /// let brush = builder.create_brush(&points, "texture")?;
    /// ```
    pub fn create_brush(&self, points: &[DVec3], material: &str) -> Result<Brush, BrushError> {
        let specs: Vec<FaceSpec> = hull::hull_planes(points)?
            .into_iter()
            .map(|plane| FaceSpec::new(plane, material))
            .collect();

        let polygons = topology::build(&specs, &self.world_bounds)?;
        Ok(Brush::from_polygons(polygons))
    }

    /// Creates a cuboid brush spanning `bounds`.
    ///
    /// # Errors
    ///
    /// [`BrushError::DegenerateBrush`] if the box has zero or negative
    /// extent on any axis; [`BrushError::OutOfBounds`] if the box leaves
    /// the world bounds.
    pub fn create_cuboid(&self, bounds: Bbox3, material: &str) -> Result<Brush, BrushError> {
        if bounds.is_degenerate() {
            return Err(BrushError::degenerate(format!(
                "cuboid has zero or negative extent: {:?}",
                bounds.size()
            )));
        }

        let specs: Vec<FaceSpec> = [
            Plane::new(DVec3::X, bounds.max.x),
            Plane::new(-DVec3::X, -bounds.min.x),
            Plane::new(DVec3::Y, bounds.max.y),
            Plane::new(-DVec3::Y, -bounds.min.y),
            Plane::new(DVec3::Z, bounds.max.z),
            Plane::new(-DVec3::Z, -bounds.min.z),
        ]
        .into_iter()
        .map(|plane| FaceSpec::new(plane, material))
        .collect();

        let polygons = topology::build(&specs, &self.world_bounds)?;
        Ok(Brush::from_polygons(polygons))
    }
}

// =============================================================================
// TESTS
// =============================================================================
