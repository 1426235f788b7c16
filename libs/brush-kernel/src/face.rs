//! # Brush Face
//!
//! One planar boundary polygon of a brush: its supporting plane, opaque
//! material tag, ordered vertex loop, and a non-owning back-reference to
//! the brush that currently owns it.
//!
//! Faces never mutate geometry themselves; all geometric change happens
//! by rebuilding the owning brush. The back-reference is a [`BrushId`]
//! (never a pointer) and is assigned only by the owning brush during
//! (re)construction.

use crate::brush::BrushId;
use crate::topology::FacePolygon;
use brush_math::Plane;
use glam::DVec3;

/// A face of a brush.
#[derive(Debug, Clone)]
pub struct BrushFace {
    /// Supporting plane; the normal points out of the solid.
    plane: Plane,
    /// Opaque material tag supplied by the material subsystem.
    material: String,
    /// Ordered polygon loop, counter-clockwise viewed from outside.
    vertices: Vec<DVec3>,
    /// Identity of the owning brush.
    owner: BrushId,
    /// Whether material alignment is locked to the face normal.
    ///
    /// Set by expand/contract; consumed by the material layer only and
    /// never affects geometry.
    material_locked: bool,
}

impl BrushFace {
    /// Creates a face from a reconstructed polygon, owned by `owner`.
    pub(crate) fn from_polygon(polygon: FacePolygon, owner: BrushId, material_locked: bool) -> Self {
        Self {
            plane: polygon.plane,
            material: polygon.material,
            vertices: polygon.vertices,
            owner,
            material_locked,
        }
    }

    /// Returns a copy of this face owned by `owner`.
    pub(crate) fn reparented(&self, owner: BrushId) -> Self {
        let mut face = self.clone();
        face.owner = owner;
        face
    }

    /// Returns the supporting plane.
    #[inline]
    pub fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Returns the material tag.
    #[inline]
    pub fn material(&self) -> &str {
        &self.material
    }

    /// Returns the ordered vertex loop.
    ///
    /// The winding is counter-clockwise when viewed from the outward
    /// normal side, consistent with [`BrushFace::plane`].
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns the identity of the owning brush.
    #[inline]
    pub fn owner(&self) -> BrushId {
        self.owner
    }

    /// Returns true if material alignment is locked to the face normal.
    #[inline]
    pub fn material_locked(&self) -> bool {
        self.material_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polygon() -> FacePolygon {
        FacePolygon {
            plane: Plane::new(DVec3::Z, 16.0),
            material: "texture".to_string(),
            vertices: vec![
                DVec3::new(0.0, 0.0, 16.0),
                DVec3::new(1.0, 0.0, 16.0),
                DVec3::new(1.0, 1.0, 16.0),
            ],
        }
    }

    #[test]
    fn test_face_accessors() {
        let owner = BrushId::next();
        let face = BrushFace::from_polygon(polygon(), owner, false);

        assert_eq!(face.owner(), owner);
        assert_eq!(face.material(), "texture");
        assert_eq!(face.vertices().len(), 3);
        assert_eq!(face.plane().normal(), DVec3::Z);
        assert!(!face.material_locked());
    }

    #[test]
    fn test_reparented() {
        let original_owner = BrushId::next();
        let face = BrushFace::from_polygon(polygon(), original_owner, true);

        let new_owner = BrushId::next();
        let moved = face.reparented(new_owner);

        assert_eq!(moved.owner(), new_owner);
        assert_eq!(face.owner(), original_owner);
        assert_eq!(moved.vertices(), face.vertices());
        assert!(moved.material_locked());
    }
}
