//! # Brush
//!
//! A convex solid represented as the intersection of finitely many
//! half-spaces. The brush exclusively owns its [`BrushFace`] set; each
//! face holds a non-owning [`BrushId`] back-reference to its owner, so
//! ownership stays strictly tree-shaped.
//!
//! ## Identity
//!
//! Because the back-reference is an id stored inside the brush value and
//! not an address, moving a `Brush` never invalidates it. The operations
//! that must re-parent faces are `Clone` (fresh id, faces re-pointed as
//! the final step) and [`Brush::take`] (identity travels with the faces;
//! the source is left empty with a fresh id).
//!
//! ## Edits
//!
//! Expand/contract translates every face plane along its own outward
//! normal and rebuilds the topology into a temporary structure; the
//! result is committed atomically only if validation succeeds, so no
//! partial face replacement is ever observable. Callers must not retain
//! a face reference across such an edit: the entire face set is
//! replaced.

use crate::face::BrushFace;
use crate::topology::{self, FacePolygon, FaceSpec};
use brush_math::Bbox3;
use config::constants::VERTEX_MERGE_EPSILON;
use glam::DVec3;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// BRUSH IDENTITY
// =============================================================================

/// Process-unique identity of a live brush.
///
/// Faces reference their owner through this id instead of a pointer,
/// keeping the face→brush relation weak and move-safe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BrushId(u64);

static NEXT_BRUSH_ID: AtomicU64 = AtomicU64::new(1);

impl BrushId {
    /// Allocates a fresh, never-before-used id.
    pub(crate) fn next() -> Self {
        Self(NEXT_BRUSH_ID.fetch_add(1, Ordering::Relaxed))
    }
}

// =============================================================================
// BRUSH
// =============================================================================

/// A convex map-editor brush.
///
/// Default-constructed brushes are empty ("not yet built"); populated
/// brushes are produced by [`crate::BrushBuilder`] or by a successful
/// expand/contract edit.
#[derive(Debug)]
pub struct Brush {
    id: BrushId,
    faces: Vec<BrushFace>,
}

impl Default for Brush {
    /// Creates an empty brush with a fresh identity.
    fn default() -> Self {
        Self {
            id: BrushId::next(),
            faces: Vec::new(),
        }
    }
}

impl Clone for Brush {
    /// Deep copy: the clone gets a fresh identity and every cloned face
    /// is re-parented to it as the final step, so clones never point at
    /// the source.
    fn clone(&self) -> Self {
        let id = BrushId::next();
        let faces = self.faces.iter().map(|f| f.reparented(id)).collect();
        Self { id, faces }
    }
}

impl Brush {
    /// Creates a brush owning the given reconstructed polygons.
    pub(crate) fn from_polygons(polygons: Vec<FacePolygon>) -> Self {
        let id = BrushId::next();
        let faces = polygons
            .into_iter()
            .map(|p| BrushFace::from_polygon(p, id, false))
            .collect();
        Self { id, faces }
    }

    /// Returns this brush's identity.
    #[inline]
    pub fn id(&self) -> BrushId {
        self.id
    }

    /// Returns a read-only view of the owned face set.
    #[inline]
    pub fn faces(&self) -> &[BrushFace] {
        &self.faces
    }

    /// Returns true if the brush has no faces (not yet built, or moved
    /// from).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Returns the deduplicated vertex positions of the solid.
    ///
    /// The order is unspecified but stable for a given topology: faces
    /// are visited in order, loop vertices in winding order, and only
    /// the first occurrence of each position is kept.
    pub fn vertex_positions(&self) -> Vec<DVec3> {
        let mut positions: Vec<DVec3> = Vec::new();
        for face in &self.faces {
            for &v in face.vertices() {
                let seen = positions
                    .iter()
                    .any(|p| (*p - v).length() < VERTEX_MERGE_EPSILON);
                if !seen {
                    positions.push(v);
                }
            }
        }
        positions
    }

    /// Returns the axis-aligned bounding box, or `None` for an empty
    /// brush.
    pub fn bounds(&self) -> Option<Bbox3> {
        Bbox3::from_points(&self.vertex_positions())
    }

    /// Checks whether translating every face plane by `delta` along its
    /// outward normal would yield a valid solid within `world_bounds`.
    ///
    /// Pure dry run: the brush is never modified. A negative `delta`
    /// contracts; a delta that would collapse the solid reports `false`
    /// rather than an error, since that is a routine editing outcome.
    pub fn can_expand(&self, world_bounds: &Bbox3, delta: f64, lock_material_alignment: bool) -> bool {
        let _ = lock_material_alignment;
        if self.is_empty() {
            return false;
        }
        topology::build(&self.translated_specs(delta), world_bounds).is_ok()
    }

    /// Translates every face plane by `delta` along its outward normal
    /// and rebuilds the topology.
    ///
    /// On success the face set is replaced atomically (every new face
    /// re-parented to this brush) and `true` is returned. On failure the
    /// brush is left completely unchanged and `false` is returned;
    /// `expand` succeeds exactly when [`Brush::can_expand`] reports
    /// `true` for the same state and arguments.
    pub fn expand(&mut self, world_bounds: &Bbox3, delta: f64, lock_material_alignment: bool) -> bool {
        if self.is_empty() {
            return false;
        }

        // Build-then-commit: validate into a temporary structure first.
        let Ok(polygons) = topology::build(&self.translated_specs(delta), world_bounds) else {
            return false;
        };

        self.faces = polygons
            .into_iter()
            .map(|p| BrushFace::from_polygon(p, self.id, lock_material_alignment))
            .collect();
        true
    }

    /// Returns this brush's face specs (plane + material pairs).
    ///
    /// This is the persistence form: a document layer can store these
    /// and rebuild an equivalent brush through the topology builder.
    pub fn face_specs(&self) -> Vec<FaceSpec> {
        self.translated_specs(0.0)
    }

    /// Transfers this brush's identity and face set into the returned
    /// value, leaving `self` empty but structurally valid.
    ///
    /// This is the explicit move operation: the returned brush keeps the
    /// id its faces already reference, and the source behaves like a
    /// default-constructed brush afterwards.
    pub fn take(&mut self) -> Brush {
        std::mem::take(self)
    }

    /// Face specs with every plane offset by `delta`, materials carried
    /// over from the current faces.
    fn translated_specs(&self, delta: f64) -> Vec<FaceSpec> {
        self.faces
            .iter()
            .map(|f| FaceSpec::new(f.plane().translated(delta), f.material()))
            .collect()
    }
}

// =============================================================================
// TESTS
// =============================================================================
