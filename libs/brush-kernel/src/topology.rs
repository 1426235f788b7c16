//! # Polyhedron Topology Builder
//!
//! Reconstructs the vertex/edge/face graph of a convex solid from its
//! bounding half-space planes.
//!
//! ## Algorithm
//!
//! The standard triple-intersection construction for intersections of
//! convex half-spaces:
//!
//! 1. For every unordered triple of input planes, compute the candidate
//!    intersection vertex.
//! 2. Keep a candidate only if it lies on or behind every input plane
//!    (within tolerance).
//! 3. Group surviving vertices by plane incidence and sort each plane's
//!    incident vertices by angle around its normal to rebuild the ordered
//!    polygon loop.
//! 4. A plane with fewer than 3 incident vertices contributes no face and
//!    is dropped (it was redundant).
//!
//! The enumeration is O(n³) in the plane count, which is acceptable at
//! the tens-of-planes scale of editor-authored solids. Incremental
//! half-space clipping (successive plane cuts of a running polyhedron)
//! is an equivalent-output alternative if that scale ever grows.

use crate::error::BrushError;
use brush_math::{Bbox3, Plane, PointClassification};
use config::constants::{EPSILON, MIN_BRUSH_VOLUME, VERTEX_MERGE_EPSILON};
use glam::DVec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// INPUT / OUTPUT TYPES
// =============================================================================

/// One bounding half-space paired with its material tag.
///
/// This is the persistence-friendly form of a brush: a document layer
/// can store a brush as its face specs and rebuild the topology on
/// load.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaceSpec {
    /// Supporting plane; the normal points out of the solid.
    pub plane: Plane,
    /// Opaque material tag carried through to the generated face.
    pub material: String,
}

impl FaceSpec {
    /// Creates a face spec from a plane and a material tag.
    pub fn new(plane: Plane, material: impl Into<String>) -> Self {
        Self {
            plane,
            material: material.into(),
        }
    }
}

/// One reconstructed face: its plane, material, and ordered vertex loop.
///
/// The loop is wound counter-clockwise when viewed from the front
/// (outward normal) side of the plane.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacePolygon {
    pub plane: Plane,
    pub material: String,
    pub vertices: Vec<DVec3>,
}

// =============================================================================
// TOPOLOGY RECONSTRUCTION
// =============================================================================

/// Builds the face polygons of the convex solid bounded by `specs`.
///
/// # Errors
///
/// - [`BrushError::DegenerateBrush`] if fewer than 4 planes contribute a
///   face, or the solid has non-positive volume.
/// - [`BrushError::OutOfBounds`] if any constructed vertex falls outside
///   `world_bounds`.
pub fn build(specs: &[FaceSpec], world_bounds: &Bbox3) -> Result<Vec<FacePolygon>, BrushError> {
    if specs.len() < 4 {
        return Err(BrushError::degenerate(format!(
            "a closed solid needs at least 4 bounding planes, got {}",
            specs.len()
        )));
    }

    let vertices = candidate_vertices(specs);

    for &vertex in &vertices {
        if !world_bounds.contains(vertex, EPSILON) {
            return Err(BrushError::out_of_bounds(vertex));
        }
    }

    let mut faces = Vec::with_capacity(specs.len());
    for spec in specs {
        let incident: Vec<DVec3> = vertices
            .iter()
            .copied()
            .filter(|&v| spec.plane.signed_distance(v).abs() <= VERTEX_MERGE_EPSILON)
            .collect();

        // Redundant plane: it touches fewer than 3 vertices of the solid.
        if incident.len() < 3 {
            continue;
        }

        faces.push(FacePolygon {
            plane: spec.plane,
            material: spec.material.clone(),
            vertices: sort_loop(&spec.plane, incident),
        });
    }

    if faces.len() < 4 {
        return Err(BrushError::degenerate(format!(
            "only {} planes contribute faces, a closed solid needs at least 4",
            faces.len()
        )));
    }

    let volume = signed_volume(&faces);
    if volume <= MIN_BRUSH_VOLUME {
        return Err(BrushError::degenerate(format!(
            "solid has non-positive volume ({volume})"
        )));
    }

    Ok(faces)
}

/// Enumerates all valid triple-intersection vertices.
///
/// A candidate survives iff it lies on or behind every input plane. The
/// result is deduplicated by position; order follows the triple
/// enumeration and is therefore stable for a given plane set.
fn candidate_vertices(specs: &[FaceSpec]) -> Vec<DVec3> {
    let mut vertices: Vec<DVec3> = Vec::new();

    let n = specs.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                // A parallel pair in the triple just means no candidate.
                let Ok(point) =
                    Plane::intersect_three(&specs[i].plane, &specs[j].plane, &specs[k].plane)
                else {
                    continue;
                };

                let inside = specs
                    .iter()
                    .all(|spec| spec.plane.classify_point(point) != PointClassification::Front);
                if !inside {
                    continue;
                }

                let duplicate = vertices
                    .iter()
                    .any(|v| (*v - point).length() < VERTEX_MERGE_EPSILON);
                if !duplicate {
                    vertices.push(point);
                }
            }
        }
    }

    vertices
}

/// Orders a face's incident vertices counter-clockwise around the
/// outward normal.
///
/// The sort anchor is the vertex farthest from the face centroid, ties
/// broken by lexicographic coordinate order; angles are measured in the
/// right-handed basis `(u, normal × u)`. This only fixes presentation
/// order, not the solid's geometry.
fn sort_loop(plane: &Plane, vertices: Vec<DVec3>) -> Vec<DVec3> {
    let centroid = vertices.iter().sum::<DVec3>() / vertices.len() as f64;

    let anchor = vertices
        .iter()
        .copied()
        .reduce(|best, v| {
            let db = (best - centroid).length_squared();
            let dv = (v - centroid).length_squared();
            if dv > db + VERTEX_MERGE_EPSILON {
                v
            } else if db > dv + VERTEX_MERGE_EPSILON {
                best
            } else if lex_less(v, best) {
                v
            } else {
                best
            }
        })
        .unwrap_or(centroid);

    let u = (anchor - centroid).normalize();
    let w = plane.normal().cross(u);

    let mut sorted = vertices;
    sorted.sort_by(|&a, &b| {
        let angle_a = loop_angle(a, centroid, u, w);
        let angle_b = loop_angle(b, centroid, u, w);
        angle_a
            .partial_cmp(&angle_b)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    sorted
}

/// Angle of `point` around the centroid in the `(u, w)` basis, in
/// `[0, 2π)` with the anchor direction at angle 0.
fn loop_angle(point: DVec3, centroid: DVec3, u: DVec3, w: DVec3) -> f64 {
    let r = point - centroid;
    let angle = r.dot(w).atan2(r.dot(u));
    if angle < 0.0 {
        angle + std::f64::consts::TAU
    } else {
        angle
    }
}

/// Strict lexicographic order on coordinates.
fn lex_less(a: DVec3, b: DVec3) -> bool {
    (a.x, a.y, a.z) < (b.x, b.y, b.z)
}

/// Signed volume of the solid via the divergence theorem.
///
/// Each face polygon is fan-triangulated; with outward-consistent
/// winding the sum of scalar triple products is six times the volume.
pub fn signed_volume(faces: &[FacePolygon]) -> f64 {
    let mut six_volume = 0.0;
    for face in faces {
        let verts = &face.vertices;
        for i in 1..verts.len().saturating_sub(1) {
            six_volume += verts[0].dot(verts[i].cross(verts[i + 1]));
        }
    }
    six_volume / 6.0
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cuboid_specs(half: f64) -> Vec<FaceSpec> {
        [
            Plane::new(DVec3::X, half),
            Plane::new(-DVec3::X, half),
            Plane::new(DVec3::Y, half),
            Plane::new(-DVec3::Y, half),
            Plane::new(DVec3::Z, half),
            Plane::new(-DVec3::Z, half),
        ]
        .into_iter()
        .map(|p| FaceSpec::new(p, "texture"))
        .collect()
    }

    fn world() -> Bbox3 {
        Bbox3::cube(8192.0)
    }

    #[test]
    fn test_build_cuboid() {
        let faces = build(&cuboid_specs(64.0), &world()).unwrap();
        assert_eq!(faces.len(), 6);
        for face in &faces {
            assert_eq!(face.vertices.len(), 4);
            assert_eq!(face.material, "texture");
            // Every loop vertex lies on its supporting plane.
            for &v in &face.vertices {
                assert!(face.plane.signed_distance(v).abs() < VERTEX_MERGE_EPSILON);
            }
        }
    }

    #[test]
    fn test_build_cuboid_volume() {
        let faces = build(&cuboid_specs(64.0), &world()).unwrap();
        assert_relative_eq!(signed_volume(&faces), 128.0_f64.powi(3), epsilon = 1e-6);
    }

    #[test]
    fn test_winding_matches_outward_normal() {
        let faces = build(&cuboid_specs(32.0), &world()).unwrap();
        for face in &faces {
            // Newell normal of the sorted loop must agree with the plane.
            let mut newell = DVec3::ZERO;
            let verts = &face.vertices;
            for i in 0..verts.len() {
                let a = verts[i];
                let b = verts[(i + 1) % verts.len()];
                newell += a.cross(b);
            }
            assert!(newell.normalize().dot(face.plane.normal()) > 0.99);
        }
    }

    #[test]
    fn test_redundant_plane_dropped() {
        let mut specs = cuboid_specs(64.0);
        // A plane far outside the solid cuts nothing off.
        specs.push(FaceSpec::new(Plane::new(DVec3::X, 100.0), "texture"));

        let faces = build(&specs, &world()).unwrap();
        assert_eq!(faces.len(), 6);
    }

    #[test]
    fn test_too_few_planes() {
        let specs = &cuboid_specs(64.0)[..3];
        assert!(matches!(
            build(specs, &world()),
            Err(BrushError::DegenerateBrush { .. })
        ));
    }

    #[test]
    fn test_unbounded_planes_rejected() {
        // Four planes all facing +X-ish never close a solid; their only
        // candidate vertices are rejected or missing entirely.
        let specs: Vec<FaceSpec> = [
            Plane::new(DVec3::X, 1.0),
            Plane::new(DVec3::Y, 1.0),
            Plane::new(DVec3::Z, 1.0),
            Plane::new(DVec3::new(1.0, 1.0, 1.0), 1.0),
        ]
        .into_iter()
        .map(|p| FaceSpec::new(p, "texture"))
        .collect();

        assert!(build(&specs, &world()).is_err());
    }

    #[test]
    fn test_collapsed_solid_rejected() {
        // All six planes through the origin: the solid is a single point.
        let specs = cuboid_specs(0.0);
        assert!(matches!(
            build(&specs, &world()),
            Err(BrushError::DegenerateBrush { .. })
        ));
    }

    #[test]
    fn test_out_of_world_bounds() {
        let result = build(&cuboid_specs(64.0), &Bbox3::cube(32.0));
        assert!(matches!(result, Err(BrushError::OutOfBounds { .. })));
    }

    #[test]
    fn test_tetrahedron() {
        let specs: Vec<FaceSpec> = [
            Plane::new(-DVec3::X, 0.0),
            Plane::new(-DVec3::Y, 0.0),
            Plane::new(-DVec3::Z, 0.0),
            Plane::new(DVec3::new(1.0, 1.0, 1.0).normalize(), 1.0),
        ]
        .into_iter()
        .map(|p| FaceSpec::new(p, "texture"))
        .collect();

        let faces = build(&specs, &world()).unwrap();
        assert_eq!(faces.len(), 4);
        for face in &faces {
            assert_eq!(face.vertices.len(), 3);
        }
        assert!(signed_volume(&faces) > 0.0);
    }

    #[test]
    fn test_stable_vertex_order() {
        let a = build(&cuboid_specs(64.0), &world()).unwrap();
        let b = build(&cuboid_specs(64.0), &world()).unwrap();
        for (fa, fb) in a.iter().zip(&b) {
            assert_eq!(fa.vertices, fb.vertices);
        }
    }
}
