//! # Convex Hull
//!
//! 3D convex hull computation using the QuickHull algorithm, reduced to
//! what the brush kernel needs: the deduplicated set of outward facet
//! planes. Face polygons are deliberately not taken from the hull; the
//! topology builder re-derives them canonically from the planes.
//!
//! ## Algorithm Steps
//!
//! 1. Find extreme points (min/max on each axis)
//! 2. Build initial tetrahedron from 4 non-coplanar points
//! 3. Assign remaining points to facets they're outside of
//! 4. For each facet with outside points: find the farthest point, find
//!    the horizon edges, replace the visible facets with new ones
//! 5. Repeat until no facet has outside points

use crate::error::BrushError;
use brush_math::Plane;
use config::constants::{EPSILON, VERTEX_MERGE_EPSILON};
use glam::DVec3;
use std::collections::{HashMap, HashSet};

/// Computes the outward bounding planes of the convex hull of `points`.
///
/// Coplanar hull facets (e.g. the two triangles of a box side) collapse
/// to a single plane.
///
/// # Errors
///
/// Returns [`BrushError::DegenerateBrush`] if fewer than 4 unique points
/// are given, or the cloud is collinear or coplanar.
pub fn hull_planes(points: &[DVec3]) -> Result<Vec<Plane>, BrushError> {
    if points.len() < 4 {
        return Err(BrushError::degenerate(
            "convex hull requires at least 4 points",
        ));
    }

    let unique = remove_duplicates(points);
    if unique.len() < 4 {
        return Err(BrushError::degenerate(
            "convex hull requires at least 4 unique points",
        ));
    }

    let facets = build_initial_simplex(&unique)?;
    let facets = quickhull_iterate(facets, &unique);

    let mut planes: Vec<Plane> = Vec::new();
    for facet in &facets {
        if !planes.iter().any(|p| p.approx_eq(&facet.plane, EPSILON)) {
            planes.push(facet.plane);
        }
    }
    Ok(planes)
}

/// A triangular facet of the hull under construction.
#[derive(Debug, Clone)]
struct HullFacet {
    /// Indices of the three vertices
    vertices: [usize; 3],
    /// Supporting plane, outward-facing
    plane: Plane,
    /// Points outside this facet (indices into the point array)
    outside_points: Vec<usize>,
}

impl HullFacet {
    /// Creates a facet from three vertex indices; winding gives the
    /// normal direction.
    fn new(v0: usize, v1: usize, v2: usize, points: &[DVec3]) -> Self {
        let normal = (points[v1] - points[v0])
            .cross(points[v2] - points[v0])
            .normalize();
        Self {
            vertices: [v0, v1, v2],
            plane: Plane::new(normal, normal.dot(points[v0])),
            outside_points: Vec::new(),
        }
    }

    /// Returns true if the point is outside (in front of) this facet.
    fn is_outside(&self, point: DVec3) -> bool {
        self.plane.signed_distance(point) > EPSILON
    }

    /// Finds the farthest outside point.
    fn farthest_point(&self, points: &[DVec3]) -> Option<usize> {
        self.outside_points
            .iter()
            .max_by(|&&a, &&b| {
                let da = self.plane.signed_distance(points[a]);
                let db = self.plane.signed_distance(points[b]);
                da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
            })
            .copied()
    }
}

/// Removes duplicate points within tolerance.
fn remove_duplicates(points: &[DVec3]) -> Vec<DVec3> {
    let mut unique = Vec::with_capacity(points.len());
    for p in points {
        let is_duplicate = unique
            .iter()
            .any(|u: &DVec3| (*u - *p).length() < VERTEX_MERGE_EPSILON);
        if !is_duplicate {
            unique.push(*p);
        }
    }
    unique
}

/// Builds the initial tetrahedron from extreme points and assigns every
/// remaining point to the first facet it is outside of.
fn build_initial_simplex(points: &[DVec3]) -> Result<Vec<HullFacet>, BrushError> {
    let mut min_x = 0;
    let mut max_x = 0;
    let mut min_y = 0;
    let mut max_y = 0;
    let mut min_z = 0;
    let mut max_z = 0;

    for (i, p) in points.iter().enumerate() {
        if p.x < points[min_x].x { min_x = i; }
        if p.x > points[max_x].x { max_x = i; }
        if p.y < points[min_y].y { min_y = i; }
        if p.y > points[max_y].y { max_y = i; }
        if p.z < points[min_z].z { min_z = i; }
        if p.z > points[max_z].z { max_z = i; }
    }

    let extremes = [min_x, max_x, min_y, max_y, min_z, max_z];
    let (p0, p1) = find_farthest_pair(&extremes, points);
    let p2 = find_farthest_from_line(p0, p1, points)?;
    let p3 = find_farthest_from_plane(p0, p1, p2, points)?;

    let centroid = (points[p0] + points[p1] + points[p2] + points[p3]) / 4.0;
    let mut facets = vec![
        create_facet_outward(p0, p1, p2, centroid, points),
        create_facet_outward(p0, p2, p3, centroid, points),
        create_facet_outward(p0, p3, p1, centroid, points),
        create_facet_outward(p1, p3, p2, centroid, points),
    ];

    let used: HashSet<usize> = [p0, p1, p2, p3].into_iter().collect();
    for idx in (0..points.len()).filter(|i| !used.contains(i)) {
        let point = points[idx];
        for facet in &mut facets {
            if facet.is_outside(point) {
                facet.outside_points.push(idx);
                break;
            }
        }
    }

    Ok(facets)
}

/// Finds the pair of points with maximum distance.
fn find_farthest_pair(indices: &[usize], points: &[DVec3]) -> (usize, usize) {
    let mut max_dist = 0.0;
    let mut best = (indices[0], indices[1]);

    for (i, &a) in indices.iter().enumerate() {
        for &b in indices.iter().skip(i + 1) {
            let dist = (points[a] - points[b]).length_squared();
            if dist > max_dist {
                max_dist = dist;
                best = (a, b);
            }
        }
    }
    best
}

/// Finds the point farthest from a line.
fn find_farthest_from_line(p0: usize, p1: usize, points: &[DVec3]) -> Result<usize, BrushError> {
    let line_dir = (points[p1] - points[p0]).normalize();
    let mut max_dist = EPSILON;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 {
            continue;
        }
        let v = *p - points[p0];
        let dist = (v - v.dot(line_dir) * line_dir).length();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.ok_or_else(|| BrushError::degenerate("all points are collinear"))
}

/// Finds the point farthest from a plane.
fn find_farthest_from_plane(
    p0: usize,
    p1: usize,
    p2: usize,
    points: &[DVec3],
) -> Result<usize, BrushError> {
    let normal = (points[p1] - points[p0])
        .cross(points[p2] - points[p0])
        .normalize();

    let mut max_dist = EPSILON;
    let mut best = None;

    for (i, p) in points.iter().enumerate() {
        if i == p0 || i == p1 || i == p2 {
            continue;
        }
        let dist = normal.dot(*p - points[p0]).abs();
        if dist > max_dist {
            max_dist = dist;
            best = Some(i);
        }
    }

    best.ok_or_else(|| BrushError::degenerate("all points are coplanar"))
}

/// Creates a facet wound so its normal points away from the hull
/// centroid.
fn create_facet_outward(
    v0: usize,
    v1: usize,
    v2: usize,
    centroid: DVec3,
    points: &[DVec3],
) -> HullFacet {
    let facet = HullFacet::new(v0, v1, v2, points);
    let facet_center = (points[v0] + points[v1] + points[v2]) / 3.0;

    if facet.plane.normal().dot(centroid - facet_center) > 0.0 {
        HullFacet::new(v0, v2, v1, points)
    } else {
        facet
    }
}

/// Main QuickHull iteration: repeatedly expand toward the farthest
/// outside point until every point is enclosed.
fn quickhull_iterate(mut facets: Vec<HullFacet>, points: &[DVec3]) -> Vec<HullFacet> {
    let max_iterations = points.len() * 2;

    for _ in 0..max_iterations {
        let Some(facet_idx) = facets.iter().position(|f| !f.outside_points.is_empty()) else {
            break;
        };

        let Some(farthest) = facets[facet_idx].farthest_point(points) else {
            continue;
        };

        let visible: Vec<usize> = facets
            .iter()
            .enumerate()
            .filter(|(_, f)| f.is_outside(points[farthest]))
            .map(|(i, _)| i)
            .collect();

        if visible.is_empty() {
            continue;
        }

        let horizon = find_horizon_edges(&facets, &visible);

        let mut reassign: Vec<usize> = Vec::new();
        for &idx in &visible {
            reassign.extend(&facets[idx].outside_points);
        }
        reassign.retain(|&p| p != farthest);

        // Remove visible facets in reverse order to preserve indices.
        let mut visible_sorted = visible;
        visible_sorted.sort_by(|a, b| b.cmp(a));
        for idx in visible_sorted {
            facets.swap_remove(idx);
        }

        let centroid = hull_centroid(&facets, points);
        for (e0, e1) in horizon {
            facets.push(create_facet_outward(e0, e1, farthest, centroid, points));
        }

        for &idx in &reassign {
            let point = points[idx];
            for facet in &mut facets {
                if facet.is_outside(point) {
                    facet.outside_points.push(idx);
                    break;
                }
            }
        }
    }

    facets
}

/// Finds horizon edges: edges of visible facets not shared with another
/// visible facet.
fn find_horizon_edges(facets: &[HullFacet], visible: &[usize]) -> Vec<(usize, usize)> {
    let mut edge_count: HashMap<(usize, usize), usize> = HashMap::new();

    for &idx in visible {
        let v = facets[idx].vertices;
        for (a, b) in [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            *edge_count.entry(key).or_insert(0) += 1;
        }
    }

    let mut horizon = Vec::new();
    for &idx in visible {
        let v = facets[idx].vertices;
        for (a, b) in [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])] {
            let key = if a < b { (a, b) } else { (b, a) };
            if edge_count[&key] == 1 {
                // Preserve winding order
                horizon.push((a, b));
            }
        }
    }

    horizon
}

/// Centroid of the vertices referenced by the current facet set.
fn hull_centroid(facets: &[HullFacet], points: &[DVec3]) -> DVec3 {
    let mut sum = DVec3::ZERO;
    let mut count = 0;
    let mut seen: HashSet<usize> = HashSet::new();

    for facet in facets {
        for &v in &facet.vertices {
            if seen.insert(v) {
                sum += points[v];
                count += 1;
            }
        }
    }

    if count > 0 {
        sum / count as f64
    } else {
        DVec3::ZERO
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hull_planes_tetrahedron() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.5, 1.0, 0.0),
            DVec3::new(0.5, 0.5, 1.0),
        ];
        let planes = hull_planes(&points).unwrap();
        assert_eq!(planes.len(), 4);

        // Every input point lies on or behind every plane.
        for plane in &planes {
            for &p in &points {
                assert!(plane.signed_distance(p) <= EPSILON);
            }
        }
    }

    #[test]
    fn test_hull_planes_cube() {
        let points: Vec<DVec3> = brush_math::Bbox3::cube(1.0).corners().to_vec();
        let planes = hull_planes(&points).unwrap();

        // Coplanar triangle facets merge into 6 box planes.
        assert_eq!(planes.len(), 6);
        for plane in &planes {
            // Axis-aligned unit distances.
            assert!((plane.distance() - 1.0).abs() < EPSILON);
        }
    }

    #[test]
    fn test_hull_interior_point_ignored() {
        let mut points: Vec<DVec3> = brush_math::Bbox3::cube(1.0).corners().to_vec();
        points.push(DVec3::ZERO);

        let planes = hull_planes(&points).unwrap();
        assert_eq!(planes.len(), 6);
    }

    #[test]
    fn test_hull_wedge() {
        // The 6-point hexahedral wedge from the original editor tests.
        let points = vec![
            DVec3::new(64.0, -64.0, 16.0),
            DVec3::new(64.0, 64.0, 16.0),
            DVec3::new(64.0, -64.0, -16.0),
            DVec3::new(64.0, 64.0, -16.0),
            DVec3::new(48.0, 64.0, 16.0),
            DVec3::new(48.0, 64.0, -16.0),
        ];
        let planes = hull_planes(&points).unwrap();
        assert_eq!(planes.len(), 5);
    }

    #[test]
    fn test_hull_too_few_points() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.5, 1.0, 0.0),
        ];
        assert!(matches!(
            hull_planes(&points),
            Err(BrushError::DegenerateBrush { .. })
        ));
    }

    #[test]
    fn test_hull_duplicate_points_rejected() {
        let p = DVec3::new(1.0, 2.0, 3.0);
        assert!(hull_planes(&[p, p, p, p, p]).is_err());
    }

    #[test]
    fn test_hull_coplanar_points_rejected() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(0.0, 1.0, 0.0),
            DVec3::new(1.0, 1.0, 0.0),
        ];
        assert!(matches!(
            hull_planes(&points),
            Err(BrushError::DegenerateBrush { .. })
        ));
    }

    #[test]
    fn test_hull_collinear_points_rejected() {
        let points = vec![
            DVec3::new(0.0, 0.0, 0.0),
            DVec3::new(1.0, 0.0, 0.0),
            DVec3::new(2.0, 0.0, 0.0),
            DVec3::new(3.0, 0.0, 0.0),
        ];
        assert!(matches!(
            hull_planes(&points),
            Err(BrushError::DegenerateBrush { .. })
        ));
    }
}
