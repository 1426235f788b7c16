//! # Plane Primitive
//!
//! Immutable 3D plane (half-space boundary) with point classification,
//! three-plane intersection, and translation along its own normal.
//!
//! A plane is stored as a unit normal `n` and a signed distance `d` from
//! the origin; a point `p` lies on the plane when `n · p == d`. The
//! half-space bounded by the plane is the set of points with
//! `n · p <= d` (on or behind the normal-facing side).

use crate::error::PlaneError;
use config::constants::{DETERMINANT_EPSILON, EPSILON};
use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

// =============================================================================
// CLASSIFICATION
// =============================================================================

/// Classification of a point relative to a plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClassification {
    /// Point is in front of the plane (positive side).
    Front,
    /// Point is behind the plane (negative side).
    Back,
    /// Point lies on the plane within tolerance.
    OnPlane,
}

// =============================================================================
// PLANE
// =============================================================================

/// A plane in 3D space defined by a unit normal and distance from origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    /// Normal vector (unit length).
    normal: DVec3,
    /// Signed distance from origin along the normal.
    distance: f64,
}

impl Plane {
    /// Creates a plane from a normal and a distance from origin.
    ///
    /// The normal is normalized on construction; it must have nonzero
    /// length.
    pub fn new(normal: DVec3, distance: f64) -> Self {
        Self {
            normal: normal.normalize(),
            distance,
        }
    }

    /// Creates a plane from three points.
    ///
    /// Points must be in counter-clockwise order when viewed from the
    /// front (normal-facing) side.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::DegeneratePlane`] if the points are
    /// collinear or coincident within tolerance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brush_math::Plane;
    /// use glam::DVec3;
    ///
    /// let plane = Plane::from_points(
    ///     DVec3::ZERO,
    ///     DVec3::X,
    ///     DVec3::Y,
    /// ).unwrap();
    /// assert!((plane.normal() - DVec3::Z).length() < 1e-9);
    /// ```
    pub fn from_points(a: DVec3, b: DVec3, c: DVec3) -> Result<Self, PlaneError> {
        let cross = (b - a).cross(c - a);
        if cross.length() < EPSILON {
            return Err(PlaneError::degenerate(format!(
                "points are collinear or coincident: {a:?}, {b:?}, {c:?}"
            )));
        }

        let normal = cross.normalize();
        Ok(Self {
            normal,
            distance: normal.dot(a),
        })
    }

    /// Returns the unit normal.
    #[inline]
    pub fn normal(&self) -> DVec3 {
        self.normal
    }

    /// Returns the signed distance from origin along the normal.
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Signed distance from a point to this plane.
    ///
    /// Positive = front, negative = back, zero = on plane.
    #[inline]
    pub fn signed_distance(&self, point: DVec3) -> f64 {
        self.normal.dot(point) - self.distance
    }

    /// Classifies a point relative to this plane using the shared epsilon.
    pub fn classify_point(&self, point: DVec3) -> PointClassification {
        let dist = self.signed_distance(point);
        if dist > EPSILON {
            PointClassification::Front
        } else if dist < -EPSILON {
            PointClassification::Back
        } else {
            PointClassification::OnPlane
        }
    }

    /// Computes the unique intersection point of three planes.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::NoIntersection`] if any pair of planes is
    /// parallel or the triple is otherwise degenerate (singular normal
    /// system).
    pub fn intersect_three(a: &Plane, b: &Plane, c: &Plane) -> Result<DVec3, PlaneError> {
        // Rows of the system are the three unit normals.
        let m = DMat3::from_cols(a.normal, b.normal, c.normal).transpose();
        let det = m.determinant();
        if det.abs() < DETERMINANT_EPSILON {
            return Err(PlaneError::no_intersection(
                "planes are parallel or form a degenerate triple",
            ));
        }

        let d = DVec3::new(a.distance, b.distance, c.distance);
        Ok(m.inverse() * d)
    }

    /// Returns this plane translated by `delta` along its own normal.
    ///
    /// Positive `delta` moves the plane in the normal direction (outward
    /// for a brush face), negative moves it against the normal.
    pub fn translated(&self, delta: f64) -> Plane {
        Plane {
            normal: self.normal,
            distance: self.distance + delta,
        }
    }

    /// Returns the plane with its normal reversed.
    pub fn flipped(&self) -> Plane {
        Plane {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// Returns true if the two planes coincide within `epsilon`.
    ///
    /// Planes are equal when their normals agree (dot product within
    /// epsilon of 1) and their distances differ by less than epsilon.
    pub fn approx_eq(&self, other: &Plane, epsilon: f64) -> bool {
        self.normal.dot(other.normal) > 1.0 - epsilon
            && (self.distance - other.distance).abs() < epsilon
    }
}

// =============================================================================
// TESTS
// =============================================================================
