//! # Configuration Constants
//!
//! Centralized constants for the brush geometry kernel. All plane
//! classification tolerances, vertex merge thresholds, and world-extent
//! defaults are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Limits**: World extent and minimum-volume bounds

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for point/plane coincidence tests.
///
/// A point whose signed distance to a plane has magnitude below this value
/// is classified as lying on the plane. Chosen for map-editor coordinate
/// magnitudes (up to ~10^4 units) in f64 arithmetic.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn on_plane(signed_distance: f64) -> bool {
///     signed_distance.abs() < EPSILON
/// }
///
/// assert!(on_plane(1e-7));
/// assert!(!on_plane(0.001));
/// ```
pub const EPSILON: f64 = 1e-6;

/// Epsilon for vertex deduplication.
///
/// Two vertex positions closer than this are treated as the same vertex
/// when collecting the candidate vertices of a polyhedron. Slightly larger
/// than [`EPSILON`] to absorb the accumulated error of three-plane
/// intersection.
///
/// # Example
///
/// ```rust
/// use config::constants::VERTEX_MERGE_EPSILON;
///
/// fn same_vertex(d: f64) -> bool {
///     d < VERTEX_MERGE_EPSILON
/// }
///
/// assert!(same_vertex(1e-6));
/// ```
pub const VERTEX_MERGE_EPSILON: f64 = 1e-5;

/// Epsilon for the determinant of a three-plane normal system.
///
/// Below this value the three planes are considered to contain a parallel
/// pair (or a degenerate triple) and have no unique intersection point.
/// The normals are unit length, so the determinant is scale-free.
pub const DETERMINANT_EPSILON: f64 = 1e-9;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Default half-extent of the world-bounds cube, in world units.
///
/// Matches the ±8192 editing volume of the original map format. Callers
/// supply their own bounds to every constructive operation; this value is
/// only a convenient default for tests and standalone use.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_WORLD_BOUNDS;
///
/// let half = DEFAULT_WORLD_BOUNDS;
/// assert!(half > 0.0);
/// ```
pub const DEFAULT_WORLD_BOUNDS: f64 = 8192.0;

/// Minimum volume for a brush to be considered non-degenerate.
///
/// Topology reconstruction rejects solids whose computed volume falls at
/// or below this threshold. Contracting a brush until it collapses hits
/// this limit and is reported as a failed (but non-exceptional) edit.
pub const MIN_BRUSH_VOLUME: f64 = 1e-6;
