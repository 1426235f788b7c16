//! # Brush Kernel
//!
//! Convex-solid geometry kernel for map-editor brushes. A brush is a
//! convex polyhedron represented as the intersection of finitely many
//! half-spaces, each carrying a supporting plane and an opaque material
//! tag.
//!
//! ## Architecture
//!
//! ```text
//! BrushBuilder → hull (vertex cloud → facet planes)
//!              → topology (planes → face polygons)
//!              → Brush (owns BrushFace set)
//! ```
//!
//! Face polygons are always re-derived canonically from planes by the
//! topology builder, never trusted verbatim from caller-supplied winding.
//! Geometric edits (expand/contract) rebuild the topology into a
//! temporary structure and commit it atomically on success.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use brush_kernel::BrushBuilder;
//! use brush_math::Bbox3;
//! use glam::DVec3;
//!
//! let builder = BrushBuilder::new(Bbox3::cube(8192.0));
//! let mut brush = builder.create_cuboid(
//!     Bbox3::new(DVec3::splat(-64.0), DVec3::splat(64.0)),
//!     "texture",
//! )?;
//! assert!(brush.expand(&Bbox3::cube(8192.0), 6.0, true));
//! ```

pub mod brush;
pub mod builder;
pub mod error;
pub mod face;
pub mod hull;
pub mod topology;

pub use brush::{Brush, BrushId};
pub use builder::BrushBuilder;
pub use error::BrushError;
pub use face::BrushFace;
pub use topology::{FacePolygon, FaceSpec};
