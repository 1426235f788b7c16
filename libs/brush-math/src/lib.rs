//! # Brush Math
//!
//! Geometric value types shared by the brush kernel: the plane/half-space
//! primitive and axis-aligned bounding boxes.
//!
//! All computation is f64 (`glam::DVec3`); tolerances come from the
//! `config` crate so every consumer classifies points identically.
//!
//! ## Usage
//!
//! ```rust
//! use brush_math::{Plane, PointClassification};
//! use glam::DVec3;
//!
//! let floor = Plane::new(DVec3::Z, 0.0);
//! assert_eq!(
//!     floor.classify_point(DVec3::new(0.0, 0.0, 5.0)),
//!     PointClassification::Front
//! );
//! ```

pub mod bounds;
pub mod error;
pub mod plane;

pub use bounds::Bbox3;
pub use error::PlaneError;
pub use plane::{Plane, PointClassification};
