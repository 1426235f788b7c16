//! # Config Crate
//!
//! Centralized configuration constants for the brush geometry kernel.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{EPSILON, DEFAULT_WORLD_BOUNDS};
//!
//! // Use EPSILON for point/plane coincidence tests
//! let distance: f64 = 0.0000001; // 1e-7, smaller than EPSILON (1e-6)
//! let on_plane = distance.abs() < EPSILON;
//! assert!(on_plane);
//!
//! // Use the default world half-extent when the caller supplies none
//! assert_eq!(DEFAULT_WORLD_BOUNDS, 8192.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Editor-Scale Defaults**: Tolerances chosen for map-editor coordinates
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
