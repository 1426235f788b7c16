//! # Plane Errors
//!
//! Error types for plane construction and intersection.

use thiserror::Error;

/// Errors that can occur when constructing or intersecting planes.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaneError {
    /// Three defining points are collinear or coincident
    #[error("Degenerate plane: {message}")]
    DegeneratePlane { message: String },

    /// Three planes have no unique common point
    #[error("No intersection: {message}")]
    NoIntersection { message: String },
}

impl PlaneError {
    /// Creates a degenerate plane error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegeneratePlane {
            message: message.into(),
        }
    }

    /// Creates a no-intersection error.
    pub fn no_intersection(message: impl Into<String>) -> Self {
        Self::NoIntersection {
            message: message.into(),
        }
    }
}
