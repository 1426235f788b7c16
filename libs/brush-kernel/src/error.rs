//! # Brush Errors
//!
//! Error types for brush construction and topology reconstruction.
//!
//! Construction failures surface through these variants; edit failures
//! (expand/contract) are routine outcomes and are reported through the
//! boolean channel of [`crate::Brush::expand`] instead.

use brush_math::PlaneError;
use glam::DVec3;
use thiserror::Error;

/// Errors that can occur while building a brush.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BrushError {
    /// Plane-level failure (degenerate plane or no triple intersection)
    #[error("Plane error: {0}")]
    PlaneError(#[from] PlaneError),

    /// The planes do not bound a convex, positive-volume solid
    #[error("Degenerate brush: {message}")]
    DegenerateBrush { message: String },

    /// A constructed vertex falls outside the governing world bounds
    #[error("Vertex out of world bounds: {position:?}")]
    OutOfBounds { position: DVec3 },
}

impl BrushError {
    /// Creates a degenerate brush error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateBrush {
            message: message.into(),
        }
    }

    /// Creates an out-of-bounds error.
    pub fn out_of_bounds(position: DVec3) -> Self {
        Self::OutOfBounds { position }
    }
}
