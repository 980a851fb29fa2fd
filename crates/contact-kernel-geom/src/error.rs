//! Error types for the contact kernel.

use thiserror::Error;

use crate::ShapeKind;

/// Errors raised by shape construction and geodesic computation.
///
/// A ray that misses a shape is not an error; intersection returns `None`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContactError {
    /// Malformed input: non-unit direction, non-positive shape parameter,
    /// degenerate tangent guess or invalid solver options.
    #[error("Invalid argument: {0}")]
    Argument(String),

    /// The geodesic shooting method exhausted its budget without landing on
    /// the target point.
    #[error(
        "Geodesic shooting did not converge after {iterations} iterations (residual {residual:e})"
    )]
    Convergence {
        /// Number of corrections attempted.
        iterations: usize,
        /// Distance between the last integrated end point and the target.
        residual: f64,
    },

    /// The analytical geodesic solver has no closed form for this shape.
    #[error("No closed-form geodesic for {shape:?} surfaces")]
    NoAnalyticalGeodesic {
        /// The shape that was passed in.
        shape: ShapeKind,
    },
}

/// Result alias used throughout the kernel.
pub type Result<T> = std::result::Result<T, ContactError>;

/// Check that a shape parameter is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ContactError::Argument(format!(
            "{name} must be finite and > 0, got {value}"
        )))
    }
}
