//! Error types with diagnostic codes using miette
//!
//! Every failure is local and synchronous: construction either succeeds
//! completely or returns one of these, never a partial model.

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Angle, Length, NumericError};

// ============================================================================
// Geometry Errors
// ============================================================================

/// Errors raised while building primitives, laying out frames or measuring them
#[derive(Error, Diagnostic, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("invalid dimension `{name}` = {value}: {reason}")]
    #[diagnostic(
        code(stepladder::geometry::invalid_dimension),
        help("widths and heights are millimeters and must be finite and positive")
    )]
    InvalidDimension {
        name: &'static str,
        value: f64,
        reason: NumericError,
    },

    #[error("invalid leg angle: {value}°")]
    #[diagnostic(
        code(stepladder::geometry::invalid_angle),
        help("the leg tilt is measured from the horizontal and must lie in (0°, 90°]")
    )]
    InvalidAngle { value: f64 },

    #[error("degenerate model: {reason}")]
    #[diagnostic(code(stepladder::geometry::degenerate_model))]
    DegenerateModel { reason: &'static str },

    #[error("duplicate child name: {name}")]
    #[diagnostic(
        code(stepladder::geometry::duplicate_child),
        help("names must be unique within their parent model")
    )]
    DuplicateChild { name: String },
}

impl GeometryError {
    /// Wrap a numeric validation failure for a named dimension
    pub fn dimension(name: &'static str, value: f64, reason: NumericError) -> Self {
        GeometryError::InvalidDimension { name, value, reason }
    }
}

/// Validate a user-supplied dimension that must be strictly positive
pub(crate) fn positive(name: &'static str, value: f64) -> Result<Length, GeometryError> {
    Length::try_positive(value).map_err(|reason| GeometryError::dimension(name, value, reason))
}

/// Validate a user-supplied dimension that may be zero (offsets, clearances)
pub(crate) fn non_negative(name: &'static str, value: f64) -> Result<Length, GeometryError> {
    Length::try_non_negative(value).map_err(|reason| GeometryError::dimension(name, value, reason))
}

/// Validate a leg tilt angle in degrees
pub(crate) fn leg_angle(value: f64) -> Result<Angle, GeometryError> {
    Angle::try_leg_tilt(value).map_err(|_| GeometryError::InvalidAngle { value })
}
