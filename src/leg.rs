//! Tilted trapezoidal legs
//!
//! A leg is built from its base: the two base corners rise by `height` and
//! move towards each other by `dx = height / tan(angle)`. At exactly 90°
//! the sides are vertical and `dx` is zero.

use glam::dvec2;

use crate::errors::{self, GeometryError};
use crate::log::trace;
use crate::shapes::{Leg, Segment};
use crate::types::{Angle, Length, PtMm};

/// Inputs for [`make_leg`]. All lengths are millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegParams {
    pub base_width: Length,
    /// Vertical rise from the base to the top edge
    pub height: Length,
    /// Nominal left edge of the base before the inset is applied
    pub x: Length,
    /// Y of the base
    pub y: Length,
    /// Tilt of the sides from the horizontal, in degrees
    pub angle_deg: f64,
    /// How far the base reaches left of `x`
    pub inset: Length,
}

/// Horizontal shift of each side over a rise of `height`
pub fn horizontal_shift(height: Length, angle: Angle) -> Length {
    if angle.is_right() {
        return Length::ZERO;
    }
    Length(height.raw() / angle.radians().tan())
}

/// Build a leg from its base corners up.
///
/// Fails with `InvalidDimension` for a non-positive base width or height and
/// with `InvalidAngle` outside (0°, 90°]. The top edge is not checked: very
/// shallow angles give a crossed leg with a negative [`Leg::top_length`].
/// An angle so small that the shift overflows fails with `InvalidDimension`
/// on `horizontal_shift`.
pub fn make_leg(params: &LegParams) -> Result<Leg, GeometryError> {
    let base_width = errors::positive("base_width", params.base_width.raw())?;
    let height = errors::positive("height", params.height.raw())?;
    let angle = errors::leg_angle(params.angle_deg)?;
    let x = finite("x", params.x)?;
    let y = finite("y", params.y)?;
    let inset = finite("inset", params.inset)?;

    let dx = finite("horizontal_shift", horizontal_shift(height, angle))?.raw();

    let p1 = dvec2((x - inset).raw(), y.raw());
    let p2 = p1 + dvec2(base_width.raw(), 0.0);
    let top_left = p1 + dvec2(dx, height.raw());
    let top_right = p2 + dvec2(-dx, height.raw());

    trace!(?angle, dx, "leg");

    let [p1, p2, top_left, top_right] = [p1, p2, top_left, top_right].map(PtMm::from_dvec2);
    Ok(Leg {
        origin: PtMm::ORIGIN,
        base: Segment::new(p1, p2),
        left: Segment::new(p1, top_left),
        right: Segment::new(p2, top_right),
        top: Segment::new(top_left, top_right),
    })
}

fn finite(name: &'static str, value: Length) -> Result<Length, GeometryError> {
    Length::try_new(value.raw()).map_err(|reason| GeometryError::dimension(name, value.raw(), reason))
}
