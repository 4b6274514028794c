//! Single-step frame: two uprights, a top rail, a bottom rail and two legs

use super::defaults;
use crate::errors::{self, GeometryError};
use crate::leg::{LegParams, make_leg};
use crate::log::debug;
use crate::model::Model;
use crate::shapes::Rect;
use crate::types::{Length, pmm};

/// Dimensions of a single-step frame, in millimeters.
///
/// `top_width`/`rod_width` describe the front; `depth`/`depth_rod_width`
/// describe the side. Heights are shared by both.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameParams {
    pub bottom_width: f64,
    pub bottom_height: f64,
    pub top_width: f64,
    pub top_height: f64,
    pub rod_width: f64,
    pub rod_height: f64,
    pub depth: f64,
    pub depth_rod_width: f64,
    pub leg_angle_deg: f64,
    /// Y of the bottom rail's lower edge
    pub bottom_start_y: f64,
}

impl Default for FrameParams {
    fn default() -> Self {
        Self {
            bottom_width: defaults::BOTTOM_WIDTH,
            bottom_height: defaults::BOTTOM_HEIGHT,
            top_width: defaults::TOP_WIDTH,
            top_height: defaults::TOP_HEIGHT,
            rod_width: defaults::ROD_WIDTH,
            rod_height: defaults::ROD_HEIGHT,
            depth: defaults::DEPTH,
            depth_rod_width: defaults::DEPTH_ROD_WIDTH,
            leg_angle_deg: defaults::LEG_ANGLE_DEG,
            bottom_start_y: defaults::BOTTOM_START_Y,
        }
    }
}

impl FrameParams {
    /// Check every user-supplied value. Does not check derived dimensions;
    /// those are checked where they are derived.
    pub fn validate(&self) -> Result<(), GeometryError> {
        errors::positive("bottom_width", self.bottom_width)?;
        errors::positive("bottom_height", self.bottom_height)?;
        errors::positive("top_width", self.top_width)?;
        errors::positive("top_height", self.top_height)?;
        errors::positive("rod_width", self.rod_width)?;
        errors::positive("rod_height", self.rod_height)?;
        errors::positive("depth", self.depth)?;
        errors::positive("depth_rod_width", self.depth_rod_width)?;
        errors::non_negative("bottom_start_y", self.bottom_start_y)?;
        errors::leg_angle(self.leg_angle_deg)?;
        Ok(())
    }

    /// The front elevation: full top width with the front rods
    pub fn front_span(&self) -> Span {
        Span {
            width: Length(self.top_width),
            rod: Length(self.rod_width),
            bottom_width: Length(self.bottom_width),
        }
    }

    /// The side elevation: depth with the depth rods, bottom rail filling
    /// the gap between them
    pub fn side_span(&self) -> Span {
        Span {
            width: Length(self.depth),
            rod: Length(self.depth_rod_width),
            bottom_width: Length(self.depth - 2.0 * self.depth_rod_width),
        }
    }
}

/// The horizontal quantities one elevation is laid out over
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    /// Outer width, also the top rail width
    pub width: Length,
    /// Upright width
    pub rod: Length,
    /// Bottom rail width, centered between the uprights
    pub bottom_width: Length,
}

/// Lay out the front elevation of a single-step frame.
///
/// Children: `left_rod`, `right_rod`, `top_rail`, `bottom_rail`,
/// `left_leg`, `right_leg`. Legs hang below y = 0.
pub fn layout_frame(params: &FrameParams) -> Result<Model, GeometryError> {
    params.validate()?;
    layout_span(&params.front_span(), params)
}

/// Lay out one elevation over `span`, taking heights and the leg angle from
/// `params`. Front and side views are both this function.
pub fn layout_span(span: &Span, params: &FrameParams) -> Result<Model, GeometryError> {
    let width = errors::positive("span_width", span.width.raw())?;
    let rod = errors::positive("rod_width", span.rod.raw())?;
    let bottom_width = errors::positive("bottom_width", span.bottom_width.raw())?;
    let rod_height = errors::positive("rod_height", params.rod_height)?;
    let top_height = errors::positive("top_height", params.top_height)?;
    let bottom_height = errors::positive("bottom_height", params.bottom_height)?;
    let bottom_y = errors::non_negative("bottom_start_y", params.bottom_start_y)?;

    let right_x = width - rod;
    let bottom_x = (width - bottom_width) / 2.0;

    let leg_width = rod + defaults::LEG_WIDTH_EXTRA;
    let leg_height = rod + defaults::LEG_HEIGHT_EXTRA;
    let leg_at = |x: Length| {
        make_leg(&LegParams {
            base_width: leg_width,
            height: leg_height,
            x,
            y: -leg_height,
            angle_deg: params.leg_angle_deg,
            inset: (leg_width - rod) / 2.0,
        })
    };

    debug!(
        width = %width,
        rod = %rod,
        bottom_x = %bottom_x,
        leg_width = %leg_width,
        leg_height = %leg_height,
        "layout_span"
    );

    let mut model = Model::new();
    model.insert("left_rod", Rect::new(rod, rod_height)?)?;
    model.insert("right_rod", Rect::new(rod, rod_height)?.at(pmm(right_x.raw(), 0.0)))?;
    model.insert("top_rail", Rect::new(width, top_height)?.at(pmm(0.0, rod_height.raw())))?;
    model.insert(
        "bottom_rail",
        Rect::new(bottom_width, bottom_height)?.at(pmm(bottom_x.raw(), bottom_y.raw())),
    )?;
    model.insert("left_leg", leg_at(Length::ZERO)?)?;
    model.insert("right_leg", leg_at(right_x)?)?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Node;
    use crate::shapes::{Primitive, Segment};
    use crate::types::NumericError;

    fn rect<'a>(model: &'a Model, name: &str) -> &'a Rect {
        model.get(name).and_then(Node::as_rect).unwrap()
    }

    // ==================== Reference frame ====================

    #[test]
    fn reference_frame_members() {
        let model = layout_frame(&FrameParams::default()).unwrap();

        let left = rect(&model, "left_rod");
        assert_eq!((left.origin, left.width, left.height), (pmm(0.0, 0.0), Length(25.0), Length(700.0)));

        let right = rect(&model, "right_rod");
        assert_eq!((right.origin, right.width, right.height), (pmm(555.0, 0.0), Length(25.0), Length(700.0)));

        let top = rect(&model, "top_rail");
        assert_eq!((top.origin, top.width, top.height), (pmm(0.0, 700.0), Length(580.0), Length(50.0)));

        let bottom = rect(&model, "bottom_rail");
        assert_eq!((bottom.origin, bottom.width, bottom.height), (pmm(25.0, 120.0), Length(530.0), Length(40.0)));
    }

    #[test]
    fn bottom_rail_meets_upright_edges() {
        let model = layout_frame(&FrameParams::default()).unwrap();
        assert_eq!(rect(&model, "bottom_rail").left(), rect(&model, "left_rod").right());
        assert_eq!(rect(&model, "bottom_rail").right(), rect(&model, "right_rod").left());
    }

    #[test]
    fn right_rod_edge_tracks_top_width() {
        for (top_width, rod_width) in [(580.0, 25.0), (400.0, 30.0), (1000.0, 45.5)] {
            let params = FrameParams { top_width, rod_width, ..FrameParams::default() };
            let model = layout_frame(&params).unwrap();
            assert_eq!(rect(&model, "right_rod").left(), Length(top_width - rod_width));
        }
    }

    #[test]
    fn legs_hang_below_the_uprights() {
        let model = layout_frame(&FrameParams::default()).unwrap();
        let left = model.get("left_leg").and_then(Node::as_leg).unwrap();
        let right = model.get("right_leg").and_then(Node::as_leg).unwrap();

        assert_eq!(left.base, Segment::new(pmm(-5.0, -34.0), pmm(30.0, -34.0)));
        assert_eq!(right.base, Segment::new(pmm(550.0, -34.0), pmm(585.0, -34.0)));
        assert_eq!(left.top.start.y, Length::ZERO);
        assert!((left.top.start.x.raw() + 4.406527792440599).abs() < 1e-9);
        assert!((right.top.end.x.raw() - 584.4065277924406).abs() < 1e-9);
    }

    #[test]
    fn layout_is_idempotent() {
        let params = FrameParams::default();
        assert_eq!(layout_frame(&params).unwrap(), layout_frame(&params).unwrap());
    }

    #[test]
    fn every_member_sits_above_ground_except_legs() {
        let model = layout_frame(&FrameParams::default()).unwrap();
        for (name, node) in model.children() {
            if node.as_leg().is_some() {
                continue;
            }
            assert!(node.corner_points().iter().all(|p| p.y >= Length::ZERO), "{name}");
        }
    }

    // ==================== Validation ====================

    #[test]
    fn rejects_non_positive_inputs() {
        let params = FrameParams { rod_width: 0.0, ..FrameParams::default() };
        assert!(matches!(
            layout_frame(&params),
            Err(GeometryError::InvalidDimension { name: "rod_width", reason: NumericError::Zero, .. })
        ));

        let params = FrameParams { top_height: -50.0, ..FrameParams::default() };
        assert!(matches!(
            layout_frame(&params),
            Err(GeometryError::InvalidDimension { name: "top_height", .. })
        ));
    }

    #[test]
    fn rejects_bad_leg_angle() {
        let params = FrameParams { leg_angle_deg: 95.0, ..FrameParams::default() };
        assert_eq!(layout_frame(&params), Err(GeometryError::InvalidAngle { value: 95.0 }));
    }

    #[test]
    fn narrow_top_keeps_default_bottom_rail() {
        let params = FrameParams { top_width: 400.0, rod_width: 30.0, ..FrameParams::default() };
        let model = layout_frame(&params).unwrap();
        assert_eq!(rect(&model, "right_rod").left(), Length(370.0));
        let bottom = rect(&model, "bottom_rail");
        assert_eq!((bottom.origin, bottom.width), (pmm(-65.0, 120.0), Length(530.0)));
    }

    #[test]
    fn overlapping_members_are_laid_out_as_given() {
        let params = FrameParams { rod_width: 300.0, bottom_start_y: 680.0, ..FrameParams::default() };
        let model = layout_frame(&params).unwrap();
        assert_eq!(rect(&model, "right_rod").left(), Length(280.0));
        assert_eq!(rect(&model, "bottom_rail").bottom(), Length(680.0));
    }

    #[test]
    fn rejects_non_positive_derived_side_rail() {
        let params = FrameParams { depth_rod_width: 150.0, ..FrameParams::default() };
        let side = layout_span(&params.side_span(), &params);
        assert!(matches!(
            side,
            Err(GeometryError::InvalidDimension { name: "bottom_width", reason: NumericError::Zero, .. })
        ));
    }

    #[test]
    fn right_angle_legs_are_rectangular() {
        let params = FrameParams { leg_angle_deg: 90.0, ..FrameParams::default() };
        let model = layout_frame(&params).unwrap();
        let leg = model.get("left_leg").and_then(Node::as_leg).unwrap();
        assert_eq!(leg.top, Segment::new(pmm(-5.0, 0.0), pmm(30.0, 0.0)));
    }
}
