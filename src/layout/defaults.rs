//! Design constants (all in millimeters)

use crate::types::Length;

/// A leg's base is this much wider than the rod it carries
pub const LEG_WIDTH_EXTRA: Length = Length::mm(10.0);
/// A leg rises this much more than the rod width
pub const LEG_HEIGHT_EXTRA: Length = Length::mm(9.0);
/// Default leg tilt, degrees from the horizontal
pub const LEG_ANGLE_DEG: f64 = 89.0;

/// Plan view: the inner panel is this much smaller than the rod frame
pub const TOP_INNER_SHRINK: Length = Length::mm(20.0);
/// Plan view: the inner panel starts this far back from twice the rod width
pub const TOP_INNER_OFFSET: Length = Length::mm(15.0);

pub const BOTTOM_WIDTH: f64 = 530.0;
pub const BOTTOM_HEIGHT: f64 = 40.0;
pub const TOP_WIDTH: f64 = 580.0;
pub const TOP_HEIGHT: f64 = 50.0;
pub const ROD_WIDTH: f64 = 25.0;
pub const ROD_HEIGHT: f64 = 700.0;
pub const BOTTOM_START_Y: f64 = 120.0;
pub const DEPTH: f64 = 300.0;
pub const DEPTH_ROD_WIDTH: f64 = 40.0;

pub const NUMBER_OF_STEPS: usize = 4;
pub const STEP_HEIGHT: f64 = 250.0;
pub const STEP_WIDTH: f64 = 225.0;
pub const TOP_STEP_WIDTH: f64 = 500.0;
pub const STEP_ROD_WIDTH: f64 = 40.0;
pub const SIDE_ROD_HEIGHT: f64 = 250.0;
pub const BOTTOM_ROD_HEIGHT: f64 = 40.0;
pub const GROUND_CLEARANCE: f64 = 80.0;
