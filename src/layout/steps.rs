//! Multi-step side frame
//!
//! Steps climb from left to right. The short left upright carries the
//! bottom rail, the tall right upright reaches the top step, and every step
//! after the first stands on its own step-rod.

use super::defaults;
use crate::errors::{self, GeometryError};
use crate::log::debug;
use crate::model::Model;
use crate::shapes::Rect;
use crate::types::{Length, NumericError, pmm};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepParams {
    pub number_of_steps: usize,
    /// Vertical pitch between steps
    pub step_height: f64,
    /// Horizontal pitch between steps
    pub step_width: f64,
    /// Width of the last (top) step
    pub top_step_width: f64,
    pub rod_width: f64,
    /// Height of the short left upright
    pub side_rod_height: f64,
    pub bottom_rod_height: f64,
    /// Y of the bottom rail's lower edge
    pub ground_clearance: f64,
}

impl Default for StepParams {
    fn default() -> Self {
        Self {
            number_of_steps: defaults::NUMBER_OF_STEPS,
            step_height: defaults::STEP_HEIGHT,
            step_width: defaults::STEP_WIDTH,
            top_step_width: defaults::TOP_STEP_WIDTH,
            rod_width: defaults::STEP_ROD_WIDTH,
            side_rod_height: defaults::SIDE_ROD_HEIGHT,
            bottom_rod_height: defaults::BOTTOM_ROD_HEIGHT,
            ground_clearance: defaults::GROUND_CLEARANCE,
        }
    }
}

impl StepParams {
    pub fn validate(&self) -> Result<(), GeometryError> {
        if self.number_of_steps == 0 {
            return Err(GeometryError::dimension("number_of_steps", 0.0, NumericError::Zero));
        }
        errors::positive("step_height", self.step_height)?;
        errors::positive("step_width", self.step_width)?;
        errors::positive("top_step_width", self.top_step_width)?;
        errors::positive("rod_width", self.rod_width)?;
        errors::positive("side_rod_height", self.side_rod_height)?;
        errors::positive("bottom_rod_height", self.bottom_rod_height)?;
        errors::non_negative("ground_clearance", self.ground_clearance)?;
        Ok(())
    }

    /// Width of the bottom rail: the run between the outer uprights' inner edges
    pub fn bottom_rod_width(&self) -> f64 {
        let n = self.number_of_steps as f64;
        self.step_width * (n - 1.0) + self.top_step_width - 2.0 * self.rod_width
    }
}

/// Lay out the side frame of a multi-step ladder.
///
/// Children: `left_rod`, `right_rod`, `bottom_rail`, `step_0..n` and
/// `step_rod_1..n`.
pub fn layout_steps(params: &StepParams) -> Result<Model, GeometryError> {
    params.validate()?;

    let n = params.number_of_steps;
    let step_height = Length(params.step_height);
    let step_width = Length(params.step_width);
    let rod = Length(params.rod_width);
    let clearance = Length(params.ground_clearance);
    let bottom_rod_height = Length(params.bottom_rod_height);

    let bottom_rod_width = errors::positive("bottom_rod_width", params.bottom_rod_width())?;
    // the shortest step-rod is the first one
    let rod_foot = clearance + bottom_rod_height;
    if n > 1 {
        errors::positive("step_rod_height", (step_height * 2.0 - rod_foot).raw())?;
    }

    debug!(steps = n, bottom_rod_width = %bottom_rod_width, "layout_steps");

    let mut model = Model::new();
    model.insert("left_rod", Rect::new(rod, Length(params.side_rod_height))?)?;
    model.insert(
        "bottom_rail",
        Rect::new(bottom_rod_width, bottom_rod_height)?.at(pmm(rod.raw(), clearance.raw())),
    )?;
    model.insert(
        "right_rod",
        Rect::new(rod, step_height * n as f64)?.at(pmm((bottom_rod_width + rod).raw(), 0.0)),
    )?;

    for i in 0..n {
        let width = if i + 1 == n { Length(params.top_step_width) } else { step_width };
        let x = step_width * i as f64;
        let y = step_height * (i + 1) as f64 - rod;
        model.insert(format!("step_{i}"), Rect::new(width, rod)?.at(pmm(x.raw(), y.raw())))?;
    }

    for i in 1..n {
        let x = step_width * i as f64;
        let height = step_height * i as f64 + (step_height - rod_foot);
        model.insert(
            format!("step_rod_{i}"),
            Rect::new(rod, height)?.at(pmm(x.raw(), rod_foot.raw())),
        )?;
    }

    Ok(model)
}
