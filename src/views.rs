//! Front, side and top projections of one frame
//!
//! Front and side are the same elevation laid out over different spans.
//! The top view is a plan of the top rail with its rod frame and the inner
//! panel.

use crate::errors::{self, GeometryError};
use crate::layout::{FrameParams, defaults, layout_span};
use crate::log::debug;
use crate::model::Model;
use crate::shapes::Rect;
use crate::types::pmm;

/// The three projections of a frame, each in its own coordinate system
#[derive(Debug, Clone, PartialEq)]
pub struct Views {
    pub front: Model,
    pub side: Model,
    pub top: Model,
}

impl Views {
    /// Views in presentation order, with their names
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Model)> {
        [("front", &self.front), ("side", &self.side), ("top", &self.top)].into_iter()
    }
}

pub fn derive_views(params: &FrameParams) -> Result<Views, GeometryError> {
    params.validate()?;
    let front = layout_span(&params.front_span(), params)?;
    let side = layout_span(&params.side_span(), params)?;
    let top = layout_top(params)?;
    Ok(Views { front, side, top })
}

/// Plan view: `top` outline, `top_inner` rod frame and `top_inner_2` panel
pub fn layout_top(params: &FrameParams) -> Result<Model, GeometryError> {
    let width = errors::positive("top_width", params.top_width)?;
    let depth = errors::positive("depth", params.depth)?;
    let rod = errors::positive("rod_width", params.rod_width)?;

    let inner_w = errors::positive("top_inner_width", (width - rod * 2.0).raw())?;
    let inner_d = errors::positive("top_inner_depth", (depth - rod * 2.0).raw())?;
    let panel_w = errors::positive("top_panel_width", (inner_w - defaults::TOP_INNER_SHRINK).raw())?;
    let panel_d = errors::positive("top_panel_depth", (inner_d - defaults::TOP_INNER_SHRINK).raw())?;
    let panel_at = rod * 2.0 - defaults::TOP_INNER_OFFSET;

    debug!(inner_w = %inner_w, inner_d = %inner_d, panel_at = %panel_at, "layout_top");

    let mut model = Model::new();
    model.insert("top", Rect::new(width, depth)?)?;
    model.insert("top_inner", Rect::new(inner_w, inner_d)?.at(pmm(rod.raw(), rod.raw())))?;
    model.insert(
        "top_inner_2",
        Rect::new(panel_w, panel_d)?.at(pmm(panel_at.raw(), panel_at.raw())),
    )?;
    Ok(model)
}
