//! SVG encoder
//!
//! Model coordinates are millimeters, Y-up. The encoder moves the drawing's
//! low corner to the origin, flips Y and multiplies by `scale`, so one SVG
//! user unit is `1 / scale` millimeters. The document is built with the
//! `svg` crate's element builders and serialized through its `Display`.

use ::svg::Document;
use ::svg::node::element::{Group, Line, Rectangle};

use crate::errors::GeometryError;
use crate::extents::{Extents, extents};
use crate::model::{Model, Node};
use crate::shapes::{Rect, Segment};
use crate::types::{Length, NumericError, OffsetMm};
use crate::views::Views;

const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// SVG user units per millimeter
    pub scale: f64,
    pub stroke: String,
    /// Stroke width in user units
    pub stroke_width: f64,
    /// Horizontal gap between views in [`render_views_svg`]
    pub view_gap: Length,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            scale: 1.0,
            stroke: "black".to_string(),
            stroke_width: 0.5,
            view_gap: Length(50.0),
        }
    }
}

/// Render one model as a standalone SVG document
pub fn render_svg(model: &Model, options: &SvgOptions) -> Result<String, GeometryError> {
    if model.flatten().is_empty() {
        return Err(GeometryError::DegenerateModel { reason: "model has no primitives" });
    }
    if !(options.scale.is_finite() && options.scale > 0.0) {
        let reason = if options.scale.is_nan() {
            NumericError::NaN
        } else {
            NumericError::OutOfRange
        };
        return Err(GeometryError::dimension("scale", options.scale, reason));
    }

    let bounds = extents(model);
    let builder = SvgBuilder {
        low_x: bounds.low.x.raw(),
        high_y: bounds.high.y.raw(),
        options,
    };
    Ok(builder.document(model, &bounds).to_string())
}

/// Render front, side and top side by side, bottoms aligned, separated by
/// `view_gap`.
pub fn render_views_svg(views: &Views, options: &SvgOptions) -> Result<String, GeometryError> {
    let mut sheet = Model::new();
    let mut cursor = Length::ZERO;
    for (name, view) in views.iter() {
        let e = extents(view);
        let shift = OffsetMm::new(cursor - e.low.x, -e.low.y);
        sheet.insert(name, view.clone().at(view.origin + shift))?;
        cursor += e.width() + options.view_gap;
    }
    render_svg(&sheet, options)
}

struct SvgBuilder<'a> {
    low_x: f64,
    high_y: f64,
    options: &'a SvgOptions,
}

impl SvgBuilder<'_> {
    fn document(&self, model: &Model, bounds: &Extents) -> Document {
        let w = fmt_num(bounds.width().raw() * self.options.scale);
        let h = fmt_num(bounds.height().raw() * self.options.scale);
        let style = Group::new()
            .set("fill", "none")
            .set("stroke", self.options.stroke.as_str())
            .set("stroke-width", fmt_num(self.options.stroke_width));

        Document::new()
            .set("xmlns", SVG_NS)
            .set("width", format!("{w}mm"))
            .set("height", format!("{h}mm"))
            .set("viewBox", format!("0 0 {w} {h}"))
            .add(self.model(style, model, OffsetMm::ZERO, ""))
    }

    /// Append the children of `model` to `group`, one `<g>` per composite
    fn model(&self, mut group: Group, model: &Model, parent: OffsetMm, prefix: &str) -> Group {
        let offset = parent + OffsetMm::from(model.origin);
        for (name, node) in model.children() {
            let path = if prefix.is_empty() {
                name.to_string()
            } else {
                format!("{prefix}.{name}")
            };
            group = match node {
                Node::Rect(r) => group.add(self.rect(r, offset, &path)),
                Node::Leg(leg) => {
                    let by = offset + OffsetMm::from(leg.origin);
                    let segments = leg.segments().into_iter().map(|(_, seg)| seg.translated(by));
                    group.add(self.lines(&path, segments))
                }
                Node::Segments(set) => {
                    let by = offset + OffsetMm::from(set.origin);
                    let segments = set.iter().map(|(_, seg)| seg.translated(by));
                    group.add(self.lines(&path, segments))
                }
                Node::Model(child) => {
                    let nested = Group::new().set("id", path.as_str());
                    group.add(self.model(nested, child, offset, &path))
                }
            };
        }
        group
    }

    fn rect(&self, rect: &Rect, offset: OffsetMm, path: &str) -> Rectangle {
        let s = self.options.scale;
        Rectangle::new()
            .set("id", path)
            .set("x", fmt_num(self.x(rect.left() + offset.dx)))
            .set("y", fmt_num(self.y(rect.top() + offset.dy)))
            .set("width", fmt_num(rect.width.raw() * s))
            .set("height", fmt_num(rect.height.raw() * s))
    }

    fn lines(&self, path: &str, segments: impl Iterator<Item = Segment>) -> Group {
        segments.fold(Group::new().set("id", path), |group, seg| group.add(self.line(&seg)))
    }

    fn line(&self, seg: &Segment) -> Line {
        Line::new()
            .set("x1", fmt_num(self.x(seg.start.x)))
            .set("y1", fmt_num(self.y(seg.start.y)))
            .set("x2", fmt_num(self.x(seg.end.x)))
            .set("y2", fmt_num(self.y(seg.end.y)))
    }

    fn x(&self, x: Length) -> f64 {
        (x.raw() - self.low_x) * self.options.scale
    }

    // Y-down
    fn y(&self, y: Length) -> f64 {
        (self.high_y - y.raw()) * self.options.scale
    }
}

/// Three decimals, trailing zeros trimmed, no negative zero
fn fmt_num(value: f64) -> String {
    let s = format!("{value:.3}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}
