//! Bounding extents of a model tree

use std::fmt;

use crate::model::{Model, Node};
use crate::shapes::Primitive;
use crate::types::{BoxMm, Length, OffsetMm, PtMm, Size};

/// Minimal axis-aligned box around a drawing, in millimeters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extents {
    pub low: PtMm,
    pub high: PtMm,
}

impl Extents {
    /// A zero-size box sitting on `p`
    pub fn at(p: PtMm) -> Self {
        Extents { low: p, high: p }
    }

    pub fn width(&self) -> Length {
        self.high.x - self.low.x
    }

    pub fn height(&self) -> Length {
        self.high.y - self.low.y
    }

    pub fn size(&self) -> Size<Length> {
        Size::new(self.width(), self.height())
    }

    /// True when the box has no area to fit or scale
    pub fn is_degenerate(&self) -> bool {
        self.width() == Length::ZERO || self.height() == Length::ZERO
    }

    /// The translation that moves `low` onto the origin
    pub fn to_origin(&self) -> OffsetMm {
        OffsetMm::new(-self.low.x, -self.low.y)
    }

    pub fn translated(&self, by: OffsetMm) -> Self {
        Extents { low: self.low + by, high: self.high + by }
    }

    fn from_bbox(bbox: BoxMm, fallback: PtMm) -> Self {
        if bbox.is_empty() {
            return Extents::at(fallback);
        }
        Extents { low: bbox.min, high: bbox.max }
    }
}

impl fmt::Display for Extents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) .. ({}, {})",
            self.low.x, self.low.y, self.high.x, self.high.y
        )
    }
}

/// Extents of `model` in its parent's coordinates (its own origin applied).
///
/// A model without primitives yields a zero-size box at its origin.
pub fn extents(model: &Model) -> Extents {
    let mut bbox = BoxMm::new();
    model.expand_bbox(OffsetMm::ZERO, &mut bbox);
    Extents::from_bbox(bbox, model.origin)
}

impl Node {
    pub fn extents(&self) -> Extents {
        let mut bbox = BoxMm::new();
        self.expand_bbox(OffsetMm::ZERO, &mut bbox);
        Extents::from_bbox(bbox, self.origin())
    }
}
