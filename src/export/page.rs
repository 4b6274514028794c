//! Fitting a drawing onto a printed page

use crate::errors::GeometryError;
use crate::extents::Extents;
use crate::types::{Length, NumericError, OffsetMm, Point, PtMm, Scalar, Size};

pub const A4_WIDTH: Length = Length::mm(210.0);
pub const A4_HEIGHT: Length = Length::mm(297.0);
pub const DEFAULT_MARGIN: Length = Length::mm(10.0);

/// A page and the margin kept clear on every side
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFit {
    pub page: Size<Length>,
    pub margin: Length,
}

/// Where a drawing lands on the page: translate first, then scale, then
/// shift by the margin.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub translate: OffsetMm,
    pub scale: Scalar,
    pub margin: Length,
}

impl PageFit {
    pub const A4_PORTRAIT: PageFit = PageFit {
        page: Size { w: A4_WIDTH, h: A4_HEIGHT },
        margin: DEFAULT_MARGIN,
    };

    /// Printable area inside the margins
    pub fn available(&self) -> Size<Length> {
        Size::new(self.page.w - self.margin * 2.0, self.page.h - self.margin * 2.0)
    }

    /// Uniform scale and translation that fit `extents` inside the margins
    pub fn fit(&self, extents: &Extents) -> Result<Placement, GeometryError> {
        let available = self.available();
        if available.w <= Length::ZERO || available.h <= Length::ZERO {
            return Err(GeometryError::dimension(
                "margin",
                self.margin.raw(),
                NumericError::OutOfRange,
            ));
        }

        let (Some(sx), Some(sy)) = (
            available.w.checked_div(extents.width()),
            available.h.checked_div(extents.height()),
        ) else {
            return Err(GeometryError::DegenerateModel {
                reason: "drawing has zero width or height",
            });
        };

        Ok(Placement {
            translate: extents.to_origin(),
            scale: sx.min(sy),
            margin: self.margin,
        })
    }
}

impl Default for PageFit {
    fn default() -> Self {
        Self::A4_PORTRAIT
    }
}

impl Placement {
    /// Map a drawing point to page millimeters (Y-up, page origin bottom-left)
    pub fn apply(&self, p: PtMm) -> PtMm {
        let moved = p + self.translate;
        Point::new(
            moved.x * self.scale + self.margin,
            moved.y * self.scale + self.margin,
        )
    }
}
