//! Primitive shapes: the vocabulary every drawing is made of
//!
//! Each primitive knows:
//! - its own origin inside the parent model
//! - the points that bound it, in parent coordinates
//!
//! Rectangles stay rectangles until an encoder asks for [`Rect::edges`], so
//! a rod is still a rod when it reaches the exporter.

use std::collections::BTreeMap;
use std::fmt;

use enum_dispatch::enum_dispatch;

use crate::errors::GeometryError;
use crate::types::{BoxMm, Length, OffsetMm, Point, PtMm};

/// Common behavior for every node of a model tree
#[enum_dispatch]
pub trait Primitive {
    /// Where this node sits inside its parent (lower-left corner for rectangles)
    fn origin(&self) -> PtMm;

    /// Bounding points of the node in parent coordinates, own origin applied
    fn corner_points(&self) -> Vec<PtMm>;

    /// Short name of the primitive kind, used by encoders and listings
    fn kind(&self) -> PrimitiveKind;

    /// Grow `bbox` to cover this node when its parent sits at `offset`
    fn expand_bbox(&self, offset: OffsetMm, bbox: &mut BoxMm) {
        for p in self.corner_points() {
            bbox.expand_point(p + offset);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Rect,
    Leg,
    Segments,
    Model,
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrimitiveKind::Rect => "rect",
            PrimitiveKind::Leg => "leg",
            PrimitiveKind::Segments => "segments",
            PrimitiveKind::Model => "model",
        };
        f.write_str(s)
    }
}

// ============================================================================
// Segment
// ============================================================================

/// A straight line between two points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: PtMm,
    pub end: PtMm,
}

impl Segment {
    pub fn new(start: PtMm, end: PtMm) -> Self {
        Self { start, end }
    }

    pub fn length(&self) -> Length {
        Length((self.end.to_dvec2() - self.start.to_dvec2()).length())
    }

    /// Horizontal extent of the segment, signed (end minus start)
    pub fn dx(&self) -> Length {
        self.end.x - self.start.x
    }

    pub fn translated(&self, by: OffsetMm) -> Segment {
        Segment { start: self.start + by, end: self.end + by }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle anchored at its lower-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub origin: PtMm,
    pub width: Length,
    pub height: Length,
}

impl Rect {
    /// Create a rectangle at the origin. Dimensions must be finite and non-negative.
    pub fn new(width: Length, height: Length) -> Result<Self, GeometryError> {
        let width = Length::try_non_negative(width.raw())
            .map_err(|reason| GeometryError::dimension("width", width.raw(), reason))?;
        let height = Length::try_non_negative(height.raw())
            .map_err(|reason| GeometryError::dimension("height", height.raw(), reason))?;
        Ok(Self { origin: PtMm::ORIGIN, width, height })
    }

    /// Place the rectangle with its lower-left corner at `origin`
    pub fn at(mut self, origin: PtMm) -> Self {
        self.origin = origin;
        self
    }

    pub fn left(&self) -> Length {
        self.origin.x
    }

    pub fn right(&self) -> Length {
        self.origin.x + self.width
    }

    pub fn bottom(&self) -> Length {
        self.origin.y
    }

    pub fn top(&self) -> Length {
        self.origin.y + self.height
    }

    /// Corners counter-clockwise from the lower-left
    pub fn corners(&self) -> [PtMm; 4] {
        [
            Point::new(self.left(), self.bottom()),
            Point::new(self.right(), self.bottom()),
            Point::new(self.right(), self.top()),
            Point::new(self.left(), self.top()),
        ]
    }

    /// Explode into bottom, right, top, left segments (for line-only encoders)
    pub fn edges(&self) -> [Segment; 4] {
        let [ll, lr, ur, ul] = self.corners();
        [
            Segment::new(ll, lr),
            Segment::new(lr, ur),
            Segment::new(ur, ul),
            Segment::new(ul, ll),
        ]
    }
}

impl Primitive for Rect {
    fn origin(&self) -> PtMm {
        self.origin
    }

    fn corner_points(&self) -> Vec<PtMm> {
        self.corners().to_vec()
    }

    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Rect
    }
}

// ============================================================================
// Leg
// ============================================================================

/// A tilted trapezoidal foot: base, two leaning sides, and the top that joins them.
///
/// Segment coordinates are relative to `origin`, which is zero unless the
/// leg has been moved after construction. Built by [`crate::leg::make_leg`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leg {
    pub origin: PtMm,
    pub base: Segment,
    pub left: Segment,
    pub right: Segment,
    pub top: Segment,
}

impl Leg {
    /// The four sides in drawing order, with their names
    pub fn segments(&self) -> [(&'static str, Segment); 4] {
        [
            ("base", self.base),
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
        ]
    }

    /// Signed length of the top edge; negative once the sides cross
    pub fn top_length(&self) -> Length {
        self.top.dx()
    }

    pub fn at(mut self, origin: PtMm) -> Self {
        self.origin = origin;
        self
    }
}

impl Primitive for Leg {
    fn origin(&self) -> PtMm {
        self.origin
    }

    fn corner_points(&self) -> Vec<PtMm> {
        let by = OffsetMm::from(self.origin);
        vec![
            self.base.start + by,
            self.base.end + by,
            self.top.start + by,
            self.top.end + by,
        ]
    }

    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Leg
    }
}

// ============================================================================
// SegmentSet
// ============================================================================

/// Named loose segments that do not form a higher-level primitive
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SegmentSet {
    pub origin: PtMm,
    segments: BTreeMap<String, Segment>,
}

impl SegmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, segment: Segment) -> Result<(), GeometryError> {
        let name = name.into();
        if self.segments.contains_key(&name) {
            return Err(GeometryError::DuplicateChild { name });
        }
        self.segments.insert(name, segment);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Segment> {
        self.segments.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Segment)> {
        self.segments.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn at(mut self, origin: PtMm) -> Self {
        self.origin = origin;
        self
    }
}

impl Primitive for SegmentSet {
    fn origin(&self) -> PtMm {
        self.origin
    }

    fn corner_points(&self) -> Vec<PtMm> {
        let by = OffsetMm::from(self.origin);
        self.segments
            .values()
            .flat_map(|s| [s.start + by, s.end + by])
            .collect()
    }

    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Segments
    }
}
