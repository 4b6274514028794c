//! Hierarchical drawing model
//!
//! A [`Model`] is an ordered map of uniquely named children. Each child is
//! either a primitive or another model, and every node carries its own
//! origin so that a whole subtree can be moved by changing one field.
//! Ordering is lexicographic by name, which keeps listings and SVG output
//! deterministic.

use std::collections::BTreeMap;

use enum_dispatch::enum_dispatch;

use crate::errors::GeometryError;
use crate::shapes::{Leg, Primitive, PrimitiveKind, Rect, SegmentSet};
use crate::types::{BoxMm, OffsetMm, PtMm};

/// One child of a model
#[enum_dispatch(Primitive)]
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Rect(Rect),
    Leg(Leg),
    Segments(SegmentSet),
    Model(Model),
}

impl Node {
    pub fn as_rect(&self) -> Option<&Rect> {
        match self {
            Node::Rect(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_leg(&self) -> Option<&Leg> {
        match self {
            Node::Leg(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_model(&self) -> Option<&Model> {
        match self {
            Node::Model(m) => Some(m),
            _ => None,
        }
    }
}

/// A composite node: named children plus an origin applied to all of them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub origin: PtMm,
    children: BTreeMap<String, Node>,
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the whole model so its local origin lands on `origin`
    pub fn at(mut self, origin: PtMm) -> Self {
        self.origin = origin;
        self
    }

    /// Add a named child. Names are unique per model.
    pub fn insert(&mut self, name: impl Into<String>, node: impl Into<Node>) -> Result<(), GeometryError> {
        let name = name.into();
        if self.children.contains_key(&name) {
            return Err(GeometryError::DuplicateChild { name });
        }
        self.children.insert(name, node.into());
        Ok(())
    }

    /// Builder form of [`Model::insert`]
    pub fn with(mut self, name: impl Into<String>, node: impl Into<Node>) -> Result<Self, GeometryError> {
        self.insert(name, node)?;
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.children.get(name)
    }

    /// Look up a descendant by dotted path, e.g. `"front.left_leg"`
    pub fn find(&self, path: &str) -> Option<&Node> {
        let mut parts = path.split('.');
        let mut node = self.children.get(parts.next()?)?;
        for part in parts {
            node = node.as_model()?.children.get(part)?;
        }
        Some(node)
    }

    pub fn children(&self) -> impl Iterator<Item = (&str, &Node)> {
        self.children.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Every leaf primitive with its dotted path and the cumulative offset
    /// of its ancestors (this model's origin included).
    pub fn flatten(&self) -> Vec<FlatPrimitive<'_>> {
        let mut out = Vec::new();
        self.flatten_into(String::new(), OffsetMm::ZERO, &mut out);
        out
    }

    fn flatten_into<'a>(&'a self, prefix: String, parent: OffsetMm, out: &mut Vec<FlatPrimitive<'a>>) {
        let offset = parent + OffsetMm::from(self.origin);
        for (name, node) in &self.children {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{prefix}.{name}")
            };
            match node {
                Node::Model(m) => m.flatten_into(path, offset, out),
                leaf => out.push(FlatPrimitive { path, offset, node: leaf }),
            }
        }
    }
}

impl Primitive for Model {
    fn origin(&self) -> PtMm {
        self.origin
    }

    fn corner_points(&self) -> Vec<PtMm> {
        let by = OffsetMm::from(self.origin);
        self.children
            .values()
            .flat_map(|child| child.corner_points())
            .map(|p| p + by)
            .collect()
    }

    fn kind(&self) -> PrimitiveKind {
        PrimitiveKind::Model
    }
}

/// A leaf of the model tree, positioned in the root's coordinate system
#[derive(Debug, Clone)]
pub struct FlatPrimitive<'a> {
    /// Dotted child path from the root
    pub path: String,
    /// Sum of all ancestor origins; the leaf's own origin is not included
    pub offset: OffsetMm,
    pub node: &'a Node,
}

impl FlatPrimitive<'_> {
    /// Bounding points of the leaf in root coordinates
    pub fn absolute_points(&self) -> Vec<PtMm> {
        self.node
            .corner_points()
            .into_iter()
            .map(|p| p + self.offset)
            .collect()
    }

    /// Lower-left of the leaf's own frame in root coordinates
    pub fn absolute_origin(&self) -> PtMm {
        self.node.origin() + self.offset
    }
}
