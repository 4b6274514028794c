//! Parametric layout: parameter sets in, composite models out
//!
//! Every function here is pure. Parameters are validated up front and any
//! derived dimension that comes out non-positive fails the whole layout.

pub mod defaults;
mod frame;
mod steps;

pub use frame::{FrameParams, Span, layout_frame, layout_span};
pub use steps::{StepParams, layout_steps};
