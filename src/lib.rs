//! Parametric 2D geometry for step-ladders and rectangular frames.
//!
//! A handful of millimeter dimensions go in, a tree of named rectangles and
//! tilted legs comes out. From there the tree can be projected into front,
//! side and top views, measured, fitted to a page or encoded as SVG.
//!
//! ```
//! use stepladder::layout::{FrameParams, layout_frame};
//! use stepladder::extents::extents;
//!
//! let frame = layout_frame(&FrameParams::default()).unwrap();
//! let bounds = extents(&frame);
//! assert_eq!(bounds.width().raw(), 590.0);
//! ```

mod log;

pub mod types;
pub mod errors;
pub mod shapes;
pub mod model;
pub mod leg;
pub mod layout;
pub mod views;
pub mod extents;
pub mod export;

pub use errors::GeometryError;
pub use layout::{FrameParams, StepParams};
pub use model::{Model, Node};
pub use shapes::Primitive;
pub use views::Views;

/// Render the front, side and top views of `params` as one SVG document.
///
/// Returns the SVG string on success, or an error with diagnostics.
pub fn render_views(params: &FrameParams) -> Result<String, miette::Report> {
    let views = views::derive_views(params)?;
    let svg = export::render_views_svg(&views, &export::SvgOptions::default())?;
    Ok(svg)
}
