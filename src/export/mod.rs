//! Export side of the engine: page fitting and SVG encoding
//!
//! Nothing here feeds back into layout. Both consume finished models.

pub mod page;
pub mod svg;

pub use self::page::{PageFit, Placement};
pub use self::svg::{SvgOptions, render_svg, render_views_svg};
