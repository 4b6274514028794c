//! Print the front, side and top views of the default frame as SVG.
//!
//! `RUST_LOG=stepladder=debug cargo run --example views --features tracing`

use miette::Result;
use stepladder::FrameParams;
use stepladder::export::{SvgOptions, render_views_svg};
use stepladder::views::derive_views;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let views = derive_views(&FrameParams::default())?;
    let svg = render_views_svg(&views, &SvgOptions::default())?;
    print!("{svg}");
    Ok(())
}
