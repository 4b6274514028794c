//! Report extents and the A4 fit of each view of the default frame.

use miette::Result;
use stepladder::FrameParams;
use stepladder::export::PageFit;
use stepladder::extents::extents;
use stepladder::views::derive_views;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let views = derive_views(&FrameParams::default())?;
    let page = PageFit::A4_PORTRAIT;
    for (name, view) in views.iter() {
        let bounds = extents(view);
        let placement = page.fit(&bounds)?;
        tracing::info!(name, %bounds, scale = %placement.scale, "fitted");
        println!(
            "{name:>5}: {bounds}  {} x {} mm  fit scale {:.4}",
            bounds.width(),
            bounds.height(),
            placement.scale.raw()
        );
    }
    Ok(())
}
