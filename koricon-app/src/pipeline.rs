use std::fs;

use tracing::info;

use koricon_core::{BrandPalette, MarkGeometry, MarkStyle};
use koricon_render::{draw_mark, export_ico, export_png, render_gradient};

use crate::error::PipelineError;
use crate::iconset::{export_icns, IconsetBundler};
use crate::layout::OutputLayout;

/// Side length of the master render; every export downsamples from it.
pub const MASTER_SIZE: u32 = 1024;

/// Generate every icon artifact.
///
/// Renders the master canvas once, exports PNG, ICO, and ICNS from it in
/// sequence, then syncs the ICO into the application source tree so both
/// build targets reference identical bytes. Any failure aborts the run;
/// artifacts written by earlier steps are left on disk.
pub fn run(
    layout: &OutputLayout,
    palette: &BrandPalette,
    style: &MarkStyle,
    bundler: &dyn IconsetBundler,
) -> Result<(), PipelineError> {
    let mut canvas = render_gradient(MASTER_SIZE, palette)?;
    draw_mark(&mut canvas, &MarkGeometry::for_size(MASTER_SIZE), style);

    let png_path = layout.png_path();
    export_png(&canvas, &png_path)?;
    info!("Wrote {}", png_path.display());

    let ico_path = layout.ico_path();
    export_ico(&canvas, &ico_path)?;
    info!("Wrote {}", ico_path.display());

    let icns_path = layout.icns_path();
    export_icns(&canvas, &icns_path, &layout.iconset_dir(), bundler)?;
    info!("Wrote {}", icns_path.display());

    let synced = layout.synced_ico_path();
    if let Some(parent) = synced.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&ico_path, &synced)?;
    info!("Synced {}", synced.display());

    Ok(())
}
