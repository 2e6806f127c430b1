//! PNG and ICO export for the finished icon canvas.

use std::fs;
use std::io::BufWriter;
use std::path::Path;

use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::ExtendedColorType;
use tracing::debug;

use koricon_core::Canvas;

use crate::resample::resample;

/// Embedded resolutions of the Windows icon container.
pub const ICO_SIZES: [u32; 7] = [16, 24, 32, 48, 64, 128, 256];

/// Write the canvas as an RGBA PNG at its native resolution.
///
/// Parent directories are created as needed. Compression is turned up as
/// far as the encoder allows; the output is still lossless.
pub fn export_png(canvas: &Canvas, path: &Path) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, canvas.size, canvas.size);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::Best);
    encoder.set_adaptive_filter(png::AdaptiveFilterType::Adaptive);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&canvas.pixels)?;

    debug!(
        "Exported PNG {}x{} to {}",
        canvas.size,
        canvas.size,
        path.display()
    );
    Ok(())
}

/// Write a multi-resolution Windows icon.
///
/// Each entry in [`ICO_SIZES`] becomes one PNG-compressed frame, produced
/// by Lanczos-downsampling the canvas.
pub fn export_ico(canvas: &Canvas, path: &Path) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut frames = Vec::with_capacity(ICO_SIZES.len());
    for &size in &ICO_SIZES {
        let small = resample(canvas, size)?;
        frames.push(IcoFrame::as_png(
            &small.pixels,
            size,
            size,
            ExtendedColorType::Rgba8,
        )?);
    }

    let file = fs::File::create(path)?;
    IcoEncoder::new(BufWriter::new(file)).encode_images(&frames)?;

    debug!(
        "Exported ICO with {} entries to {}",
        ICO_SIZES.len(),
        path.display()
    );
    Ok(())
}
