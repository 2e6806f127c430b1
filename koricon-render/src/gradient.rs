use rayon::prelude::*;

use koricon_core::{BrandPalette, Canvas};

/// Render the diagonal brand gradient.
///
/// The interpolation parameter runs from the top-left corner (pure
/// `primary`) to the bottom-right corner (pure `secondary`):
/// `t = (x + y) / (2·(size − 1))`. Every pixel comes out fully opaque.
///
/// A 1×1 canvas has a degenerate denominator and renders solid `primary`.
pub fn render_gradient(size: u32, palette: &BrandPalette) -> crate::Result<Canvas> {
    let mut canvas = Canvas::new(size)?;
    let denom = 2 * size.saturating_sub(1) as usize;
    let stride = size as usize * 4;

    canvas
        .pixels
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let t = if denom == 0 {
                    0.0
                } else {
                    (x + y) as f64 / denom as f64
                };
                let c = palette.primary.lerp(palette.secondary, t);
                px[0] = c.r;
                px[1] = c.g;
                px[2] = c.b;
                px[3] = 255;
            }
        });

    Ok(canvas)
}
