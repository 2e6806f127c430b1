use image::imageops::FilterType;
use image::RgbaImage;

use koricon_core::{Canvas, CoreError};

/// Downsample the canvas to `size`×`size` with a Lanczos filter.
///
/// The master canvas is rendered once at full resolution and every smaller
/// export is produced here; the high-quality filter keeps the mark crisp at
/// the 16–48 px sizes where box filtering would alias.
pub fn resample(canvas: &Canvas, size: u32) -> crate::Result<Canvas> {
    if size == 0 {
        return Err(CoreError::InvalidCanvasSize(size).into());
    }
    if size == canvas.size {
        return Ok(canvas.clone());
    }

    let img = RgbaImage::from_raw(canvas.size, canvas.size, canvas.pixels.clone())
        .expect("canvas buffer length matches its dimensions");
    let resized = image::imageops::resize(&img, size, size, FilterType::Lanczos3);

    Ok(Canvas {
        size,
        pixels: resized.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::render_gradient;
    use koricon_core::BrandPalette;

    #[test]
    fn resample_produces_requested_size() {
        let canvas = render_gradient(64, &BrandPalette::KORPROXY).unwrap();
        let small = resample(&canvas, 16).unwrap();
        assert_eq!(small.size, 16);
        assert_eq!(small.pixels.len(), 16 * 16 * 4);
    }

    #[test]
    fn same_size_is_identity() {
        let canvas = render_gradient(32, &BrandPalette::KORPROXY).unwrap();
        let same = resample(&canvas, 32).unwrap();
        assert_eq!(same.pixels, canvas.pixels);
    }

    #[test]
    fn resample_preserves_gradient_direction() {
        let canvas = render_gradient(256, &BrandPalette::KORPROXY).unwrap();
        let small = resample(&canvas, 16).unwrap();
        // Top-left stays closer to primary, bottom-right closer to
        // secondary; the g channel falls along the diagonal.
        let tl = small.pixel(0, 0);
        let br = small.pixel(15, 15);
        assert!(tl[0] < br[0]);
        assert!(tl[1] > br[1]);
    }

    #[test]
    fn zero_size_is_rejected() {
        let canvas = render_gradient(8, &BrandPalette::KORPROXY).unwrap();
        assert!(resample(&canvas, 0).is_err());
    }

    #[test]
    fn resample_is_deterministic() {
        let canvas = render_gradient(128, &BrandPalette::KORPROXY).unwrap();
        let a = resample(&canvas, 48).unwrap();
        let b = resample(&canvas, 48).unwrap();
        assert_eq!(a.pixels, b.pixels);
    }
}
