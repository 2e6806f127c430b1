use rayon::prelude::*;
use tracing::debug;

use koricon_core::{blend_over, Canvas, MarkGeometry, MarkStyle, Rgba, Segment};

/// Composite the "K" mark onto the canvas, in place.
///
/// Two passes: the shadow copies of the three strokes first, then the fill
/// strokes on top. The shadow offset keeps the mark legible at the small
/// icon sizes produced by downsampling.
pub fn draw_mark(canvas: &mut Canvas, geometry: &MarkGeometry, style: &MarkStyle) {
    stamp_strokes(canvas, &geometry.shadow_strokes(), geometry.radius(), style.shadow);
    stamp_strokes(canvas, &geometry.strokes(), geometry.radius(), style.fill);
    debug!(size = canvas.size, "Composited mark");
}

/// Blend `color` onto every pixel whose center lies within `radius` of any
/// of the segments.
///
/// Coverage is resolved per pixel before blending, so pixels where strokes
/// overlap are blended exactly once per pass.
fn stamp_strokes(canvas: &mut Canvas, segments: &[Segment], radius: f64, color: Rgba) {
    let stride = canvas.size as usize * 4;
    let radius_sq = radius * radius;

    canvas
        .pixels
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(|(y, row)| {
            let cy = y as f64 + 0.5;
            for (x, px) in row.chunks_exact_mut(4).enumerate() {
                let cx = x as f64 + 0.5;
                if segments.iter().any(|s| s.distance_sq(cx, cy) <= radius_sq) {
                    blend_over(px, color);
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gradient::render_gradient;
    use koricon_core::BrandPalette;

    const SIZE: u32 = 128;

    fn composited() -> (Canvas, Canvas, MarkGeometry) {
        let base = render_gradient(SIZE, &BrandPalette::KORPROXY).unwrap();
        let mut canvas = base.clone();
        let geometry = MarkGeometry::for_size(SIZE);
        draw_mark(&mut canvas, &geometry, &MarkStyle::default());
        (base, canvas, geometry)
    }

    #[test]
    fn stroke_centers_are_near_white() {
        let (_, canvas, g) = composited();
        // Middle of the upright, well away from the arms.
        let px = canvas.pixel(g.left as u32, (g.top as u32 + g.mid as u32) / 2);
        assert!(px[0] > 230 && px[1] > 230 && px[2] > 230);
        assert_eq!(px[3], 255);
    }

    #[test]
    fn corners_are_untouched() {
        let (base, canvas, _) = composited();
        for (x, y) in [(0, 0), (SIZE - 1, 0), (0, SIZE - 1), (SIZE - 1, SIZE - 1)] {
            assert_eq!(canvas.pixel(x, y), base.pixel(x, y));
        }
    }

    #[test]
    fn coverage_stays_inside_mark_bounds() {
        let (base, canvas, g) = composited();
        // Everything the mark touched (shadow included) must lie within the
        // geometry extents plus the stroke radius.
        let r = g.radius();
        let min_x = (g.left - r).floor() as u32;
        let max_x = (g.right + g.shadow_offset + r).ceil() as u32;
        let min_y = (g.top - r).floor() as u32;
        let max_y = (g.bottom + g.shadow_offset + r).ceil() as u32;
        for y in 0..SIZE {
            for x in 0..SIZE {
                if canvas.pixel(x, y) != base.pixel(x, y) {
                    assert!(x >= min_x && x <= max_x, "x {x} outside [{min_x}, {max_x}]");
                    assert!(y >= min_y && y <= max_y, "y {y} outside [{min_y}, {max_y}]");
                }
            }
        }
    }

    #[test]
    fn shadow_is_visible_outside_fill() {
        let (base, canvas, _) = composited();
        // The offset leaves a sliver along the lower-right edge of the mark
        // that only the shadow pass touches; those pixels end up darker
        // than the gradient underneath.
        let mut darkened = 0usize;
        for y in 0..SIZE {
            for x in 0..SIZE {
                let before = base.pixel(x, y);
                let after = canvas.pixel(x, y);
                if after[0] < before[0] && after[1] < before[1] && after[2] < before[2] {
                    darkened += 1;
                }
            }
        }
        assert!(darkened > 0, "shadow pass left no visible trace");
    }

    #[test]
    fn canvas_stays_fully_opaque() {
        let (_, canvas, _) = composited();
        assert!(canvas.pixels.chunks_exact(4).all(|px| px[3] == 255));
    }

    #[test]
    fn deterministic_across_runs() {
        let (_, a, _) = composited();
        let (_, b, _) = composited();
        assert_eq!(a.pixels, b.pixels);
    }
}
