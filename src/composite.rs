use image::{DynamicImage, RgbImage};

/// Blend `overlay` onto `background` at integer offset `(x, y)` and return
/// the result; the background is never mutated.
///
/// The overlay is clipped to the visible region on all four edges, so
/// negative offsets slide it off the top-left the same way large offsets
/// slide it off the bottom-right; a fully off-canvas overlay returns the
/// background unchanged. Overlays without an alpha channel composite as
/// fully opaque. Per pixel: `out = (1 - a) * background + a * overlay_rgb`
/// with `a` the overlay alpha normalized to `[0, 1]`.
pub fn composite(background: &RgbImage, overlay: &DynamicImage, x: i64, y: i64) -> RgbImage {
    let mut out = background.clone();
    let (bw, bh) = (i64::from(background.width()), i64::from(background.height()));
    if x >= bw || y >= bh {
        return out;
    }

    // Synthesizes an opaque alpha channel for RGB overlays.
    let overlay = overlay.to_rgba8();
    let (ow, oh) = (i64::from(overlay.width()), i64::from(overlay.height()));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + ow).min(bw);
    let y1 = (y + oh).min(bh);
    if x1 <= x0 || y1 <= y0 {
        return out;
    }

    for py in y0..y1 {
        for px in x0..x1 {
            let src = overlay.get_pixel((px - x) as u32, (py - y) as u32);
            let alpha = f32::from(src.0[3]) / 255.0;
            if alpha <= 0.0 {
                continue;
            }
            let dst = out.get_pixel_mut(px as u32, py as u32);
            for c in 0..3 {
                let blended = (1.0 - alpha) * f32::from(dst.0[c]) + alpha * f32::from(src.0[c]);
                dst.0[c] = blended.round().clamp(0.0, 255.0) as u8;
            }
        }
    }

    out
}
