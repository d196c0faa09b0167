use ab_glyph::{Font, FontRef, PxScale, ScaleFont};
use image::{GrayImage, Luma};
use imageproc::geometric_transformations::{Interpolation, rotate_about_center};

use crate::font::FontLibrary;
use crate::profile::DifficultyTier;
use crate::sample::{SampledParams, sample};

/// Canvases smaller than this are clamped up before drawing.
pub const MIN_GLYPH_CANVAS: u32 = 32;

/// Reference scale used to measure a glyph's unit bounding box. Outlines
/// scale linearly, so any value works; a large one keeps the ratios stable.
const REF_SCALE: f32 = 128.0;

/// Whether the glyph actually landed on the canvas.
///
/// A skip is not an error: the canvas is returned as-is (all black) and the
/// batch keeps going. Callers that care can branch on it instead of
/// grepping logs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DrawOutcome {
    Drawn,
    Skipped(String),
}

impl DrawOutcome {
    pub fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped(_))
    }
}

/// One rendered glyph image together with its label.
pub struct GlyphRender {
    pub canvas: GrayImage,
    pub label: char,
    pub outcome: DrawOutcome,
}

/// Draw one character onto a fresh single-channel canvas, then rotate the
/// whole canvas about its center.
///
/// The glyph is scaled so its bounding box fits within `fill_ratio` of both
/// canvas dimensions (binding constraint, min of the two axes), anchored by
/// the normalized shifts: `shift_x` measures from the left edge, `shift_y`
/// as a reduction from the full height, so the origin is the bottom-left of
/// the glyph box. Rotation keeps the canvas size; exposed regions stay
/// black. Never panics and never returns an error.
pub fn render_glyph(
    width: u32,
    height: u32,
    params: &SampledParams,
    fonts: &FontLibrary,
) -> GlyphRender {
    let w = width.max(MIN_GLYPH_CANVAS);
    let h = height.max(MIN_GLYPH_CANVAS);
    let mut canvas = GrayImage::new(w, h);

    let outcome = draw_glyph(&mut canvas, params, fonts.face(params.font));
    if let DrawOutcome::Skipped(reason) = &outcome {
        tracing::warn!(ch = %params.ch, font = params.font.name(), %reason, "glyph draw skipped");
    }

    let canvas = if params.angle_deg != 0.0 {
        // Positive angles turn counter-clockwise, matching the sampler's
        // degree convention; imageproc rotates clockwise for positive theta.
        rotate_about_center(
            &canvas,
            (-params.angle_deg).to_radians() as f32,
            Interpolation::Bilinear,
            Luma([0u8]),
        )
    } else {
        canvas
    };

    GlyphRender {
        canvas,
        label: params.ch,
        outcome,
    }
}

/// Sample and render `n` glyph images at the given tier.
#[tracing::instrument(skip(fonts, rng))]
pub fn generate_letters<R: rand::Rng + ?Sized>(
    n: usize,
    tier: DifficultyTier,
    width: u32,
    height: u32,
    fonts: &FontLibrary,
    rng: &mut R,
) -> Vec<GlyphRender> {
    (0..n)
        .map(|_| {
            let params = sample(tier, rng);
            render_glyph(width, height, &params, fonts)
        })
        .collect()
}

fn draw_glyph(canvas: &mut GrayImage, params: &SampledParams, font: &FontRef<'_>) -> DrawOutcome {
    let (w, h) = canvas.dimensions();

    // Unit bounding box, from a fixed reference scale.
    let Some(unit) = glyph_bounds(font, params.ch, REF_SCALE) else {
        return DrawOutcome::Skipped(format!("character {:?} has no outline", params.ch));
    };
    let unit_w = f64::from(unit.width() / REF_SCALE);
    let unit_h = f64::from(unit.height() / REF_SCALE);
    if unit_w <= 0.0 || unit_h <= 0.0 {
        return DrawOutcome::Skipped(format!("character {:?} has an empty outline", params.ch));
    }

    // Binding constraint: the box must fit fill_ratio of both axes.
    let scale = f64::min(
        params.fill_ratio * f64::from(w) / unit_w,
        params.fill_ratio * f64::from(h) / unit_h,
    );
    if !scale.is_finite() || scale <= 0.0 {
        return DrawOutcome::Skipped(format!("degenerate scale {scale} for {:?}", params.ch));
    }

    // Re-measure at the chosen scale for the actual rendered size.
    let glyph = font
        .as_scaled(PxScale::from(scale as f32))
        .scaled_glyph(params.ch);
    let Some(outlined) = font.outline_glyph(glyph) else {
        return DrawOutcome::Skipped(format!("character {:?} failed to outline", params.ch));
    };
    let bounds = outlined.px_bounds();
    let rendered_w = f64::from(bounds.width());
    let rendered_h = f64::from(bounds.height());

    let origin_x = (params.shift_x * (f64::from(w) - rendered_w)).round() as i64;
    let origin_y = (f64::from(h) - params.shift_y * (f64::from(h) - rendered_h)).round() as i64;
    let top = origin_y - rendered_h.round() as i64;

    let shade = f32::from(params.color[0]);
    outlined.draw(|gx, gy, coverage| {
        let x = origin_x + i64::from(gx);
        let y = top + i64::from(gy);
        if x >= 0 && y >= 0 && (x as u32) < w && (y as u32) < h {
            let px = canvas.get_pixel_mut(x as u32, y as u32);
            let v = (coverage.clamp(0.0, 1.0) * shade).round() as u8;
            px.0[0] = px.0[0].max(v);
        }
    });

    DrawOutcome::Drawn
}

fn glyph_bounds(font: &FontRef<'_>, ch: char, scale: f32) -> Option<ab_glyph::Rect> {
    let glyph = font.as_scaled(PxScale::from(scale)).scaled_glyph(ch);
    font.outline_glyph(glyph).map(|og| og.px_bounds())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn fixed_params(ch: char) -> SampledParams {
        SampledParams {
            ch,
            color: [255, 255, 255],
            fill_ratio: 0.8,
            shift_x: 0.5,
            shift_y: 0.5,
            angle_deg: 0.0,
            font: FontId::Plain,
        }
    }

    #[test]
    fn canvas_is_clamped_to_minimum() {
        let fonts = FontLibrary::embedded().unwrap();
        let out = render_glyph(4, 7, &fixed_params('A'), &fonts);
        assert_eq!(out.canvas.dimensions(), (32, 32));
    }

    #[test]
    fn rotation_preserves_dimensions() {
        let fonts = FontLibrary::embedded().unwrap();
        let mut params = fixed_params('K');
        params.angle_deg = 13.0;
        let out = render_glyph(50, 90, &params, &fonts);
        assert_eq!(out.canvas.dimensions(), (50, 90));
    }

    #[test]
    fn whitespace_character_is_skipped_not_fatal() {
        let fonts = FontLibrary::embedded().unwrap();
        let out = render_glyph(32, 32, &fixed_params(' '), &fonts);
        assert!(out.outcome.is_skipped());
        // Canvas keeps whatever was drawn before the failure: nothing.
        assert!(out.canvas.pixels().all(|p| p.0[0] == 0));
    }

    #[test]
    fn drawn_glyph_touches_the_canvas() {
        let fonts = FontLibrary::embedded().unwrap();
        let out = render_glyph(64, 64, &fixed_params('W'), &fonts);
        assert_eq!(out.outcome, DrawOutcome::Drawn);
        assert!(out.canvas.pixels().any(|p| p.0[0] > 0));
    }

    #[test]
    fn unrotated_glyph_respects_fill_ratio() {
        let fonts = FontLibrary::embedded().unwrap();
        for &(w, h) in &[(32u32, 32u32), (64, 48), (100, 200)] {
            let params = fixed_params('M');
            let out = render_glyph(w, h, &params, &fonts);

            let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0u32, 0u32);
            for (x, y, p) in out.canvas.enumerate_pixels() {
                if p.0[0] > 0 {
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
            }
            assert!(max_x >= min_x, "glyph missing on {w}x{h}");
            let bw = (max_x - min_x + 1) as f64;
            let bh = (max_y - min_y + 1) as f64;
            // Small tolerance for pixel-bound rounding.
            assert!(bw <= 0.8 * f64::from(w) + 2.5, "bw {bw} on {w}x{h}");
            assert!(bh <= 0.8 * f64::from(h) + 2.5, "bh {bh} on {w}x{h}");
        }
    }

    #[test]
    fn generate_letters_yields_n_labeled_canvases() {
        let fonts = FontLibrary::embedded().unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let batch = generate_letters(10, DifficultyTier::Medium, 40, 40, &fonts, &mut rng);
        assert_eq!(batch.len(), 10);
        for g in &batch {
            assert_eq!(g.canvas.dimensions(), (40, 40));
            assert!(g.label.is_ascii_uppercase());
        }
    }
}
