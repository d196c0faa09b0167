use rand::Rng;
use rand::seq::SliceRandom;

use crate::font::FontId;
use crate::profile::DifficultyTier;

/// One concrete draw from a difficulty profile, consumed by the glyph
/// renderer. Created once per generated image.
#[derive(Clone, Copy, Debug)]
pub struct SampledParams {
    pub ch: char,
    /// Grayscale triple: the glyph path is monochrome by design, so a single
    /// draw fills all three channels. Shapes use independent per-channel
    /// draws instead (see `shape::random_rgb`).
    pub color: [u8; 3],
    pub fill_ratio: f64,
    pub shift_x: f64,
    pub shift_y: f64,
    pub angle_deg: f64,
    pub font: FontId,
}

/// Draw concrete parameters from a tier's profile. Never fails: every field
/// is either fixed or a well-formed half-open range.
pub fn sample<R: Rng + ?Sized>(tier: DifficultyTier, rng: &mut R) -> SampledParams {
    let profile = tier.profile();

    // Profile alphabets are ASCII, so byte choice is character choice.
    let ch = profile
        .alphabet
        .as_bytes()
        .choose(rng)
        .copied()
        .unwrap_or(b'A') as char;

    let gray = profile.color.sample(rng);
    let font = profile.fonts.choose(rng).copied().unwrap_or(FontId::Plain);

    SampledParams {
        ch,
        color: [gray; 3],
        fill_ratio: profile.fill_ratio.sample(rng),
        shift_x: profile.center_shift.sample(rng),
        shift_y: profile.center_shift.sample(rng),
        angle_deg: profile.angle_deg.sample(rng),
        font,
    }
}
