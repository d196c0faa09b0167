use rand::SeedableRng;
use rand::rngs::StdRng;
use synthset::{DifficultyTier, DrawOutcome, FontLibrary, generate_letters, sample, render_glyph};

#[test]
fn easy_tier_batch_of_100_at_32x32() {
    let fonts = FontLibrary::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(0xEA5E);

    let batch = generate_letters(100, DifficultyTier::Easy, 32, 32, &fonts, &mut rng);
    assert_eq!(batch.len(), 100);

    for g in &batch {
        assert_eq!(g.canvas.dimensions(), (32, 32));
        assert!(g.label.is_ascii_uppercase());
        assert_eq!(g.outcome, DrawOutcome::Drawn);
        // Fixed angle 0 and fill 0.8 on the easy tier: something must land
        // on the canvas every time.
        assert!(g.canvas.pixels().any(|p| p.0[0] > 0));
    }
}

#[test]
fn every_tier_produces_the_requested_dimensions() {
    let fonts = FontLibrary::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(0xD1F);

    for tier in DifficultyTier::ALL {
        for g in generate_letters(25, tier, 48, 64, &fonts, &mut rng) {
            assert_eq!(g.canvas.dimensions(), (48, 64));
            assert!(tier.profile().alphabet.contains(g.label));
        }
    }
}

#[test]
fn unrotated_glyphs_respect_the_fill_ratio_across_tiers() {
    let fonts = FontLibrary::embedded().unwrap();
    let mut rng = StdRng::seed_from_u64(0xF177);
    let (w, h) = (96u32, 72u32);

    for tier in [DifficultyTier::Hard, DifficultyTier::Insane] {
        for _ in 0..100 {
            let mut params = sample(tier, &mut rng);
            params.angle_deg = 0.0; // rotation would smear the box
            let g = render_glyph(w, h, &params, &fonts);
            if g.outcome.is_skipped() {
                continue;
            }

            let (mut min_x, mut min_y, mut max_x, mut max_y) = (u32::MAX, u32::MAX, 0u32, 0u32);
            for (x, y, p) in g.canvas.enumerate_pixels() {
                if p.0[0] > 0 {
                    min_x = min_x.min(x);
                    min_y = min_y.min(y);
                    max_x = max_x.max(x);
                    max_y = max_y.max(y);
                }
            }
            if max_x < min_x {
                continue; // nothing visible (e.g. near-zero fill ratio)
            }
            let bw = (max_x - min_x + 1) as f64;
            let bh = (max_y - min_y + 1) as f64;
            assert!(
                bw <= params.fill_ratio * f64::from(w) + 2.5,
                "label {:?}: box width {bw} exceeds fill {} of {w}",
                g.label,
                params.fill_ratio,
            );
            assert!(
                bh <= params.fill_ratio * f64::from(h) + 2.5,
                "label {:?}: box height {bh} exceeds fill {} of {h}",
                g.label,
                params.fill_ratio,
            );
        }
    }
}
