use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed iteration count for the unbounded patterns.
const BOUNCE_STEPS: usize = 1000;

/// Side of the square leading-edge box the bouncing patterns reflect on,
/// matching the overlay footprint they were tuned for.
const OVERLAY_BOX: f64 = 100.0;

/// Frames the `GoStayGo` pattern holds at the canvas half-point.
const HOLD_FRAMES: usize = 120;

/// Named motion pattern for an overlay drifting across a canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MotionKind {
    Up,
    Down,
    Rl,
    Lr,
    Diag,
    Arcanoid,
    ArcanoidRandomSpeed,
    Sinus,
    GoStayGo,
}

impl MotionKind {
    pub const ALL: [MotionKind; 9] = [
        Self::Up,
        Self::Down,
        Self::Rl,
        Self::Lr,
        Self::Diag,
        Self::Arcanoid,
        Self::ArcanoidRandomSpeed,
        Self::Sinus,
        Self::GoStayGo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Rl => "rl",
            Self::Lr => "lr",
            Self::Diag => "diag",
            Self::Arcanoid => "arcanoid",
            Self::ArcanoidRandomSpeed => "arcanoid-random-speed",
            Self::Sinus => "sinus",
            Self::GoStayGo => "go-stay-go",
        }
    }
}

/// Lazy sequence of `(x, y)` overlay offsets for one motion pattern.
///
/// Pure aside from the random draws taken from `rng` up front (start
/// positions, speed splits); the returned iterator owns all of its state, so
/// the caller can drive it to completion or drop it early. Deterministic
/// given a seeded `rng`.
pub fn motion_path<R: Rng + ?Sized>(
    kind: MotionKind,
    width: u32,
    height: u32,
    step: f64,
    rng: &mut R,
) -> Box<dyn Iterator<Item = (f64, f64)>> {
    let w = f64::from(width);
    let h = f64::from(height);
    match kind {
        MotionKind::Down => Box::new(arange(0.0, h, step).map(move |y| (w / 2.0, y))),
        MotionKind::Up => Box::new(arange(h, 0.0, -step).map(move |y| (w / 2.0, y))),
        MotionKind::Rl => Box::new(arange(0.0, w, step).map(move |x| (x, h / 2.0))),
        MotionKind::Lr => Box::new(arange(w, 0.0, -step).map(move |x| (x, h / 2.0))),
        MotionKind::Diag => {
            // Per-axis steps scaled so the Euclidean step length equals `step`.
            let ratio = step / w.hypot(h);
            Box::new(arange(0.0, w, w * ratio).zip(arange(0.0, h, h * ratio)))
        }
        MotionKind::Arcanoid => {
            let start = bounce_start(w, h, rng);
            let split = rng.r#gen();
            Box::new(bounce(w, h, step, start, split, None))
        }
        MotionKind::ArcanoidRandomSpeed => {
            let start = bounce_start(w, h, rng);
            let split = rng.r#gen();
            let local = StdRng::seed_from_u64(rng.r#gen());
            Box::new(bounce(w, h, step, start, split, Some(local)))
        }
        MotionKind::Sinus => Box::new(sinus(w, h, step)),
        MotionKind::GoStayGo => Box::new(go_stay_go(w, h, step)),
    }
}

/// Half-open float range `[start, stop)` walked in `step` increments,
/// including for negative steps.
fn arange(start: f64, stop: f64, step: f64) -> impl Iterator<Item = f64> {
    let n = if step == 0.0 {
        0
    } else {
        ((stop - start) / step).ceil().max(0.0) as u64
    };
    (0..n).map(move |i| start + i as f64 * step)
}

fn bounce_start<R: Rng + ?Sized>(w: f64, h: f64, rng: &mut R) -> (f64, f64) {
    let x = rng.gen_range(0..w.max(1.0) as u32);
    let y = rng.gen_range(0..h.max(1.0) as u32);
    (f64::from(x), f64::from(y))
}

/// Bouncing-ball traversal. The leading edge of a fixed 100x100 box
/// reflects off the canvas bounds; `speed_jitter` optionally rescales both
/// speed components with 10% probability per step.
fn bounce(
    w: f64,
    h: f64,
    step: f64,
    start: (f64, f64),
    split: f64,
    mut speed_jitter: Option<StdRng>,
) -> impl Iterator<Item = (f64, f64)> {
    let (mut x, mut y) = start;
    let mut y_speed = step * split;
    let mut x_speed = step * (1.0 - split).sqrt();

    let x_max = (w - OVERLAY_BOX).max(0.0);
    let y_max = (h - OVERLAY_BOX).max(0.0);

    let mut left = BOUNCE_STEPS;
    std::iter::from_fn(move || {
        if left == 0 {
            return None;
        }
        left -= 1;
        let out = (x, y);

        x += x_speed;
        y += y_speed;
        if x + OVERLAY_BOX >= w || x <= 0.0 {
            x = x.clamp(0.0, x_max);
            x_speed = -x_speed;
        }
        if y + OVERLAY_BOX >= h || y <= 0.0 {
            y = y.clamp(0.0, y_max);
            y_speed = -y_speed;
        }
        if let Some(jitter) = speed_jitter.as_mut() {
            if jitter.r#gen::<f64>() < 0.1 {
                let scale = jitter.gen_range(0.8..1.2);
                x_speed *= scale;
                y_speed *= scale;
            }
        }

        Some(out)
    })
}

/// Horizontal sweep with a sinusoidal vertical track; the sweep reverses
/// when the leading edge reaches the right bound.
fn sinus(w: f64, h: f64, step: f64) -> impl Iterator<Item = (f64, f64)> {
    let mid = (h / 2.0).floor();
    let x_max = (w - OVERLAY_BOX).max(0.0);
    let mut x = 0.0f64;
    let mut y = mid;
    let mut step = step;
    let mut left = BOUNCE_STEPS;
    std::iter::from_fn(move || {
        if left == 0 {
            return None;
        }
        left -= 1;
        let out = (x, y);

        y = mid + 170.0 * (x / 150.0).sin();
        x += step;
        let clipped = x.clamp(0.0, x_max);
        if clipped != x {
            x = clipped;
            step = -step;
        }

        Some(out)
    })
}

/// Diagonal approach to the canvas half-point, a 120-frame hold there, then
/// a vertical sweep down to the bottom edge.
fn go_stay_go(w: f64, h: f64, step: f64) -> Box<dyn Iterator<Item = (f64, f64)>> {
    let ratio = step / w.hypot(h);
    let step_x = w * ratio;
    let step_y = h * ratio;
    if step_x <= 0.0 || step_y <= 0.0 {
        return Box::new(std::iter::empty());
    }

    let half_w = (w / 2.0).floor();
    let half_h = (h / 2.0).floor();
    let n = u64::min(
        (half_w / step_x).ceil() as u64,
        (half_h / step_y).ceil() as u64,
    );
    if n == 0 {
        return Box::new(std::iter::empty());
    }

    let hold = ((n - 1) as f64 * step_x, (n - 1) as f64 * step_y);
    let approach = (0..n - 1).map(move |i| (i as f64 * step_x, i as f64 * step_y));
    let stay = std::iter::repeat(hold).take(HOLD_FRAMES);
    let depart = arange(half_h, h, step).map(move |y| (hold.0, y));
    Box::new(approach.chain(stay).chain(depart))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(kind: MotionKind, w: u32, h: u32, step: f64, seed: u64) -> Vec<(f64, f64)> {
        let mut rng = StdRng::seed_from_u64(seed);
        motion_path(kind, w, h, step, &mut rng).collect()
    }

    #[test]
    fn vertical_sweeps_run_the_canvas_height() {
        let down = collect(MotionKind::Down, 1920, 1080, 10.0, 0);
        assert_eq!(down.len(), 108);
        assert!(down.iter().all(|&(x, _)| x == 960.0));
        assert_eq!(down[0].1, 0.0);

        let up = collect(MotionKind::Up, 1920, 1080, 10.0, 0);
        assert_eq!(up.len(), 108);
        assert_eq!(up[0].1, 1080.0);
        assert!(up.windows(2).all(|p| p[1].1 < p[0].1));
    }

    #[test]
    fn horizontal_sweeps_run_the_canvas_width() {
        let rl = collect(MotionKind::Rl, 1920, 1080, 10.0, 0);
        assert_eq!(rl.len(), 192);
        assert!(rl.iter().all(|&(_, y)| y == 540.0));
        assert!(rl.windows(2).all(|p| p[1].0 > p[0].0));
    }

    #[test]
    fn diag_is_strictly_increasing_and_in_bounds() {
        let pts = collect(MotionKind::Diag, 1920, 1080, 10.0, 0);
        assert!(!pts.is_empty());
        for pair in pts.windows(2) {
            assert!(pair[1].0 > pair[0].0);
            assert!(pair[1].1 > pair[0].1);
        }
        let last = pts[pts.len() - 1];
        assert!(last.0 < 1920.0);
        assert!(last.1 < 1080.0);
    }

    #[test]
    fn arcanoid_runs_1000_steps_inside_the_canvas() {
        for seed in 0..20 {
            let pts = collect(MotionKind::Arcanoid, 1920, 1080, 10.0, seed);
            assert_eq!(pts.len(), 1000);
            for &(x, y) in &pts[1..] {
                assert!((0.0..1920.0).contains(&x), "x out of bounds: {x}");
                assert!((0.0..1080.0).contains(&y), "y out of bounds: {y}");
            }
        }
    }

    #[test]
    fn arcanoid_is_deterministic_per_seed() {
        let a = collect(MotionKind::ArcanoidRandomSpeed, 1920, 1080, 10.0, 42);
        let b = collect(MotionKind::ArcanoidRandomSpeed, 1920, 1080, 10.0, 42);
        assert_eq!(a.len(), 1000);
        assert_eq!(a, b);
    }

    #[test]
    fn sinus_yields_1000_clamped_steps() {
        let pts = collect(MotionKind::Sinus, 1920, 1080, 10.0, 0);
        assert_eq!(pts.len(), 1000);
        assert_eq!(pts[0], (0.0, 540.0));
        for &(x, y) in &pts {
            assert!((0.0..=1820.0).contains(&x));
            assert!((540.0 - 170.0..=540.0 + 170.0).contains(&y));
        }
        // The sweep must bounce off the right bound at least once.
        assert!(pts.iter().any(|&(x, _)| x == 1820.0));
    }

    #[test]
    fn go_stay_go_holds_exactly_120_frames() {
        let pts = collect(MotionKind::GoStayGo, 1920, 1080, 10.0, 0);

        let mut best_run = 0usize;
        let mut best_point = (0.0, 0.0);
        let mut run = 1usize;
        for i in 1..pts.len() {
            if pts[i] == pts[i - 1] {
                run += 1;
            } else {
                if run > best_run {
                    best_run = run;
                    best_point = pts[i - 1];
                }
                run = 1;
            }
        }
        if run > best_run {
            best_run = run;
            best_point = pts[pts.len() - 1];
        }

        assert_eq!(best_run, 120);
        // The hold sits at the end of the diagonal approach to the midpoint.
        assert!(best_point.0 <= 960.0 && best_point.0 > 900.0);
        assert!(best_point.1 <= 540.0 && best_point.1 > 500.0);
    }

    #[test]
    fn go_stay_go_departs_vertically_from_the_held_x() {
        let pts = collect(MotionKind::GoStayGo, 1920, 1080, 10.0, 0);
        let hold = pts
            .windows(2)
            .position(|p| p[0] == p[1])
            .expect("hold phase missing");
        let hold_x = pts[hold].0;
        let tail: Vec<_> = pts
            .iter()
            .skip(hold)
            .skip_while(|p| **p == pts[hold])
            .collect();
        assert!(!tail.is_empty());
        assert!(tail.iter().all(|p| p.0 == hold_x));
        assert_eq!(tail[0].1, 540.0);
        assert!(tail[tail.len() - 1].1 < 1080.0);
    }
}
