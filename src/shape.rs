use std::f64::consts::{FRAC_PI_6, TAU};

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_antialiased_line_segment_mut, draw_filled_circle_mut, draw_filled_rect_mut,
    draw_hollow_circle_mut, draw_hollow_rect_mut, draw_polygon_mut,
};
use imageproc::pixelops::interpolate;
use imageproc::point::Point;
use imageproc::rect::Rect;
use rand::Rng;

/// Canvases smaller than this are clamped up before drawing.
pub const MIN_SHAPE_CANVAS: u32 = 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Circle,
    Square,
    Rectangle,
    Triangle,
    Pentagon,
    Hexagon,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        Self::Circle,
        Self::Square,
        Self::Rectangle,
        Self::Triangle,
        Self::Pentagon,
        Self::Hexagon,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
            Self::Pentagon => "pentagon",
            Self::Hexagon => "hexagon",
        }
    }
}

/// Concrete geometry for one shape, before rasterization.
#[derive(Clone, Debug)]
pub enum ShapeGeometry {
    Circle { center: (i32, i32), radius: i32 },
    Rect { min: (i32, i32), max: (i32, i32) },
    Polygon { points: Vec<(i32, i32)> },
}

/// Three independent uniform channel draws. Full RGB, unlike the glyph
/// path's single-draw grayscale triple.
pub fn random_rgb<R: Rng + ?Sized>(rng: &mut R) -> [u8; 3] {
    [
        rng.gen_range(0..255),
        rng.gen_range(0..255),
        rng.gen_range(0..255),
    ]
}

/// Draw one randomly parameterized shape on a randomly colored background.
///
/// Degenerate low-probability geometry (zero-area rectangles, collapsed
/// polygons) is an accepted output, never an error: a batch must not crash
/// over one bad draw.
pub fn render_shape<R: Rng + ?Sized>(
    kind: ShapeKind,
    width: u32,
    height: u32,
    rng: &mut R,
) -> RgbImage {
    let w = width.max(MIN_SHAPE_CANVAS);
    let h = height.max(MIN_SHAPE_CANVAS);

    let mut canvas = RgbImage::from_pixel(w, h, Rgb(random_rgb(rng)));
    let color = Rgb(random_rgb(rng));
    let fill = rng.gen_bool(0.5);

    let geometry = sample_geometry(kind, w, h, rng);
    draw_geometry(&mut canvas, &geometry, color, fill);
    canvas
}

/// Sample the geometry for `kind` on a `w`×`h` canvas (already clamped).
pub fn sample_geometry<R: Rng + ?Sized>(
    kind: ShapeKind,
    w: u32,
    h: u32,
    rng: &mut R,
) -> ShapeGeometry {
    let (wi, hi) = (w as i32, h as i32);
    let m = wi.min(hi);
    match kind {
        ShapeKind::Circle => {
            let lo = 10i32.min((0.1 * f64::from(m)) as i32);
            let hi_r = (0.4 * f64::from(m)) as i32;
            let radius = rng.gen_range(lo..hi_r);
            // Full circle stays in bounds: each axis in [radius, size - radius).
            let cx = rng.gen_range(radius..wi - radius);
            let cy = rng.gen_range(radius..hi - radius);
            ShapeGeometry::Circle {
                center: (cx, cy),
                radius,
            }
        }
        ShapeKind::Square => {
            let x0 = rng.gen_range(0..(0.95 * f64::from(wi)) as i32);
            let y0 = rng.gen_range(0..(0.95 * f64::from(hi)) as i32);
            let lo = (0.05 * f64::from(m)) as i32;
            let hi_off = 2i32.max((wi - x0).min(hi - y0));
            // A corner near the canvas edge can push lo past hi.
            let lo = lo.min(hi_off - 1);
            let offset = rng.gen_range(lo..hi_off);
            ShapeGeometry::Rect {
                min: (x0, y0),
                max: (x0 + offset, y0 + offset),
            }
        }
        ShapeKind::Rectangle => {
            let x0 = rng.gen_range(0..(0.95 * f64::from(wi)) as i32);
            let y0 = rng.gen_range(0..(0.95 * f64::from(hi)) as i32);
            let x1 = rng.gen_range((f64::from(x0) + 0.05 * f64::from(wi)) as i32..wi);
            let y1 = rng.gen_range((f64::from(y0) + 0.05 * f64::from(hi)) as i32..hi);
            ShapeGeometry::Rect {
                min: (x0, y0),
                max: (x1, y1),
            }
        }
        ShapeKind::Triangle | ShapeKind::Pentagon | ShapeKind::Hexagon => {
            let n = match kind {
                ShapeKind::Triangle => 3,
                ShapeKind::Pentagon => 5,
                _ => 6,
            };
            let lo = 10i32.min((0.1 * f64::from(m)) as i32);
            let hi_r = (0.5 * f64::from(m)) as i32;
            let radius = rng.gen_range(lo..hi_r);
            let cx = rng.gen_range(radius..wi - radius);
            let cy = rng.gen_range(radius..hi - radius);

            let angles = polygon_angles(n, rng);
            let rf = f64::from(radius);
            let points = angles
                .iter()
                .map(|a| {
                    (
                        (f64::from(cx) + rf * a.cos()) as i32,
                        (f64::from(cy) + rf * a.sin()) as i32,
                    )
                })
                .collect();
            ShapeGeometry::Polygon { points }
        }
    }
}

/// Vertex angles for an `n`-gon inscribed in a circle.
///
/// Triangles get three unconstrained uniform angles and may self-intersect.
/// For n >= 5 the angles start evenly spaced from a random base, each
/// jittered within [-pi/6, pi/6), then wrapped into [0, 2*pi) and sorted.
/// The sort is mandatory: unsorted jittered angles produce self-intersecting
/// edge sequences.
pub fn polygon_angles<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<f64> {
    if n == 3 {
        return (0..3).map(|_| rng.gen_range(0.0..TAU)).collect();
    }
    let base = rng.gen_range(0.0..TAU);
    let mut angles: Vec<f64> = (0..n)
        .map(|i| base + i as f64 * TAU / n as f64 + rng.gen_range(-FRAC_PI_6..FRAC_PI_6))
        .map(|a| a.rem_euclid(TAU))
        .collect();
    angles.sort_by(f64::total_cmp);
    angles
}

fn draw_geometry(canvas: &mut RgbImage, geometry: &ShapeGeometry, color: Rgb<u8>, fill: bool) {
    match geometry {
        ShapeGeometry::Circle { center, radius } => {
            if fill {
                draw_filled_circle_mut(canvas, *center, *radius, color);
            } else {
                draw_hollow_circle_mut(canvas, *center, *radius, color);
            }
        }
        ShapeGeometry::Rect { min, max } => {
            let rect = Rect::at(min.0, min.1)
                .of_size((max.0 - min.0).max(1) as u32, (max.1 - min.1).max(1) as u32);
            if fill {
                draw_filled_rect_mut(canvas, rect, color);
            } else {
                draw_hollow_rect_mut(canvas, rect, color);
            }
        }
        ShapeGeometry::Polygon { points } => {
            let mut pts: Vec<Point<i32>> = Vec::with_capacity(points.len());
            for &(x, y) in points {
                let p = Point::new(x, y);
                if pts.last() != Some(&p) {
                    pts.push(p);
                }
            }
            while pts.len() > 1 && pts.first() == pts.last() {
                pts.pop();
            }
            if pts.len() < 3 {
                // Collapsed to a point or segment; accepted as-is.
                return;
            }
            if fill {
                draw_polygon_mut(canvas, &pts, color);
            } else {
                for i in 0..pts.len() {
                    let a = pts[i];
                    let b = pts[(i + 1) % pts.len()];
                    draw_antialiased_line_segment_mut(
                        canvas,
                        (a.x, a.y),
                        (b.x, b.y),
                        color,
                        interpolate,
                    );
                }
            }
        }
    }
}
