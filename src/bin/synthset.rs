use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use image::{Rgb, RgbImage};
use rand::SeedableRng;
use rand::rngs::StdRng;
use synthset::{
    DifficultyTier, FontLibrary, MotionKind, ShapeKind, composite, generate_letters, motion_path,
    render_shape,
};

#[derive(Parser, Debug)]
#[command(name = "synthset", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Seed for deterministic output; random if omitted.
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate labeled single-glyph images.
    Letters(LettersArgs),
    /// Generate labeled geometric-shape images, one directory per shape.
    Shapes(ShapesArgs),
    /// Composite an overlay along a motion path into numbered frames.
    Animate(AnimateArgs),
}

#[derive(Parser, Debug)]
struct LettersArgs {
    /// Number of images to generate.
    #[arg(short, default_value_t = 100)]
    n: usize,

    /// Difficulty tier controlling the sampling ranges.
    #[arg(long, value_enum, default_value_t = TierChoice::Easy)]
    tier: TierChoice,

    /// Canvas width in pixels (clamped up to 32).
    #[arg(long, default_value_t = 32)]
    width: u32,

    /// Canvas height in pixels (clamped up to 32).
    #[arg(long, default_value_t = 32)]
    height: u32,

    /// Output directory; recreated from scratch.
    #[arg(long, default_value = "tmp")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ShapesArgs {
    /// Shapes to generate.
    #[arg(long, value_enum, required = true, num_args = 1..)]
    shapes: Vec<ShapeChoice>,

    /// Number of images per shape.
    #[arg(short, default_value_t = 100)]
    n: usize,

    /// Canvas width in pixels (clamped up to 20).
    #[arg(long, default_value_t = 256)]
    width: u32,

    /// Canvas height in pixels (clamped up to 20).
    #[arg(long, default_value_t = 256)]
    height: u32,

    /// Output directory; recreated from scratch.
    #[arg(long, default_value = "tmp")]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct AnimateArgs {
    /// Overlay image (PNG with optional alpha channel).
    #[arg(long)]
    overlay: PathBuf,

    /// Motion pattern for the overlay.
    #[arg(long, value_enum, default_value_t = MotionChoice::Diag)]
    motion: MotionChoice,

    /// Background width in pixels.
    #[arg(long, default_value_t = 1920)]
    width: u32,

    /// Background height in pixels.
    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Per-frame step magnitude in pixels.
    #[arg(long, default_value_t = 10.0)]
    step: f64,

    /// Output directory for the frame sequence; recreated from scratch.
    #[arg(long, default_value = "frames")]
    out: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TierChoice {
    Easy,
    Medium,
    Hard,
    Insane,
}

impl From<TierChoice> for DifficultyTier {
    fn from(c: TierChoice) -> Self {
        match c {
            TierChoice::Easy => Self::Easy,
            TierChoice::Medium => Self::Medium,
            TierChoice::Hard => Self::Hard,
            TierChoice::Insane => Self::Insane,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ShapeChoice {
    Circle,
    Square,
    Rectangle,
    Triangle,
    Pentagon,
    Hexagon,
}

impl From<ShapeChoice> for ShapeKind {
    fn from(c: ShapeChoice) -> Self {
        match c {
            ShapeChoice::Circle => Self::Circle,
            ShapeChoice::Square => Self::Square,
            ShapeChoice::Rectangle => Self::Rectangle,
            ShapeChoice::Triangle => Self::Triangle,
            ShapeChoice::Pentagon => Self::Pentagon,
            ShapeChoice::Hexagon => Self::Hexagon,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum MotionChoice {
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

impl From<MotionChoice> for MotionKind {
    fn from(c: MotionChoice) -> Self {
        match c {
            MotionChoice::Up => Self::Up,
            MotionChoice::Down => Self::Down,
            MotionChoice::Rl => Self::Rl,
            MotionChoice::Lr => Self::Lr,
            MotionChoice::Diag => Self::Diag,
            MotionChoice::Arcanoid => Self::Arcanoid,
            MotionChoice::ArcanoidRandomSpeed => Self::ArcanoidRandomSpeed,
            MotionChoice::Sinus => Self::Sinus,
            MotionChoice::GoStayGo => Self::GoStayGo,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    match cli.cmd {
        Command::Letters(args) => cmd_letters(args, &mut rng),
        Command::Shapes(args) => cmd_shapes(args, &mut rng),
        Command::Animate(args) => cmd_animate(args, &mut rng),
    }
}

/// Delete and recreate `dir`, refusing to touch a plain file.
fn recreate_dir(dir: &Path) -> anyhow::Result<()> {
    if dir.is_file() {
        anyhow::bail!("output path '{}' is a file", dir.display());
    }
    if dir.is_dir() {
        std::fs::remove_dir_all(dir)
            .with_context(|| format!("delete output dir '{}'", dir.display()))?;
    }
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create output dir '{}'", dir.display()))?;
    Ok(())
}

fn cmd_letters(args: LettersArgs, rng: &mut StdRng) -> anyhow::Result<()> {
    recreate_dir(&args.out)?;
    let fonts = FontLibrary::embedded()?;

    let batch = generate_letters(
        args.n,
        args.tier.into(),
        args.width,
        args.height,
        &fonts,
        rng,
    );

    let pad = args.n.to_string().len() + 1;
    for (i, g) in batch.iter().enumerate() {
        let name = format!("letter_{:0pad$}_{}.png", i + 1, g.label);
        let path = args.out.join(name);
        g.canvas
            .save(&path)
            .with_context(|| format!("write '{}'", path.display()))?;
    }

    eprintln!("{} images saved to {}", args.n, args.out.display());
    Ok(())
}

fn cmd_shapes(args: ShapesArgs, rng: &mut StdRng) -> anyhow::Result<()> {
    recreate_dir(&args.out)?;

    let mut kinds: Vec<ShapeKind> = args.shapes.iter().map(|&c| c.into()).collect();
    kinds.dedup();

    for kind in kinds {
        let shape_dir = args.out.join(kind.name());
        std::fs::create_dir_all(&shape_dir)
            .with_context(|| format!("create shape dir '{}'", shape_dir.display()))?;

        let pad = args.n.to_string().len() + 1;
        for i in 0..args.n {
            let img = render_shape(kind, args.width, args.height, rng);
            let name = format!("{}_{:0pad$}.png", kind.name(), i + 1);
            let path = shape_dir.join(name);
            img.save(&path)
                .with_context(|| format!("write '{}'", path.display()))?;
        }
        eprintln!("{} images saved: {}", kind.name(), shape_dir.display());
    }

    Ok(())
}

fn cmd_animate(args: AnimateArgs, rng: &mut StdRng) -> anyhow::Result<()> {
    let overlay = image::open(&args.overlay)
        .with_context(|| format!("open overlay '{}'", args.overlay.display()))?;
    recreate_dir(&args.out)?;

    let background = RgbImage::from_pixel(args.width, args.height, Rgb([127, 127, 127]));

    let mut frames = 0usize;
    for (i, (x, y)) in motion_path(args.motion.into(), args.width, args.height, args.step, rng)
        .enumerate()
    {
        let frame = composite(&background, &overlay, x as i64, y as i64);
        let path = args.out.join(format!("frame_{:05}.png", i));
        frame
            .save(&path)
            .with_context(|| format!("write '{}'", path.display()))?;
        frames += 1;
    }

    eprintln!("{} frames saved to {}", frames, args.out.display());
    Ok(())
}
