use std::str::FromStr;

use rand::Rng;
use rand::distributions::uniform::SampleUniform;

use crate::error::SynthError;
use crate::font::FontId;

/// A profile field: either a fixed value or a half-open interval `[lo, hi)`
/// sampled uniformly.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Param<T> {
    Fixed(T),
    Range(T, T),
}

impl<T> Param<T>
where
    T: Copy + PartialOrd + SampleUniform,
{
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> T {
        match *self {
            Param::Fixed(v) => v,
            Param::Range(lo, hi) => rng.gen_range(lo..hi),
        }
    }

    pub fn contains(&self, v: T) -> bool {
        match *self {
            Param::Fixed(f) => f == v,
            Param::Range(lo, hi) => lo <= v && v < hi,
        }
    }
}

/// Difficulty level controlling how wide the sampling ranges are.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DifficultyTier {
    Easy,
    Medium,
    Hard,
    Insane,
}

impl DifficultyTier {
    pub const ALL: [DifficultyTier; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Insane];

    pub fn profile(self) -> &'static DifficultyProfile {
        match self {
            Self::Easy => &EASY,
            Self::Medium => &MEDIUM,
            Self::Hard => &HARD,
            Self::Insane => &INSANE,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Insane => "insane",
        }
    }
}

impl FromStr for DifficultyTier {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "insane" => Ok(Self::Insane),
            other => Err(SynthError::unknown_tier(other)),
        }
    }
}

/// Sampling ranges for one difficulty tier. Immutable, defined once below.
#[derive(Clone, Debug)]
pub struct DifficultyProfile {
    /// Gray level for the glyph stroke.
    pub color: Param<u8>,
    /// Characters the label is drawn from.
    pub alphabet: &'static str,
    /// Fraction of canvas width/height the glyph bounding box should occupy.
    pub fill_ratio: Param<f64>,
    /// Normalized anchor offset, drawn independently per axis.
    pub center_shift: Param<f64>,
    /// Rotation applied to the whole canvas, in degrees.
    pub angle_deg: Param<f64>,
    /// Candidate faces the font is drawn from.
    pub fonts: &'static [FontId],
}

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPER_LOWER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

static EASY: DifficultyProfile = DifficultyProfile {
    color: Param::Fixed(255),
    alphabet: UPPER,
    fill_ratio: Param::Fixed(0.8),
    center_shift: Param::Fixed(0.5),
    angle_deg: Param::Fixed(0.0),
    fonts: &[FontId::Plain],
};

static MEDIUM: DifficultyProfile = DifficultyProfile {
    color: Param::Range(100, 255),
    alphabet: UPPER,
    fill_ratio: Param::Range(0.4, 0.6),
    center_shift: Param::Range(0.4, 0.6),
    angle_deg: Param::Range(-10.0, 10.0),
    fonts: &[FontId::Duplex, FontId::Plain, FontId::Complex],
};

static HARD: DifficultyProfile = DifficultyProfile {
    color: Param::Range(50, 255),
    alphabet: UPPER,
    fill_ratio: Param::Range(0.2, 0.8),
    center_shift: Param::Range(0.3, 0.7),
    angle_deg: Param::Range(-15.0, 15.0),
    fonts: FontId::ALL,
};

static INSANE: DifficultyProfile = DifficultyProfile {
    color: Param::Range(30, 255),
    alphabet: UPPER_LOWER,
    fill_ratio: Param::Range(0.2, 0.8),
    center_shift: Param::Range(0.2, 0.8),
    angle_deg: Param::Range(-15.0, 15.0),
    fonts: FontId::ALL,
};
