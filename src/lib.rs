#![forbid(unsafe_code)]

//! Procedural synthesis of labeled raster images for training data:
//! single glyphs, geometric shapes, and moving-overlay frame sequences.
//!
//! All generation is pure over explicit inputs; randomness comes from a
//! caller-provided [`rand::Rng`], so batches are deterministic under a
//! seeded generator and embarrassingly parallel across images.

pub mod composite;
pub mod error;
pub mod font;
pub mod glyph;
pub mod motion;
pub mod profile;
pub mod sample;
pub mod shape;

pub use composite::composite;
pub use error::{SynthError, SynthResult};
pub use font::{FontId, FontLibrary};
pub use glyph::{DrawOutcome, GlyphRender, generate_letters, render_glyph};
pub use motion::{MotionKind, motion_path};
pub use profile::{DifficultyProfile, DifficultyTier, Param};
pub use sample::{SampledParams, sample};
pub use shape::{ShapeGeometry, ShapeKind, render_shape};
