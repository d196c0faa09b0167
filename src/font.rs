use ab_glyph::FontRef;

use crate::error::{SynthError, SynthResult};

/// Symbolic identifier for one of the candidate faces.
///
/// The names mirror the classic Hershey set; each maps onto an embedded
/// DejaVu face with a comparable look (plain fixed-width, sans, serif,
/// condensed, bold serif, oblique).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FontId {
    Plain,
    Duplex,
    Complex,
    ComplexSmall,
    Triplex,
    Italic,
}

impl FontId {
    pub const ALL: &'static [FontId] = &[
        Self::Duplex,
        Self::Plain,
        Self::Complex,
        Self::ComplexSmall,
        Self::Triplex,
        Self::Italic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Duplex => "duplex",
            Self::Complex => "complex",
            Self::ComplexSmall => "complex-small",
            Self::Triplex => "triplex",
            Self::Italic => "italic",
        }
    }

    fn bytes(self) -> &'static [u8] {
        match self {
            Self::Plain => include_bytes!("../assets/fonts/DejaVuSansMono.ttf"),
            Self::Duplex => include_bytes!("../assets/fonts/DejaVuSans.ttf"),
            Self::Complex => include_bytes!("../assets/fonts/DejaVuSerif.ttf"),
            Self::ComplexSmall => include_bytes!("../assets/fonts/DejaVuSansCondensed.ttf"),
            Self::Triplex => include_bytes!("../assets/fonts/DejaVuSerif-Bold.ttf"),
            Self::Italic => include_bytes!("../assets/fonts/DejaVuSans-Oblique.ttf"),
        }
    }
}

/// Parsed faces for every [`FontId`], loaded once and shared by reference.
pub struct FontLibrary {
    faces: Vec<FontRef<'static>>,
}

impl FontLibrary {
    /// Parse the embedded faces. Fails only if an embedded TTF is corrupt.
    pub fn embedded() -> SynthResult<Self> {
        let mut faces = Vec::with_capacity(FontId::ALL.len());
        for &id in FontId::ALL {
            let face = FontRef::try_from_slice(id.bytes())
                .map_err(|e| SynthError::font(format!("failed to parse face '{}': {e}", id.name())))?;
            faces.push(face);
        }
        Ok(Self { faces })
    }

    pub fn face(&self, id: FontId) -> &FontRef<'static> {
        let idx = FontId::ALL
            .iter()
            .position(|&f| f == id)
            .unwrap_or_default();
        &self.faces[idx]
    }
}
