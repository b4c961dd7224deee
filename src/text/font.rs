use std::path::{Path, PathBuf};

use sha2::Digest as _;
use skrifa::{
    FontRef, MetadataProvider as _,
    charmap::Charmap,
    instance::{LocationRef, Size},
    metrics::GlyphMetrics,
    raw::TableProvider as _,
    string::StringId,
};

use crate::foundation::error::{CoverError, CoverResult};

/// Per-character advance lookup.
///
/// `None` means the font has no glyph for the character; callers skip it without advancing.
pub trait GlyphMeasure {
    fn advance(&self, ch: char) -> Option<u32>;

    /// Sum of advances over `text`, skipping unmapped characters.
    fn text_width(&self, text: &str) -> u32 {
        text.chars().filter_map(|ch| self.advance(ch)).sum()
    }
}

/// Font program bytes that are known to parse.
///
/// The bytes live in a shared blob, so clones are cheap. Sized faces are created from it on
/// demand with [`LoadedFont::face`].
#[derive(Clone)]
pub struct LoadedFont {
    render_font: vello_cpu::peniko::FontData,
    source: Option<PathBuf>,
}

impl std::fmt::Debug for LoadedFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoadedFont")
            .field("len", &self.data().len())
            .field("source", &self.source)
            .finish()
    }
}

impl LoadedFont {
    /// Read and parse a font file.
    pub fn load(path: &Path) -> CoverResult<Self> {
        let bytes = std::fs::read(path).map_err(|source| CoverError::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;
        let mut font = Self::from_bytes(bytes)?;
        font.source = Some(path.to_path_buf());
        tracing::debug!(path = %path.display(), len = font.data().len(), "loaded font");
        Ok(font)
    }

    /// Parse in-memory font bytes. Collections use their first face.
    pub fn from_bytes(bytes: Vec<u8>) -> CoverResult<Self> {
        let font = FontRef::from_index(&bytes, 0)
            .map_err(|e| CoverError::font_parse(format!("{e}")))?;
        font.cmap()
            .map_err(|e| CoverError::font_parse(format!("missing cmap: {e}")))?;

        let render_font =
            vello_cpu::peniko::FontData::new(vello_cpu::peniko::Blob::from(bytes), 0);
        Ok(Self {
            render_font,
            source: None,
        })
    }

    fn data(&self) -> &[u8] {
        self.render_font.data.data()
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Instantiate a face at `size` px (72 DPI, so points and pixels coincide).
    pub fn face(&self, size: f32) -> CoverResult<FontFace<'_>> {
        if !size.is_finite() || size <= 0.0 {
            return Err(CoverError::face(format!("invalid font size {size}")));
        }
        let font =
            FontRef::from_index(self.data(), 0).map_err(|e| CoverError::face(format!("{e}")))?;
        Ok(FontFace {
            size,
            charmap: font.charmap(),
            metrics: font.glyph_metrics(Size::new(size), LocationRef::default()),
            render_font: &self.render_font,
        })
    }

    /// English (or first available) family name from the `name` table.
    pub fn family_name(&self) -> Option<String> {
        let font = FontRef::from_index(self.data(), 0).ok()?;
        font.localized_strings(StringId::FAMILY_NAME)
            .english_or_first()
            .map(|s| s.to_string())
    }

    pub fn sha256_hex(&self) -> String {
        let digest = sha2::Sha256::digest(self.data());
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            out.push_str(&format!("{:02x}", b));
        }
        out
    }
}

/// A font instantiated at one pixel size. Borrows the [`LoadedFont`] it was created from and
/// is dropped at the end of the scope that needed it.
pub struct FontFace<'a> {
    size: f32,
    charmap: Charmap<'a>,
    metrics: GlyphMetrics<'a>,
    render_font: &'a vello_cpu::peniko::FontData,
}

impl FontFace<'_> {
    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn glyph_id(&self, ch: char) -> Option<u32> {
        self.charmap.map(ch).map(|gid| gid.to_u32())
    }

    pub(crate) fn render_font(&self) -> &vello_cpu::peniko::FontData {
        self.render_font
    }
}

impl GlyphMeasure for FontFace<'_> {
    /// Hinted advance: whole device pixels.
    fn advance(&self, ch: char) -> Option<u32> {
        let gid = self.charmap.map(ch)?;
        let w = self.metrics.advance_width(gid)?;
        Some(w.max(0.0).round() as u32)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/font.rs"]
mod tests;
