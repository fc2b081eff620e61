use std::fmt;

use fontdue::layout::{CoordinateSystem, Layout, LayoutSettings, TextStyle};

use crate::coords::Vec2;

/// Error returned by [`FontSystem::load_font`].
#[derive(Debug, Clone)]
pub struct FontLoadError(pub String);

impl fmt::Display for FontLoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "font load error: {}", self.0)
    }
}

impl std::error::Error for FontLoadError {}

/// Handle to a font loaded into a [`FontSystem`].
///
/// Ids are plain indices so recording surfaces and tests can name a font
/// without loading one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct FontId(pub usize);

/// Coverage bitmap of one laid-out glyph, positioned in surface pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphBitmap {
    pub x: i32,
    pub y: i32,
    pub width: usize,
    pub height: usize,
    /// Row-major coverage, `width * height` bytes, 0 = empty, 255 = solid.
    pub coverage: Vec<u8>,
}

/// Owns a collection of loaded fonts.
///
/// Fonts are immutable after loading. The system is owned by the application
/// and lent to each frame's [`Canvas`](crate::raster::Canvas).
pub struct FontSystem {
    fonts: Vec<fontdue::Font>,
}

impl FontSystem {
    pub fn new() -> Self {
        Self { fonts: Vec::new() }
    }

    /// Parses and stores a TrueType or OpenType font from raw bytes.
    pub fn load_font(&mut self, bytes: &[u8]) -> Result<FontId, FontLoadError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| FontLoadError(e.to_string()))?;
        let id = FontId(self.fonts.len());
        self.fonts.push(font);
        log::debug!("loaded font {:?} ({} bytes)", id, bytes.len());
        Ok(id)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    fn get(&self, id: FontId) -> Option<&fontdue::Font> {
        self.fonts.get(id.0)
    }

    /// Computes the `(width, height)` of a single line of text in pixels.
    ///
    /// Unknown fonts measure as zero width and `1.2 × size` tall.
    #[must_use]
    pub fn measure_text(&self, text: &str, id: FontId, size: f32) -> Vec2 {
        let Some(font) = self.get(id) else {
            return Vec2::new(0.0, size * 1.2);
        };

        let layout = layout_line(font, text, size, Vec2::zero());
        let glyphs = layout.glyphs();
        if glyphs.is_empty() {
            return Vec2::new(0.0, size * 1.2);
        }

        // Pen position after each glyph, not the bitmap's right edge.
        let w = glyphs
            .iter()
            .map(|g| {
                let m = font.metrics_indexed(g.key.glyph_index, size);
                (g.x - m.xmin as f32 + m.advance_width).max(0.0)
            })
            .fold(0.0f32, f32::max);
        let h = glyphs.iter().map(|g| g.y + g.height as f32).fold(size, f32::max);
        Vec2::new(w, h)
    }

    /// Lays out `text` at `origin` and rasterizes every visible glyph.
    ///
    /// Returns `None` when `id` does not name a loaded font.
    pub fn rasterize_text(&self, text: &str, id: FontId, size: f32, origin: Vec2) -> Option<Vec<GlyphBitmap>> {
        let font = self.get(id)?;
        if !(size > 0.0) {
            return Some(Vec::new());
        }

        let layout = layout_line(font, text, size, origin);
        let glyphs = layout
            .glyphs()
            .iter()
            .filter(|g| g.char_data.rasterize() && g.width > 0 && g.height > 0)
            .map(|g| {
                let (metrics, coverage) = font.rasterize_config(g.key);
                GlyphBitmap {
                    x: g.x.round() as i32,
                    y: g.y.round() as i32,
                    width: metrics.width,
                    height: metrics.height,
                    coverage,
                }
            })
            .filter(|g| g.width > 0 && g.height > 0)
            .collect();
        Some(glyphs)
    }
}

impl Default for FontSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn layout_line(font: &fontdue::Font, text: &str, size: f32, origin: Vec2) -> Layout<()> {
    let mut layout: Layout<()> = Layout::new(CoordinateSystem::PositiveYDown);
    layout.reset(&LayoutSettings { x: origin.x, y: origin.y, ..LayoutSettings::default() });
    layout.append(&[font], &TextStyle::new(text, size, 0));
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_font_bytes_are_rejected() {
        let mut fonts = FontSystem::new();
        let err = fonts.load_font(b"definitely not a font").unwrap_err();
        assert!(err.to_string().starts_with("font load error"));
        assert!(fonts.is_empty());
    }

    #[test]
    fn unknown_font_measures_as_empty_line() {
        let fonts = FontSystem::new();
        let m = fonts.measure_text("SCORE: 10", FontId(0), 20.0);
        assert_eq!(m.x, 0.0);
        assert!((m.y - 24.0).abs() < 1e-4);
    }

    #[test]
    fn unknown_font_has_no_glyphs() {
        let fonts = FontSystem::new();
        assert!(fonts.rasterize_text("x", FontId(0), 12.0, Vec2::zero()).is_none());
    }
}
