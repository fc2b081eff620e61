use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::text::{FontId, FontSystem};

use super::{PixelBuffer, Surface, TextSurface};

/// A [`PixelBuffer`] paired with the fonts needed to draw text into it.
///
/// Borrowed for the duration of one draw phase; the canvas has sole write
/// access to the buffer while it lives.
pub struct Canvas<'a> {
    pixels: &'a mut PixelBuffer,
    fonts: &'a FontSystem,
}

impl<'a> Canvas<'a> {
    #[inline]
    pub fn new(pixels: &'a mut PixelBuffer, fonts: &'a FontSystem) -> Self {
        Self { pixels, fonts }
    }

    #[inline]
    pub fn pixels(&self) -> &PixelBuffer {
        &*self.pixels
    }
}

impl Surface for Canvas<'_> {
    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.pixels.fill_rect(rect, color);
    }

    #[inline]
    fn composite(&mut self, x: i32, y: i32, layer: &PixelBuffer) {
        self.pixels.composite(x, y, layer);
    }

    #[inline]
    fn clip_bounds(&self) -> Option<Rect> {
        self.pixels.clip_bounds()
    }
}

impl TextSurface for Canvas<'_> {
    fn draw_text(&mut self, font: FontId, text: &str, origin: Vec2, size: f32, color: Color) {
        let Some(glyphs) = self.fonts.rasterize_text(text, font, size, origin) else {
            log::debug!("Canvas: unknown FontId {:?}, skipping text", font);
            return;
        };

        let opacity = color.a as f32 / 255.0;
        for glyph in &glyphs {
            for (i, &coverage) in glyph.coverage.iter().enumerate() {
                if coverage == 0 {
                    continue;
                }
                let x = glyph.x + (i % glyph.width) as i32;
                let y = glyph.y + (i / glyph.width) as i32;
                let ink = color.with_opacity(opacity * coverage as f32 / 255.0);
                self.pixels.fill_rect(Rect::pixel(x, y), ink);
            }
        }
    }

    #[inline]
    fn measure_text(&self, font: FontId, text: &str, size: f32) -> Vec2 {
        self.fonts.measure_text(text, font, size)
    }
}
