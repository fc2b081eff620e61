use crate::coords::Rect;
use crate::paint::Color;

use super::Surface;

/// RGBA8 pixel buffer for software rendering.
///
/// Row-major, top-left origin, straight alpha. All writes are clipped to the
/// buffer bounds and blended source-over.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: i32,
    height: i32,
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Creates a fully transparent buffer. Negative dimensions are treated as zero.
    pub fn new(width: i32, height: i32) -> Self {
        Self::filled(width, height, Color::TRANSPARENT)
    }

    pub fn filled(width: i32, height: i32, color: Color) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Overwrites every pixel (no blending).
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    /// Reads a pixel. Returns `None` out of bounds.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    #[inline]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Tightly packed RGBA bytes, row-major.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.bounds().contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    fn blend_span(&mut self, x0: i32, x1: i32, y: i32, color: Color) {
        let row = y as usize * self.width as usize;
        let span = &mut self.pixels[row + x0 as usize..row + x1 as usize];
        if color.a == 255 {
            span.fill(color);
        } else {
            for px in span {
                *px = color.over(*px);
            }
        }
    }
}

impl Surface for PixelBuffer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if color.a == 0 {
            return;
        }
        let Some(clip) = rect.intersect(self.bounds()) else { return };
        for y in clip.y..clip.bottom() {
            self.blend_span(clip.x, clip.right(), y, color);
        }
    }

    fn composite(&mut self, x: i32, y: i32, layer: &PixelBuffer) {
        let dst = layer.bounds().translated(x, y);
        let Some(clip) = dst.intersect(self.bounds()) else { return };

        for py in clip.y..clip.bottom() {
            for px in clip.x..clip.right() {
                let (Some(src), Some(i)) = (layer.get(px - x, py - y), self.index(px, py)) else {
                    continue;
                };
                self.pixels[i] = src.over(self.pixels[i]);
            }
        }
    }

    #[inline]
    fn clip_bounds(&self) -> Option<Rect> {
        Some(self.bounds())
    }
}
