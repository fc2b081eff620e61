use std::collections::HashSet;

use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::raster::{PixelBuffer, Surface, TextSurface};
use crate::text::FontId;

use super::{CompositeCmd, DrawCmd, RectCmd, TextCmd};

/// Recorded draw stream for a frame.
///
/// Performance characteristics:
/// - every surface call is an O(1) push
/// - `clear()` keeps allocated capacity for reuse across frames
///
/// Commands are kept in call order, which is also paint order: there is no
/// z-sorting, later commands land on top.
/// Advance per character, as a fraction of the font size, that
/// [`DrawList::measure_text`] assumes. Line height is `1.2 × size`.
pub const RECORDED_ADVANCE: f32 = 0.5;

#[derive(Debug, Default, Clone)]
pub struct DrawList {
    items: Vec<DrawCmd>,
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears recorded items. Keeps allocated capacity for reuse.
    #[inline]
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns items in call order.
    #[inline]
    pub fn items(&self) -> &[DrawCmd] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates recorded rectangles only.
    pub fn rects(&self) -> impl Iterator<Item = &RectCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Rect(r) => Some(r),
            _ => None,
        })
    }

    /// Iterates recorded text only.
    pub fn texts(&self) -> impl Iterator<Item = &TextCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Text(t) => Some(t),
            _ => None,
        })
    }

    /// Iterates recorded layer composites only.
    pub fn composites(&self) -> impl Iterator<Item = &CompositeCmd> {
        self.items.iter().filter_map(|c| match c {
            DrawCmd::Composite(l) => Some(l),
            _ => None,
        })
    }

    /// Set of every pixel touched by a recorded rectangle.
    pub fn covered_pixels(&self) -> HashSet<(i32, i32)> {
        let mut set = HashSet::new();
        for cmd in self.rects().filter(|r| !r.rect.is_empty()) {
            let r = cmd.rect;
            for y in r.y..r.bottom() {
                for x in r.x..r.right() {
                    set.insert((x, y));
                }
            }
        }
        set
    }

    /// Re-issues every recorded call, in order, onto `target`.
    pub fn replay<T: TextSurface + ?Sized>(&self, target: &mut T) {
        for item in &self.items {
            match item {
                DrawCmd::Rect(r) => target.fill_rect(r.rect, r.color),
                DrawCmd::Text(t) => target.draw_text(t.font, &t.text, t.origin, t.size, t.color),
                DrawCmd::Composite(c) => target.composite(c.x, c.y, &c.layer),
            }
        }
    }
}

impl Surface for DrawList {
    #[inline]
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.items.push(DrawCmd::Rect(RectCmd { rect, color }));
    }

    fn composite(&mut self, x: i32, y: i32, layer: &PixelBuffer) {
        self.items.push(DrawCmd::Composite(CompositeCmd { x, y, layer: layer.clone() }));
    }
}

impl TextSurface for DrawList {
    fn draw_text(&mut self, font: FontId, text: &str, origin: Vec2, size: f32, color: Color) {
        self.items.push(DrawCmd::Text(TextCmd {
            text: text.to_string(),
            font,
            size,
            color,
            origin,
        }));
    }

    /// Fixed-pitch metrics: a list has no fonts, so every character advances
    /// by [`RECORDED_ADVANCE`] of `size`.
    fn measure_text(&self, _font: FontId, text: &str, size: f32) -> Vec2 {
        Vec2::new(text.chars().count() as f32 * size * RECORDED_ADVANCE, size * 1.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_calls_in_order() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0, 0, 2, 2), Color::RED);
        list.draw_text(FontId(0), "HI", Vec2::new(1.0, 2.0), 10.0, Color::WHITE);
        list.composite(5, 6, &PixelBuffer::new(1, 1));

        assert_eq!(list.len(), 3);
        assert!(matches!(list.items()[0], DrawCmd::Rect(_)));
        assert!(matches!(list.items()[1], DrawCmd::Text(_)));
        assert!(matches!(list.items()[2], DrawCmd::Composite(_)));
    }

    #[test]
    fn measures_text_at_fixed_pitch_without_clipping() {
        let list = DrawList::new();
        assert_eq!(list.measure_text(FontId(0), "WAVE 1", 20.0), Vec2::new(60.0, 24.0));
        assert_eq!(list.measure_text(FontId(9), "", 10.0), Vec2::new(0.0, 12.0));
        assert_eq!(list.clip_bounds(), None);
    }

    #[test]
    fn empty_rects_are_not_recorded() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0, 0, 0, 9), Color::RED);
        assert!(list.is_empty());
    }

    #[test]
    fn covered_pixels_unions_rects() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0, 0, 2, 1), Color::RED);
        list.fill_rect(Rect::new(1, 0, 2, 1), Color::RED);
        assert_eq!(list.covered_pixels().len(), 3);
    }

    #[test]
    fn replay_reproduces_pixels() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(1, 1, 2, 2), Color::RED);
        let mut layer = PixelBuffer::new(1, 1);
        layer.fill_rect(Rect::pixel(0, 0), Color::CYAN);
        list.composite(0, 0, &layer);

        let mut direct = PixelBuffer::filled(4, 4, Color::BLACK);
        direct.fill_rect(Rect::new(1, 1, 2, 2), Color::RED);
        direct.composite(0, 0, &layer);

        let fonts = crate::text::FontSystem::new();
        let mut replayed = PixelBuffer::filled(4, 4, Color::BLACK);
        list.replay(&mut crate::raster::Canvas::new(&mut replayed, &fonts));
        assert_eq!(replayed, direct);
    }
}
