use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::text::FontId;

use super::PixelBuffer;

/// A drawable target that accepts solid rectangles.
///
/// This is the only capability the rasterizer needs: every primitive in
/// [`Raster`](super::Raster) is expressed as a sequence of `fill_rect` calls,
/// most of them 1×1 unit pixels.
///
/// Contract:
/// - empty rects (`w <= 0 || h <= 0`) draw nothing
/// - pixels outside the target are silently clipped
/// - `color` is straight alpha; the target blends source-over
pub trait Surface {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Composites an offscreen layer with its top-left corner at `(x, y)`.
    fn composite(&mut self, x: i32, y: i32, layer: &PixelBuffer);

    /// The region outside of which writes are dropped, if the target has one.
    ///
    /// Shape routines intersect their scan range with it so that oversized
    /// primitives cost no more than the visible area. `None` means unbounded.
    #[inline]
    fn clip_bounds(&self) -> Option<Rect> {
        None
    }
}

/// A [`Surface`] that can also draw text.
pub trait TextSurface: Surface {
    /// Draws `text` with its layout box anchored at `origin` (top-left).
    fn draw_text(&mut self, font: FontId, text: &str, origin: Vec2, size: f32, color: Color);

    /// Width and height of the single-line layout box `draw_text` would use.
    fn measure_text(&self, font: FontId, text: &str, size: f32) -> Vec2;
}
