//! Primitive shapes rasterized onto a [`Surface`](super::Surface).
//!
//! Every routine is a pure function of its inputs: it writes pixels and keeps
//! no state between calls. Degenerate sizes produce no pixels.

pub mod circle;
pub mod ellipse;
pub mod gradient;
pub mod line;
pub mod triangle;

pub use circle::{fill_circle, stroke_circle};
pub use ellipse::fill_ellipse;
pub use gradient::fill_gradient_rect;
pub use line::draw_line;
pub use triangle::{fill_triangle, point_in_triangle, Point};

use std::ops::RangeInclusive;

use super::Surface;

/// Narrows the inclusive scan box `[x0, x1] × [y0, y1]` to the surface's
/// clip bounds. `None` when none of it is visible.
pub(crate) fn clipped_scan<S: Surface + ?Sized>(
    surface: &S,
    (x0, x1): (i32, i32),
    (y0, y1): (i32, i32),
) -> Option<(RangeInclusive<i32>, RangeInclusive<i32>)> {
    let (x0, x1, y0, y1) = match surface.clip_bounds() {
        Some(clip) if clip.is_empty() => return None,
        Some(clip) => (x0.max(clip.x), x1.min(clip.right() - 1), y0.max(clip.y), y1.min(clip.bottom() - 1)),
        None => (x0, x1, y0, y1),
    };
    if x0 > x1 || y0 > y1 {
        return None;
    }
    Some((x0..=x1, y0..=y1))
}
