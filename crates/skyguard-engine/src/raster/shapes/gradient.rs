use crate::coords::Rect;
use crate::paint::{Color, VerticalGradient};
use crate::raster::Surface;

/// Fills `rect` with `rect.h` one-pixel-tall stripes interpolating from
/// `top` to `bottom` by `row / rect.h`.
pub fn fill_gradient_rect<S: Surface + ?Sized>(surface: &mut S, rect: Rect, top: Color, bottom: Color) {
    if rect.is_empty() {
        return;
    }
    let gradient = VerticalGradient::new(top, bottom);
    let rows = match surface.clip_bounds() {
        Some(clip) => {
            clip.y.saturating_sub(rect.y).clamp(0, rect.h)..clip.bottom().saturating_sub(rect.y).clamp(0, rect.h)
        }
        None => 0..rect.h,
    };
    for row in rows {
        surface.fill_rect(Rect::new(rect.x, rect.y + row, rect.w, 1), gradient.row_color(row, rect.h));
    }
}
