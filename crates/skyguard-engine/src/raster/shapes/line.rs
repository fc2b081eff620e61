use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::raster::Surface;

use super::clipped_scan;

/// Draws a `length × thickness` rectangle anchored at `from` and rotated by
/// `atan2(to - from)` about that anchor.
///
/// Length is `|to - from|` truncated to whole pixels; the thickness extends
/// along the rotated +Y axis. A pixel is plotted when its center falls inside
/// the rotated rectangle.
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, from: Vec2, to: Vec2, thickness: i32, color: Color) {
    if !from.is_finite() || !to.is_finite() || thickness <= 0 {
        return;
    }
    let delta = to - from;
    let length = delta.length() as i32;
    if length <= 0 {
        return;
    }

    let (sin, cos) = delta.angle().sin_cos();
    let origin = Vec2::new(from.x as i32 as f32, from.y as i32 as f32);
    let (len, th) = (length as f32, thickness as f32);

    let corners = [
        origin,
        origin + Vec2::new(len * cos, len * sin),
        origin + Vec2::new(-th * sin, th * cos),
        origin + Vec2::new(len * cos - th * sin, len * sin + th * cos),
    ];
    let min_x = corners.iter().map(|c| c.x).fold(f32::INFINITY, f32::min).floor() as i32;
    let max_x = corners.iter().map(|c| c.x).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;
    let min_y = corners.iter().map(|c| c.y).fold(f32::INFINITY, f32::min).floor() as i32;
    let max_y = corners.iter().map(|c| c.y).fold(f32::NEG_INFINITY, f32::max).ceil() as i32;

    let Some((xs, ys)) = clipped_scan(&*surface, (min_x, max_x), (min_y, max_y)) else {
        return;
    };
    for y in ys {
        for x in xs.clone() {
            let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5) - origin;
            // Project onto the rectangle's local axes.
            let u = d.x * cos + d.y * sin;
            let v = -d.x * sin + d.y * cos;
            if (0.0..len).contains(&u) && (0.0..th).contains(&v) {
                surface.fill_rect(Rect::pixel(x, y), color);
            }
        }
    }
}
