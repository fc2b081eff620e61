use crate::coords::Rect;
use crate::paint::Color;
use crate::raster::Surface;

use super::clipped_scan;

/// Integer pixel coordinate.
pub type Point = (i32, i32);

/// Twice the unsigned area of triangle `abc` (cross-product magnitude).
#[inline]
fn double_area(a: Point, b: Point, c: Point) -> i64 {
    let (ax, ay) = (a.0 as i64, a.1 as i64);
    let (bx, by) = (b.0 as i64, b.1 as i64);
    let (cx, cy) = (c.0 as i64, c.1 as i64);
    ((bx - ax) * (cy - ay) - (cx - ax) * (by - ay)).abs()
}

/// Area-sum inclusion test: `p` is inside (or on an edge of) `abc` iff the
/// three sub-triangles formed with `p` exactly tile `abc`.
///
/// Zero-area triangles contain no points.
pub fn point_in_triangle(p: Point, a: Point, b: Point, c: Point) -> bool {
    let total = double_area(a, b, c);
    if total == 0 {
        return false;
    }
    total == double_area(p, b, c) + double_area(a, p, c) + double_area(a, b, p)
}

/// Scans the bounding box of `abc` and plots every point inside it.
pub fn fill_triangle<S: Surface + ?Sized>(surface: &mut S, a: Point, b: Point, c: Point, color: Color) {
    if double_area(a, b, c) == 0 {
        return;
    }

    let min_x = a.0.min(b.0).min(c.0);
    let max_x = a.0.max(b.0).max(c.0);
    let min_y = a.1.min(b.1).min(c.1);
    let max_y = a.1.max(b.1).max(c.1);

    let Some((xs, ys)) = clipped_scan(&*surface, (min_x, max_x), (min_y, max_y)) else {
        return;
    };
    for y in ys {
        for x in xs.clone() {
            if point_in_triangle((x, y), a, b, c) {
                surface.fill_rect(Rect::pixel(x, y), color);
            }
        }
    }
}
