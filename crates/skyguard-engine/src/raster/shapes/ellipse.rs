use crate::coords::Rect;
use crate::paint::Color;
use crate::raster::Surface;

use super::clipped_scan;

/// Plots every `(dx, dy)` with `dx²/rx² + dy²/ry² <= 1` around `(cx, cy)`.
///
/// Either radius `<= 0` plots nothing.
pub fn fill_ellipse<S: Surface + ?Sized>(
    surface: &mut S,
    cx: i32,
    cy: i32,
    rx: i32,
    ry: i32,
    color: Color,
) {
    if rx <= 0 || ry <= 0 {
        return;
    }
    let Some((xs, ys)) = clipped_scan(
        &*surface,
        (cx.saturating_sub(rx), cx.saturating_add(rx)),
        (cy.saturating_sub(ry), cy.saturating_add(ry)),
    ) else {
        return;
    };
    // dx²/rx² + dy²/ry² <= 1, multiplied through by rx²·ry² to stay exact.
    let rx2 = rx as i128 * rx as i128;
    let ry2 = ry as i128 * ry as i128;
    let limit = rx2 * ry2;
    for y in ys {
        let dy = y as i128 - cy as i128;
        for x in xs.clone() {
            let dx = x as i128 - cx as i128;
            if dx * dx * ry2 + dy * dy * rx2 <= limit {
                surface.fill_rect(Rect::pixel(x, y), color);
            }
        }
    }
}
