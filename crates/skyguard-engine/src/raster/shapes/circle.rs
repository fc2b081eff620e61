use crate::coords::Rect;
use crate::paint::Color;
use crate::raster::Surface;

use super::clipped_scan;

/// Angular step, in degrees, between samples of a circle outline.
pub const OUTLINE_STEP_DEG: usize = 5;

/// Plots every pixel `(cx + dx, cy + dy)` with `dx² + dy² <= r²`.
///
/// `radius == 0` plots the center pixel only; negative radii plot nothing.
pub fn fill_circle<S: Surface + ?Sized>(surface: &mut S, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    let Some((xs, ys)) = clipped_scan(
        &*surface,
        (cx.saturating_sub(radius), cx.saturating_add(radius)),
        (cy.saturating_sub(radius), cy.saturating_add(radius)),
    ) else {
        return;
    };
    let r2 = radius as i64 * radius as i64;
    for y in ys {
        let dy = y as i64 - cy as i64;
        for x in xs.clone() {
            let dx = x as i64 - cx as i64;
            if dx * dx + dy * dy <= r2 {
                surface.fill_rect(Rect::pixel(x, y), color);
            }
        }
    }
}

/// Circle outline sampled every [`OUTLINE_STEP_DEG`] degrees (72 points).
///
/// Not a closed Bresenham circle: large radii show gaps between samples.
pub fn stroke_circle<S: Surface + ?Sized>(surface: &mut S, cx: i32, cy: i32, radius: i32, color: Color) {
    if radius < 0 {
        return;
    }
    let r = radius as f32;
    for deg in (0..360).step_by(OUTLINE_STEP_DEG) {
        let rad = (deg as f32).to_radians();
        let px = cx + (r * rad.cos()) as i32;
        let py = cy + (r * rad.sin()) as i32;
        surface.fill_rect(Rect::pixel(px, py), color);
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::raster::PixelBuffer;
    use crate::scene::DrawList;

    fn expected_disc(cx: i32, cy: i32, r: i32) -> HashSet<(i32, i32)> {
        let mut set = HashSet::new();
        for dy in -r..=r {
            for dx in -r..=r {
                if dx * dx + dy * dy <= r * r {
                    set.insert((cx + dx, cy + dy));
                }
            }
        }
        set
    }

    #[test]
    fn filled_circle_covers_exact_disc() {
        for r in [1, 2, 5, 9] {
            let mut list = DrawList::new();
            fill_circle(&mut list, 40, -3, r, Color::WHITE);
            assert_eq!(list.covered_pixels(), expected_disc(40, -3, r), "radius {r}");
            assert_eq!(list.len(), expected_disc(40, -3, r).len());
        }
    }

    #[test]
    fn zero_radius_plots_one_pixel() {
        let mut list = DrawList::new();
        fill_circle(&mut list, 7, 8, 0, Color::WHITE);
        assert_eq!(list.len(), 1);
        assert!(list.covered_pixels().contains(&(7, 8)));
    }

    #[test]
    fn negative_radius_plots_nothing() {
        let mut list = DrawList::new();
        fill_circle(&mut list, 0, 0, -4, Color::WHITE);
        stroke_circle(&mut list, 0, 0, -4, Color::WHITE);
        assert!(list.is_empty());
    }

    #[test]
    fn outline_has_72_samples_on_the_ring() {
        let mut list = DrawList::new();
        stroke_circle(&mut list, 100, 100, 40, Color::WHITE);
        assert_eq!(list.len(), 72);
        for (x, y) in list.covered_pixels() {
            let d = (((x - 100) * (x - 100) + (y - 100) * (y - 100)) as f32).sqrt();
            assert!((d - 40.0).abs() <= 1.5, "({x},{y}) off ring: {d}");
        }
    }

    // ── clipping ──────────────────────────────────────────────────────────

    #[test]
    fn huge_disc_only_scans_the_buffer() {
        let mut buf = PixelBuffer::filled(16, 16, Color::BLACK);
        fill_circle(&mut buf, 8, 8, 1_000_000, Color::RED);
        assert!(buf.pixels().iter().all(|&p| p == Color::RED));
    }

    #[test]
    fn disc_crossing_the_edge_keeps_visible_part() {
        let mut buf = PixelBuffer::filled(12, 12, Color::BLACK);
        fill_circle(&mut buf, -2, 5, 6, Color::RED);
        let visible: HashSet<(i32, i32)> =
            expected_disc(-2, 5, 6).into_iter().filter(|&(x, y)| buf.bounds().contains(x, y)).collect();
        for y in 0..12 {
            for x in 0..12 {
                assert_eq!(buf.get(x, y) == Some(Color::RED), visible.contains(&(x, y)), "({x},{y})");
            }
        }
    }
}
