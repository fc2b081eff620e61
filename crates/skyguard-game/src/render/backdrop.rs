//! Sky, skyline and ground.

use skyguard_engine::coords::Rect;
use skyguard_engine::paint::Color;
use skyguard_engine::raster::{Raster, Surface};

use crate::sky::DayNightCycle;
use crate::state::{Building, CANVAS_HEIGHT, CANVAS_WIDTH, GROUND_HEIGHT};

pub const GROUND_COLOR: Color = Color::rgb(17, 17, 17);
pub const GROUND_TICK_COLOR: Color = Color::rgb(26, 26, 26);
pub const GROUND_TICK_SPACING: usize = 40;
pub const PLATFORM_COLOR: Color = Color::rgb(34, 34, 34);

/// Y of the ground's top edge.
#[inline]
pub const fn ground_top() -> i32 {
    CANVAS_HEIGHT - GROUND_HEIGHT
}

/// Full-canvas vertical gradient for the current phase.
pub fn draw_sky<S: Surface + ?Sized>(surface: &mut S, cycle: &DayNightCycle) {
    let (top, bottom) = cycle.sky_colors();
    surface.fill_gradient_rect(Rect::new(0, 0, CANVAS_WIDTH, CANVAS_HEIGHT), top, bottom);
}

/// Screen rect of a building: parallax scales x and width, base on the ground.
pub fn building_rect(b: &Building) -> Rect {
    let h = b.height as i32;
    Rect::new(
        (b.x * b.parallax) as i32,
        ground_top() - h,
        (b.width * b.parallax) as i32,
        h,
    )
}

pub fn draw_buildings<S: Surface + ?Sized>(surface: &mut S, buildings: &[Building], brightness: f32) {
    for b in buildings {
        surface.fill_rect(building_rect(b), b.color.scale_brightness(brightness));
    }
}

/// Ground band, its tick texture and the launch platform.
pub fn draw_ground<S: Surface + ?Sized>(surface: &mut S) {
    let top = ground_top();
    surface.fill_rect(Rect::new(0, top, CANVAS_WIDTH, GROUND_HEIGHT), GROUND_COLOR);
    for x in (0..CANVAS_WIDTH).step_by(GROUND_TICK_SPACING) {
        surface.fill_rect(Rect::new(x, top, 1, 10), GROUND_TICK_COLOR);
    }
    surface.fill_rect(Rect::new(100, top + 20, 100, 15), PLATFORM_COLOR);
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_engine::scene::DrawList;

    fn building(x: f32, parallax: f32) -> Building {
        Building { x, width: 60.0, height: 150.0, parallax, color: Color::rgb(200, 100, 40) }
    }

    #[test]
    fn sky_is_one_stripe_per_row() {
        let mut list = DrawList::new();
        draw_sky(&mut list, &DayNightCycle::new(0.3));
        let rects: Vec<_> = list.rects().collect();
        assert_eq!(rects.len(), CANVAS_HEIGHT as usize);
        assert_eq!(rects[0].rect, Rect::new(0, 0, CANVAS_WIDTH, 1));
        assert_eq!(rects[0].color, DayNightCycle::new(0.3).sky_colors().0);
    }

    #[test]
    fn building_base_sits_on_ground() {
        let r = building_rect(&building(300.0, 0.5));
        assert_eq!(r, Rect::new(150, 550, 30, 150));
        assert_eq!(r.bottom(), ground_top());
    }

    #[test]
    fn buildings_are_dimmed_by_ambient_level() {
        let mut list = DrawList::new();
        draw_buildings(&mut list, &[building(0.0, 1.0)], 0.5);
        let cmd = list.rects().next().unwrap();
        assert_eq!(cmd.color, Color::rgb(100, 50, 20));
    }

    #[test]
    fn ground_draws_band_ticks_and_platform() {
        let mut list = DrawList::new();
        draw_ground(&mut list);
        let rects: Vec<_> = list.rects().collect();
        // band + 30 ticks + platform
        assert_eq!(rects.len(), 1 + 30 + 1);
        assert_eq!(rects[0].rect, Rect::new(0, 700, 1200, 100));
        assert_eq!(rects[1].rect, Rect::new(0, 700, 1, 10));
        assert_eq!(rects[30].rect.x, 1160);
        assert_eq!(rects[31].rect, Rect::new(100, 720, 100, 15));
    }
}
