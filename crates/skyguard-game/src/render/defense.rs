use skyguard_engine::coords::{Rect, Vec2};
use skyguard_engine::paint::Color;
use skyguard_engine::raster::{Raster, Surface};

use crate::state::Defense;

pub const BASE_COLOR: Color = Color::rgb(51, 51, 51);
pub const BODY_COLOR: Color = Color::rgb(138, 138, 255);
pub const BARREL_COLOR: Color = Color::rgb(85, 85, 85);

pub const BODY_RADIUS: i32 = 20;
pub const BARREL_LENGTH: f32 = 50.0;
pub const BARREL_THICKNESS: i32 = 8;

/// Muzzle point of the barrel.
#[inline]
pub fn barrel_end(d: &Defense) -> Vec2 {
    d.position + Vec2::from_angle(d.angle) * BARREL_LENGTH
}

/// Base plate, turret body, then the barrel along the aim angle.
pub fn draw_defense<S: Surface + ?Sized>(surface: &mut S, d: &Defense) {
    let (x, y) = (d.position.x as i32, d.position.y as i32);
    surface.fill_rect(Rect::new(x - 25, y, 50, 20), BASE_COLOR);
    surface.fill_circle(x, y - 10, BODY_RADIUS, BODY_COLOR);
    surface.draw_line(d.position, barrel_end(d), BARREL_THICKNESS, BARREL_COLOR);
}
