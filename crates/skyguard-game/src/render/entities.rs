//! Aircraft, projectiles and blast effects.

use skyguard_engine::coords::Rect;
use skyguard_engine::paint::Color;
use skyguard_engine::raster::{Raster, Surface};

use crate::state::{Aircraft, AircraftKind, CyberExplosion, EnemyMissile, Explosion, Missile};

pub const HEALTH_TRACK_COLOR: Color = Color::rgb(34, 34, 34);
pub const HEALTH_BAR_HEIGHT: i32 = 4;
/// Gap between the top of the aircraft and its health bar.
pub const HEALTH_BAR_GAP: i32 = 15;

pub const MISSILE_COLOR: Color = Color::rgb(138, 138, 255);
pub const ENEMY_MISSILE_COLOR: Color = Color::rgb(255, 85, 85);

/// One filled circle of a layered effect.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CircleLayer {
    pub radius: i32,
    pub color: Color,
}

// ── aircraft ──────────────────────────────────────────────────────────────

/// Fill width of a health bar: `round(fraction · width)` clamped to the bar.
pub fn health_bar_fill(fraction: f32, bar_width: i32) -> i32 {
    if fraction.is_nan() || bar_width <= 0 {
        return 0;
    }
    let w = (fraction * bar_width as f32).round();
    w.clamp(0.0, bar_width as f32) as i32
}

pub fn health_color(fraction: f32) -> Color {
    if fraction > 0.5 {
        Color::LIME_GREEN
    } else if fraction > 0.25 {
        Color::YELLOW
    } else {
        Color::RED
    }
}

/// Track rect of the health bar above `a`.
pub fn health_bar_rect(a: &Aircraft) -> Rect {
    let bw = (a.size * 2.0) as i32;
    Rect::new(
        a.position.x as i32 - bw / 2,
        a.position.y as i32 - a.size as i32 - HEALTH_BAR_GAP,
        bw,
        HEALTH_BAR_HEIGHT,
    )
}

pub fn draw_aircraft<S: Surface + ?Sized>(surface: &mut S, a: &Aircraft) {
    let track = health_bar_rect(a);
    let fraction = a.health_fraction();
    surface.fill_rect(track, HEALTH_TRACK_COLOR);
    surface.fill_rect(
        Rect::new(track.x, track.y, health_bar_fill(fraction, track.w), track.h),
        health_color(fraction),
    );

    let (x, y, s) = (a.position.x, a.position.y, a.size);
    match a.kind {
        AircraftKind::Bomber => {
            surface.fill_ellipse(x as i32, y as i32, (s * 1.2) as i32, (s * 0.6) as i32, a.color);
        }
        AircraftKind::Fighter => {
            surface.fill_triangle(
                ((x + s) as i32, y as i32),
                ((x - s * 0.8) as i32, (y + s * 0.4) as i32),
                ((x - s) as i32, y as i32),
                a.color,
            );
        }
    }
}

// ── projectiles ───────────────────────────────────────────────────────────

pub fn draw_missile<S: Surface + ?Sized>(surface: &mut S, m: &Missile) {
    surface.fill_circle(m.position.x as i32, m.position.y as i32, m.size as i32, MISSILE_COLOR);
}

pub fn draw_enemy_missile<S: Surface + ?Sized>(surface: &mut S, m: &EnemyMissile) {
    surface.fill_circle(m.position.x as i32, m.position.y as i32, m.size as i32, ENEMY_MISSILE_COLOR);
}

// ── blasts ────────────────────────────────────────────────────────────────

/// Outer and inner layers. Both shrink and fade linearly with age.
pub fn explosion_layers(e: &Explosion) -> [CircleLayer; 2] {
    let fade = 1.0 - e.age();
    let radius = e.size * fade;
    [
        CircleLayer { radius: radius as i32, color: Color::rgb(255, 150, 50).with_opacity(fade * 0.6) },
        CircleLayer { radius: (radius * 0.7) as i32, color: Color::rgb(255, 100, 0).with_opacity(fade * 0.4) },
    ]
}

/// Glow, body and core. Radius decays at half the rate of a plain explosion.
pub fn cyber_layers(e: &CyberExplosion) -> [CircleLayer; 3] {
    let age = e.age();
    let fade = 1.0 - age;
    let radius = e.size * (1.0 - 0.5 * age);
    [
        CircleLayer { radius: (radius * 1.5) as i32, color: Color::rgb(100, 200, 255).with_opacity(fade * 0.3) },
        CircleLayer { radius: radius as i32, color: Color::rgb(138, 138, 255).with_opacity(fade * 0.7) },
        CircleLayer { radius: (radius * 0.3) as i32, color: Color::rgb(255, 255, 255).with_opacity(fade * 0.9) },
    ]
}

fn draw_layers<S: Surface + ?Sized>(surface: &mut S, cx: i32, cy: i32, layers: &[CircleLayer]) {
    for layer in layers.iter().filter(|l| l.color.a > 0) {
        surface.fill_circle(cx, cy, layer.radius, layer.color);
    }
}

pub fn draw_explosion<S: Surface + ?Sized>(surface: &mut S, e: &Explosion) {
    draw_layers(surface, e.position.x as i32, e.position.y as i32, &explosion_layers(e));
}

pub fn draw_cyber_explosion<S: Surface + ?Sized>(surface: &mut S, e: &CyberExplosion) {
    draw_layers(surface, e.position.x as i32, e.position.y as i32, &cyber_layers(e));
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_engine::coords::Vec2;
    use skyguard_engine::scene::DrawList;

    fn aircraft(kind: AircraftKind, health: f32) -> Aircraft {
        Aircraft { position: Vec2::new(400.0, 200.0), size: 20.0, health, kind, color: Color::WHITE }
    }

    fn explosion(life: u32) -> Explosion {
        Explosion { position: Vec2::new(50.0, 50.0), size: 30.0, life, max_life: 30 }
    }

    fn cyber(life: u32) -> CyberExplosion {
        CyberExplosion { position: Vec2::new(50.0, 50.0), size: 30.0, life, max_life: 30 }
    }

    // ── health bar ────────────────────────────────────────────────────────

    #[test]
    fn health_fill_rounds_and_clamps() {
        assert_eq!(health_bar_fill(0.0, 40), 0);
        assert_eq!(health_bar_fill(0.5, 40), 20);
        assert_eq!(health_bar_fill(1.0, 40), 40);
        assert_eq!(health_bar_fill(0.5, 25), 13);
        assert_eq!(health_bar_fill(1.7, 40), 40);
        assert_eq!(health_bar_fill(-0.3, 40), 0);
        assert_eq!(health_bar_fill(f32::NAN, 40), 0);
    }

    #[test]
    fn health_color_thresholds() {
        assert_eq!(health_color(0.9), Color::LIME_GREEN);
        assert_eq!(health_color(0.5), Color::YELLOW);
        assert_eq!(health_color(0.3), Color::YELLOW);
        assert_eq!(health_color(0.25), Color::RED);
    }

    #[test]
    fn bar_is_centered_above_aircraft() {
        let r = health_bar_rect(&aircraft(AircraftKind::Fighter, 350.0));
        assert_eq!(r, Rect::new(380, 165, 40, 4));
    }

    #[test]
    fn bomber_health_uses_its_own_maximum() {
        let mut list = DrawList::new();
        draw_aircraft(&mut list, &aircraft(AircraftKind::Bomber, 250.0));
        let rects: Vec<_> = list.rects().collect();
        assert_eq!(rects[0].color, HEALTH_TRACK_COLOR);
        assert_eq!(rects[1].rect.w, 20);
        assert_eq!(rects[1].color, Color::YELLOW);
    }

    // ── bodies ────────────────────────────────────────────────────────────

    #[test]
    fn bomber_is_an_ellipse_wider_than_tall() {
        let mut list = DrawList::new();
        draw_aircraft(&mut list, &aircraft(AircraftKind::Bomber, 0.0));
        let body: Vec<_> = list.covered_pixels().into_iter().filter(|&(_, y)| y > 170).collect();
        let xs = body.iter().map(|p| p.0);
        let ys = body.iter().map(|p| p.1);
        let width = xs.clone().max().unwrap() - xs.min().unwrap() + 1;
        let height = ys.clone().max().unwrap() - ys.min().unwrap() + 1;
        assert_eq!(width, 2 * 24 + 1);
        assert_eq!(height, 2 * 12 + 1);
    }

    #[test]
    fn fighter_body_stays_in_its_triangle_bounds() {
        let mut list = DrawList::new();
        draw_aircraft(&mut list, &aircraft(AircraftKind::Fighter, 350.0));
        let body: Vec<_> = list.covered_pixels().into_iter().filter(|&(_, y)| y > 170).collect();
        assert!(!body.is_empty());
        assert!(body.iter().all(|&(x, y)| (380..=420).contains(&x) && (200..=208).contains(&y)));
    }

    #[test]
    fn missiles_differ_only_by_color() {
        let mut a = DrawList::new();
        let mut b = DrawList::new();
        draw_missile(&mut a, &Missile { position: Vec2::new(10.0, 10.0), size: 3.0 });
        draw_enemy_missile(&mut b, &EnemyMissile { position: Vec2::new(10.0, 10.0), size: 3.0 });
        assert_eq!(a.covered_pixels(), b.covered_pixels());
        assert!(a.rects().all(|r| r.color == MISSILE_COLOR));
        assert!(b.rects().all(|r| r.color == ENEMY_MISSILE_COLOR));
    }

    // ── blasts ────────────────────────────────────────────────────────────

    #[test]
    fn explosion_shrinks_and_fades_with_age() {
        let mut prev = explosion_layers(&explosion(0));
        assert_eq!(prev[0].radius, 30);
        assert_eq!(prev[1].radius, 21);
        for life in 1..=30 {
            let cur = explosion_layers(&explosion(life));
            for (p, c) in prev.iter().zip(cur.iter()) {
                assert!(c.radius <= p.radius, "radius grew at life {life}");
                assert!(c.color.a <= p.color.a, "alpha grew at life {life}");
            }
            prev = cur;
        }
        assert!(prev.iter().all(|l| l.radius == 0 && l.color.a == 0));
    }

    #[test]
    fn cyber_explosion_decays_half_as_fast() {
        let fresh = cyber_layers(&cyber(0));
        assert_eq!(fresh[0].radius, 45);
        assert_eq!(fresh[1].radius, 30);
        assert_eq!(fresh[2].radius, 9);

        let spent = cyber_layers(&cyber(30));
        assert_eq!(spent[1].radius, 15);
        assert!(spent.iter().all(|l| l.color.a == 0));

        let mut prev = fresh;
        for life in 1..=30 {
            let cur = cyber_layers(&cyber(life));
            for (p, c) in prev.iter().zip(cur.iter()) {
                assert!(c.radius <= p.radius && c.color.a <= p.color.a);
            }
            prev = cur;
        }
    }

    #[test]
    fn spent_blasts_draw_nothing() {
        let mut list = DrawList::new();
        draw_explosion(&mut list, &explosion(30));
        draw_cyber_explosion(&mut list, &cyber(30));
        assert!(list.is_empty());
    }

    #[test]
    fn fresh_explosion_draws_outer_then_inner() {
        let mut list = DrawList::new();
        draw_explosion(&mut list, &explosion(0));
        let colors: Vec<_> = list.rects().map(|r| r.color).collect();
        let outer = Color::rgb(255, 150, 50).with_opacity(0.6);
        let inner = Color::rgb(255, 100, 0).with_opacity(0.4);
        assert_eq!(colors.first(), Some(&outer));
        assert_eq!(colors.last(), Some(&inner));
    }
}
