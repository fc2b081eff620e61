//! Scripted demo scene.
//!
//! Entities follow fixed paths so consecutive frames differ. No physics, no
//! collisions.

use skyguard_engine::coords::Vec2;
use skyguard_engine::paint::Color;
use skyguard_game::state::{
    Aircraft, AircraftKind, Building, CANVAS_WIDTH, CyberExplosion, EnemyMissile, Explosion,
    GameState, Missile,
};

const EXPLOSION_LIFE: u32 = 40;

pub fn initial_state() -> GameState {
    let mut s = GameState::default();

    let skyline = [
        (40.0, 70.0, 180.0, 0.9),
        (140.0, 90.0, 260.0, 0.8),
        (300.0, 60.0, 140.0, 1.0),
        (420.0, 110.0, 320.0, 0.7),
        (640.0, 80.0, 220.0, 0.9),
        (800.0, 120.0, 280.0, 0.85),
        (980.0, 70.0, 200.0, 1.0),
        (1100.0, 90.0, 240.0, 0.95),
    ];
    s.buildings = skyline
        .iter()
        .map(|&(x, width, height, parallax)| Building {
            x,
            width,
            height,
            parallax,
            color: Color::rgb(150, 160, 190),
        })
        .collect();

    s.wave.number = 1;
    s.wave.active = true;
    s.wave.total_enemies = 12;
    s.enemy_limit = 20;
    s
}

/// Moves every scripted entity to where it is at `frame`.
pub fn advance(s: &mut GameState, frame: u64) {
    let t = frame as f32;
    let wrap = |x: f32| x.rem_euclid(CANVAS_WIDTH as f32 + 200.0) - 100.0;

    s.aircraft = vec![
        Aircraft {
            position: Vec2::new(wrap(200.0 + t * 2.5), 180.0 + (t * 0.05).sin() * 30.0),
            size: 22.0,
            health: 350.0 - (t * 0.8) % 350.0,
            kind: AircraftKind::Fighter,
            color: Color::rgb(220, 220, 230),
        },
        Aircraft {
            position: Vec2::new(wrap(900.0 - t * 1.2), 260.0),
            size: 30.0,
            health: 500.0 - (t * 1.5) % 500.0,
            kind: AircraftKind::Bomber,
            color: Color::rgb(120, 130, 110),
        },
        Aircraft {
            position: Vec2::new(wrap(600.0 + t * 1.8), 120.0),
            size: 18.0,
            health: 120.0,
            kind: AircraftKind::Fighter,
            color: Color::rgb(200, 90, 90),
        },
    ];

    let turret = s.defense.position;
    let target = s.aircraft[0].position;
    s.defense.angle = (target - turret).angle();
    s.defense.heat = (t * 0.7) % s.defense.max_heat;

    let flight = (t % 90.0) / 90.0;
    s.missiles = vec![Missile { position: turret + (target - turret) * flight, size: 4.0 }];
    s.enemy_missiles = vec![EnemyMissile {
        position: Vec2::new(wrap(1000.0 - t * 3.0), 100.0 + (t * 3.0) % 560.0),
        size: 4.0,
    }];

    let life = (frame % EXPLOSION_LIFE as u64) as u32;
    s.explosions = vec![Explosion {
        position: Vec2::new(700.0, 330.0),
        size: 35.0,
        life,
        max_life: EXPLOSION_LIFE,
    }];
    s.cyber_explosions = vec![CyberExplosion {
        position: Vec2::new(500.0, 220.0),
        size: 40.0,
        life,
        max_life: EXPLOSION_LIFE,
    }];

    s.score = frame * 10;
    s.planes_destroyed = (frame / 60) as u32;
    s.wave.enemies_spawned = ((frame / 30) as u32).min(s.wave.total_enemies);
    s.cyber_cooldown = 600u32.saturating_sub(frame as u32);
}
