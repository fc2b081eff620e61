//! Game state snapshot consumed by the renderer and HUD each frame.
//!
//! The simulation owns and mutates everything here. Presentation code reads
//! it, with one exception: the day-night phase, which only
//! [`SceneRenderer`](crate::render::SceneRenderer) advances, once per frame.

use skyguard_engine::coords::Vec2;
use skyguard_engine::paint::Color;

use crate::sky::DayNightCycle;

pub const CANVAS_WIDTH: i32 = 1200;
pub const CANVAS_HEIGHT: i32 = 800;

/// Height of the ground band; building bases sit on its top edge.
pub const GROUND_HEIGHT: i32 = 100;

/// Aircraft variants. Each has its own health pool and silhouette.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum AircraftKind {
    Fighter,
    Bomber,
}

impl AircraftKind {
    #[inline]
    pub const fn max_health(self) -> f32 {
        match self {
            AircraftKind::Fighter => 350.0,
            AircraftKind::Bomber => 500.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Aircraft {
    pub position: Vec2,
    pub size: f32,
    pub health: f32,
    pub kind: AircraftKind,
    pub color: Color,
}

impl Aircraft {
    /// Remaining health as a fraction of the kind's maximum (unclamped).
    #[inline]
    pub fn health_fraction(&self) -> f32 {
        self.health / self.kind.max_health()
    }
}

/// Player interceptor.
#[derive(Debug, Clone, PartialEq)]
pub struct Missile {
    pub position: Vec2,
    pub size: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyMissile {
    pub position: Vec2,
    pub size: f32,
}

/// Kinetic blast. `life` counts up from 0 to `max_life` over its lifetime.
#[derive(Debug, Clone, PartialEq)]
pub struct Explosion {
    pub position: Vec2,
    pub size: f32,
    pub life: u32,
    pub max_life: u32,
}

impl Explosion {
    #[inline]
    pub fn age(&self) -> f32 {
        age_fraction(self.life, self.max_life)
    }
}

/// Blast left by the cyber ability. Same lifecycle as [`Explosion`].
#[derive(Debug, Clone, PartialEq)]
pub struct CyberExplosion {
    pub position: Vec2,
    pub size: f32,
    pub life: u32,
    pub max_life: u32,
}

impl CyberExplosion {
    #[inline]
    pub fn age(&self) -> f32 {
        age_fraction(self.life, self.max_life)
    }
}

/// `life / max_life` clamped to `[0, 1]`; a zero `max_life` is fully aged.
#[inline]
pub fn age_fraction(life: u32, max_life: u32) -> f32 {
    if max_life == 0 {
        return 1.0;
    }
    (life as f32 / max_life as f32).clamp(0.0, 1.0)
}

/// Skyline block. Brightness is applied at draw time from the sky band.
#[derive(Debug, Clone, PartialEq)]
pub struct Building {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    pub parallax: f32,
    pub color: Color,
}

/// The player's turret.
#[derive(Debug, Clone, PartialEq)]
pub struct Defense {
    pub position: Vec2,
    /// Barrel direction in radians (+Y down).
    pub angle: f32,
    pub health: f32,
    pub heat: f32,
    pub max_heat: f32,
    pub overheat_threshold: f32,
}

impl Defense {
    #[inline]
    pub fn is_overheated(&self) -> bool {
        self.heat > self.overheat_threshold
    }
}

impl Default for Defense {
    fn default() -> Self {
        Self {
            position: Vec2::new(150.0, (CANVAS_HEIGHT - GROUND_HEIGHT - 20) as f32),
            angle: -std::f32::consts::FRAC_PI_4,
            health: 100.0,
            heat: 0.0,
            max_heat: 100.0,
            overheat_threshold: 80.0,
        }
    }
}

/// Wave progress counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WaveState {
    pub number: u32,
    pub active: bool,
    pub total_enemies: u32,
    pub enemies_spawned: u32,
    /// Ticks until the next wave starts (meaningful while inactive).
    pub spawn_timer: u32,
}

impl WaveState {
    #[inline]
    pub fn enemies_remaining(&self) -> u32 {
        self.total_enemies.saturating_sub(self.enemies_spawned)
    }
}

/// Root snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub day_night: DayNightCycle,

    pub aircraft: Vec<Aircraft>,
    pub missiles: Vec<Missile>,
    pub enemy_missiles: Vec<EnemyMissile>,
    pub explosions: Vec<Explosion>,
    pub cyber_explosions: Vec<CyberExplosion>,
    pub buildings: Vec<Building>,

    pub defense: Defense,

    pub score: u64,
    pub planes_destroyed: u32,
    pub wave: WaveState,
    /// Ticks until the cyber ability is ready again.
    pub cyber_cooldown: u32,
    /// Live enemy count at which air superiority reaches 0 %.
    pub enemy_limit: u32,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            day_night: DayNightCycle::default(),
            aircraft: Vec::new(),
            missiles: Vec::new(),
            enemy_missiles: Vec::new(),
            explosions: Vec::new(),
            cyber_explosions: Vec::new(),
            buildings: Vec::new(),
            defense: Defense::default(),
            score: 0,
            planes_destroyed: 0,
            wave: WaveState::default(),
            cyber_cooldown: 0,
            enemy_limit: 20,
        }
    }
}
