//! Scene renderer.
//!
//! Draws one full frame back to front with no depth buffer, so the call
//! order in [`SceneRenderer::render`] is the paint order:
//!
//! 1. sky gradient
//! 2. buildings, dimmed by the ambient level of the current sky band
//! 3. ground
//! 4. aircraft, missiles, enemy missiles, explosions, cyber explosions
//! 5. defense turret
//! 6. radar overlay
//!
//! Nothing per-entity survives between frames. The renderer's only state is
//! the radar layer and the last observed sky band (for logging).

pub mod backdrop;
pub mod defense;
pub mod entities;
pub mod radar;

use log::{debug, trace};
use skyguard_engine::raster::Surface;

use crate::config::GameConfig;
use crate::sky::SkyBand;
use crate::state::GameState;

pub use radar::Radar;

pub struct SceneRenderer {
    day_night_step: f32,
    radar: Radar,
    last_band: Option<SkyBand>,
}

impl SceneRenderer {
    pub fn new(day_night_step: f32) -> Self {
        Self { day_night_step, radar: Radar::new(), last_band: None }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.day_night_step)
    }

    /// Renders `state` onto `surface`.
    ///
    /// This is the single writer of `state.day_night`: the phase advances
    /// exactly once per call. Call it once per displayed frame.
    pub fn render<S: Surface + ?Sized>(&mut self, state: &mut GameState, surface: &mut S) {
        state.day_night.advance(self.day_night_step);
        let state = &*state;

        let band = state.day_night.band();
        if self.last_band != Some(band) {
            debug!("sky band -> {:?} (phase {:.4})", band, state.day_night.phase());
            self.last_band = Some(band);
        }

        backdrop::draw_sky(surface, &state.day_night);
        backdrop::draw_buildings(surface, &state.buildings, state.day_night.ambient_brightness());
        backdrop::draw_ground(surface);

        for a in &state.aircraft {
            entities::draw_aircraft(surface, a);
        }
        for m in &state.missiles {
            entities::draw_missile(surface, m);
        }
        for m in &state.enemy_missiles {
            entities::draw_enemy_missile(surface, m);
        }
        for e in &state.explosions {
            entities::draw_explosion(surface, e);
        }
        for e in &state.cyber_explosions {
            entities::draw_cyber_explosion(surface, e);
        }

        defense::draw_defense(surface, &state.defense);
        self.radar.draw(surface, &state.aircraft, state.defense.position);

        trace!(
            "scene: {} aircraft, {} missiles, {} enemy missiles, {} explosions",
            state.aircraft.len(),
            state.missiles.len(),
            state.enemy_missiles.len(),
            state.explosions.len() + state.cyber_explosions.len(),
        );
    }
}
