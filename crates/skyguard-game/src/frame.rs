//! Per-frame orchestration.

use log::info;
use skyguard_engine::raster::TextSurface;
use skyguard_engine::text::FontId;

use crate::config::GameConfig;
use crate::hud::{HudPresenter, NotificationKind};
use crate::render::SceneRenderer;
use crate::state::GameState;

/// Presentation side of the game: scene renderer plus HUD.
///
/// A frame is one update phase followed by one draw phase. The surface is
/// borrowed only for the draw phase.
pub struct Game {
    scene: SceneRenderer,
    hud: HudPresenter,
    frames: u64,
}

impl Game {
    pub fn new(font: FontId, config: &GameConfig) -> Self {
        info!(
            "presentation ready (day-night step {}, notification ticks {}, countdown {:?})",
            config.day_night_step, config.notification_ticks, config.countdown_scope
        );
        Self {
            scene: SceneRenderer::from_config(config),
            hud: HudPresenter::new(font, config),
            frames: 0,
        }
    }

    #[inline]
    pub fn hud(&self) -> &HudPresenter {
        &self.hud
    }

    /// Number of completed frames.
    #[inline]
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Queues a message for display. Callable from any game event.
    pub fn show_notification(&mut self, text: impl Into<String>, kind: NotificationKind) {
        self.hud.show_notification(text, kind);
    }

    /// Update phase: ages timed presentation state.
    pub fn update(&mut self) {
        self.hud.tick();
    }

    /// Draw phase: scene (advancing the day-night phase), then HUD and the
    /// visible notification on top.
    pub fn draw<S: TextSurface + ?Sized>(&mut self, state: &mut GameState, surface: &mut S) {
        self.scene.render(state, surface);
        self.hud.draw(state, surface);
    }

    /// Runs one full frame.
    pub fn frame<S: TextSurface + ?Sized>(&mut self, state: &mut GameState, surface: &mut S) {
        self.update();
        self.draw(state, surface);
        self.frames += 1;
    }
}
