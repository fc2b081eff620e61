//! Skyguard presentation core on top of `skyguard-engine`.
//!
//! Turns a [`GameState`](state::GameState) snapshot into draw calls on any
//! [`TextSurface`](skyguard_engine::raster::TextSurface): the scene (sky,
//! skyline, ground, entities, turret, radar), the HUD stat lines and the
//! current notification.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use skyguard_game::prelude::*;
//!
//! let config = GameConfig::load("skyguard.ron");
//! let mut game = Game::new(font, &config);
//! let mut state = GameState::default();
//!
//! // Once per frame:
//! let mut canvas = Canvas::new(&mut pixels, &fonts);
//! game.frame(&mut state, &mut canvas);
//! ```
//!
//! The simulation that fills `GameState` lives elsewhere; this crate only
//! reads it, except for the day-night phase which the scene renderer
//! advances once per frame.

pub mod config;
pub mod frame;
pub mod hud;
pub mod render;
pub mod sky;
pub mod state;

pub use frame::Game;

/// Everything a frame loop needs.
pub mod prelude {
    pub use crate::config::{ConfigError, GameConfig};
    pub use crate::frame::Game;
    pub use crate::hud::{CountdownScope, HudPresenter, NotificationKind, NotificationQueue};
    pub use crate::render::SceneRenderer;
    pub use crate::sky::{DayNightCycle, SkyBand};
    pub use crate::state::*;

    pub use skyguard_engine::coords::{Rect, Vec2};
    pub use skyguard_engine::paint::Color;
    pub use skyguard_engine::raster::{Canvas, PixelBuffer, Raster, Surface, TextSurface};
    pub use skyguard_engine::text::{FontId, FontSystem};
}
