//! Skyguard engine crate.
//!
//! Engine-agnostic pixel layer used by the game crate: geometry, colors,
//! the `Surface` capability with its primitive rasterizer, recording and
//! pixel targets, fonts, logging and frame pacing.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod raster;
pub mod scene;
pub mod text;
pub mod time;
