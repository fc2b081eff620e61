//! Paint model shared between the rasterizer and game layers.
//!
//! Scope:
//! - color representation (straight-alpha RGBA8) and channel arithmetic
//! - two-stop vertical gradients

pub mod color;
pub mod gradient;

pub use color::Color;
pub use gradient::VerticalGradient;
