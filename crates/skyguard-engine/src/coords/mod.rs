//! Coordinate and geometry types shared by the rasterizer and game layers.
//!
//! Canonical space:
//! - Pixels, origin top-left
//! - +X right, +Y down
//!
//! Positions are `f32` (`Vec2`); everything that lands on the pixel grid is
//! an integer `Rect`.

mod rect;
mod vec2;

pub use rect::Rect;
pub use vec2::Vec2;
