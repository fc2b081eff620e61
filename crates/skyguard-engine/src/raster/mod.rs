//! Software rasterizer.
//!
//! Responsibilities:
//! - define the [`Surface`] capability (solid rects + layer compositing)
//! - express every primitive (circles, ellipses, triangles, lines, gradients)
//!   purely in terms of that capability
//! - provide concrete pixel targets (`PixelBuffer`, `Canvas`)
//!
//! Primitives are available both as free functions in [`shapes`] and as
//! methods through the blanket [`Raster`] extension trait.

mod canvas;
mod pixel_buffer;
mod surface;

pub mod shapes;

pub use canvas::Canvas;
pub use pixel_buffer::PixelBuffer;
pub use surface::{Surface, TextSurface};
pub use shapes::Point;

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Primitive drawing helpers for any [`Surface`].
pub trait Raster: Surface {
    /// Plots a single unit pixel.
    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        self.fill_rect(Rect::pixel(x, y), color);
    }

    #[inline]
    fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        shapes::fill_circle(self, cx, cy, radius, color);
    }

    #[inline]
    fn stroke_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        shapes::stroke_circle(self, cx, cy, radius, color);
    }

    #[inline]
    fn fill_ellipse(&mut self, cx: i32, cy: i32, rx: i32, ry: i32, color: Color) {
        shapes::fill_ellipse(self, cx, cy, rx, ry, color);
    }

    #[inline]
    fn fill_triangle(&mut self, a: Point, b: Point, c: Point, color: Color) {
        shapes::fill_triangle(self, a, b, c, color);
    }

    #[inline]
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: i32, color: Color) {
        shapes::draw_line(self, from, to, thickness, color);
    }

    #[inline]
    fn fill_gradient_rect(&mut self, rect: Rect, top: Color, bottom: Color) {
        shapes::fill_gradient_rect(self, rect, top, bottom);
    }
}

impl<S: Surface + ?Sized> Raster for S {}
