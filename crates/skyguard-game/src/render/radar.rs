//! Radar minimap.
//!
//! The panel is drawn into an offscreen layer owned by [`Radar`], then
//! composited in one call. The layer is allocated once and cleared per frame.

use skyguard_engine::coords::{Rect, Vec2};
use skyguard_engine::paint::Color;
use skyguard_engine::raster::{PixelBuffer, Raster, Surface};

use crate::state::{Aircraft, AircraftKind, CANVAS_WIDTH};

pub const RADAR_SIZE: i32 = 130;
pub const RADAR_MARGIN: i32 = 10;

/// World distance per radar pixel.
pub const RADAR_SCALE: f32 = 15.0;
/// Largest radial distance of a blip from the panel center.
pub const RADAR_MAX_RANGE: f32 = 55.0;

pub const PANEL_COLOR: Color = Color::rgba(10, 10, 15, 200);
pub const RING_COLOR: Color = Color::rgba(138, 138, 255, 75);
pub const CENTER_COLOR: Color = Color::rgb(138, 138, 255);
pub const RING_SPACING: i32 = 20;
pub const BLIP_RADIUS: i32 = 4;

pub fn blip_color(kind: AircraftKind) -> Color {
    match kind {
        AircraftKind::Bomber => Color::rgb(255, 136, 68),
        AircraftKind::Fighter => Color::rgb(255, 68, 68),
    }
}

/// Maps a world offset from the turret to a radar offset from the center.
///
/// Direction is kept; distance is divided by [`RADAR_SCALE`] and capped at
/// [`RADAR_MAX_RANGE`].
pub fn project(delta: Vec2) -> Vec2 {
    let dist = delta.length();
    if !dist.is_finite() || dist == 0.0 {
        return Vec2::zero();
    }
    let r = (dist / RADAR_SCALE).min(RADAR_MAX_RANGE);
    Vec2::from_angle(delta.angle()) * r
}

/// Top-left corner of the panel on the canvas.
#[inline]
pub const fn panel_origin() -> (i32, i32) {
    (CANVAS_WIDTH - RADAR_SIZE - RADAR_MARGIN, RADAR_MARGIN)
}

pub struct Radar {
    layer: PixelBuffer,
}

impl Default for Radar {
    fn default() -> Self {
        Self::new()
    }
}

impl Radar {
    pub fn new() -> Self {
        Self { layer: PixelBuffer::new(RADAR_SIZE, RADAR_SIZE) }
    }

    /// Contents of the layer as of the last [`draw`](Self::draw).
    #[inline]
    pub fn layer(&self) -> &PixelBuffer {
        &self.layer
    }

    /// Redraws the layer for `aircraft` around `turret` and composites it.
    pub fn draw<S: Surface + ?Sized>(&mut self, surface: &mut S, aircraft: &[Aircraft], turret: Vec2) {
        let layer = &mut self.layer;
        layer.clear(Color::TRANSPARENT);

        let c = RADAR_SIZE / 2;
        layer.fill_rect(Rect::new(0, 0, RADAR_SIZE, RADAR_SIZE), PANEL_COLOR);
        for i in 1..=3 {
            layer.stroke_circle(c, c, i * RING_SPACING, RING_COLOR);
        }
        layer.fill_circle(c, c, 2, CENTER_COLOR);

        for a in aircraft {
            let offset = project(a.position - turret);
            let bx = (c as f32 + offset.x) as i32;
            let by = (c as f32 + offset.y) as i32;
            layer.fill_circle(bx, by, BLIP_RADIUS, blip_color(a.kind));
        }

        let (x, y) = panel_origin();
        surface.composite(x, y, &self.layer);
    }
}
