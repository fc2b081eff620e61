use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::raster::PixelBuffer;
use crate::text::FontId;

/// Solid rectangle payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
}

/// Text payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextCmd {
    pub text: String,
    pub font: FontId,
    /// Font size in pixels.
    pub size: f32,
    pub color: Color,
    /// Top-left of the text block.
    pub origin: Vec2,
}

/// Offscreen layer composite payload. Holds a copy of the layer as it was
/// when the call was made.
#[derive(Debug, Clone, PartialEq)]
pub struct CompositeCmd {
    pub x: i32,
    pub y: i32,
    pub layer: PixelBuffer,
}

/// One recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Text(TextCmd),
    Composite(CompositeCmd),
}
