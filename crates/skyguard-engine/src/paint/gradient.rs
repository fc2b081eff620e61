use super::Color;

/// Two-stop vertical gradient, `top` at the first row and approaching
/// `bottom` at the last.
///
/// Rows are sampled at `row / height`, so the final row is one step short of
/// `bottom` (the band is drawn as `height` discrete stripes).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct VerticalGradient {
    pub top: Color,
    pub bottom: Color,
}

impl VerticalGradient {
    #[inline]
    pub const fn new(top: Color, bottom: Color) -> Self {
        Self { top, bottom }
    }

    /// Color of stripe `row` in a band `height` rows tall.
    ///
    /// Returns `top` for a non-positive height.
    #[inline]
    pub fn row_color(&self, row: i32, height: i32) -> Color {
        if height <= 0 {
            return self.top;
        }
        self.top.lerp(self.bottom, row as f32 / height as f32)
    }
}
