use bytemuck::{Pod, Zeroable};

/// Straight-alpha RGBA8 color.
///
/// Invariant:
/// - channels are never premultiplied; blending happens at the pixel store.
///
/// The layout is `#[repr(C)]` so a `[Color]` slice can be viewed as tightly
/// packed RGBA bytes.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);
    pub const LIME_GREEN: Color = Color::rgb(50, 205, 50);
    pub const LIGHT_CORAL: Color = Color::rgb(240, 128, 128);

    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from unbounded channel arithmetic, clamping each
    /// channel to `0..=255`.
    #[inline]
    pub fn from_channels(r: f32, g: f32, b: f32) -> Self {
        Self::rgb(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }

    /// Returns the same color with alpha set from an opacity in `[0, 1]`.
    ///
    /// Out-of-range and NaN opacities clamp (NaN → fully transparent).
    #[inline]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let a = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
        Self { a: (a * 255.0) as u8, ..self }
    }

    /// Scales RGB by `factor`, clamping to the channel range. Alpha is kept.
    #[inline]
    pub fn scale_brightness(self, factor: f32) -> Self {
        let f = if factor.is_nan() { 0.0 } else { factor.max(0.0) };
        Self {
            r: clamp_channel(self.r as f32 * f),
            g: clamp_channel(self.g as f32 * f),
            b: clamp_channel(self.b as f32 * f),
            a: self.a,
        }
    }

    /// Linear interpolation of all four channels; `t` is clamped to `[0, 1]`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let mix = |a: u8, b: u8| clamp_channel((a as f32 + (b as f32 - a as f32) * t).round());
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Source-over composite of `self` onto `dst` (both straight alpha).
    ///
    /// Opaque sources replace the destination; fully transparent sources
    /// leave it untouched.
    #[inline]
    pub fn over(self, dst: Color) -> Color {
        match self.a {
            255 => return self,
            0 => return dst,
            _ => {}
        }

        let sa = self.a as f32 / 255.0;
        let da = dst.a as f32 / 255.0;
        let out_a = sa + da * (1.0 - sa);
        if out_a <= 0.0 {
            return Color::TRANSPARENT;
        }

        let mix = |s: u8, d: u8| {
            let v = (s as f32 * sa + d as f32 * da * (1.0 - sa)) / out_a;
            clamp_channel(v.round())
        };

        Color {
            r: mix(self.r, dst.r),
            g: mix(self.g, dst.g),
            b: mix(self.b, dst.b),
            a: clamp_channel((out_a * 255.0).round()),
        }
    }
}

/// Clamps a float channel value to `0..=255`, truncating the fraction.
#[inline]
pub fn clamp_channel(v: f32) -> u8 {
    if v.is_nan() { 0 } else { v.clamp(0.0, 255.0) as u8 }
}
