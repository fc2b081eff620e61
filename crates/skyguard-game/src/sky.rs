//! Day-night cycle: phase clock, named bands, sky palette, ambient light.

use skyguard_engine::paint::Color;

/// A quarter of the day-night cycle.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum SkyBand {
    /// `[0, 0.25)`
    Dawn,
    /// `[0.25, 0.5)`
    Day,
    /// `[0.5, 0.75)`
    Dusk,
    /// `[0.75, 1)`
    Night,
}

/// (top, bottom) sky colors at the start of each band.
type Keyframe = ([f32; 3], [f32; 3]);

impl SkyBand {
    pub fn from_phase(phase: f32) -> Self {
        if phase < 0.25 {
            SkyBand::Dawn
        } else if phase < 0.5 {
            SkyBand::Day
        } else if phase < 0.75 {
            SkyBand::Dusk
        } else {
            SkyBand::Night
        }
    }

    #[inline]
    pub const fn start(self) -> f32 {
        match self {
            SkyBand::Dawn => 0.0,
            SkyBand::Day => 0.25,
            SkyBand::Dusk => 0.5,
            SkyBand::Night => 0.75,
        }
    }

    #[inline]
    pub const fn next(self) -> Self {
        match self {
            SkyBand::Dawn => SkyBand::Day,
            SkyBand::Day => SkyBand::Dusk,
            SkyBand::Dusk => SkyBand::Night,
            SkyBand::Night => SkyBand::Dawn,
        }
    }

    /// Building brightness multiplier. Fixed per band, not interpolated.
    #[inline]
    pub const fn ambient_brightness(self) -> f32 {
        match self {
            SkyBand::Dawn => 0.15,
            SkyBand::Day => 0.35,
            SkyBand::Dusk => 0.20,
            SkyBand::Night => 0.15,
        }
    }

    const fn keyframe(self) -> Keyframe {
        match self {
            SkyBand::Dawn => ([20.0, 25.0, 40.0], [40.0, 45.0, 60.0]),
            SkyBand::Day => ([120.0, 140.0, 190.0], [180.0, 200.0, 220.0]),
            SkyBand::Dusk => ([170.0, 150.0, 220.0], [210.0, 180.0, 220.0]),
            SkyBand::Night => ([70.0, 50.0, 100.0], [80.0, 80.0, 120.0]),
        }
    }
}

/// Cyclic `[0, 1)` clock driving the sky and ambient light.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DayNightCycle {
    phase: f32,
}

impl DayNightCycle {
    /// Creates a cycle at `phase`, wrapped into `[0, 1)`.
    pub fn new(phase: f32) -> Self {
        Self { phase: wrap_phase(phase) }
    }

    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Moves the clock forward by `step`, wrapping at 1.0.
    pub fn advance(&mut self, step: f32) {
        self.phase = wrap_phase(self.phase + step);
    }

    #[inline]
    pub fn band(&self) -> SkyBand {
        SkyBand::from_phase(self.phase)
    }

    /// Position within the current band, `[0, 1)`.
    #[inline]
    pub fn band_fraction(&self) -> f32 {
        ((self.phase - self.band().start()) * 4.0).clamp(0.0, 1.0)
    }

    /// Top and bottom sky colors for the current phase.
    ///
    /// Each band runs from its own keyframe to the next band's, so the
    /// palette is continuous across band edges and across the wrap.
    pub fn sky_colors(&self) -> (Color, Color) {
        let band = self.band();
        let f = self.band_fraction();
        let (top0, bottom0) = band.keyframe();
        let (top1, bottom1) = band.next().keyframe();
        (mix(top0, top1, f), mix(bottom0, bottom1, f))
    }

    #[inline]
    pub fn ambient_brightness(&self) -> f32 {
        self.band().ambient_brightness()
    }
}

fn wrap_phase(phase: f32) -> f32 {
    if !phase.is_finite() {
        return 0.0;
    }
    let p = phase.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs.
    if p >= 1.0 { 0.0 } else { p }
}

/// Per-channel `base + slope·f`.
fn mix(base: [f32; 3], target: [f32; 3], f: f32) -> Color {
    let ch = |i: usize| (base[i] + (target[i] - base[i]) * f).round();
    Color::from_channels(ch(0), ch(1), ch(2))
}
