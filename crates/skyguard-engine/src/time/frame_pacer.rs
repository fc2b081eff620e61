use std::time::{Duration, Instant};

/// Frame rate the game logic is tuned for (tick-based countdowns assume it).
pub const TARGET_FPS: u32 = 60;

/// Frame timing snapshot.
#[derive(Debug, Copy, Clone)]
pub struct FrameTime {
    /// Time elapsed since the previous tick, in seconds, clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,

    /// Monotonic frame counter.
    pub frame_index: u64,
}

/// Fixed-rate frame pacer.
///
/// Call [`tick`](Self::tick) at the top of every frame and
/// [`wait`](Self::wait) after the draw phase to hold the target rate.
/// Headless runs simply skip `wait`.
///
/// Delta time is clamped so a stall (debugger, minimized window) does not
/// surface as one enormous frame.
#[derive(Debug, Clone)]
pub struct FramePacer {
    target: Duration,
    last: Instant,
    frame_index: u64,
    dt_max: Duration,
}

impl FramePacer {
    /// Creates a pacer for `fps` frames per second (minimum 1).
    pub fn new(fps: u32) -> Self {
        Self::with_target(Duration::from_secs(1) / fps.max(1))
    }

    pub fn with_target(target: Duration) -> Self {
        Self {
            target,
            last: Instant::now(),
            frame_index: 0,
            dt_max: Duration::from_millis(250),
        }
    }

    #[inline]
    pub fn target(&self) -> Duration {
        self.target
    }

    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }

    /// Advances the pacer and returns a new `FrameTime`.
    pub fn tick(&mut self) -> FrameTime {
        let now = Instant::now();
        let dt = now.saturating_duration_since(self.last).min(self.dt_max);
        self.last = now;

        let ft = FrameTime {
            dt: dt.as_secs_f32(),
            now,
            frame_index: self.frame_index,
        };
        self.frame_index = self.frame_index.wrapping_add(1);
        ft
    }

    /// Portion of the frame budget left after `busy` time was spent.
    #[inline]
    pub fn remaining(&self, busy: Duration) -> Duration {
        self.target.saturating_sub(busy)
    }

    /// Sleeps until one target interval has passed since the last `tick`.
    pub fn wait(&self) {
        let left = self.remaining(self.last.elapsed());
        if !left.is_zero() {
            std::thread::sleep(left);
        }
    }
}

impl Default for FramePacer {
    fn default() -> Self {
        Self::new(TARGET_FPS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sixty_fps_budget() {
        let p = FramePacer::new(60);
        assert_eq!(p.target(), Duration::from_secs(1) / 60);
    }

    #[test]
    fn zero_fps_is_treated_as_one() {
        assert_eq!(FramePacer::new(0).target(), Duration::from_secs(1));
    }

    #[test]
    fn remaining_saturates_at_zero() {
        let p = FramePacer::with_target(Duration::from_millis(16));
        assert_eq!(p.remaining(Duration::from_millis(10)), Duration::from_millis(6));
        assert_eq!(p.remaining(Duration::from_millis(40)), Duration::ZERO);
    }

    #[test]
    fn tick_counts_frames() {
        let mut p = FramePacer::default();
        assert_eq!(p.tick().frame_index, 0);
        let ft = p.tick();
        assert_eq!(ft.frame_index, 1);
        assert!(ft.dt >= 0.0 && ft.dt <= 0.25);
        assert_eq!(p.frame_index(), 2);
    }
}
