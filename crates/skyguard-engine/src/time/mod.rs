//! Time subsystem.
//!
//! Provides a testable fixed-rate frame pacer without coupling to any
//! windowing runtime. The game's countdowns are tick-based and assume
//! [`TARGET_FPS`].

mod frame_pacer;

pub use frame_pacer::{FramePacer, FrameTime, TARGET_FPS};
