//! Recorded draw streams.
//!
//! Responsibilities:
//! - capture the exact sequence of surface calls made during a frame
//! - replay a recording onto any other text surface
//!
//! A `DrawList` is itself a [`TextSurface`](crate::raster::TextSurface), so any
//! renderer can draw into it unchanged. Tests use it to inspect output without
//! a pixel target.

mod cmd;
mod list;

pub use cmd::{CompositeCmd, DrawCmd, RectCmd, TextCmd};
pub use list::{DrawList, RECORDED_ADVANCE};
