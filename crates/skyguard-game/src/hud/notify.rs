//! Timed on-screen messages.
//!
//! A FIFO where every item carries a countdown in update ticks. Only the head
//! is ever shown; it is dropped once its countdown reaches zero.

use std::collections::VecDeque;

use log::debug;
use serde::{Deserialize, Serialize};
use skyguard_engine::coords::Vec2;
use skyguard_engine::paint::Color;
use skyguard_engine::raster::TextSurface;
use skyguard_engine::text::FontId;

use crate::state::{CANVAS_HEIGHT, CANVAS_WIDTH};

pub const DEFAULT_NOTIFICATION_TICKS: u32 = 120;

/// Which queued items count down on each [`NotificationQueue::tick`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownScope {
    /// Every queued item ages, including those waiting behind the head.
    /// Items behind the head still leave one per tick at most.
    #[default]
    AllQueued,
    /// Only the visible head ages; waiting items keep their full time.
    HeadOnly,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    /// Cyber ability events. Highlighted.
    Cyber,
    Wave,
    General,
}

impl NotificationKind {
    #[inline]
    pub const fn color(self) -> Color {
        match self {
            NotificationKind::Cyber => Color::CYAN,
            NotificationKind::Wave | NotificationKind::General => Color::YELLOW,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub text: String,
    pub kind: NotificationKind,
    /// Ticks left. May go negative for items aged behind the head.
    pub remaining: i32,
}

#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    initial_ticks: i32,
    scope: CountdownScope,
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new(DEFAULT_NOTIFICATION_TICKS, CountdownScope::default())
    }
}

impl NotificationQueue {
    pub fn new(initial_ticks: u32, scope: CountdownScope) -> Self {
        Self {
            items: VecDeque::new(),
            initial_ticks: i32::try_from(initial_ticks).unwrap_or(i32::MAX),
            scope,
        }
    }

    /// Appends a message with the full initial countdown.
    pub fn enqueue(&mut self, text: impl Into<String>, kind: NotificationKind) {
        let text = text.into();
        debug!("notification queued ({:?}): {}", kind, text);
        self.items.push_back(Notification { text, kind, remaining: self.initial_ticks });
    }

    /// Advances countdowns by one tick, then drops the head if it expired.
    pub fn tick(&mut self) {
        match self.scope {
            CountdownScope::AllQueued => {
                for n in &mut self.items {
                    n.remaining = n.remaining.saturating_sub(1);
                }
            }
            CountdownScope::HeadOnly => {
                if let Some(n) = self.items.front_mut() {
                    n.remaining = n.remaining.saturating_sub(1);
                }
            }
        }

        if self.items.front().is_some_and(|n| n.remaining <= 0) {
            if let Some(n) = self.items.pop_front() {
                debug!("notification expired: {}", n.text);
            }
        }
    }

    /// The currently visible message.
    #[inline]
    pub fn head(&self) -> Option<&Notification> {
        self.items.front()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Top-left origin that centers a text box of `extent` on the canvas.
    #[inline]
    pub fn anchor(extent: Vec2) -> Vec2 {
        Vec2::new(
            (CANVAS_WIDTH as f32 - extent.x) / 2.0,
            (CANVAS_HEIGHT as f32 - extent.y) / 2.0,
        )
    }

    /// Draws the head item, if any, centered on the canvas.
    pub fn draw<S: TextSurface + ?Sized>(&self, surface: &mut S, font: FontId, size: f32) {
        if let Some(n) = self.head() {
            let extent = surface.measure_text(font, &n.text, size);
            surface.draw_text(font, &n.text, Self::anchor(extent), size, n.kind.color());
        }
    }
}
