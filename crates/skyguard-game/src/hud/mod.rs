//! Heads-up display.
//!
//! Responsibilities:
//! - lay out the stat lines at fixed offsets down the left edge
//! - color each line from thresholds on the current [`GameState`]
//! - own the [`NotificationQueue`] and draw its visible item
//!
//! Layout is recomputed from scratch every frame; the only state kept between
//! frames is the notification queue.

pub mod notify;

use skyguard_engine::coords::Vec2;
use skyguard_engine::paint::Color;
use skyguard_engine::raster::TextSurface;
use skyguard_engine::text::FontId;

use crate::config::GameConfig;
use crate::state::{Defense, GameState};

pub use notify::{CountdownScope, Notification, NotificationKind, NotificationQueue};

/// Left margin of every HUD line.
pub const HUD_X: f32 = 10.0;

/// Vertical offsets of the eight HUD lines, top to bottom.
pub const LINE_OFFSETS: [f32; 8] = [10.0, 40.0, 70.0, 100.0, 130.0, 160.0, 190.0, 220.0];

pub const TICKS_PER_SECOND: u32 = 60;

pub const STARTUP_NOTICES: [&str; 2] = [
    "DEFENSE SYSTEMS ONLINE - PRESS C FOR CYBER ATTACK",
    "PRESS C FOR CYBER ATTACK | SPACE TO FIRE | ESC TO PAUSE",
];

/// One laid-out line of HUD text.
#[derive(Debug, Clone, PartialEq)]
pub struct HudLine {
    pub text: String,
    pub color: Color,
    pub origin: Vec2,
}

pub struct HudPresenter {
    font: FontId,
    font_size: f32,
    notification_font_size: f32,
    notifications: NotificationQueue,
}

impl HudPresenter {
    /// Creates the presenter and queues the startup announcements.
    pub fn new(font: FontId, config: &GameConfig) -> Self {
        let mut notifications = NotificationQueue::new(config.notification_ticks, config.countdown_scope);
        for text in STARTUP_NOTICES {
            notifications.enqueue(text, NotificationKind::Cyber);
        }
        Self {
            font,
            font_size: config.hud_font_size,
            notification_font_size: config.notification_font_size,
            notifications,
        }
    }

    #[inline]
    pub fn notifications(&self) -> &NotificationQueue {
        &self.notifications
    }

    pub fn show_notification(&mut self, text: impl Into<String>, kind: NotificationKind) {
        self.notifications.enqueue(text, kind);
    }

    /// Update-phase step: ages the notification queue by one tick.
    #[inline]
    pub fn tick(&mut self) {
        self.notifications.tick();
    }

    /// Computes every HUD line for `state`.
    pub fn layout(state: &GameState) -> Vec<HudLine> {
        let d = &state.defense;
        let live = state.aircraft.len();

        let heat_color = if d.is_overheated() { Color::RED } else { Color::LIGHT_CORAL };

        let (wave_text, wave_color) = if state.wave.active {
            (format!("REMAINING: {}", state.wave.enemies_remaining()), Color::RED)
        } else {
            let secs = ticks_to_seconds(state.wave.spawn_timer);
            (format!("NEXT WAVE IN: {secs}s"), countdown_color(secs))
        };

        let (cyber_text, cyber_color) = if state.cyber_cooldown > 0 {
            (format!("CYBER: {}s", ticks_to_seconds(state.cyber_cooldown)), Color::LIGHT_CORAL)
        } else {
            ("CYBER: READY".to_string(), Color::CYAN)
        };

        let rows = [
            (format!("HEALTH: {}", d.health.floor() as i64), Color::WHITE),
            (format!("HEAT: {}%", heat_percent(d)), heat_color),
            (format!("SCORE: {}", state.score), Color::LIME_GREEN),
            (format!("DESTROYED: {}", state.planes_destroyed), Color::LIME_GREEN),
            (
                format!(
                    "ENEMIES: {} | AIR SUPERIORITY: {}%",
                    live,
                    air_superiority(live, state.enemy_limit)
                ),
                Color::CYAN,
            ),
            (format!("WAVE: {}", state.wave.number), Color::YELLOW),
            (wave_text, wave_color),
            (cyber_text, cyber_color),
        ];

        rows.into_iter()
            .zip(LINE_OFFSETS)
            .map(|((text, color), y)| HudLine { text, color, origin: Vec2::new(HUD_X, y) })
            .collect()
    }

    /// Draws the stat lines, then the visible notification.
    pub fn draw<S: TextSurface + ?Sized>(&self, state: &GameState, surface: &mut S) {
        for line in Self::layout(state) {
            surface.draw_text(self.font, &line.text, line.origin, self.font_size, line.color);
        }
        self.notifications.draw(surface, self.font, self.notification_font_size);
    }
}

/// Floored heat percentage. Zero when `max_heat` is not positive.
pub fn heat_percent(defense: &Defense) -> i64 {
    if defense.max_heat.is_nan() || defense.max_heat <= 0.0 {
        return 0;
    }
    (defense.heat * 100.0 / defense.max_heat).floor() as i64
}

/// Floored `max(0, 100 - live / limit · 100)`.
///
/// A zero limit reads 100 % with no enemies and 0 % otherwise.
pub fn air_superiority(live: usize, limit: u32) -> i64 {
    if limit == 0 {
        return if live == 0 { 100 } else { 0 };
    }
    let pct = 100.0 - live as f32 * 100.0 / limit as f32;
    pct.max(0.0).floor() as i64
}

/// Whole seconds, rounded up.
#[inline]
pub fn ticks_to_seconds(ticks: u32) -> u32 {
    ticks.div_ceil(TICKS_PER_SECOND)
}

/// Next-wave countdown tiers: urgent, warning, normal.
pub fn countdown_color(seconds: u32) -> Color {
    if seconds <= 10 {
        Color::RED
    } else if seconds <= 20 {
        Color::YELLOW
    } else {
        Color::CYAN
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skyguard_engine::scene::DrawList;

    use crate::state::{Aircraft, AircraftKind};

    fn fighter() -> Aircraft {
        Aircraft {
            position: Vec2::new(0.0, 0.0),
            size: 10.0,
            health: 350.0,
            kind: AircraftKind::Fighter,
            color: Color::WHITE,
        }
    }

    fn texts(state: &GameState) -> Vec<String> {
        HudPresenter::layout(state).into_iter().map(|l| l.text).collect()
    }

    // ── derived values ────────────────────────────────────────────────────

    #[test]
    fn heat_percent_floors_and_guards_zero_max() {
        let mut d = Defense::default();
        d.heat = 33.9;
        assert_eq!(heat_percent(&d), 33);
        d.max_heat = 0.0;
        assert_eq!(heat_percent(&d), 0);
    }

    #[test]
    fn air_superiority_clamps_at_zero() {
        assert_eq!(air_superiority(0, 20), 100);
        assert_eq!(air_superiority(5, 20), 75);
        assert_eq!(air_superiority(3, 7), 57);
        assert_eq!(air_superiority(40, 20), 0);
        assert_eq!(air_superiority(0, 0), 100);
        assert_eq!(air_superiority(1, 0), 0);
    }

    #[test]
    fn seconds_round_up() {
        assert_eq!(ticks_to_seconds(0), 0);
        assert_eq!(ticks_to_seconds(1), 1);
        assert_eq!(ticks_to_seconds(60), 1);
        assert_eq!(ticks_to_seconds(61), 2);
    }

    #[test]
    fn countdown_tiers() {
        assert_eq!(countdown_color(10), Color::RED);
        assert_eq!(countdown_color(11), Color::YELLOW);
        assert_eq!(countdown_color(20), Color::YELLOW);
        assert_eq!(countdown_color(21), Color::CYAN);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn lines_sit_at_fixed_offsets() {
        let lines = HudPresenter::layout(&GameState::default());
        assert_eq!(lines.len(), 8);
        for (line, y) in lines.iter().zip(LINE_OFFSETS) {
            assert_eq!(line.origin, Vec2::new(HUD_X, y));
        }
    }

    #[test]
    fn stat_text_reflects_state() {
        let mut s = GameState::default();
        s.defense.health = 87.6;
        s.score = 1200;
        s.planes_destroyed = 4;
        s.wave.number = 3;
        s.aircraft = vec![fighter(), fighter()];
        s.enemy_limit = 8;

        let t = texts(&s);
        assert_eq!(t[0], "HEALTH: 87");
        assert_eq!(t[2], "SCORE: 1200");
        assert_eq!(t[3], "DESTROYED: 4");
        assert_eq!(t[4], "ENEMIES: 2 | AIR SUPERIORITY: 75%");
        assert_eq!(t[5], "WAVE: 3");
    }

    #[test]
    fn heat_line_warns_above_threshold() {
        let mut s = GameState::default();
        s.defense.heat = 90.0;
        let line = &HudPresenter::layout(&s)[1];
        assert_eq!(line.text, "HEAT: 90%");
        assert_eq!(line.color, Color::RED);

        s.defense.heat = 50.0;
        assert_eq!(HudPresenter::layout(&s)[1].color, Color::LIGHT_CORAL);
    }

    #[test]
    fn wave_line_switches_between_remaining_and_countdown() {
        let mut s = GameState::default();
        s.wave.active = true;
        s.wave.total_enemies = 10;
        s.wave.enemies_spawned = 4;
        let line = &HudPresenter::layout(&s)[6];
        assert_eq!(line.text, "REMAINING: 6");
        assert_eq!(line.color, Color::RED);

        s.wave.active = false;
        s.wave.spawn_timer = 1201;
        let line = &HudPresenter::layout(&s)[6];
        assert_eq!(line.text, "NEXT WAVE IN: 21s");
        assert_eq!(line.color, Color::CYAN);
    }

    #[test]
    fn cyber_line_reports_ready_or_cooldown() {
        let mut s = GameState::default();
        assert_eq!(HudPresenter::layout(&s)[7].text, "CYBER: READY");
        s.cyber_cooldown = 90;
        let line = &HudPresenter::layout(&s)[7];
        assert_eq!(line.text, "CYBER: 2s");
        assert_eq!(line.color, Color::LIGHT_CORAL);
    }

    // ── presenter ─────────────────────────────────────────────────────────

    #[test]
    fn startup_announcements_are_queued() {
        let hud = HudPresenter::new(FontId(0), &GameConfig::default());
        assert_eq!(hud.notifications().len(), 2);
        let head = hud.notifications().head().unwrap();
        assert_eq!(head.text, STARTUP_NOTICES[0]);
        assert_eq!(head.kind, NotificationKind::Cyber);
    }

    #[test]
    fn draw_emits_stats_then_notification() {
        let cfg = GameConfig::default();
        let hud = HudPresenter::new(FontId(3), &cfg);
        let mut list = DrawList::new();
        hud.draw(&GameState::default(), &mut list);

        let texts: Vec<_> = list.texts().collect();
        assert_eq!(texts.len(), 9);
        assert!(texts.iter().all(|t| t.font == FontId(3)));
        assert_eq!(texts[0].size, cfg.hud_font_size);
        let last = texts[8];
        assert_eq!(last.text, STARTUP_NOTICES[0]);
        assert_eq!(last.color, Color::CYAN);
        assert_eq!(last.size, cfg.notification_font_size);
    }
}
