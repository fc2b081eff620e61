//! Presentation settings. Deserialized from RON, every field optional.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::hud::notify::CountdownScope;

/// Error returned by [`GameConfig::try_load`].
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(ron::error::SpannedError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config read error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::Parse(e)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Day-night phase advance per rendered frame.
    #[serde(default = "default_day_night_step")]
    pub day_night_step: f32,
    /// Initial countdown of each notification, in update ticks.
    #[serde(default = "default_notification_ticks")]
    pub notification_ticks: u32,
    /// Which queued notifications count down each tick.
    #[serde(default)]
    pub countdown_scope: CountdownScope,
    #[serde(default = "default_hud_font_size")]
    pub hud_font_size: f32,
    #[serde(default = "default_notification_font_size")]
    pub notification_font_size: f32,
}

fn default_day_night_step() -> f32 {
    0.00003
}
fn default_notification_ticks() -> u32 {
    120
}
fn default_hud_font_size() -> f32 {
    18.0
}
fn default_notification_font_size() -> f32 {
    22.0
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            day_night_step: default_day_night_step(),
            notification_ticks: default_notification_ticks(),
            countdown_scope: CountdownScope::default(),
            hud_font_size: default_hud_font_size(),
            notification_font_size: default_notification_font_size(),
        }
    }
}

impl GameConfig {
    pub fn from_ron_str(s: &str) -> Result<Self, ConfigError> {
        Ok(ron::from_str(s)?)
    }

    /// Reads and parses `path`.
    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path)?;
        Self::from_ron_str(&data)
    }

    /// Loads `path`, falling back to defaults if it is missing or invalid.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            log::debug!("no config at {:?}, using defaults", path);
            return Self::default();
        }
        match Self::try_load(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("invalid config at {:?}: {}, using defaults", path, e);
                Self::default()
            }
        }
    }

    pub fn to_ron_string(&self) -> String {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default()).unwrap_or_default()
    }
}
