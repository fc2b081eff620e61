use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use skyguard_game::config::GameConfig;

pub const DEFAULT_CONFIG_FILE: &str = "skyguard.ron";

/// Studio run settings. Loaded from `skyguard.ron` or the path given as the
/// first command-line argument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudioConfig {
    /// Frames to render before exporting.
    #[serde(default = "default_frames")]
    pub frames: u32,
    /// Pace frames at 60 Hz instead of rendering as fast as possible.
    #[serde(default)]
    pub realtime: bool,
    /// PNG path for the last frame.
    #[serde(default = "default_output")]
    pub output: PathBuf,
    /// Font candidates, first readable one wins.
    #[serde(default = "default_font_paths")]
    pub font_paths: Vec<PathBuf>,
    /// `env_logger` filter; falls back to `RUST_LOG`, then `info`.
    #[serde(default)]
    pub log_filter: Option<String>,
    #[serde(default)]
    pub game: GameConfig,
}

fn default_frames() -> u32 {
    180
}
fn default_output() -> PathBuf {
    PathBuf::from("skyguard-frame.png")
}
fn default_font_paths() -> Vec<PathBuf> {
    [
        "/usr/share/fonts/TTF/DejaVuSans.ttf",
        "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/dejavu/DejaVuSans.ttf",
        "/usr/share/fonts/noto/NotoSans-Regular.ttf",
        "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    ]
    .iter()
    .map(PathBuf::from)
    .collect()
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            frames: default_frames(),
            realtime: false,
            output: default_output(),
            font_paths: default_font_paths(),
            log_filter: None,
            game: GameConfig::default(),
        }
    }
}

impl StudioConfig {
    /// Loads `path`. Missing file gives defaults; an unreadable or invalid
    /// one warns and gives defaults.
    ///
    /// Runs before the logger is installed, so the warning is returned
    /// rather than logged.
    pub fn load(path: &Path) -> (Self, Option<String>) {
        if !path.exists() {
            return (Self::default(), None);
        }
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) => {
                return (Self::default(), Some(format!("cannot read config at {:?}: {}, using defaults", path, e)));
            }
        };
        match ron::from_str(&data) {
            Ok(c) => (c, None),
            Err(e) => (Self::default(), Some(format!("invalid config at {:?}: {}, using defaults", path, e))),
        }
    }

    /// First readable font among `font_paths`.
    pub fn read_font(&self) -> Option<(PathBuf, Vec<u8>)> {
        self.font_paths
            .iter()
            .find_map(|p| std::fs::read(p).ok().map(|bytes| (p.clone(), bytes)))
    }
}

/// Config path from the command line, or the default file name.
pub fn config_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}
