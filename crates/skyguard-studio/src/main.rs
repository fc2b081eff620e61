mod config;
mod demo;

use std::time::Instant;

use anyhow::{Context, Result};
use log::{info, warn};
use skyguard_engine::logging::{LoggingConfig, init_logging};
use skyguard_engine::paint::Color;
use skyguard_engine::raster::{Canvas, PixelBuffer};
use skyguard_engine::text::{FontId, FontSystem};
use skyguard_engine::time::FramePacer;
use skyguard_game::Game;
use skyguard_game::hud::NotificationKind;
use skyguard_game::state::{CANVAS_HEIGHT, CANVAS_WIDTH};

use config::{StudioConfig, config_path};

fn main() -> Result<()> {
    let path = config_path();
    let (cfg, config_warning) = StudioConfig::load(&path);

    init_logging(LoggingConfig { env_filter: cfg.log_filter.clone(), ..LoggingConfig::default() });
    if let Some(w) = config_warning {
        warn!("{w}");
    }

    // Startup banner.
    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          SKYGUARD STUDIO v0.1          ║");
    println!("  ║   software raster  ·  headless frames  ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let mut fonts = FontSystem::new();
    let font = match cfg.read_font() {
        Some((font_path, bytes)) => {
            let id = fonts
                .load_font(&bytes)
                .with_context(|| format!("loading font {}", font_path.display()))?;
            info!("font: {}", font_path.display());
            id
        }
        None => {
            warn!("no readable font in {:?}; HUD text will not be drawn", cfg.font_paths);
            FontId::default()
        }
    };

    let mut game = Game::new(font, &cfg.game);
    let mut state = demo::initial_state();
    let mut pixels = PixelBuffer::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    let mut pacer = FramePacer::default();

    info!("rendering {} frames (realtime: {})", cfg.frames, cfg.realtime);
    let started = Instant::now();

    for _ in 0..cfg.frames {
        let ft = pacer.tick();
        demo::advance(&mut state, ft.frame_index);
        if ft.frame_index == 150 {
            game.show_notification("WAVE 1 INCOMING", NotificationKind::Wave);
        }

        pixels.clear(Color::BLACK);
        game.frame(&mut state, &mut Canvas::new(&mut pixels, &fonts));

        if cfg.realtime {
            pacer.wait();
        }
    }

    let elapsed = started.elapsed();
    let fps = if elapsed.as_secs_f64() > 0.0 { game.frames() as f64 / elapsed.as_secs_f64() } else { 0.0 };
    info!("{} frames in {:.2?} ({:.1} fps)", game.frames(), elapsed, fps);

    export_png(&pixels, &cfg.output)?;
    info!("wrote {}", cfg.output.display());
    Ok(())
}

fn export_png(pixels: &PixelBuffer, path: &std::path::Path) -> Result<()> {
    let image = image::RgbaImage::from_raw(
        pixels.width() as u32,
        pixels.height() as u32,
        pixels.as_bytes().to_vec(),
    )
    .context("pixel buffer size does not match its dimensions")?;
    image.save(path).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
