//! Starfall desktop entry point.
//!
//! Single-screen property-animation demo: six buttons along the top each
//! trigger one animation of the star sprite on the stage below. Keys 1-6
//! fire the triggers, S saves a screenshot, Escape quits.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::Result;

use starfall_backend_sdl::SdlBackend;
use starfall_core::backend::{InputBackend, RenderBackend};
use starfall_core::config::StarfallConfig;
use starfall_core::screen::{DemoScreen, ScreenAction};
use starfall_core::star;
use starfall_core::theme::Theme;

/// Frame-time clamp so a stalled frame cannot teleport animations.
const MAX_DT_MS: u32 = 100;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting Starfall ({}x{})",
        config.screen_width,
        config.screen_height,
    );

    let mut backend = SdlBackend::new(
        &config.window_title,
        config.screen_width,
        config.screen_height,
    )?;
    backend.init(config.screen_width, config.screen_height)?;

    let star_tex = {
        let pixels = star::generate_pixels(config.star_size, Theme::dark().star);
        backend.load_texture(config.star_size, config.star_size, &pixels)?
    };
    log::info!("Star texture generated ({0}x{0})", config.star_size);

    let mut screen = DemoScreen::new(
        config.screen_width,
        config.screen_height,
        config.star_size,
        star_tex,
    );

    let mut last_frame = Instant::now();
    let mut shot_counter = 0u32;
    'running: loop {
        let now = Instant::now();
        let dt_ms = (now.duration_since(last_frame).as_millis() as u32).min(MAX_DT_MS);
        last_frame = now;

        for event in backend.poll_events() {
            match screen.handle_event(&event)? {
                ScreenAction::Quit => break 'running,
                ScreenAction::Screenshot => {
                    shot_counter += 1;
                    let path = PathBuf::from(format!("starfall_{shot_counter:03}.png"));
                    capture(&mut backend, &screen, &config, &path)?;
                    log::info!("Saved {}", path.display());
                },
                ScreenAction::Continue => {},
            }
        }

        screen.tick(dt_ms)?;

        screen.draw(&mut backend)?;
        backend.swap_buffers()?;
    }

    screen.cancel_all()?;
    backend.shutdown()?;
    log::info!("Starfall shut down cleanly");
    Ok(())
}

/// Resolve the config file: `STARFALL_CONFIG` env var, else `starfall.toml`
/// in the working directory, else defaults.
fn load_config() -> Result<StarfallConfig> {
    let path = std::env::var("STARFALL_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("starfall.toml"));
    Ok(StarfallConfig::load_or_default(&path)?)
}

/// Render the current screen into `path` as a PNG.
fn capture(
    backend: &mut SdlBackend,
    screen: &DemoScreen,
    config: &StarfallConfig,
    path: &Path,
) -> Result<()> {
    // Render again after swap so read_pixels sees the presented frame.
    screen.draw(backend)?;
    backend.swap_buffers()?;
    screen.draw(backend)?;

    let pixels = backend.read_pixels(0, 0, config.screen_width, config.screen_height)?;
    save_png(path, config.screen_width, config.screen_height, &pixels)
}

/// Save RGBA pixel data as a PNG file.
fn save_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> Result<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
