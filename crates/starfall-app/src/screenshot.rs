//! Screenshot capture tool for the Starfall demo.
//!
//! Renders the demo screen idle and with each trigger mid-flight, saving
//! PNG screenshots to `screenshots/`.
//!
//! Usage:
//!   cargo run -p starfall-app --bin starfall-screenshot
//!
//! Output:
//!   screenshots/00_idle.png       -- Star at rest
//!   screenshots/01_rotate.png     -- Rotation mid-turn
//!   screenshots/02_translate.png  -- Star slid right
//!   screenshots/03_scale.png      -- Star enlarged
//!   screenshots/04_fade.png       -- Star half faded
//!   screenshots/05_colorize.png   -- Backdrop mid-tint
//!   screenshots/06_shower.png     -- Several sprites falling

use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;

use starfall_backend_sdl::SdlBackend;
use starfall_core::backend::RenderBackend;
use starfall_core::config::StarfallConfig;
use starfall_core::dispatcher::Trigger;
use starfall_core::screen::DemoScreen;
use starfall_core::star;
use starfall_core::theme::Theme;

/// Fixed seed so the shower frame is reproducible across runs.
const SEED: u64 = 2024;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = StarfallConfig::default();
    let (w, h) = (config.screen_width, config.screen_height);

    let mut backend = SdlBackend::new("Starfall Screenshot", w, h)?;
    backend.init(w, h)?;

    let star_tex = {
        let pixels = star::generate_pixels(config.star_size, Theme::dark().star);
        backend.load_texture(config.star_size, config.star_size, &pixels)?
    };

    let out_dir = Path::new("screenshots");
    fs::create_dir_all(out_dir)?;

    // Each state gets a fresh screen so earlier animations cannot bleed in.
    let states: [(&str, Option<Trigger>, u32); 7] = [
        ("00_idle.png", None, 0),
        ("01_rotate.png", Some(Trigger::Rotate), 300),
        ("02_translate.png", Some(Trigger::Translate), 250),
        ("03_scale.png", Some(Trigger::Scale), 600),
        ("04_fade.png", Some(Trigger::Fade), 500),
        ("05_colorize.png", Some(Trigger::Colorize), 400),
        ("06_shower.png", Some(Trigger::Shower), 600),
    ];

    for (name, trigger, dt_ms) in states {
        let mut screen =
            DemoScreen::with_rng(w, h, config.star_size, star_tex, StdRng::seed_from_u64(SEED));
        if let Some(trigger) = trigger {
            // Shower looks better with a few sprites in the air at once.
            let fires = if trigger == Trigger::Shower { 5 } else { 1 };
            for _ in 0..fires {
                screen.fire(trigger)?;
            }
            screen.tick(dt_ms)?;
        }
        render_and_save(&mut backend, &screen, w, h, &out_dir.join(name))?;
        log::info!("Saved {name}");
    }

    backend.shutdown()?;

    println!("Screenshots saved to {}/", out_dir.display());
    Ok(())
}

/// Render the screen and save a PNG of the frame.
fn render_and_save(
    backend: &mut SdlBackend,
    screen: &DemoScreen,
    w: u32,
    h: u32,
    path: &Path,
) -> anyhow::Result<()> {
    screen.draw(backend)?;
    backend.swap_buffers()?;

    // Need to render again after swap so read_pixels gets the presented frame.
    screen.draw(backend)?;

    let pixels = backend.read_pixels(0, 0, w, h)?;
    save_png(path, w, h, &pixels)
}

/// Save RGBA pixel data as a PNG file.
fn save_png(path: &Path, width: u32, height: u32, rgba: &[u8]) -> anyhow::Result<()> {
    let file = fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    let mut encoder = png::Encoder::new(writer, width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(rgba)?;
    Ok(())
}
