//! Bounce Arenas entry point
//!
//! Runs the three demos one after another, each for a fixed number of
//! frames at 60 fps, tessellating every frame on the CPU.

use std::time::{SystemTime, UNIX_EPOCH};

use bounce_arenas::Settings;
use bounce_arenas::platform::{self, Demo, FixedRateClock, QuitAfter};
use bounce_arenas::renderer::MeshRenderer;

/// Ten seconds per demo
const DEMO_FRAMES: u64 = 600;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(bounce_arenas::settings::DEFAULT_SEED);
    log::info!("Bounce Arenas starting with seed {seed:#x}");

    // Optional settings file as the only argument
    let settings = match std::env::args().nth(1) {
        Some(path) => match Settings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("Failed to load settings from {path}: {e}");
                std::process::exit(1);
            }
        },
        None => Settings::default().with_seed(seed),
    };
    let demos = match Demo::all(&settings) {
        Ok(demos) => demos,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let mut renderer = MeshRenderer::new();
    for mut demo in demos {
        let mut clock = FixedRateClock::new();
        let mut input = QuitAfter::new(DEMO_FRAMES);
        platform::run(&mut demo, &mut renderer, &mut clock, &mut input);
        log::info!(
            "{}: last frame had {} vertices",
            demo.name(),
            renderer.vertices().len()
        );
    }
    log::info!("Presented {} frames in total", renderer.frames());
}
