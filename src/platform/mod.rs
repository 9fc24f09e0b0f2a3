//! Platform layer
//!
//! Owns the frame loop: poll input, advance the active demo by one step,
//! hand the frame to a renderer, then wait for the next frame. The clock,
//! the input source and the renderer are all injected so the loop runs the
//! same way headless as it does on screen.

pub mod input;
pub mod time;

pub use input::{InputEvent, InputSource, NoInput, QuitAfter};
pub use time::{FixedRateClock, FrameClock, ManualClock};

use crate::ConfigurationError;
use crate::consts::TARGET_FPS;
use crate::renderer::Renderer;
use crate::renderer::scene;
use crate::settings::Settings;
use crate::sim::{
    ArenaState, GravityBoxState, RingsState, tick_arena, tick_gravity_box, tick_rings,
};

/// One of the three demos, ready to run
#[derive(Debug, Clone)]
pub enum Demo {
    Arena(ArenaState),
    GravityBox(GravityBoxState),
    Rings(RingsState),
}

impl Demo {
    /// All three demos built from `settings`, in presentation order
    pub fn all(settings: &Settings) -> Result<Vec<Demo>, ConfigurationError> {
        Ok(vec![
            Demo::Arena(ArenaState::new(&settings.arena)?),
            Demo::GravityBox(GravityBoxState::new(&settings.gravity_box)?),
            Demo::Rings(RingsState::new(&settings.rings)?),
        ])
    }

    pub fn name(&self) -> &'static str {
        match self {
            Demo::Arena(_) => "Arena Battle",
            Demo::GravityBox(_) => "Gravity Box",
            Demo::Rings(_) => "Rotating Arcs",
        }
    }

    /// Frames simulated so far
    pub fn frame(&self) -> u64 {
        match self {
            Demo::Arena(s) => s.frame,
            Demo::GravityBox(s) => s.frame,
            Demo::Rings(s) => s.frame,
        }
    }

    /// Advance one frame
    pub fn tick(&mut self) {
        match self {
            Demo::Arena(s) => {
                tick_arena(s);
            }
            Demo::GravityBox(s) => {
                tick_gravity_box(s);
            }
            Demo::Rings(s) => tick_rings(s),
        }
    }

    /// Issue this frame's draw commands. Does not present.
    pub fn draw(&self, renderer: &mut impl Renderer) {
        match self {
            Demo::Arena(s) => scene::draw_arena(s, renderer),
            Demo::GravityBox(s) => scene::draw_gravity_box(s, renderer),
            Demo::Rings(s) => scene::draw_rings(s, renderer),
        }
    }

    /// One-line status for logs
    pub fn summary(&self) -> String {
        match self {
            Demo::Arena(s) => match s.champion {
                Some(id) => format!("champion #{id} after {} frames", s.frame),
                None => format!("{} of {} still fighting", s.alive_count(), s.fighters.len()),
            },
            Demo::GravityBox(s) => format!("ball at ({:.1}, {:.1})", s.ball.pos.x, s.ball.pos.y),
            Demo::Rings(s) => format!("{} respawns", s.respawns),
        }
    }
}

/// Run `demo` until the input source asks to quit.
///
/// Each frame polls input, ticks the demo, draws it, presents and then
/// waits on the clock. A quit request still completes the frame it arrives
/// in. Returns the number of frames run.
pub fn run<R, C, I>(demo: &mut Demo, renderer: &mut R, clock: &mut C, input: &mut I) -> u64
where
    R: Renderer,
    C: FrameClock,
    I: InputSource,
{
    log::info!("Starting {}", demo.name());
    let mut frames = 0u64;
    loop {
        let quit = matches!(input.poll(), Some(InputEvent::Quit));

        demo.tick();
        demo.draw(renderer);
        renderer.present();
        frames += 1;

        clock.tick(TARGET_FPS);

        if quit {
            break;
        }
    }
    log::info!("{} stopped after {} frames: {}", demo.name(), frames, demo.summary());
    frames
}
