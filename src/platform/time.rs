//! Frame pacing

use std::time::{Duration, Instant};

/// Paces the frame loop
pub trait FrameClock {
    /// Block until the next frame is due at `target_fps`.
    /// Returns the time since the previous tick.
    fn tick(&mut self, target_fps: u32) -> Duration;
}

/// Wall-clock pacing by sleeping off the rest of each frame
#[derive(Debug, Default)]
pub struct FixedRateClock {
    last: Option<Instant>,
}

impl FixedRateClock {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FrameClock for FixedRateClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        let frame = Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)));
        let Some(last) = self.last else {
            self.last = Some(Instant::now());
            return Duration::ZERO;
        };
        let busy = last.elapsed();
        if busy < frame {
            std::thread::sleep(frame - busy);
        }
        let now = Instant::now();
        self.last = Some(now);
        now - last
    }
}

/// Never blocks; reports a nominal frame time. For headless runs and tests.
#[derive(Debug, Default)]
pub struct ManualClock {
    pub ticks: u64,
}

impl FrameClock for ManualClock {
    fn tick(&mut self, target_fps: u32) -> Duration {
        self.ticks += 1;
        Duration::from_secs_f64(1.0 / f64::from(target_fps.max(1)))
    }
}
