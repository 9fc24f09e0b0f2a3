//! Input polling

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Stop after the current frame
    Quit,
}

/// Non-blocking input source, polled once per frame
pub trait InputSource {
    fn poll(&mut self) -> Option<InputEvent>;
}

/// Never produces events
#[derive(Debug, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn poll(&mut self) -> Option<InputEvent> {
        None
    }
}

/// Quits on the `frames`-th poll
#[derive(Debug)]
pub struct QuitAfter {
    frames: u64,
    polled: u64,
}

impl QuitAfter {
    /// At least one frame always runs
    pub fn new(frames: u64) -> Self {
        Self {
            frames: frames.max(1),
            polled: 0,
        }
    }
}

impl InputSource for QuitAfter {
    fn poll(&mut self) -> Option<InputEvent> {
        self.polled += 1;
        (self.polled == self.frames).then_some(InputEvent::Quit)
    }
}
