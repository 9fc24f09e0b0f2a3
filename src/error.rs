//! Startup configuration errors.
//!
//! Per-frame simulation steps never fail; everything that can make the
//! boundary math undefined is rejected when a simulation is built.

use thiserror::Error;

/// Error type for building a simulation from settings.
#[derive(Debug, Error)]
pub enum ConfigurationError {
    /// Window width or height is zero or negative.
    #[error("window dimensions must be positive (got {width}x{height})")]
    NonPositiveWindow { width: f32, height: f32 },
    /// Arena or square side is zero or negative.
    #[error("{what} size must be positive (got {size})")]
    NonPositiveArena { what: &'static str, size: f32 },
    /// Arena or square does not fit inside the window.
    #[error("{what} size {size} does not fit in a {width}x{height} window")]
    ArenaExceedsWindow {
        what: &'static str,
        size: f32,
        width: f32,
        height: f32,
    },
    /// Largest ball cannot be placed inside the arena.
    #[error("arena size {size} cannot hold a ball of radius {radius}")]
    ArenaTooSmall { size: f32, radius: f32 },
    /// A value is infinite or NaN.
    #[error("{what} must be finite (got {value})")]
    NonFinite { what: &'static str, value: f32 },
    /// More balls than the arena supports.
    #[error("too many balls: {count} (at most {max})")]
    TooManyBalls { count: usize, max: usize },
    /// An angle or rotation step is outside its allowed magnitude.
    #[error("{what} {value} is outside [-{limit}, {limit}]")]
    AngleOutOfRange {
        what: &'static str,
        value: f32,
        limit: f32,
    },
    /// No balls or no rings to simulate.
    #[error("empty entity set: {0}")]
    EmptyEntitySet(&'static str),
    /// Radius range outside the allowed clamp or inverted.
    #[error("invalid radius range [{min}, {max}]")]
    InvalidRadiusRange { min: f32, max: f32 },
    /// Ball radius is zero or negative.
    #[error("ball radius must be positive (got {0})")]
    NonPositiveRadius(f32),
    /// A random range has min > max or a width that overflows.
    #[error("invalid {what} range [{min}, {max}]")]
    InvalidRange {
        what: &'static str,
        min: f32,
        max: f32,
    },
    /// A ring is too tight to hold the ball.
    #[error("ring radius {ring} must exceed ball radius {ball}")]
    RingTooSmall { ring: f32, ball: f32 },
    /// I/O error while reading a settings file.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Settings file is not valid JSON for the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
