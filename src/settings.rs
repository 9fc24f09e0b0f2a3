//! Startup settings for the three demos
//!
//! Defaults reproduce the classic constants. Settings can also be read from a
//! JSON file; every section is validated before a simulation is built.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigurationError;

/// Seed used when no explicit seed is given
pub const DEFAULT_SEED: u64 = 0x5EED;

/// RGBA color in 0..1
pub type Rgba = [f32; 4];

fn check_finite(what: &'static str, value: f32) -> Result<(), ConfigurationError> {
    if !value.is_finite() {
        return Err(ConfigurationError::NonFinite { what, value });
    }
    Ok(())
}

fn check_window(width: f32, height: f32) -> Result<(), ConfigurationError> {
    // `!(x > 0.0)` also rejects NaN
    if !(width > 0.0) || !(height > 0.0) {
        return Err(ConfigurationError::NonPositiveWindow { width, height });
    }
    check_finite("window width", width)?;
    check_finite("window height", height)
}

fn check_square(
    what: &'static str,
    size: f32,
    width: f32,
    height: f32,
) -> Result<(), ConfigurationError> {
    if !(size > 0.0) {
        return Err(ConfigurationError::NonPositiveArena { what, size });
    }
    if size > width.min(height) {
        return Err(ConfigurationError::ArenaExceedsWindow {
            what,
            size,
            width,
            height,
        });
    }
    Ok(())
}

fn check_radius(radius: f32) -> Result<(), ConfigurationError> {
    if !(radius > 0.0) {
        return Err(ConfigurationError::NonPositiveRadius(radius));
    }
    check_finite("ball radius", radius)
}

/// Both ends finite, ordered, and sampleable without overflow
fn check_range(what: &'static str, range: [f32; 2]) -> Result<(), ConfigurationError> {
    let [min, max] = range;
    check_finite(what, min)?;
    check_finite(what, max)?;
    if !(min <= max) || !(max - min).is_finite() {
        return Err(ConfigurationError::InvalidRange { what, min, max });
    }
    Ok(())
}

fn check_angle(what: &'static str, value: f32, limit: f32) -> Result<(), ConfigurationError> {
    check_finite(what, value)?;
    if value.abs() > limit {
        return Err(ConfigurationError::AngleOutOfRange { what, value, limit });
    }
    Ok(())
}

/// Battle arena settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaSettings {
    pub width: f32,
    pub height: f32,
    /// Side of the square arena, centered in the window
    pub arena_size: f32,
    pub ball_count: usize,
    /// Initial radius range (inclusive, whole pixels)
    pub radius_min: u32,
    pub radius_max: u32,
    /// Initial speed range; heading is uniform over the full turn
    pub speed_min: f32,
    pub speed_max: f32,
    pub seed: u64,
}

impl Default for ArenaSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            arena_size: ARENA_SIZE,
            ball_count: ARENA_BALL_COUNT,
            radius_min: ARENA_RADIUS_MIN,
            radius_max: ARENA_RADIUS_MAX,
            speed_min: ARENA_SPEED_MIN,
            speed_max: ARENA_SPEED_MAX,
            seed: DEFAULT_SEED,
        }
    }
}

impl ArenaSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_window(self.width, self.height)?;
        check_square("arena", self.arena_size, self.width, self.height)?;
        if self.ball_count == 0 {
            return Err(ConfigurationError::EmptyEntitySet("arena has no balls"));
        }
        if self.ball_count > ARENA_MAX_BALLS {
            return Err(ConfigurationError::TooManyBalls {
                count: self.ball_count,
                max: ARENA_MAX_BALLS,
            });
        }
        let (min, max) = (self.radius_min as f32, self.radius_max as f32);
        if min < FIGHTER_RADIUS_FLOOR || max > FIGHTER_RADIUS_CEIL || min > max {
            return Err(ConfigurationError::InvalidRadiusRange { min, max });
        }
        if self.arena_size <= 2.0 * max {
            return Err(ConfigurationError::ArenaTooSmall {
                size: self.arena_size,
                radius: max,
            });
        }
        check_range("speed", [self.speed_min, self.speed_max])
    }
}

/// Gravity box settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GravityBoxSettings {
    pub width: f32,
    pub height: f32,
    /// Side of the square boundary, centered in the window
    pub square_size: f32,
    pub ball_radius: f32,
    /// Launch velocity from the window center
    pub start_velocity: [f32; 2],
    /// Added to the vertical velocity every frame
    pub gravity: f32,
    pub seed: u64,
}

impl Default for GravityBoxSettings {
    fn default() -> Self {
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            square_size: SQUARE_SIZE,
            ball_radius: BOX_BALL_RADIUS,
            start_velocity: BOX_START_VELOCITY,
            gravity: BOX_GRAVITY,
            seed: DEFAULT_SEED,
        }
    }
}

impl GravityBoxSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_window(self.width, self.height)?;
        check_square("square", self.square_size, self.width, self.height)?;
        check_radius(self.ball_radius)?;
        if self.square_size <= 2.0 * self.ball_radius {
            return Err(ConfigurationError::ArenaTooSmall {
                size: self.square_size,
                radius: self.ball_radius,
            });
        }
        let [vx, vy] = self.start_velocity;
        check_finite("start x velocity", vx)?;
        check_finite("start y velocity", vy)?;
        check_finite("gravity", self.gravity)
    }
}

/// One rotating ring: solid everywhere except its open span
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingSettings {
    pub radius: f32,
    /// Open span, in degrees
    pub start_deg: f32,
    pub end_deg: f32,
    /// Rotation per frame (radians)
    pub spin: f32,
    pub color: Rgba,
}

/// Rotating rings settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RingsSettings {
    pub width: f32,
    pub height: f32,
    pub ball_radius: f32,
    /// Restart point sits this far above the ring center
    pub start_offset: f32,
    pub gravity: f32,
    /// Respawn velocity ranges (inclusive)
    pub respawn_vx: [f32; 2],
    pub respawn_vy: [f32; 2],
    pub rings: Vec<RingSettings>,
    pub seed: u64,
}

impl Default for RingsSettings {
    fn default() -> Self {
        let ring = |radius, start_deg, end_deg, color| RingSettings {
            radius,
            start_deg,
            end_deg,
            spin: RING_SPIN,
            color,
        };
        Self {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            ball_radius: RING_BALL_RADIUS,
            start_offset: RING_START_OFFSET,
            gravity: RING_GRAVITY,
            respawn_vx: RESPAWN_VX,
            respawn_vy: RESPAWN_VY,
            rings: vec![
                ring(150.0, -30.0, 30.0, [1.0, 165.0 / 255.0, 0.0, 1.0]),
                ring(200.0, 60.0, 120.0, [1.0, 0.0, 0.0, 1.0]),
                ring(250.0, 150.0, 210.0, [0.0, 1.0, 0.0, 1.0]),
            ],
            seed: DEFAULT_SEED,
        }
    }
}

impl RingsSettings {
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_window(self.width, self.height)?;
        check_radius(self.ball_radius)?;
        check_finite("start offset", self.start_offset)?;
        check_finite("gravity", self.gravity)?;
        if self.rings.is_empty() {
            return Err(ConfigurationError::EmptyEntitySet("no rings"));
        }
        for ring in &self.rings {
            if !(ring.radius > self.ball_radius) {
                return Err(ConfigurationError::RingTooSmall {
                    ring: ring.radius,
                    ball: self.ball_radius,
                });
            }
            check_finite("ring radius", ring.radius)?;
            check_angle("ring start angle", ring.start_deg, RING_MAX_DEGREES)?;
            check_angle("ring end angle", ring.end_deg, RING_MAX_DEGREES)?;
            check_angle("ring spin", ring.spin, RING_MAX_SPIN)?;
        }
        check_range("respawn x velocity", self.respawn_vx)?;
        check_range("respawn y velocity", self.respawn_vy)
    }
}

/// All demo settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub arena: ArenaSettings,
    pub gravity_box: GravityBoxSettings,
    pub rings: RingsSettings,
}

impl Settings {
    /// Use one seed for every demo
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.arena.seed = seed;
        self.gravity_box.seed = seed;
        self.rings.seed = seed;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigurationError> {
        self.arena.validate()?;
        self.gravity_box.validate()?;
        self.rings.validate()
    }

    /// Parse and validate settings from JSON; missing fields take defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigurationError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigurationError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json_str(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_non_positive_window_rejected() {
        let arena = ArenaSettings {
            width: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            arena.validate(),
            Err(ConfigurationError::NonPositiveWindow { .. })
        ));

        let gbox = GravityBoxSettings {
            height: -5.0,
            ..Default::default()
        };
        assert!(matches!(
            gbox.validate(),
            Err(ConfigurationError::NonPositiveWindow { .. })
        ));
    }

    #[test]
    fn test_empty_entity_sets_rejected() {
        let arena = ArenaSettings {
            ball_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            arena.validate(),
            Err(ConfigurationError::EmptyEntitySet(_))
        ));

        let rings = RingsSettings {
            rings: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(
            rings.validate(),
            Err(ConfigurationError::EmptyEntitySet(_))
        ));
    }

    #[test]
    fn test_arena_must_hold_largest_ball() {
        let arena = ArenaSettings {
            arena_size: 50.0,
            ..Default::default()
        };
        assert!(matches!(
            arena.validate(),
            Err(ConfigurationError::ArenaTooSmall { .. })
        ));
    }

    #[test]
    fn test_radius_range_must_sit_inside_clamp() {
        let arena = ArenaSettings {
            radius_min: 5,
            ..Default::default()
        };
        assert!(matches!(
            arena.validate(),
            Err(ConfigurationError::InvalidRadiusRange { .. })
        ));
    }

    #[test]
    fn test_from_json_partial_uses_defaults() {
        let settings = Settings::from_json_str(r#"{"arena": {"ball_count": 3, "seed": 7}}"#)
            .expect("valid json");
        assert_eq!(settings.arena.ball_count, 3);
        assert_eq!(settings.arena.seed, 7);
        assert_eq!(settings.arena.arena_size, ARENA_SIZE);
        assert_eq!(settings.rings.rings.len(), 3);
    }

    #[test]
    fn test_from_json_rejects_invalid() {
        assert!(matches!(
            Settings::from_json_str(r#"{"gravity_box": {"square_size": 0.0}}"#),
            Err(ConfigurationError::NonPositiveArena { .. })
        ));
        assert!(matches!(
            Settings::from_json_str("not json"),
            Err(ConfigurationError::Parse(_))
        ));
    }

    #[test]
    fn test_overflowing_json_numbers_rejected() {
        // 1e39 does not fit in an f32 and parses as infinity
        assert!(matches!(
            Settings::from_json_str(r#"{"arena": {"speed_min": 1e39, "speed_max": 1e39}}"#),
            Err(ConfigurationError::NonFinite { .. })
        ));
        assert!(matches!(
            Settings::from_json_str(r#"{"rings": {"respawn_vx": [-3e38, 3e38]}}"#),
            Err(ConfigurationError::InvalidRange { .. })
        ));
        assert!(matches!(
            Settings::from_json_str(r#"{"gravity_box": {"gravity": 1e39}}"#),
            Err(ConfigurationError::NonFinite { .. })
        ));
        assert!(matches!(
            Settings::from_json_str(r#"{"rings": {"start_offset": -1e39}}"#),
            Err(ConfigurationError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_ring_angles_bounded() {
        let mut rings = RingsSettings::default();
        rings.rings[0].start_deg = 1e12;
        assert!(matches!(
            rings.validate(),
            Err(ConfigurationError::AngleOutOfRange { .. })
        ));

        let mut rings = RingsSettings::default();
        rings.rings[1].spin = f32::INFINITY;
        assert!(matches!(
            rings.validate(),
            Err(ConfigurationError::NonFinite { .. })
        ));

        let mut rings = RingsSettings::default();
        rings.rings[2].end_deg = -360.0;
        assert!(rings.validate().is_ok());
    }

    #[test]
    fn test_ball_count_bounded() {
        let arena = ArenaSettings {
            ball_count: ARENA_MAX_BALLS + 1,
            ..Default::default()
        };
        assert!(matches!(
            arena.validate(),
            Err(ConfigurationError::TooManyBalls { .. })
        ));
        let arena = ArenaSettings {
            ball_count: ARENA_MAX_BALLS,
            ..Default::default()
        };
        assert!(arena.validate().is_ok());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        assert!(matches!(
            Settings::load("/nonexistent/bounce-arenas.json"),
            Err(ConfigurationError::Io(_))
        ));
    }
}
