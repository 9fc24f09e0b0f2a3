//! Bounce Arenas - three small 2D ball physics demos
//!
//! Core modules:
//! - `sim`: Deterministic simulation (integration, collisions, per-demo state)
//! - `renderer`: Draw-command collaborator and CPU tessellation
//! - `platform`: Frame clock, input polling and the frame loop
//! - `settings`: Startup configuration with validation

pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigurationError;
pub use settings::Settings;

use glam::Vec2;

/// Demo configuration constants
pub mod consts {
    /// Frame loop target rate
    pub const TARGET_FPS: u32 = 60;

    /// Window dimensions shared by all three demos
    pub const WINDOW_WIDTH: f32 = 800.0;
    pub const WINDOW_HEIGHT: f32 = 800.0;

    /// Arena battle
    pub const ARENA_SIZE: f32 = 600.0;
    pub const ARENA_BALL_COUNT: usize = 8;
    pub const ARENA_MAX_BALLS: usize = 1024;
    pub const ARENA_RADIUS_MIN: u32 = 18;
    pub const ARENA_RADIUS_MAX: u32 = 28;
    pub const ARENA_SPEED_MIN: f32 = 3.0;
    pub const ARENA_SPEED_MAX: f32 = 6.0;
    /// Hard clamp for grower/shrinker radii
    pub const FIGHTER_RADIUS_FLOOR: f32 = 10.0;
    pub const FIGHTER_RADIUS_CEIL: f32 = 50.0;
    pub const FIGHTER_START_ENERGY: f64 = 1.0;
    /// Energy below this eliminates a fighter
    pub const FIGHTER_ELIMINATION_ENERGY: f64 = 0.5;
    /// Energy moved from the smaller to the larger ball per contact frame
    pub const ENERGY_TRANSFER: f64 = 0.1;
    /// Fixed repulsion applied to both balls on contact
    pub const CONTACT_IMPULSE: f32 = 2.0;
    /// Frames a ball stays highlighted after a contact
    pub const FLASH_FRAMES: u32 = 6;
    /// Guard added to the distance when normalizing the contact direction
    pub const CONTACT_EPSILON: f32 = 1e-6;
    /// Arena outline animation step per frame
    pub const ARENA_PULSE_STEP: f32 = 0.012;

    /// Gravity box
    pub const SQUARE_SIZE: f32 = 600.0;
    pub const BOX_BALL_RADIUS: f32 = 15.0;
    pub const BOX_START_VELOCITY: [f32; 2] = [4.0, 3.0];
    pub const BOX_GRAVITY: f32 = 0.15;

    /// Rotating rings
    pub const RING_BALL_RADIUS: f32 = 5.0;
    /// Start point sits this far above the ring center
    pub const RING_START_OFFSET: f32 = 120.0;
    pub const RING_GRAVITY: f32 = 0.2;
    /// Ring rotation per frame (radians)
    pub const RING_SPIN: f32 = 0.01;
    /// Largest accepted ring opening angle magnitude (degrees)
    pub const RING_MAX_DEGREES: f32 = 360.0;
    /// Largest accepted ring rotation per frame (radians)
    pub const RING_MAX_SPIN: f32 = std::f32::consts::PI;
    pub const RESPAWN_VX: [f32; 2] = [-4.0, 4.0];
    pub const RESPAWN_VY: [f32; 2] = [-1.0, 1.0];
    /// Reach of the open-span wedge beyond the ring radius when drawn
    pub const WEDGE_REACH: f32 = 1000.0;
}

/// Normalized angle to [-π, π)
#[inline]
pub fn normalize_angle(angle: f32) -> f32 {
    use std::f32::consts::{PI, TAU};
    let normalized = (angle + PI).rem_euclid(TAU) - PI;
    if normalized >= PI { -PI } else { normalized }
}

/// Wrapped angle to [0, 2π)
#[inline]
pub fn wrap_angle(angle: f32) -> f32 {
    use std::f32::consts::TAU;
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Convert polar (r, theta) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(r: f32, theta: f32) -> Vec2 {
    Vec2::new(r * theta.cos(), r * theta.sin())
}

/// Convert cartesian (x, y) to polar (r, theta)
#[inline]
pub fn cartesian_to_polar(pos: Vec2) -> (f32, f32) {
    (pos.length(), pos.y.atan2(pos.x))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f32::consts::{PI, TAU};

    #[test]
    fn test_polar_roundtrip_axis() {
        let p = polar_to_cartesian(10.0, PI / 2.0);
        assert!(p.x.abs() < 1e-5);
        assert!((p.y - 10.0).abs() < 1e-5);
        let (r, theta) = cartesian_to_polar(p);
        assert!((r - 10.0).abs() < 1e-5);
        assert!((theta - PI / 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_normalize_huge_angle_returns() {
        let n = normalize_angle(1e12);
        assert!((-PI..PI).contains(&n));
        assert!(normalize_angle(f32::INFINITY).is_nan());
    }

    #[test]
    fn test_normalize_angle_half_turns() {
        assert!((normalize_angle(3.0 * PI / 2.0) + PI / 2.0).abs() < 1e-5);
        assert!((normalize_angle(-PI / 4.0) + PI / 4.0).abs() < 1e-6);
    }

    #[test]
    fn test_wrap_angle_negative() {
        let a = wrap_angle(-30.0_f32.to_radians());
        assert!((a - 330.0_f32.to_radians()).abs() < 1e-5);
    }

    proptest! {
        #[test]
        fn wrap_angle_stays_in_turn(a in -100.0f32..100.0) {
            let w = wrap_angle(a);
            prop_assert!((0.0..TAU).contains(&w));
        }

        #[test]
        fn normalize_angle_stays_in_half_turns(a in -100.0f32..100.0) {
            let n = normalize_angle(a);
            prop_assert!((-PI..PI).contains(&n));
        }
    }
}
