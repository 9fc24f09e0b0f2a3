//! Simulation state for the three demos
//!
//! Each demo owns its entities, boundaries and seeded RNG. Nothing here is
//! global; the frame loop holds the state and passes it to `tick`.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use super::arc::RotatingArc;
use super::personality::Personality;
use crate::consts::*;
use crate::error::ConfigurationError;
use crate::polar_to_cartesian;
use crate::settings::{ArenaSettings, GravityBoxSettings, Rgba, RingsSettings};

/// Fighter palette, assigned by index
pub const BALL_COLORS: [Rgba; 8] = [
    rgb(255, 99, 71),
    rgb(30, 144, 255),
    rgb(50, 205, 50),
    rgb(255, 215, 0),
    rgb(148, 0, 211),
    rgb(255, 105, 180),
    rgb(255, 140, 0),
    rgb(0, 206, 209),
];

const fn rgb(r: u8, g: u8, b: u8) -> Rgba {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

fn random_color(rng: &mut Pcg32) -> Rgba {
    rgb(rng.random(), rng.random(), rng.random())
}

/// Axis-aligned play boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Bounds {
    /// Square of side `size` centered in a `width` x `height` window,
    /// snapped to whole pixels
    pub fn centered(width: f32, height: f32, size: f32) -> Self {
        let left = ((width - size) / 2.0).floor();
        let top = ((height - size) / 2.0).floor();
        Self {
            left,
            top,
            right: left + size,
            bottom: top + size,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// A moving circular body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    pub color: Rgba,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            pos,
            vel,
            radius,
            color,
        }
    }

    /// Explicit Euler step of one frame
    #[inline]
    pub fn integrate(&mut self) {
        self.pos += self.vel;
    }

    #[inline]
    pub fn apply_gravity(&mut self, gravity: f32) {
        self.vel.y += gravity;
    }
}

/// A battle arena ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fighter {
    pub id: u32,
    pub ball: Ball,
    /// f64: five transfers from the start value must stop at the threshold
    pub energy: f64,
    pub alive: bool,
    pub personality: Personality,
    /// Highlight frames left after a contact
    pub flash: u32,
}

impl Fighter {
    /// Random fighter placed fully inside `bounds`
    pub fn spawn(id: u32, settings: &ArenaSettings, bounds: &Bounds, rng: &mut Pcg32) -> Self {
        let radius = rng.random_range(settings.radius_min..=settings.radius_max) as f32;
        let pos = Vec2::new(
            rng.random_range(bounds.left + radius..=bounds.right - radius),
            rng.random_range(bounds.top + radius..=bounds.bottom - radius),
        );
        let heading = rng.random_range(0.0..TAU);
        let speed = rng.random_range(settings.speed_min..=settings.speed_max);
        let color = BALL_COLORS[id as usize % BALL_COLORS.len()];
        Self {
            id,
            ball: Ball::new(pos, polar_to_cartesian(speed, heading), radius, color),
            energy: FIGHTER_START_ENERGY,
            alive: true,
            personality: Personality::random(rng),
            flash: 0,
        }
    }

    /// Mark eliminated once energy drops below the threshold.
    /// Returns true on the frame the fighter goes down.
    pub fn check_elimination(&mut self) -> bool {
        if self.alive && self.energy < FIGHTER_ELIMINATION_ENERGY {
            self.alive = false;
            return true;
        }
        false
    }
}

/// Battle arena: fighters bounce in a square and drain each other on contact
#[derive(Debug, Clone)]
pub struct ArenaState {
    pub seed: u64,
    pub bounds: Bounds,
    /// Fighters in creation order (sorted by id)
    pub fighters: Vec<Fighter>,
    /// First fighter found alone in the arena
    pub champion: Option<u32>,
    pub frame: u64,
    /// Animation clock for the pulsing outline
    pub pulse_time: f32,
    pub width: f32,
    pub height: f32,
    pub rng: Pcg32,
}

impl ArenaState {
    pub fn new(settings: &ArenaSettings) -> Result<Self, ConfigurationError> {
        settings.validate()?;
        let bounds = Bounds::centered(settings.width, settings.height, settings.arena_size);
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        // ball_count is bounded by validation
        let fighters = (0..settings.ball_count)
            .map(|i| Fighter::spawn(i as u32, settings, &bounds, &mut rng))
            .collect();
        Ok(Self {
            seed: settings.seed,
            bounds,
            fighters,
            champion: None,
            frame: 0,
            pulse_time: 0.0,
            width: settings.width,
            height: settings.height,
            rng,
        })
    }

    pub fn alive(&self) -> impl Iterator<Item = &Fighter> {
        self.fighters.iter().filter(|f| f.alive)
    }

    pub fn alive_count(&self) -> usize {
        self.alive().count()
    }

    pub fn champion_fighter(&self) -> Option<&Fighter> {
        let id = self.champion?;
        self.fighters.iter().find(|f| f.id == id)
    }
}

/// Gravity box: one ball falling and bouncing in a square
#[derive(Debug, Clone)]
pub struct GravityBoxState {
    pub bounds: Bounds,
    pub ball: Ball,
    pub gravity: f32,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
}

impl GravityBoxState {
    pub fn new(settings: &GravityBoxSettings) -> Result<Self, ConfigurationError> {
        settings.validate()?;
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let center = Vec2::new(settings.width / 2.0, settings.height / 2.0);
        let ball = Ball::new(
            center,
            Vec2::from_array(settings.start_velocity),
            settings.ball_radius,
            random_color(&mut rng),
        );
        Ok(Self {
            bounds: Bounds::centered(settings.width, settings.height, settings.square_size),
            ball,
            gravity: settings.gravity,
            frame: 0,
            width: settings.width,
            height: settings.height,
        })
    }
}

/// The ball inside the rotating rings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RingBall {
    pub ball: Ball,
    /// Inside the ring being checked, as of the last check
    pub is_in: bool,
}

/// Rotating rings: one ball under gravity inside concentric spinning rings
#[derive(Debug, Clone)]
pub struct RingsState {
    pub center: Vec2,
    pub rider: RingBall,
    /// Ring boundaries, innermost first
    pub rings: Vec<RotatingArc>,
    pub gravity: f32,
    /// Fixed restart point
    pub start: Vec2,
    pub respawn_vx: [f32; 2],
    pub respawn_vy: [f32; 2],
    pub respawns: u32,
    pub frame: u64,
    pub width: f32,
    pub height: f32,
    pub rng: Pcg32,
}

impl RingsState {
    pub fn new(settings: &RingsSettings) -> Result<Self, ConfigurationError> {
        settings.validate()?;
        let mut rng = Pcg32::seed_from_u64(settings.seed);
        let center = Vec2::new(settings.width / 2.0, settings.height / 2.0);
        let start = center - Vec2::new(0.0, settings.start_offset);
        let rider = RingBall {
            ball: Ball::new(start, Vec2::ZERO, settings.ball_radius, random_color(&mut rng)),
            is_in: true,
        };
        Ok(Self {
            center,
            rider,
            rings: settings.rings.iter().map(RotatingArc::from_settings).collect(),
            gravity: settings.gravity,
            start,
            respawn_vx: settings.respawn_vx,
            respawn_vy: settings.respawn_vy,
            respawns: 0,
            frame: 0,
            width: settings.width,
            height: settings.height,
            rng,
        })
    }

    /// Outside the window rectangle [0, width] x [0, height]
    pub fn out_of_play(&self) -> bool {
        let p = self.rider.ball.pos;
        p.x < 0.0 || p.x > self.width || p.y < 0.0 || p.y > self.height
    }

    /// Put the ball back at the restart point with a fresh random velocity
    pub fn respawn(&mut self) {
        let [vx_min, vx_max] = self.respawn_vx;
        let [vy_min, vy_max] = self.respawn_vy;
        let vel = Vec2::new(
            self.rng.random_range(vx_min..=vx_max),
            self.rng.random_range(vy_min..=vy_max),
        );
        self.rider.ball.pos = self.start;
        self.rider.ball.vel = vel;
        self.respawns += 1;
        log::debug!("Ball respawned (#{}) with velocity {:?}", self.respawns, vel);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_centered() {
        let b = Bounds::centered(800.0, 800.0, 600.0);
        assert_eq!(b, Bounds { left: 100.0, top: 100.0, right: 700.0, bottom: 700.0 });
        let odd = Bounds::centered(801.0, 640.0, 600.0);
        assert_eq!(odd.left, 100.0);
        assert_eq!(odd.top, 20.0);
        assert_eq!(odd.width(), 600.0);
        assert_eq!(odd.height(), 600.0);
    }

    #[test]
    fn test_arena_spawn_inside_bounds() {
        let settings = ArenaSettings::default();
        let state = ArenaState::new(&settings).expect("valid settings");
        assert_eq!(state.fighters.len(), 8);
        for (i, f) in state.fighters.iter().enumerate() {
            assert_eq!(f.id, i as u32);
            assert!(f.alive);
            assert_eq!(f.energy, 1.0);
            assert_eq!(f.flash, 0);
            assert!((18.0..=28.0).contains(&f.ball.radius));
            assert_eq!(f.ball.radius.fract(), 0.0);
            assert!(f.ball.pos.x - f.ball.radius >= state.bounds.left);
            assert!(f.ball.pos.x + f.ball.radius <= state.bounds.right);
            assert!(f.ball.pos.y - f.ball.radius >= state.bounds.top);
            assert!(f.ball.pos.y + f.ball.radius <= state.bounds.bottom);
            let speed = f.ball.vel.length();
            assert!((3.0 - 1e-4..=6.0 + 1e-4).contains(&speed));
            assert_eq!(f.ball.color, BALL_COLORS[i]);
        }
    }

    #[test]
    fn test_arena_same_seed_same_fighters() {
        let settings = ArenaSettings {
            seed: 77,
            ..Default::default()
        };
        let a = ArenaState::new(&settings).unwrap();
        let b = ArenaState::new(&settings).unwrap();
        assert_eq!(
            serde_json::to_string(&a.fighters).unwrap(),
            serde_json::to_string(&b.fighters).unwrap()
        );
    }

    #[test]
    fn test_arena_rejects_empty() {
        let settings = ArenaSettings {
            ball_count: 0,
            ..Default::default()
        };
        assert!(matches!(
            ArenaState::new(&settings),
            Err(ConfigurationError::EmptyEntitySet(_))
        ));
    }

    #[test]
    fn test_arena_rejects_unbounded_speed() {
        let settings = ArenaSettings {
            speed_min: f32::INFINITY,
            speed_max: f32::INFINITY,
            ..Default::default()
        };
        assert!(matches!(
            ArenaState::new(&settings),
            Err(ConfigurationError::NonFinite { .. })
        ));
    }

    #[test]
    fn test_rings_reject_huge_angle_promptly() {
        let mut settings = RingsSettings::default();
        settings.rings[0].start_deg = 1e12;
        assert!(matches!(
            RingsState::new(&settings),
            Err(ConfigurationError::AngleOutOfRange { .. })
        ));
    }

    #[test]
    fn test_elimination_is_one_way() {
        let settings = ArenaSettings::default();
        let mut state = ArenaState::new(&settings).unwrap();
        let f = &mut state.fighters[0];
        f.energy = 0.55;
        assert!(!f.check_elimination());
        f.energy = 0.45;
        assert!(f.check_elimination());
        assert!(!f.alive);
        f.energy = 3.0;
        assert!(!f.check_elimination());
        assert!(!f.alive);
    }

    #[test]
    fn test_gravity_box_starts_centered() {
        let state = GravityBoxState::new(&GravityBoxSettings::default()).unwrap();
        assert_eq!(state.ball.pos, Vec2::new(400.0, 400.0));
        assert_eq!(state.ball.vel, Vec2::new(4.0, 3.0));
        assert_eq!(state.ball.radius, 15.0);
    }

    #[test]
    fn test_rings_start_point() {
        let state = RingsState::new(&RingsSettings::default()).unwrap();
        assert_eq!(state.start, Vec2::new(400.0, 280.0));
        assert_eq!(state.rider.ball.pos, state.start);
        assert_eq!(state.rider.ball.vel, Vec2::ZERO);
        assert!(state.rider.is_in);
        assert_eq!(state.rings.len(), 3);
        assert!(!state.out_of_play());
    }

    #[test]
    fn test_respawn_resets_position_and_draws_velocity() {
        let mut state = RingsState::new(&RingsSettings::default()).unwrap();
        state.rider.ball.pos = Vec2::new(-10.0, 900.0);
        assert!(state.out_of_play());
        state.respawn();
        assert_eq!(state.rider.ball.pos, state.start);
        let v = state.rider.ball.vel;
        assert!((-4.0..=4.0).contains(&v.x));
        assert!((-1.0..=1.0).contains(&v.y));
        assert_eq!(state.respawns, 1);
    }
}
