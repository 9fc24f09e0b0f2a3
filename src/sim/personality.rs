//! Per-fighter behavior tags for the battle arena
//!
//! Each fighter gets one personality at creation. It nudges velocity or
//! radius once per frame, before integration.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::consts::{FIGHTER_RADIUS_CEIL, FIGHTER_RADIUS_FLOOR};

/// Velocity multiplier applied every frame to speedy fighters (uncapped)
pub const SPEEDY_GAIN: f32 = 1.01;
/// Per-frame chance of a jumper impulse
pub const JUMP_CHANCE: f64 = 0.01;
/// Jumper impulse range per axis
pub const JUMP_IMPULSE: f32 = 4.0;
/// Per-frame radius change for growers and shrinkers
pub const RADIUS_DRIFT: f32 = 0.01;
/// Per-frame chance of a crazy velocity reroll
pub const CRAZY_CHANCE: f64 = 0.03;
/// Crazy velocity range per axis
pub const CRAZY_SPEED: f32 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Personality {
    Speedy,
    Jumper,
    Grower,
    Shrinker,
    Crazy,
}

impl Personality {
    pub const ALL: [Personality; 5] = [
        Personality::Speedy,
        Personality::Jumper,
        Personality::Grower,
        Personality::Shrinker,
        Personality::Crazy,
    ];

    /// Uniform pick over all personalities
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Personality::Speedy => "speedy",
            Personality::Jumper => "jumper",
            Personality::Grower => "grower",
            Personality::Shrinker => "shrinker",
            Personality::Crazy => "crazy",
        }
    }

    /// Apply one frame of this personality.
    ///
    /// Speedy compounds without a cap, unlike the clamped radius drift of
    /// growers and shrinkers.
    pub fn apply<R: Rng>(&self, vel: &mut Vec2, radius: &mut f32, rng: &mut R) {
        match self {
            Personality::Speedy => *vel *= SPEEDY_GAIN,
            Personality::Jumper => {
                if rng.random_bool(JUMP_CHANCE) {
                    *vel += random_vec(rng, JUMP_IMPULSE);
                }
            }
            Personality::Grower => *radius = (*radius + RADIUS_DRIFT).min(FIGHTER_RADIUS_CEIL),
            Personality::Shrinker => *radius = (*radius - RADIUS_DRIFT).max(FIGHTER_RADIUS_FLOOR),
            Personality::Crazy => {
                if rng.random_bool(CRAZY_CHANCE) {
                    *vel = random_vec(rng, CRAZY_SPEED);
                }
            }
        }
    }
}

/// Uniform vector in [-extent, extent]²
fn random_vec<R: Rng>(rng: &mut R, extent: f32) -> Vec2 {
    Vec2::new(
        rng.random_range(-extent..=extent),
        rng.random_range(-extent..=extent),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_speedy_compounds() {
        let mut rng = Pcg32::seed_from_u64(1);
        let mut vel = Vec2::new(3.0, -4.0);
        let mut radius = 20.0;
        for _ in 0..100 {
            Personality::Speedy.apply(&mut vel, &mut radius, &mut rng);
        }
        // 1.01^100 ≈ 2.7048
        assert!((vel.length() - 5.0 * 1.01_f32.powi(100)).abs() < 0.01);
        assert_eq!(radius, 20.0);
    }

    #[test]
    fn test_grower_stops_at_ceiling() {
        let mut rng = Pcg32::seed_from_u64(2);
        let mut vel = Vec2::ONE;
        let mut radius = 49.995;
        Personality::Grower.apply(&mut vel, &mut radius, &mut rng);
        assert_eq!(radius, FIGHTER_RADIUS_CEIL);
        Personality::Grower.apply(&mut vel, &mut radius, &mut rng);
        assert_eq!(radius, FIGHTER_RADIUS_CEIL);
        assert_eq!(vel, Vec2::ONE);
    }

    #[test]
    fn test_crazy_stays_in_range() {
        let mut rng = Pcg32::seed_from_u64(3);
        let mut vel = Vec2::new(100.0, 100.0);
        let mut radius = 20.0;
        let mut rerolled = false;
        for _ in 0..2000 {
            Personality::Crazy.apply(&mut vel, &mut radius, &mut rng);
            if vel != Vec2::new(100.0, 100.0) {
                rerolled = true;
                assert!(vel.x.abs() <= CRAZY_SPEED && vel.y.abs() <= CRAZY_SPEED);
            }
        }
        assert!(rerolled, "3% chance over 2000 frames should fire");
    }

    #[test]
    fn test_jumper_impulse_is_bounded() {
        let mut rng = Pcg32::seed_from_u64(4);
        let mut radius = 20.0;
        for _ in 0..2000 {
            let mut vel = Vec2::ZERO;
            Personality::Jumper.apply(&mut vel, &mut radius, &mut rng);
            assert!(vel.x.abs() <= JUMP_IMPULSE && vel.y.abs() <= JUMP_IMPULSE);
        }
    }

    #[test]
    fn test_random_covers_all() {
        let mut rng = Pcg32::seed_from_u64(5);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let p = Personality::random(&mut rng);
            let idx = Personality::ALL.iter().position(|q| *q == p).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    proptest! {
        #[test]
        fn radius_drift_stays_clamped(
            start in FIGHTER_RADIUS_FLOOR..=FIGHTER_RADIUS_CEIL,
            frames in 0usize..6000,
            grow in any::<bool>(),
        ) {
            let mut rng = Pcg32::seed_from_u64(6);
            let personality = if grow { Personality::Grower } else { Personality::Shrinker };
            let mut vel = Vec2::ZERO;
            let mut radius = start;
            for _ in 0..frames {
                personality.apply(&mut vel, &mut radius, &mut rng);
                prop_assert!((FIGHTER_RADIUS_FLOOR..=FIGHTER_RADIUS_CEIL).contains(&radius));
            }
        }
    }
}
