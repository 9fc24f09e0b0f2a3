//! Deterministic simulation module
//!
//! All physics lives here. This module must be pure and deterministic:
//! - One unit step per frame
//! - Seeded RNG only, owned by each demo state
//! - Stable iteration order (fighters by id, rings innermost first)
//! - No rendering or platform dependencies

pub mod arc;
pub mod collision;
pub mod personality;
pub mod state;
pub mod tick;

pub use arc::{RotatingArc, is_ball_in_arc};
pub use collision::{
    ContactReport, PairContact, RingContact, collide_fighters, reflect_about_tangent,
    reflect_in_bounds, resolve_fighter_contacts, ring_collision,
};
pub use personality::Personality;
pub use state::{
    ArenaState, BALL_COLORS, Ball, Bounds, Fighter, GravityBoxState, RingBall, RingsState,
};
pub use tick::{tick_arena, tick_gravity_box, tick_rings};
