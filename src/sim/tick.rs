//! One-frame simulation steps
//!
//! Every demo advances by exactly one unit step per frame. There is no
//! physical time unit, so behavior depends on the frame rate.

use super::collision::{
    ContactReport, reflect_in_bounds, resolve_fighter_contacts, ring_collision,
};
use super::state::{ArenaState, GravityBoxState, RingsState};
use crate::consts::ARENA_PULSE_STEP;

/// Advance the battle arena by one frame.
///
/// Order: champion check, per-fighter personality + integration + wall
/// reflection, then pairwise contacts.
pub fn tick_arena(state: &mut ArenaState) -> ContactReport {
    state.frame += 1;
    state.pulse_time += ARENA_PULSE_STEP;

    if state.champion.is_none() {
        let survivor = {
            let mut alive = state.alive();
            match (alive.next(), alive.next()) {
                (Some(last), None) => Some((last.id, last.personality)),
                _ => None,
            }
        };
        if let Some((id, personality)) = survivor {
            state.champion = Some(id);
            log::info!(
                "Champion decided on frame {}: ball {} ({})",
                state.frame,
                id,
                personality.as_str()
            );
        }
    }

    let ArenaState {
        fighters,
        bounds,
        rng,
        ..
    } = state;
    for fighter in fighters.iter_mut().filter(|f| f.alive) {
        fighter
            .personality
            .apply(&mut fighter.ball.vel, &mut fighter.ball.radius, rng);
        fighter.ball.integrate();
        reflect_in_bounds(&mut fighter.ball, bounds);
        fighter.flash = fighter.flash.saturating_sub(1);
    }

    let report = resolve_fighter_contacts(fighters);
    for id in &report.eliminated {
        log::debug!("Ball {} eliminated on frame {}", id, state.frame);
    }
    report
}

/// Advance the gravity box by one frame. Returns true if a wall was hit.
pub fn tick_gravity_box(state: &mut GravityBoxState) -> bool {
    state.frame += 1;
    state.ball.apply_gravity(state.gravity);
    state.ball.integrate();
    reflect_in_bounds(&mut state.ball, &state.bounds)
}

/// Advance the rotating rings by one frame.
///
/// Rings rotate first, then the ball falls and moves. A ball that left the
/// window is respawned before the ring checks. Every ring is then checked
/// independently, innermost first, and may correct the ball in the same frame.
pub fn tick_rings(state: &mut RingsState) {
    state.frame += 1;
    for ring in &mut state.rings {
        ring.rotate();
    }

    let ball = &mut state.rider.ball;
    ball.apply_gravity(state.gravity);
    ball.integrate();

    if state.out_of_play() {
        state.respawn();
    }

    for ring in &state.rings {
        let contact = ring_collision(&mut state.rider, state.center, ring);
        log::trace!("Frame {} ring r={}: {:?}", state.frame, ring.radius, contact);
    }
}
