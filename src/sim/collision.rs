//! Collision detection and response
//!
//! Three kinds of contact:
//! - ball vs axis-aligned box (elastic reflection per axis)
//! - fighter vs fighter (energy transfer plus a fixed repulsion)
//! - ball vs rotating ring (tangential reflection plus ring drag)
//!
//! None of these resolve simultaneous contacts jointly. Pairs and rings are
//! handled one at a time in list order and their corrections accumulate, so
//! a ball touching several others in one frame sees order-dependent results.

use glam::Vec2;

use super::arc::RotatingArc;
use super::state::{Ball, Bounds, Fighter, RingBall};
use crate::consts::{CONTACT_EPSILON, CONTACT_IMPULSE, ENERGY_TRANSFER, FLASH_FRAMES};

/// Clamp a ball back inside `bounds`, negating the velocity component of
/// every edge it crossed. Returns true if any edge was hit.
pub fn reflect_in_bounds(ball: &mut Ball, bounds: &Bounds) -> bool {
    let mut hit = false;
    if ball.pos.x - ball.radius < bounds.left {
        ball.pos.x = bounds.left + ball.radius;
        ball.vel.x = -ball.vel.x;
        hit = true;
    }
    if ball.pos.x + ball.radius > bounds.right {
        ball.pos.x = bounds.right - ball.radius;
        ball.vel.x = -ball.vel.x;
        hit = true;
    }
    if ball.pos.y - ball.radius < bounds.top {
        ball.pos.y = bounds.top + ball.radius;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    if ball.pos.y + ball.radius > bounds.bottom {
        ball.pos.y = bounds.bottom - ball.radius;
        ball.vel.y = -ball.vel.y;
        hit = true;
    }
    hit
}

/// Outcome of one fighter pair check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PairContact {
    pub touched: bool,
    pub first_eliminated: bool,
    pub second_eliminated: bool,
}

/// Resolve contact between two fighters.
///
/// The larger ball takes `ENERGY_TRANSFER` from the smaller one; on equal
/// radii `second` counts as larger. Both get pushed apart by a fixed
/// impulse along the line between centers.
pub fn collide_fighters(first: &mut Fighter, second: &mut Fighter) -> PairContact {
    if !first.alive || !second.alive {
        return PairContact::default();
    }
    let offset = first.ball.pos - second.ball.pos;
    let dist = offset.length();
    if dist >= first.ball.radius + second.ball.radius {
        return PairContact::default();
    }

    first.flash = FLASH_FRAMES;
    second.flash = FLASH_FRAMES;

    if first.ball.radius > second.ball.radius {
        first.energy += ENERGY_TRANSFER;
        second.energy -= ENERGY_TRANSFER;
    } else {
        second.energy += ENERGY_TRANSFER;
        first.energy -= ENERGY_TRANSFER;
    }

    let dir = offset / (dist + CONTACT_EPSILON);
    first.ball.vel += dir * CONTACT_IMPULSE;
    second.ball.vel -= dir * CONTACT_IMPULSE;

    PairContact {
        touched: true,
        first_eliminated: first.check_elimination(),
        second_eliminated: second.check_elimination(),
    }
}

/// Summary of one frame of pairwise resolution
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactReport {
    pub contacts: usize,
    /// Ids of fighters eliminated this frame
    pub eliminated: Vec<u32>,
}

/// Check every unordered pair of fighters once, in index order:
/// (0,1), (0,2), ..., (0,n-1), (1,2), ...
pub fn resolve_fighter_contacts(fighters: &mut [Fighter]) -> ContactReport {
    let mut report = ContactReport::default();
    for i in 0..fighters.len() {
        let (head, tail) = fighters.split_at_mut(i + 1);
        let first = &mut head[i];
        for second in tail.iter_mut() {
            let contact = collide_fighters(first, second);
            if !contact.touched {
                continue;
            }
            report.contacts += 1;
            if contact.first_eliminated {
                report.eliminated.push(first.id);
            }
            if contact.second_eliminated {
                report.eliminated.push(second.id);
            }
        }
    }
    report
}

/// Reflect `vel` about the line along `tangent`: the tangential component
/// is kept and the normal component reversed (`2(v·t̂)t̂ - v`).
///
/// `tangent` need not be unit length but must be non-zero.
#[inline]
pub fn reflect_about_tangent(vel: Vec2, tangent: Vec2) -> Vec2 {
    let along = tangent * (vel.dot(tangent) / tangent.length_squared());
    2.0 * along - vel
}

/// What a ring did to the ball this frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RingContact {
    /// Ball is clear of the ring radius
    Clear,
    /// Ball reached the ring inside its open span
    Passed,
    /// Ball hit the solid part and was bounced back
    Bounced,
}

/// Resolve the ball against one rotating ring.
///
/// When the ball reaches the ring radius outside the open span it is put back
/// on the ring, its velocity is reflected about the local tangent, and the
/// ring's surface velocity is added. `is_in` ends up true whenever the ball
/// reached the ring.
pub fn ring_collision(rider: &mut RingBall, center: Vec2, arc: &RotatingArc) -> RingContact {
    let offset = rider.ball.pos - center;
    let dist = offset.length();
    if dist + rider.ball.radius <= arc.radius {
        return RingContact::Clear;
    }

    if arc.is_open_at(center, rider.ball.pos) {
        rider.is_in = false;
    }

    let contact = match offset.try_normalize() {
        Some(dir) if rider.is_in => {
            rider.ball.pos = center + dir * (arc.radius - rider.ball.radius);
            let tangent = offset.perp();
            rider.ball.vel = reflect_about_tangent(rider.ball.vel, tangent);
            rider.ball.vel += arc.surface_velocity(offset);
            RingContact::Bounced
        }
        _ => RingContact::Passed,
    };
    rider.is_in = true;
    contact
}
