//! What each demo looks like, expressed as draw commands

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::colors::WHITE;
use super::{Rect, Renderer};
use crate::consts::WEDGE_REACH;
use crate::polar_to_cartesian;
use crate::sim::{ArenaState, GravityBoxState, RingsState, RotatingArc};

/// Energy above which a fighter wears a halo
const HALO_ENERGY: f64 = 1.2;
const RING_THICKNESS: f32 = 3.0;
/// Alpha of the open-span wedge overlay
const WEDGE_ALPHA: f32 = 0.15;

pub fn draw_arena(state: &ArenaState, renderer: &mut impl Renderer) {
    // Outline pulses between 2 and 10 px, whole pixels only
    let pulse = (6.0 + 4.0 * (state.pulse_time * 2.0).sin()).trunc();
    renderer.rect_outline(Rect::from(state.bounds), pulse, WHITE);

    for fighter in state.alive() {
        let ball = &fighter.ball;
        let color = if fighter.flash > 0 { WHITE } else { ball.color };
        renderer.fill_circle(ball.pos, ball.radius, color);
        if fighter.energy > HALO_ENERGY {
            renderer.circle_outline(ball.pos, ball.radius + 6.0, 2.0, WHITE);
        }
    }

    if let Some(champion) = state.champion_fighter() {
        let ball = &champion.ball;
        renderer.circle_outline(ball.pos, ball.radius + 20.0, 6.0, WHITE);
        let banner = Vec2::new(state.width / 2.0, state.height / 2.0 - 40.0);
        renderer.text(banner, "Champion!", 60.0, WHITE);
    }
}

pub fn draw_gravity_box(state: &GravityBoxState, renderer: &mut impl Renderer) {
    renderer.rect_outline(Rect::from(state.bounds), 3.0, WHITE);
    renderer.fill_circle(state.ball.pos, state.ball.radius, state.ball.color);
}

pub fn draw_rings(state: &RingsState, renderer: &mut impl Renderer) {
    for ring in &state.rings {
        draw_solid_part(state.center, ring, renderer);
        let mut tint = ring.color;
        tint[3] = WEDGE_ALPHA;
        renderer.fill_polygon(&ring.opening_wedge(state.center, WEDGE_REACH), tint);
    }
    let ball = &state.rider.ball;
    renderer.fill_circle(ball.pos, ball.radius, ball.color);
}

/// Polyline along the ring from the end of the opening round to its start
fn draw_solid_part(center: Vec2, ring: &RotatingArc, renderer: &mut impl Renderer) {
    let sweep = TAU - ring.angular_span();
    let steps = ((sweep / TAU) * 96.0).round().max(2.0) as usize;
    // Centerline of the band so the stroke sits inside the ring radius
    let r = ring.radius - RING_THICKNESS / 2.0;
    let point = |i: usize| {
        let theta = ring.end_angle + sweep * i as f32 / steps as f32;
        center + polar_to_cartesian(r, theta)
    };
    for i in 0..steps {
        renderer.line(point(i), point(i + 1), RING_THICKNESS, ring.color);
    }
}
