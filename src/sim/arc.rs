//! Rotating ring geometry
//!
//! A ring is a full circle of radius `radius` around the play center that is
//! solid everywhere except its open span, which runs counter-clockwise from
//! `start_angle` to `end_angle`. Both angles advance by `spin` every frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use std::f32::consts::TAU;

use crate::settings::{RingSettings, Rgba};
use crate::{cartesian_to_polar, normalize_angle, polar_to_cartesian, wrap_angle};

/// A ring boundary with a rotating opening
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RotatingArc {
    pub radius: f32,
    /// Start of the open span (radians, normalized to [-π, π))
    pub start_angle: f32,
    /// End of the open span (radians, normalized to [-π, π))
    pub end_angle: f32,
    /// Rotation per frame (radians)
    pub spin: f32,
    pub color: Rgba,
}

impl RotatingArc {
    pub fn new(radius: f32, start_angle: f32, end_angle: f32, spin: f32, color: Rgba) -> Self {
        Self {
            radius,
            start_angle: normalize_angle(start_angle),
            end_angle: normalize_angle(end_angle),
            spin,
            color,
        }
    }

    pub fn from_settings(ring: &RingSettings) -> Self {
        Self::new(
            ring.radius,
            ring.start_deg.to_radians(),
            ring.end_deg.to_radians(),
            ring.spin,
            ring.color,
        )
    }

    /// Advance both span edges by one frame of rotation
    pub fn rotate(&mut self) {
        self.start_angle = normalize_angle(self.start_angle + self.spin);
        self.end_angle = normalize_angle(self.end_angle + self.spin);
    }

    /// Angular size of the open span (handles wraparound)
    pub fn angular_span(&self) -> f32 {
        let span = wrap_angle(self.end_angle) - wrap_angle(self.start_angle);
        if span < 0.0 { span + TAU } else { span }
    }

    /// Whether `pos` lies in the open span as seen from `center`
    pub fn is_open_at(&self, center: Vec2, pos: Vec2) -> bool {
        is_ball_in_arc(pos, center, self.start_angle, self.end_angle)
    }

    /// Velocity the ring surface carries at `offset` from the center
    #[inline]
    pub fn surface_velocity(&self, offset: Vec2) -> Vec2 {
        offset.perp() * self.spin
    }

    /// Triangle marking the open span, reaching `reach` past the ring
    pub fn opening_wedge(&self, center: Vec2, reach: f32) -> [Vec2; 3] {
        let r = self.radius + reach;
        [
            center,
            center + polar_to_cartesian(r, self.start_angle),
            center + polar_to_cartesian(r, self.end_angle),
        ]
    }
}

/// Check whether the direction from `center` to `pos` falls in the span
/// `[start_angle, end_angle]`, measured counter-clockwise.
///
/// Span edges are wrapped to [0, 2π) first; a span that crosses 0 has a full
/// turn added to its end. The point's angle is tried both raw and shifted by
/// a full turn so negative `atan2` results still land in the span.
pub fn is_ball_in_arc(pos: Vec2, center: Vec2, start_angle: f32, end_angle: f32) -> bool {
    let (_, angle) = cartesian_to_polar(pos - center);
    let start = wrap_angle(start_angle);
    let mut end = wrap_angle(end_angle);
    if start > end {
        end += TAU;
    }
    let span = start..=end;
    span.contains(&angle) || span.contains(&(angle + TAU))
}
