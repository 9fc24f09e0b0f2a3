//! Shape tessellation for 2D primitives
//!
//! Every shape comes out as a plain triangle list.

use glam::Vec2;
use std::f32::consts::TAU;

use super::vertex::Vertex;

/// Segment count that keeps circle edges smooth at screen scale
pub fn segments_for(radius: f32) -> u32 {
    (radius * 0.5).clamp(12.0, 96.0) as u32
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a ring (hollow circle)
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * TAU;
        let theta2 = ((i + 1) as f32 / segments as f32) * TAU;
        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(inner2.x, inner2.y, color));

        vertices.push(Vertex::new(inner2.x, inner2.y, color));
        vertices.push(Vertex::new(outer1.x, outer1.y, color));
        vertices.push(Vertex::new(outer2.x, outer2.y, color));
    }

    vertices
}

/// Fan-triangulate a polygon. Correct for convex outlines.
pub fn polygon(points: &[Vec2], color: [f32; 4]) -> Vec<Vertex> {
    if points.len() < 3 {
        return Vec::new();
    }
    let anchor = points[0];
    let mut vertices = Vec::with_capacity((points.len() - 2) * 3);
    for pair in points[1..].windows(2) {
        vertices.push(Vertex::new(anchor.x, anchor.y, color));
        vertices.push(Vertex::new(pair[0].x, pair[0].y, color));
        vertices.push(Vertex::new(pair[1].x, pair[1].y, color));
    }
    vertices
}

/// Generate vertices for a line segment with width
pub fn thick_line(from: Vec2, to: Vec2, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    let dir = (to - from).normalize_or_zero();
    if dir == Vec2::ZERO {
        return Vec::new();
    }
    let perp = dir.perp() * (width / 2.0);

    let a1 = from + perp;
    let b1 = from - perp;
    let a2 = to + perp;
    let b2 = to - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}
