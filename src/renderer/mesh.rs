//! CPU tessellating renderer
//!
//! Turns draw commands into one triangle list per frame, ready to upload as
//! a vertex buffer. Text is not tessellated; labels are kept alongside.

use glam::Vec2;

use super::shapes;
use super::vertex::Vertex;
use super::{Rect, Renderer};
use crate::settings::Rgba;

/// A text label queued for an overlay pass
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub pos: Vec2,
    pub text: String,
    pub size: f32,
    pub color: Rgba,
}

#[derive(Debug, Default)]
pub struct MeshRenderer {
    vertices: Vec<Vertex>,
    labels: Vec<TextLabel>,
    frame_vertices: Vec<Vertex>,
    frame_labels: Vec<TextLabel>,
    frames: u64,
}

impl MeshRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Triangle list of the last presented frame
    pub fn vertices(&self) -> &[Vertex] {
        &self.frame_vertices
    }

    /// Last presented frame as raw bytes for a vertex buffer
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.frame_vertices)
    }

    pub fn labels(&self) -> &[TextLabel] {
        &self.frame_labels
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for MeshRenderer {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        let segments = shapes::segments_for(radius);
        self.vertices
            .extend(shapes::circle(center, radius, color, segments));
    }

    fn circle_outline(&mut self, center: Vec2, radius: f32, thickness: f32, color: Rgba) {
        let inner = (radius - thickness).max(0.0);
        let segments = shapes::segments_for(radius);
        self.vertices
            .extend(shapes::ring(center, inner, radius, color, segments));
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.vertices.extend(shapes::polygon(points, color));
    }

    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Rgba) {
        let corners = rect.corners();
        // Extend each edge by half the thickness so corners close
        let half = thickness / 2.0;
        for i in 0..4 {
            let a = corners[i];
            let b = corners[(i + 1) % 4];
            let dir = (b - a).normalize_or_zero();
            self.line(a - dir * half, b + dir * half, thickness, color);
        }
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.vertices
            .extend(shapes::thick_line(from, to, width, color));
    }

    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Rgba) {
        self.labels.push(TextLabel {
            pos,
            text: text.to_owned(),
            size,
            color,
        });
    }

    fn present(&mut self) {
        self.frame_vertices = std::mem::take(&mut self.vertices);
        self.frame_labels = std::mem::take(&mut self.labels);
        self.frames += 1;
        log::trace!(
            "Frame {} presented: {} vertices, {} labels",
            self.frames,
            self.frame_vertices.len(),
            self.frame_labels.len()
        );
    }
}
