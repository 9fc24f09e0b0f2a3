//! Rendering collaborator
//!
//! The simulations never draw themselves. Scenes issue draw commands through
//! the [`Renderer`] trait; implementations decide what a command becomes.

pub mod mesh;
pub mod recorder;
pub mod scene;
pub mod shapes;
pub mod vertex;

pub use mesh::MeshRenderer;
pub use recorder::{CommandRecorder, DrawCommand};
pub use vertex::Vertex;

use glam::Vec2;

use crate::settings::Rgba;
use crate::sim::Bounds;

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn corners(&self) -> [Vec2; 4] {
        [
            self.min,
            Vec2::new(self.max.x, self.min.y),
            self.max,
            Vec2::new(self.min.x, self.max.y),
        ]
    }
}

impl From<Bounds> for Rect {
    fn from(b: Bounds) -> Self {
        Self {
            min: Vec2::new(b.left, b.top),
            max: Vec2::new(b.right, b.bottom),
        }
    }
}

/// Draw command sink. One frame is every call between two `present`s.
pub trait Renderer {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    /// Outline drawn inward from `radius`
    fn circle_outline(&mut self, center: Vec2, radius: f32, thickness: f32, color: Rgba);
    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba);
    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    /// Text centered horizontally on `pos.x`, top edge at `pos.y`
    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Rgba);
    /// Finish the current frame
    fn present(&mut self);
}
