//! Headless renderer that keeps the last presented frame as data

use glam::Vec2;

use super::{Rect, Renderer};
use crate::settings::Rgba;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillCircle {
        center: Vec2,
        radius: f32,
        color: Rgba,
    },
    CircleOutline {
        center: Vec2,
        radius: f32,
        thickness: f32,
        color: Rgba,
    },
    FillPolygon {
        points: Vec<Vec2>,
        color: Rgba,
    },
    RectOutline {
        rect: Rect,
        thickness: f32,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    Text {
        pos: Vec2,
        text: String,
        size: f32,
        color: Rgba,
    },
}

/// Records draw commands; `present` moves them into `last_frame`
#[derive(Debug, Default)]
pub struct CommandRecorder {
    pending: Vec<DrawCommand>,
    pub last_frame: Vec<DrawCommand>,
    pub frames_presented: u64,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Filled circles of the last frame, in draw order
    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.last_frame.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> + '_ {
        self.last_frame.iter().filter_map(|cmd| match cmd {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Renderer for CommandRecorder {
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.pending.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn circle_outline(&mut self, center: Vec2, radius: f32, thickness: f32, color: Rgba) {
        self.pending.push(DrawCommand::CircleOutline {
            center,
            radius,
            thickness,
            color,
        });
    }

    fn fill_polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.pending.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn rect_outline(&mut self, rect: Rect, thickness: f32, color: Rgba) {
        self.pending.push(DrawCommand::RectOutline {
            rect,
            thickness,
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.pending.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, size: f32, color: Rgba) {
        self.pending.push(DrawCommand::Text {
            pos,
            text: text.to_owned(),
            size,
            color,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
    }
}
