//! Triangle-list draw surface
//!
//! Collects everything `draw_scene` paints into one vertex list, in draw
//! order, ready for the GPU pipeline.

use glam::Vec2;

use super::vertex::Vertex;
use super::{Color, DrawSurface, Glow, shapes};
use crate::settings::QualityPreset;
use crate::sim::Rect;

#[derive(Debug, Clone)]
pub struct VertexBatch {
    vertices: Vec<Vertex>,
    circle_segments: u32,
    glow_layers: u32,
}

impl VertexBatch {
    pub fn new(quality: QualityPreset) -> Self {
        Self {
            vertices: Vec::with_capacity(1024),
            circle_segments: quality.circle_segments(),
            glow_layers: quality.glow_layers(),
        }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
}

impl DrawSurface for VertexBatch {
    fn clear(&mut self, _width: f32, _height: f32) {
        // The whole surface is redrawn every time, so the region is implied
        self.vertices.clear();
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        self.vertices.extend(shapes::rect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, glow: Option<Glow>) {
        if let Some(glow) = glow {
            self.vertices.extend(shapes::glow(
                center,
                radius,
                glow.blur,
                glow.color,
                self.glow_layers,
                self.circle_segments,
            ));
        }
        self.vertices
            .extend(shapes::circle(center, radius, color, self.circle_segments));
    }
}
