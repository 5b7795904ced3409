//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[
                wgpu::VertexAttribute {
                    offset: 0,
                    shader_location: 0,
                    format: wgpu::VertexFormat::Float32x2,
                },
                wgpu::VertexAttribute {
                    offset: std::mem::size_of::<[f32; 2]>() as wgpu::BufferAddress,
                    shader_location: 1,
                    format: wgpu::VertexFormat::Float32x4,
                },
            ],
        }
    }
}

/// Colors for game elements (sRGB, straight from the stylesheet)
pub mod colors {
    /// #0a0a0a
    pub const BACKGROUND: [f32; 4] = [0.039, 0.039, 0.039, 1.0];
    /// #00ffcc
    pub const WALL: [f32; 4] = [0.0, 1.0, 0.8, 1.0];
    /// #44ff55
    pub const GOAL: [f32; 4] = [0.267, 1.0, 0.333, 1.0];
    /// #00bbff
    pub const TOKEN: [f32; 4] = [0.0, 0.733, 1.0, 1.0];
    pub const TOKEN_GLOW: [f32; 4] = TOKEN;
}
