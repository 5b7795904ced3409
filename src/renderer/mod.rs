//! Rendering module
//!
//! `draw_scene` is a stateless pass over any [`DrawSurface`]. The
//! [`VertexBatch`] surface tessellates into triangles which the WebGPU
//! [`RenderState`] presents.

pub mod batch;
pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use batch::VertexBatch;
pub use pipeline::RenderState;
pub use vertex::{Vertex, colors};

use glam::Vec2;

use crate::consts::GLOW_BLUR;
use crate::settings::Settings;
use crate::sim::{GameState, Level, Rect};

/// RGBA color, components in 0..=1
pub type Color = [f32; 4];

/// Halo drawn around a filled circle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    pub color: Color,
    pub blur: f32,
}

/// The drawing operations the game needs
pub trait DrawSurface {
    /// Wipe a `width` x `height` region starting at the origin
    fn clear(&mut self, width: f32, height: f32);
    fn fill_rect(&mut self, rect: &Rect, color: Color);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, glow: Option<Glow>);
}

/// Draw the whole frame: background, walls, goal, then the token on top
pub fn draw_scene<S: DrawSurface + ?Sized>(
    surface: &mut S,
    level: &Level,
    state: &GameState,
    settings: &Settings,
) {
    let (w, h) = (level.width(), level.height());
    surface.clear(w, h);
    surface.fill_rect(&Rect::new(0.0, 0.0, w, h), colors::BACKGROUND);

    for wall in level.walls() {
        surface.fill_rect(wall, colors::WALL);
    }

    surface.fill_rect(level.goal(), colors::GOAL);

    let glow = settings.glow.then_some(Glow {
        color: colors::TOKEN_GLOW,
        blur: GLOW_BLUR,
    });
    surface.fill_circle(state.token, level.token_radius(), colors::TOKEN, glow);
}
