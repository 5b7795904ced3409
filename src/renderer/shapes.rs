//! Shape generation for 2D primitives
//!
//! All shapes come out as triangle lists in field space.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Peak alpha of the innermost glow ring
const GLOW_ALPHA: f32 = 0.55;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(rect: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (x0, y0, x1, y1) = (rect.x, rect.y, rect.right(), rect.bottom());
    vec![
        Vertex::new(x0, y0, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x0, y1, color),
        Vertex::new(x1, y0, color),
        Vertex::new(x1, y1, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
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
///
/// `inner_color` and `outer_color` are interpolated across the band.
pub fn ring(
    center: Vec2,
    inner_radius: f32,
    outer_radius: f32,
    inner_color: [f32; 4],
    outer_color: [f32; 4],
    segments: u32,
) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 6) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        let dir1 = Vec2::new(theta1.cos(), theta1.sin());
        let dir2 = Vec2::new(theta2.cos(), theta2.sin());

        let inner1 = center + dir1 * inner_radius;
        let outer1 = center + dir1 * outer_radius;
        let inner2 = center + dir2 * inner_radius;
        let outer2 = center + dir2 * outer_radius;

        // Two triangles per segment
        vertices.push(Vertex::new(inner1.x, inner1.y, inner_color));
        vertices.push(Vertex::new(outer1.x, outer1.y, outer_color));
        vertices.push(Vertex::new(inner2.x, inner2.y, inner_color));

        vertices.push(Vertex::new(inner2.x, inner2.y, inner_color));
        vertices.push(Vertex::new(outer1.x, outer1.y, outer_color));
        vertices.push(Vertex::new(outer2.x, outer2.y, outer_color));
    }

    vertices
}

/// Soft halo around a circle, approximating a canvas shadow blur
///
/// Concentric rings from `radius` out to `radius + blur`, alpha falling off
/// towards the outside.
pub fn glow(
    center: Vec2,
    radius: f32,
    blur: f32,
    color: [f32; 4],
    layers: u32,
    segments: u32,
) -> Vec<Vertex> {
    if layers == 0 || blur <= 0.0 {
        return Vec::new();
    }

    let with_alpha = |t: f32| {
        let falloff = (1.0 - t) * (1.0 - t);
        [color[0], color[1], color[2], color[3] * GLOW_ALPHA * falloff]
    };

    let mut vertices = Vec::with_capacity((layers * segments * 6) as usize);
    for i in 0..layers {
        let t0 = i as f32 / layers as f32;
        let t1 = (i + 1) as f32 / layers as f32;
        vertices.extend(ring(
            center,
            radius + blur * t0,
            radius + blur * t1,
            with_alpha(t0),
            with_alpha(t1),
            segments,
        ));
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [f32; 4] = [1.0; 4];

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), WHITE);
        assert_eq!(verts.len(), 6);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_circle_vertices_on_radius() {
        let center = Vec2::new(50.0, 50.0);
        let verts = circle(center, 12.0, WHITE, 16);
        assert_eq!(verts.len(), 48);
        for v in verts.iter().skip(1).step_by(3) {
            let d = Vec2::from(v.position).distance(center);
            assert!((d - 12.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_glow_fades_outward() {
        let verts = glow(Vec2::ZERO, 12.0, 15.0, WHITE, 4, 8);
        assert_eq!(verts.len(), 4 * 8 * 6);
        let inner_alpha = verts[0].color[3];
        let outer_alpha = verts[verts.len() - 1].color[3];
        assert!(inner_alpha > outer_alpha);
        assert!(outer_alpha.abs() < 1e-6);
    }

    #[test]
    fn test_glow_disabled_without_blur() {
        assert!(glow(Vec2::ZERO, 12.0, 0.0, WHITE, 4, 8).is_empty());
        assert!(glow(Vec2::ZERO, 12.0, 15.0, WHITE, 0, 8).is_empty());
    }
}
