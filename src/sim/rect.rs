//! Shape primitives for walls, goal and the token
//!
//! Everything lives in field space: origin top-left, y pointing down,
//! same units as the canvas backing store.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (walls and the goal)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    /// Width (extends right from `x`)
    pub w: f32,
    /// Height (extends down from `y`)
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Half extents along each axis
    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.w / 2.0, self.h / 2.0)
    }

    /// Center point of the rectangle
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x, self.y) + self.half_extents()
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Closed containment check (edges count as inside)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Same rectangle shifted by `offset`
    pub fn translated(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }
}

/// A circle (the player token)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub const fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Axis-aligned bounding square of the circle
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.center.x - self.radius,
            self.center.y - self.radius,
            self.radius * 2.0,
            self.radius * 2.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_and_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
    }

    #[test]
    fn test_contains_point_is_edge_inclusive() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(rect.contains_point(Vec2::new(0.0, 5.0)));
        assert!(!rect.contains_point(Vec2::new(10.1, 5.0)));
    }

    #[test]
    fn test_circle_bounds() {
        let bounds = Circle::new(Vec2::new(50.0, 50.0), 12.0).bounds();
        assert_eq!(bounds, Rect::new(38.0, 38.0, 24.0, 24.0));
    }
}
