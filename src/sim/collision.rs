//! Collision detection for the token against walls and the goal
//!
//! Two deliberately different predicates:
//! - walls use the exact disk (touching counts as a hit)
//! - the goal uses the token's bounding square with strict inequalities

use glam::Vec2;

use super::rect::{Circle, Rect};

/// Check whether a closed disk and a closed rectangle share any point
///
/// Works on the absolute offset of the circle center from the rectangle
/// center. Outside the radius-expanded box is a miss, inside either slab is a
/// hit, and the remaining corner regions fall back to a squared distance test.
pub fn circle_intersects_rect(circle: &Circle, rect: &Rect) -> bool {
    let half = rect.half_extents();
    let dist = (circle.center - rect.center()).abs();

    if dist.x > half.x + circle.radius {
        return false;
    }
    if dist.y > half.y + circle.radius {
        return false;
    }

    if dist.x <= half.x {
        return true;
    }
    if dist.y <= half.y {
        return true;
    }

    // Corner region
    let corner = dist - half;
    corner.length_squared() <= circle.radius * circle.radius
}

/// Check whether the circle's bounding square overlaps the rectangle
///
/// Open-interval test on all four sides, so a square that only touches an
/// edge does not count.
pub fn rect_overlaps_circle_bounds(circle: &Circle, rect: &Rect) -> bool {
    let c = circle.center;
    let r = circle.radius;
    c.x + r > rect.x && c.x - r < rect.right() && c.y + r > rect.y && c.y - r < rect.bottom()
}

/// Clamp a point so a circle of `radius` stays inside a `width` x `height` field
#[inline]
pub fn clamp_to_field(point: Vec2, radius: f32, width: f32, height: f32) -> Vec2 {
    Vec2::new(
        point.x.max(radius).min(width - radius),
        point.y.max(radius).min(height - radius),
    )
}
