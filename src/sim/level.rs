//! Static level description
//!
//! Built once at startup, never mutated afterwards. The constructor checks
//! that the start position is playable so the transitions never have to.

use glam::Vec2;
use thiserror::Error;

use super::collision::{circle_intersects_rect, clamp_to_field, rect_overlaps_circle_bounds};
use super::rect::{Circle, Rect};
use crate::consts::*;

/// Reasons a level description is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LevelError {
    #[error("token radius must be positive, got {0}")]
    InvalidRadius(f32),
    #[error("field {width}x{height} cannot hold a token of radius {radius}")]
    FieldTooSmall { width: f32, height: f32, radius: f32 },
    #[error("start position ({x}, {y}) lies outside the playable area")]
    StartOutOfBounds { x: f32, y: f32 },
    #[error("start position touches wall #{index}")]
    StartTouchesWall { index: usize },
    #[error("start position already overlaps the goal")]
    StartInGoal,
}

/// The play field: dimensions, walls, start and goal
///
/// Fields are private so every instance has passed `Level::new`.
#[derive(Debug, Clone, PartialEq)]
pub struct Level {
    width: f32,
    height: f32,
    token_radius: f32,
    start: Vec2,
    goal: Rect,
    walls: Vec<Rect>,
}

impl Level {
    /// Build a level, rejecting layouts where the start position is unplayable
    pub fn new(
        width: f32,
        height: f32,
        token_radius: f32,
        start: Vec2,
        goal: Rect,
        walls: Vec<Rect>,
    ) -> Result<Self, LevelError> {
        if token_radius.is_nan() || token_radius <= 0.0 {
            return Err(LevelError::InvalidRadius(token_radius));
        }
        let fits = width.is_finite()
            && height.is_finite()
            && width >= token_radius * 2.0
            && height >= token_radius * 2.0;
        if !fits {
            return Err(LevelError::FieldTooSmall {
                width,
                height,
                radius: token_radius,
            });
        }
        if clamp_to_field(start, token_radius, width, height) != start {
            return Err(LevelError::StartOutOfBounds {
                x: start.x,
                y: start.y,
            });
        }

        let token = Circle::new(start, token_radius);
        if let Some(index) = walls.iter().position(|w| circle_intersects_rect(&token, w)) {
            return Err(LevelError::StartTouchesWall { index });
        }
        if rect_overlaps_circle_bounds(&token, &goal) {
            return Err(LevelError::StartInGoal);
        }

        Ok(Self {
            width,
            height,
            token_radius,
            start,
            goal,
            walls,
        })
    }

    /// The built-in maze: boundary walls plus the interior corridors
    pub fn classic() -> Self {
        let (w, h, t) = (FIELD_WIDTH, FIELD_HEIGHT, WALL_THICKNESS);

        let walls = vec![
            // Boundary
            Rect::new(0.0, 0.0, w, t),
            Rect::new(0.0, h - t, w, t),
            Rect::new(0.0, 0.0, t, h),
            Rect::new(w - t, 0.0, t, h),
            // Interior
            Rect::new(150.0, 0.0, t, 500.0),
            Rect::new(50.0, 0.0, t, 250.0),
            Rect::new(50.0, 200.0, 200.0, t),
            Rect::new(50.0, 300.0, 13.0, h),
            Rect::new(100.0, 300.0, 13.0, 200.0),
            Rect::new(100.0, 500.0, 100.0, 10.0),
            Rect::new(200.0, 310.0, 13.0, 200.0),
            Rect::new(50.0, 550.0, 200.0, 10.0),
            Rect::new(250.0, 270.0, 13.0, 500.0),
            Rect::new(300.0, 200.0, 13.0, 600.0),
            Rect::new(200.0, 150.0, 150.0, 10.0),
            Rect::new(200.0, 0.0, t, 110.0),
        ];

        let goal = Rect::new(
            w - t - GOAL_WIDTH - GOAL_INSET,
            t + GOAL_INSET,
            GOAL_WIDTH,
            GOAL_HEIGHT,
        );

        let inset = t + TOKEN_RADIUS + START_INSET;
        let start = Vec2::new(inset, h - inset);

        // The constants above are fixed, so validation can only fail if they
        // are edited into an unplayable layout.
        match Self::new(w, h, TOKEN_RADIUS, start, goal, walls) {
            Ok(level) => level,
            Err(e) => panic!("built-in level is invalid: {e}"),
        }
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    pub fn token_radius(&self) -> f32 {
        self.token_radius
    }

    /// Where the token starts and returns to on reset
    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn goal(&self) -> &Rect {
        &self.goal
    }

    pub fn walls(&self) -> &[Rect] {
        &self.walls
    }

    /// Clamp a field-space point into the area the token center may occupy
    pub fn clamp(&self, point: Vec2) -> Vec2 {
        clamp_to_field(point, self.token_radius, self.width, self.height)
    }

    /// The token as a circle centered on `center`
    pub fn token_at(&self, center: Vec2) -> Circle {
        Circle::new(center, self.token_radius)
    }

    /// Does a token at `center` touch any wall?
    pub fn hits_wall(&self, center: Vec2) -> bool {
        let token = self.token_at(center);
        self.walls.iter().any(|wall| circle_intersects_rect(&token, wall))
    }

    /// Does a token at `center` satisfy the goal test?
    pub fn reaches_goal(&self, center: Vec2) -> bool {
        rect_overlaps_circle_bounds(&self.token_at(center), &self.goal)
    }
}

/// Corridor centers leading from the start of [`Level::classic`] to its goal.
/// Dragging through them in small steps never touches a wall.
pub const CLASSIC_ROUTE: [(f32, f32); 11] = [
    (29.0, 571.0),
    (31.0, 275.0),
    (56.0, 275.0),
    (80.0, 275.0),
    (80.0, 530.0),
    (231.0, 530.0),
    (231.0, 240.0),
    (281.0, 240.0),
    (281.0, 180.0),
    (369.0, 180.0),
    (369.0, 60.0),
];

impl Default for Level {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_field() -> Vec<Rect> {
        vec![Rect::new(0.0, 0.0, 100.0, 5.0)]
    }

    #[test]
    fn test_classic_layout() {
        let level = Level::classic();
        assert_eq!(level.walls().len(), 16);
        assert_eq!(level.start(), Vec2::new(29.0, 571.0));
        assert_eq!(*level.goal(), Rect::new(323.0, 17.0, 60.0, 60.0));
        assert!(!level.hits_wall(level.start()));
        assert!(!level.reaches_goal(level.start()));
    }

    #[test]
    fn test_goal_center_is_reachable_without_walls() {
        let level = Level::classic();
        let center = level.goal().center();
        assert!(!level.hits_wall(center));
        assert!(level.reaches_goal(center));
    }

    #[test]
    fn test_rejects_bad_radius() {
        let err = Level::new(
            100.0,
            100.0,
            0.0,
            Vec2::new(50.0, 50.0),
            Rect::new(80.0, 80.0, 10.0, 10.0),
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, LevelError::InvalidRadius(0.0));
    }

    #[test]
    fn test_rejects_tiny_field() {
        let err = Level::new(
            10.0,
            100.0,
            12.0,
            Vec2::new(5.0, 50.0),
            Rect::new(0.0, 0.0, 1.0, 1.0),
            Vec::new(),
        )
        .unwrap_err();
        assert!(matches!(err, LevelError::FieldTooSmall { .. }));
    }

    #[test]
    fn test_rejects_non_finite_field() {
        for (width, height) in [(f32::NAN, 100.0), (100.0, f32::INFINITY)] {
            let err = Level::new(
                width,
                height,
                12.0,
                Vec2::new(50.0, 50.0),
                Rect::new(80.0, 80.0, 10.0, 10.0),
                Vec::new(),
            )
            .unwrap_err();
            assert!(matches!(err, LevelError::FieldTooSmall { .. }));
        }
    }

    #[test]
    fn test_classic_route_stays_clear_of_walls() {
        let level = Level::classic();
        for &(x, y) in &CLASSIC_ROUTE {
            let point = Vec2::new(x, y);
            assert_eq!(level.clamp(point), point);
            assert!(!level.hits_wall(point), "waypoint ({x}, {y}) touches a wall");
        }
    }

    #[test]
    fn test_rejects_start_outside_clamp_bounds() {
        let err = Level::new(
            100.0,
            100.0,
            12.0,
            Vec2::new(5.0, 50.0),
            Rect::new(80.0, 80.0, 10.0, 10.0),
            Vec::new(),
        )
        .unwrap_err();
        assert_eq!(err, LevelError::StartOutOfBounds { x: 5.0, y: 50.0 });
    }

    #[test]
    fn test_rejects_start_on_wall() {
        let err = Level::new(
            100.0,
            100.0,
            12.0,
            Vec2::new(50.0, 16.0),
            Rect::new(80.0, 80.0, 10.0, 10.0),
            open_field(),
        )
        .unwrap_err();
        assert_eq!(err, LevelError::StartTouchesWall { index: 0 });
    }

    #[test]
    fn test_rejects_start_in_goal() {
        let err = Level::new(
            100.0,
            100.0,
            12.0,
            Vec2::new(50.0, 50.0),
            Rect::new(40.0, 40.0, 20.0, 20.0),
            open_field(),
        )
        .unwrap_err();
        assert_eq!(err, LevelError::StartInGoal);
    }

    #[test]
    fn test_error_messages() {
        let err = LevelError::StartTouchesWall { index: 3 };
        assert_eq!(err.to_string(), "start position touches wall #3");
    }
}
