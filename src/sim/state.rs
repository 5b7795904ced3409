//! Game state and core simulation types
//!
//! Small enough to copy: transitions take a state by value and hand back a
//! new one.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::level::Level;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameStatus {
    /// Token can be dragged
    #[default]
    Playing,
    /// Token reached the goal; frozen until restart
    Won,
}

/// What a transition did, for logging and the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Move accepted, token at the new position
    Moved,
    /// Token touched a wall and went back to start
    Collided,
    /// Token entered the goal
    Won,
    /// Drag ended away from the goal, token went back to start
    ReleasedOffGoal,
    /// Drag ended on the goal (or after winning); nothing moved
    Released,
    /// Explicit restart
    Restarted,
    /// Input had no effect (won, or move without an active drag)
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    /// Token center in field space
    pub token: Vec2,
    /// Current status
    pub status: GameStatus,
    /// Whether a drag session is active
    pub dragging: bool,
}

impl GameState {
    /// Fresh state with the token at the level's start
    pub fn new(level: &Level) -> Self {
        Self {
            token: level.start(),
            status: GameStatus::Playing,
            dragging: false,
        }
    }

    #[inline]
    pub fn is_won(&self) -> bool {
        self.status == GameStatus::Won
    }

    /// Same state with the token back at start and status Playing
    pub(crate) fn reset_to_start(self, level: &Level) -> Self {
        Self {
            token: level.start(),
            status: GameStatus::Playing,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_at_start() {
        let level = Level::classic();
        let state = GameState::new(&level);
        assert_eq!(state.token, level.start());
        assert_eq!(state.status, GameStatus::Playing);
        assert!(!state.dragging);
        assert!(!state.is_won());
    }

    #[test]
    fn test_reset_keeps_drag_flag() {
        let level = Level::classic();
        let state = GameState {
            token: Vec2::new(80.0, 275.0),
            status: GameStatus::Won,
            dragging: true,
        };
        let reset = state.reset_to_start(&level);
        assert_eq!(reset.token, level.start());
        assert_eq!(reset.status, GameStatus::Playing);
        assert!(reset.dragging);
    }

    #[test]
    fn test_state_serializes() {
        let state = GameState::new(&Level::classic());
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
