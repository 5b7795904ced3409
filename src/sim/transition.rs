//! State transitions
//!
//! Every function here is total: out-of-range input is clamped, never
//! rejected, and each call returns the new state together with the event that
//! fired and whether the screen needs redrawing.

use glam::Vec2;

use super::level::Level;
use super::state::{GameEvent, GameState, GameStatus};

/// Result of a single transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub state: GameState,
    pub event: GameEvent,
    /// True when what is on screen no longer matches `state`
    pub redraw: bool,
}

impl Step {
    fn new(state: GameState, event: GameEvent) -> Self {
        let redraw = !matches!(event, GameEvent::Ignored | GameEvent::Released);
        Self {
            state,
            event,
            redraw,
        }
    }

    fn ignored(state: GameState) -> Self {
        Self::new(state, GameEvent::Ignored)
    }
}

/// Try to place the token at `raw` (field space, unclamped)
///
/// Walls are checked before the goal, so a candidate satisfying both resets
/// the token instead of winning.
pub fn attempt_move(state: GameState, level: &Level, raw: Vec2) -> Step {
    if state.status == GameStatus::Won {
        return Step::ignored(state);
    }

    let candidate = level.clamp(raw);

    if level.hits_wall(candidate) {
        log::debug!(
            "Wall contact at ({:.1}, {:.1}), back to start",
            candidate.x,
            candidate.y
        );
        return Step::new(state.reset_to_start(level), GameEvent::Collided);
    }

    let moved = GameState {
        token: candidate,
        ..state
    };

    if level.reaches_goal(candidate) {
        log::info!("Goal reached at ({:.1}, {:.1})", candidate.x, candidate.y);
        return Step::new(
            GameState {
                status: GameStatus::Won,
                ..moved
            },
            GameEvent::Won,
        );
    }

    log::trace!("Token moved to ({:.1}, {:.1})", candidate.x, candidate.y);
    Step::new(moved, GameEvent::Moved)
}

/// End the drag session
///
/// Letting go anywhere but on the goal sends the token back to start.
pub fn release(state: GameState, level: &Level) -> Step {
    let state = GameState {
        dragging: false,
        ..state
    };

    if state.status == GameStatus::Playing && !level.reaches_goal(state.token) {
        log::debug!("Released off the goal, back to start");
        return Step::new(state.reset_to_start(level), GameEvent::ReleasedOffGoal);
    }

    Step::new(state, GameEvent::Released)
}

/// Put the token back at start and resume play, whatever the current status
pub fn restart(state: GameState, level: &Level) -> Step {
    log::info!("Restart (was {:?})", state.status);
    let state = GameState {
        dragging: false,
        ..state.reset_to_start(level)
    };
    Step::new(state, GameEvent::Restarted)
}
