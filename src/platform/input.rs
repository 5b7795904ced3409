//! Pointer input and the controller that drives the simulation
//!
//! A single pointer channel: mouse events and the first touch point of touch
//! events both become a [`PointerEvent`]. Positions arrive in screen space and
//! are shifted by the surface origin before the simulation sees them.

use glam::Vec2;

use crate::sim::{GameEvent, GameState, Level, Step, attempt_move, release, restart};

/// Device the event came from (informational; both behave identically)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerSource {
    Mouse,
    Touch,
}

/// Stage of a pointer interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    /// mousedown / touchstart
    Down,
    /// mousemove / touchmove
    Move,
    /// mouseup / touchend
    Up,
    /// mouseleave / touchcancel (treated as Up)
    Cancel,
}

/// One pointer event in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub source: PointerSource,
    /// Screen-space position (`clientX`, `clientY`). Ignored for Up/Cancel.
    pub position: Vec2,
}

impl PointerEvent {
    pub fn mouse(phase: PointerPhase, x: f32, y: f32) -> Self {
        Self {
            phase,
            source: PointerSource::Mouse,
            position: Vec2::new(x, y),
        }
    }

    /// Touch event built from the first active contact, if any
    ///
    /// `touchend`/`touchcancel` carry no active contacts, so those phases
    /// still produce an event with a zero position.
    pub fn touch(phase: PointerPhase, first_contact: Option<(f32, f32)>) -> Option<Self> {
        let position = match (phase, first_contact) {
            (_, Some((x, y))) => Vec2::new(x, y),
            (PointerPhase::Up | PointerPhase::Cancel, None) => Vec2::ZERO,
            (PointerPhase::Down | PointerPhase::Move, None) => return None,
        };
        Some(Self {
            phase,
            source: PointerSource::Touch,
            position,
        })
    }
}

/// Map a screen-space position into field space
#[inline]
pub fn to_field(screen: Vec2, surface_origin: Vec2) -> Vec2 {
    screen - surface_origin
}

/// Owns the level and the current game state, applies pointer input
pub struct Controller {
    level: Level,
    state: GameState,
}

impl Controller {
    pub fn new(level: Level) -> Self {
        let state = GameState::new(&level);
        Self { level, state }
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Begin a drag and try the first move; ignored once won
    pub fn on_pointer_down(&mut self, field_pos: Vec2) -> Step {
        if self.state.is_won() {
            return self.unchanged();
        }
        self.state.dragging = true;
        self.apply(attempt_move(self.state, &self.level, field_pos))
    }

    /// Continue a drag; ignored when no drag is active
    pub fn on_pointer_move(&mut self, field_pos: Vec2) -> Step {
        if !self.state.dragging {
            return self.unchanged();
        }
        self.apply(attempt_move(self.state, &self.level, field_pos))
    }

    /// End the drag and run the release check
    pub fn on_pointer_up(&mut self) -> Step {
        self.apply(release(self.state, &self.level))
    }

    /// External restart trigger (the restart button)
    pub fn restart(&mut self) -> Step {
        self.apply(restart(self.state, &self.level))
    }

    /// Dispatch a screen-space pointer event
    pub fn handle(&mut self, event: PointerEvent, surface_origin: Vec2) -> Step {
        let field_pos = to_field(event.position, surface_origin);
        log::trace!("{:?} {:?} at {:?}", event.source, event.phase, field_pos);
        match event.phase {
            PointerPhase::Down => self.on_pointer_down(field_pos),
            PointerPhase::Move => self.on_pointer_move(field_pos),
            PointerPhase::Up | PointerPhase::Cancel => self.on_pointer_up(),
        }
    }

    fn apply(&mut self, step: Step) -> Step {
        self.state = step.state;
        step
    }

    fn unchanged(&self) -> Step {
        Step {
            state: self.state,
            event: GameEvent::Ignored,
            redraw: false,
        }
    }
}
