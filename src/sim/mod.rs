//! Game simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - No rendering or platform dependencies
//! - Transitions take a state and return a new one
//! - Identical inputs always produce identical steps

pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod transition;

pub use collision::{circle_intersects_rect, clamp_to_field, rect_overlaps_circle_bounds};
pub use level::{CLASSIC_ROUTE, Level, LevelError};
pub use rect::{Circle, Rect};
pub use state::{GameEvent, GameState, GameStatus};
pub use transition::{Step, attempt_move, release, restart};
