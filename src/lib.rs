//! Drag Maze - steer a glowing token through a static maze
//!
//! Core modules:
//! - `sim`: Pure game logic (geometry, level, state, transitions)
//! - `renderer`: Draw pass plus WebGPU presentation
//! - `platform`: Pointer/touch input translation and the controller driver
//! - `settings`: User preferences persisted in LocalStorage

pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use platform::{Controller, PointerEvent, PointerPhase, PointerSource};
pub use settings::{QualityPreset, Settings};
pub use sim::{GameEvent, GameState, GameStatus, Level, Step};

/// Game configuration constants
pub mod consts {
    /// Field dimensions (matches the canvas backing size at 1x)
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Thickness of the boundary walls
    pub const WALL_THICKNESS: f32 = 12.0;

    /// Player token
    pub const TOKEN_RADIUS: f32 = 12.0;
    /// Gap between the boundary walls and the start position
    pub const START_INSET: f32 = 5.0;

    /// Goal rectangle, tucked into the top-right corner
    pub const GOAL_WIDTH: f32 = 60.0;
    pub const GOAL_HEIGHT: f32 = 60.0;
    pub const GOAL_INSET: f32 = 5.0;

    /// Blur radius of the token glow, in field units
    pub const GLOW_BLUR: f32 = 15.0;
}
