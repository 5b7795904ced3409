//! Platform abstraction layer
//!
//! Mouse and touch collapse into one abstract pointer channel here, and the
//! controller turns those pointer events into simulation transitions.

pub mod input;

pub use input::{Controller, PointerEvent, PointerPhase, PointerSource};
