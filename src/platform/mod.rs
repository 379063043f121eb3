//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (key codes to player intent)

pub mod input;

pub use input::{GameKey, KeyState};
