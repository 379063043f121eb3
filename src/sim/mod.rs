//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One fixed step per tick, no wall-clock time
//! - Stable iteration order (block insertion order from the level loader)
//! - No rendering or platform dependencies

pub mod animation;
pub mod camera;
pub mod collision;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::{AnimationDescriptor, AnimationState, SpriteAnimator, select_animation};
pub use camera::{Camera, Viewport};
pub use collision::{
    BlockKind, CollisionBlock, crossed_bottom, crossed_top, floor_collision, platform_collision,
};
pub use level::{Level, LevelData, decode_layer};
pub use rect::Rect;
pub use state::{Actor, Facing, GameState, PhysicsConfig};
pub use tick::{InputIntent, SimulationContext, tick};
