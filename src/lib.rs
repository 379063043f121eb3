//! Warrior Platformer - A 2D side-scrolling platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (actor physics, collisions, camera)
//! - `frame`: Per-frame orchestration of drawing and simulation
//! - `renderer`: Draw command contract consumed by a platform backend
//! - `platform`: Browser/native platform abstraction (input)
//! - `settings`: Debug overlays and physics tuning

pub mod frame;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use frame::FrameLoop;
pub use settings::{DebugOverlays, Settings};

/// Game configuration constants
pub mod consts {
    /// Logical canvas dimensions
    pub const CANVAS_WIDTH: f32 = 1024.0;
    pub const CANVAS_HEIGHT: f32 = 576.0;
    /// Integer scale applied to the canvas (256x144 scaled up)
    pub const CANVAS_SCALE: f32 = 4.0;

    /// Height of the background image; the level fits inside it
    pub const BACKGROUND_HEIGHT: f32 = 432.0;

    /// Level tile grid
    pub const TILE_SIZE: f32 = 16.0;
    pub const LEVEL_ROW_WIDTH: usize = 36;
    /// Tile symbol marking a solid collision cell
    pub const SOLID_SYMBOL: u32 = 202;
    /// Platforms are thin one-way strips
    pub const PLATFORM_HEIGHT: f32 = 4.0;

    /// Hitbox offset from sprite top-left and its fixed size
    pub const HITBOX_OFFSET_X: f32 = 35.0;
    pub const HITBOX_OFFSET_Y: f32 = 26.0;
    pub const HITBOX_WIDTH: f32 = 14.0;
    pub const HITBOX_HEIGHT: f32 = 27.0;

    /// Camera tracking box around the actor
    pub const CAMERA_BOX_OFFSET_X: f32 = -50.0;
    pub const CAMERA_BOX_OFFSET_Y: f32 = 0.0;
    pub const CAMERA_BOX_WIDTH: f32 = 200.0;
    pub const CAMERA_BOX_HEIGHT: f32 = 80.0;

    /// Camera pan guards (level space)
    pub const CAMERA_LEFT_GUARD: f32 = 4.0;
    pub const CAMERA_RIGHT_GUARD: f32 = 575.0;
    pub const CAMERA_TOP_GUARD: f32 = 0.0;

    /// Snap distance keeping a resolved actor just outside the block
    pub const COLLISION_EPSILON: f32 = 0.01;

    /// Actor spawn point (sprite top-left)
    pub const SPAWN_X: f32 = 100.0;
    pub const SPAWN_Y: f32 = 300.0;

    /// Sprite scale for the warrior strips
    pub const ACTOR_SPRITE_SCALE: f32 = 0.5;
}
