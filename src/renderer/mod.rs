//! Rendering contract
//!
//! The frame loop describes each frame as a stream of draw commands in level
//! space. A backend (Canvas2D in the browser, [`DrawList`] headless) turns
//! them into pixels and reports which images have finished loading.

pub mod draw_list;

pub use draw_list::DrawList;

use glam::Vec2;

use crate::sim::Rect;

/// Path of an image asset, used as its handle
pub type ImageHandle = &'static str;

/// Background image drawn at the level origin
pub const BACKGROUND_IMAGE: ImageHandle = "./imgs/background.png";

/// RGBA color, components in 0-1
pub type Color = [f32; 4];

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const CLEAR: Color = [1.0, 1.0, 1.0, 1.0];
    pub const HITBOX: Color = [1.0, 0.0, 0.0, 0.2];
    pub const CAMERA_BOX: Color = [0.0, 0.0, 1.0, 0.2];
    pub const BLOCK: Color = [1.0, 0.0, 0.0, 0.5];

    /// CSS `rgba()` string for canvas fill styles
    pub fn css(color: Color) -> String {
        format!(
            "rgba({}, {}, {}, {})",
            (color[0] * 255.0).round() as u8,
            (color[1] * 255.0).round() as u8,
            (color[2] * 255.0).round() as u8,
            color[3]
        )
    }
}

/// One drawing operation
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the whole canvas, ignoring transforms
    Clear { color: Color },
    /// Save the transform, then scale and translate by the camera offset
    PushTransform { scale: f32, translate: Vec2 },
    /// Restore the transform saved by the matching push
    PopTransform,
    /// Solid rectangle (debug overlays)
    FillRect { rect: Rect, color: Color },
    /// Whole image with its top-left at `position`
    Image { image: ImageHandle, position: Vec2 },
    /// One frame of a horizontal sprite strip
    Sprite {
        image: ImageHandle,
        position: Vec2,
        frame: u32,
        frame_count: u32,
        scale: f32,
    },
}

/// A drawing backend
pub trait Renderer {
    fn draw(&mut self, command: DrawCommand);

    /// Whether the image is decoded and can be shown
    fn image_ready(&self, image: ImageHandle) -> bool;
}
