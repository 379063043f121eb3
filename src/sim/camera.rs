//! Follow camera
//!
//! The camera is a translation applied to the scaled canvas. It stays put
//! while the actor's camera box is inside the viewport and tracks the actor
//! velocity one-for-one once the box reaches a viewport edge. Each rule only
//! pans in one direction and refuses to pan past the level guards.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Actor;
use crate::consts::*;

/// Fixed logical canvas and its integer scale
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub scale: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            scale: CANVAS_SCALE,
        }
    }
}

impl Viewport {
    /// Visible width in level units (256 by default)
    #[inline]
    pub fn scaled_width(&self) -> f32 {
        self.width / self.scale
    }

    /// Visible height in level units (144 by default)
    #[inline]
    pub fn scaled_height(&self) -> f32 {
        self.height / self.scale
    }
}

/// Camera translation in level units (applied after scaling)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub position: Vec2,
}

impl Camera {
    /// Camera with the level bottom aligned to the viewport bottom
    pub fn new(viewport: &Viewport) -> Self {
        Self {
            position: Vec2::new(0.0, -BACKGROUND_HEIGHT + viewport.scaled_height()),
        }
    }

    /// Actor moving right: scroll the level left once the camera box reaches
    /// the right edge of the view
    pub fn pan_left(&mut self, actor: &Actor, viewport: &Viewport) {
        let box_right = actor.camera_box().right();

        if box_right >= CAMERA_RIGHT_GUARD {
            return;
        }

        if box_right >= viewport.scaled_width() + self.position.x.abs() {
            self.position.x -= actor.velocity.x;
        }
    }

    /// Actor moving left: scroll the level right once the camera box reaches
    /// the left edge of the view
    pub fn pan_right(&mut self, actor: &Actor) {
        let box_left = actor.camera_box().left();

        if box_left <= CAMERA_LEFT_GUARD {
            return;
        }

        if box_left <= self.position.x.abs() {
            self.position.x -= actor.velocity.x;
        }
    }

    /// Actor moving up: scroll the level down once the camera box reaches the
    /// top of the view
    pub fn pan_down(&mut self, actor: &Actor) {
        let box_top = actor.camera_box().top();

        if box_top + actor.velocity.y <= CAMERA_TOP_GUARD {
            return;
        }

        if box_top <= self.position.y.abs() {
            self.position.y -= actor.velocity.y;
        }
    }

    /// Actor moving down: scroll the level up once the camera box reaches the
    /// bottom of the view
    pub fn pan_up(&mut self, actor: &Actor, viewport: &Viewport) {
        let box_bottom = actor.camera_box().bottom();

        if box_bottom + actor.velocity.y >= BACKGROUND_HEIGHT {
            return;
        }

        if box_bottom >= self.position.y.abs() + viewport.scaled_height() {
            self.position.y -= actor.velocity.y;
        }
    }
}
