//! Per-frame orchestration
//!
//! One call to [`FrameLoop::frame`] per display refresh: draw the scene as it
//! stands, advance the simulation one tick, then update the sprite. The host
//! (requestAnimationFrame on the web, a plain loop natively) schedules the
//! next call; there is no internal stop condition.

use crate::consts::{ACTOR_SPRITE_SCALE, CANVAS_SCALE};
use crate::platform::KeyState;
use crate::renderer::{BACKGROUND_IMAGE, DrawCommand, Renderer, colors};
use crate::settings::{DebugOverlays, Settings};
use crate::sim::{GameState, Level, SimulationContext, SpriteAnimator, Viewport, tick};

/// Everything the frame loop reads and writes
#[derive(Debug, Clone)]
pub struct FrameLoop {
    pub state: GameState,
    pub ctx: SimulationContext,
    pub animator: SpriteAnimator,
    pub overlays: DebugOverlays,
    /// Fed by the host's key listeners between frames
    pub keys: KeyState,
}

impl FrameLoop {
    pub fn new(level: Level, settings: &Settings) -> Self {
        Self {
            state: GameState::with_physics(level, settings.physics.clone()),
            ctx: SimulationContext::new(Viewport::default()),
            animator: SpriteAnimator::default(),
            overlays: settings.overlays,
            keys: KeyState::new(),
        }
    }

    /// Current overlay toggles and physics tuning, for persisting
    pub fn settings(&self) -> Settings {
        Settings {
            overlays: self.overlays,
            physics: self.state.physics.clone(),
        }
    }

    /// Draw and advance one frame
    pub fn frame<R: Renderer>(&mut self, renderer: &mut R) {
        renderer.draw(DrawCommand::Clear {
            color: colors::CLEAR,
        });
        renderer.draw(DrawCommand::PushTransform {
            scale: CANVAS_SCALE,
            translate: self.ctx.camera.position,
        });

        renderer.draw(DrawCommand::Image {
            image: BACKGROUND_IMAGE,
            position: glam::Vec2::ZERO,
        });

        if self.overlays.blocks {
            let level = &self.state.level;
            for block in level.floor_blocks.iter().chain(&level.platform_blocks) {
                renderer.draw(DrawCommand::FillRect {
                    rect: block.rect,
                    color: colors::BLOCK,
                });
            }
        }

        self.animator.advance();
        self.draw_actor(renderer);

        self.ctx.input = self.keys.take_intent();
        let next = tick(&mut self.state, &mut self.ctx);

        // Unloaded images leave the current sprite on screen; retried next frame
        let ready = renderer.image_ready(next.descriptor().image);
        self.animator.switch_to(next, ready);

        renderer.draw(DrawCommand::PopTransform);
    }

    fn draw_actor<R: Renderer>(&self, renderer: &mut R) {
        let actor = &self.state.actor;

        if self.overlays.camera_box {
            renderer.draw(DrawCommand::FillRect {
                rect: actor.camera_box(),
                color: colors::CAMERA_BOX,
            });
        }

        if self.overlays.hitbox {
            renderer.draw(DrawCommand::FillRect {
                rect: actor.hitbox(),
                color: colors::HITBOX,
            });
        }

        let descriptor = self.animator.descriptor();
        renderer.draw(DrawCommand::Sprite {
            image: descriptor.image,
            position: actor.position,
            frame: self.animator.current_frame,
            frame_count: descriptor.frame_rate,
            scale: ACTOR_SPRITE_SCALE,
        });
    }
}
