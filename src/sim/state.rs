//! Game state and core simulation types
//!
//! All state that must survive between ticks lives here. The actor's hitbox
//! and camera box are computed from its position on demand, so they can never
//! drift from it.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{
    CollisionBlock, crossed_bottom, crossed_top, floor_collision, platform_collision,
};
use super::level::Level;
use super::rect::Rect;
use crate::consts::*;

/// Which way the actor last moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Tunable physics parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Added to velocity.y every tick
    pub gravity: f32,
    /// Horizontal speed while moving right
    pub run_speed_right: f32,
    /// Horizontal speed while moving left (faster than right on purpose)
    pub run_speed_left: f32,
    /// velocity.y set by a jump (negative is up)
    pub jump_impulse: f32,
    /// Lowest coordinate the hitbox may reach on either axis
    pub bounds_min: f32,
    /// Rightmost coordinate the hitbox may reach
    pub bounds_max_x: f32,
    /// Lowest point (largest y) the hitbox may reach
    pub bounds_max_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.1,
            run_speed_right: 1.0,
            run_speed_left: 1.5,
            jump_impulse: -4.0,
            bounds_min: 4.0,
            bounds_max_x: 572.0,
            bounds_max_y: 576.0,
        }
    }
}

/// The player-controlled character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Actor {
    /// Top-left of the sprite frame
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
}

impl Actor {
    pub fn new(position: Vec2) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
        }
    }

    /// Collision rectangle, inset from the sprite frame
    #[inline]
    pub fn hitbox(&self) -> Rect {
        Rect::new(
            self.position + Vec2::new(HITBOX_OFFSET_X, HITBOX_OFFSET_Y),
            HITBOX_WIDTH,
            HITBOX_HEIGHT,
        )
    }

    /// Tracking rectangle used to decide camera panning
    #[inline]
    pub fn camera_box(&self) -> Rect {
        Rect::new(
            self.position + Vec2::new(CAMERA_BOX_OFFSET_X, CAMERA_BOX_OFFSET_Y),
            CAMERA_BOX_WIDTH,
            CAMERA_BOX_HEIGHT,
        )
    }

    /// Stop horizontal motion that would carry the hitbox onto a level edge
    pub fn horizontal_boundary(&mut self, physics: &PhysicsConfig) {
        let hitbox = self.hitbox();
        if hitbox.right() + self.velocity.x >= physics.bounds_max_x
            || hitbox.left() + self.velocity.x <= physics.bounds_min
        {
            self.velocity.x = 0.0;
        }
    }

    /// Stop vertical motion that would carry the hitbox onto a level edge
    pub fn vertical_boundary(&mut self, physics: &PhysicsConfig) {
        let hitbox = self.hitbox();
        if hitbox.bottom() + self.velocity.y >= physics.bounds_max_y
            || hitbox.top() + self.velocity.y <= physics.bounds_min
        {
            self.velocity.y = 0.0;
        }
    }

    fn apply_boundaries(&mut self, physics: &PhysicsConfig) {
        self.horizontal_boundary(physics);
        self.vertical_boundary(physics);
    }

    pub fn apply_gravity(&mut self, gravity: f32) {
        self.velocity.y += gravity;
        self.position.y += self.velocity.y;
    }

    /// Pull a hitbox that gravity carried past the top or bottom bound back
    /// onto it and stop vertical motion
    pub fn clamp_vertical(&mut self, physics: &PhysicsConfig) {
        let hitbox = self.hitbox();
        if hitbox.bottom() > physics.bounds_max_y {
            self.position.y = physics.bounds_max_y - (HITBOX_OFFSET_Y + HITBOX_HEIGHT);
        } else if hitbox.top() < physics.bounds_min {
            self.position.y = physics.bounds_min - HITBOX_OFFSET_Y;
        } else {
            return;
        }
        self.velocity.y = 0.0;
    }

    /// Advance the actor by one tick
    ///
    /// The boundary check runs before the horizontal move and again after it,
    /// so the move itself can never carry the hitbox past a level edge.
    /// Gravity runs after the check, so its result is clamped separately.
    pub fn advance(&mut self, level: &Level, physics: &PhysicsConfig) {
        self.apply_boundaries(physics);

        self.position.x += self.velocity.x;
        self.apply_boundaries(physics);

        let previous = self.hitbox();
        self.apply_gravity(physics.gravity);
        self.clamp_vertical(physics);
        self.resolve_vertical_collisions(level, &previous);
    }

    /// Resolve overlap with the level after vertical movement
    ///
    /// `previous` is the hitbox before this tick's vertical move. Besides
    /// overlap at the new position, a block whose edge the hitbox swept across
    /// counts as a hit, so no fall speed can skip a block.
    ///
    /// Floor blocks are scanned first, then platforms; the first block that
    /// resolves the actor ends the scan of its list. Returns the resolving
    /// block, if any.
    pub fn resolve_vertical_collisions(
        &mut self,
        level: &Level,
        previous: &Rect,
    ) -> Option<CollisionBlock> {
        for block in &level.floor_blocks {
            let hitbox = self.hitbox();
            let overlapping = floor_collision(&hitbox, block);
            if self.velocity.y > 0.0
                && (overlapping || crossed_top(previous.bottom(), &hitbox, block))
            {
                self.land_on(block);
                return Some(*block);
            }
            if self.velocity.y < 0.0
                && (overlapping || crossed_bottom(previous.top(), &hitbox, block))
            {
                self.velocity.y = 0.0;
                self.position.y = block.bottom() - HITBOX_OFFSET_Y + COLLISION_EPSILON;
                log::trace!("Head hit floor block at {:?}", block.rect.position);
                return Some(*block);
            }
        }

        if self.velocity.y > 0.0 {
            for block in &level.platform_blocks {
                let hitbox = self.hitbox();
                if platform_collision(&hitbox, block)
                    || crossed_top(previous.bottom(), &hitbox, block)
                {
                    self.land_on(block);
                    return Some(*block);
                }
            }
        }

        None
    }

    /// Put the hitbox bottom just above the block top and stop falling
    fn land_on(&mut self, block: &CollisionBlock) {
        self.velocity.y = 0.0;
        self.position.y = block.top() - (HITBOX_OFFSET_Y + HITBOX_HEIGHT) - COLLISION_EPSILON;
        log::trace!("Landed on {:?} block at {:?}", block.kind, block.rect.position);
    }
}

/// Complete simulation state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub actor: Actor,
    pub level: Level,
    #[serde(default)]
    pub physics: PhysicsConfig,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the actor at the spawn point
    pub fn new(level: Level) -> Self {
        Self::with_physics(level, PhysicsConfig::default())
    }

    pub fn with_physics(level: Level, physics: PhysicsConfig) -> Self {
        Self {
            actor: Actor::new(Vec2::new(SPAWN_X, SPAWN_Y)),
            level,
            physics,
            time_ticks: 0,
        }
    }
}
