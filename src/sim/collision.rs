//! Collision detection against static level geometry
//!
//! Two block kinds exist: solid floor blocks that stop vertical motion from
//! either side, and one-way platforms that only catch a falling actor. The
//! tests here are pure; the actor decides how to resolve a hit.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::{PLATFORM_HEIGHT, TILE_SIZE};

/// Block types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockKind {
    /// Solid from above and below
    Floor,
    /// Solid from above only
    Platform,
}

impl BlockKind {
    /// Default block height for tiles of this kind
    pub fn default_height(&self) -> f32 {
        match self {
            BlockKind::Floor => TILE_SIZE,
            BlockKind::Platform => PLATFORM_HEIGHT,
        }
    }
}

/// A static collision rectangle produced by the level loader
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CollisionBlock {
    pub kind: BlockKind,
    pub rect: Rect,
}

impl CollisionBlock {
    /// Tile-sized block at the given level-space position
    pub fn new(kind: BlockKind, position: Vec2) -> Self {
        Self {
            kind,
            rect: Rect::new(position, TILE_SIZE, kind.default_height()),
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.rect.top()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.rect.bottom()
    }
}

/// Check a hitbox against a floor block
///
/// Call with the hitbox *after* the tick's vertical movement has been applied,
/// so a fast-moving actor is caught in the block instead of skipping over it.
/// All bounds are inclusive: touching the block counts as contact.
pub fn floor_collision(hitbox: &Rect, block: &CollisionBlock) -> bool {
    hitbox.overlaps_horizontally(&block.rect) && hitbox.overlaps_vertically(&block.rect)
}

/// Check a hitbox against a one-way platform
///
/// Only the hitbox bottom edge is tested against the platform band
/// `[top, top + height]`. The caller must ignore hits while moving upward.
pub fn platform_collision(hitbox: &Rect, block: &CollisionBlock) -> bool {
    let feet = hitbox.bottom();
    hitbox.overlaps_horizontally(&block.rect) && feet >= block.top() && feet <= block.bottom()
}

/// Check whether the hitbox bottom passed through a block's top edge this tick
///
/// `previous_bottom` is the hitbox bottom before the vertical move. Catches a
/// fall fast enough to carry the feet across the whole block in one tick.
pub fn crossed_top(previous_bottom: f32, hitbox: &Rect, block: &CollisionBlock) -> bool {
    hitbox.overlaps_horizontally(&block.rect)
        && previous_bottom <= block.top()
        && hitbox.bottom() >= block.top()
}

/// Check whether the hitbox top passed up through a block's bottom edge this tick
pub fn crossed_bottom(previous_top: f32, hitbox: &Rect, block: &CollisionBlock) -> bool {
    hitbox.overlaps_horizontally(&block.rect)
        && previous_top >= block.bottom()
        && hitbox.top() <= block.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hitbox_at(x: f32, y: f32) -> Rect {
        Rect::new(Vec2::new(x, y), 14.0, 27.0)
    }

    #[test]
    fn test_floor_block_dimensions() {
        let block = CollisionBlock::new(BlockKind::Floor, Vec2::new(80.0, 32.0));
        assert_eq!(block.rect.width, 16.0);
        assert_eq!(block.rect.height, 16.0);

        let platform = CollisionBlock::new(BlockKind::Platform, Vec2::new(80.0, 32.0));
        assert_eq!(platform.rect.height, 4.0);
    }

    #[test]
    fn test_floor_collision_feet_in_block() {
        let block = CollisionBlock::new(BlockKind::Floor, Vec2::new(100.0, 400.0));
        // Feet 2 units into the block
        assert!(floor_collision(&hitbox_at(101.0, 375.0), &block));
        // Feet exactly on the top edge
        assert!(floor_collision(&hitbox_at(101.0, 373.0), &block));
        // Feet just above
        assert!(!floor_collision(&hitbox_at(101.0, 372.9), &block));
    }

    #[test]
    fn test_floor_collision_head_from_below() {
        let block = CollisionBlock::new(BlockKind::Floor, Vec2::new(100.0, 400.0));
        // Head 1 unit into the block bottom
        assert!(floor_collision(&hitbox_at(101.0, 415.0), &block));
        assert!(!floor_collision(&hitbox_at(101.0, 416.5), &block));
    }

    #[test]
    fn test_floor_collision_horizontal_miss() {
        let block = CollisionBlock::new(BlockKind::Floor, Vec2::new(100.0, 400.0));
        assert!(!floor_collision(&hitbox_at(80.0, 380.0), &block));
        assert!(!floor_collision(&hitbox_at(116.5, 380.0), &block));
        // Right edge touching left side of the block
        assert!(floor_collision(&hitbox_at(86.0, 380.0), &block));
    }

    #[test]
    fn test_platform_collision_only_feet() {
        let block = CollisionBlock::new(BlockKind::Platform, Vec2::new(100.0, 400.0));
        // Feet inside the 4-unit band
        assert!(platform_collision(&hitbox_at(101.0, 375.0), &block));
        assert!(platform_collision(&hitbox_at(101.0, 377.0), &block));
        // Feet below the band: body passes through
        assert!(!platform_collision(&hitbox_at(101.0, 378.0), &block));
        assert!(!platform_collision(&hitbox_at(101.0, 390.0), &block));
    }

    #[test]
    fn test_crossed_top_catches_fast_fall() {
        let block = CollisionBlock::new(BlockKind::Platform, Vec2::new(100.0, 400.0));
        // Feet went from 395 to 410 in one tick, skipping the 4-unit band
        let hitbox = hitbox_at(101.0, 383.0);
        assert!(!platform_collision(&hitbox, &block));
        assert!(crossed_top(395.0, &hitbox, &block));

        // Already below the top before moving
        assert!(!crossed_top(401.0, &hitbox, &block));
        // Not far enough to reach the top
        assert!(!crossed_top(390.0, &hitbox_at(101.0, 371.0), &block));
        // Beside the block
        assert!(!crossed_top(395.0, &hitbox_at(130.0, 383.0), &block));
    }

    #[test]
    fn test_crossed_bottom_catches_fast_rise() {
        let block = CollisionBlock::new(BlockKind::Floor, Vec2::new(100.0, 400.0));
        // Top went from 420 to 398 in one tick
        let hitbox = hitbox_at(101.0, 398.0);
        assert!(crossed_bottom(420.0, &hitbox, &block));
        assert!(!crossed_bottom(410.0, &hitbox, &block));
        assert!(!crossed_bottom(420.0, &hitbox_at(101.0, 417.0), &block));
    }
}
