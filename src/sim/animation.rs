//! Sprite animation states for the warrior
//!
//! The set of animations is closed. Each state maps to one horizontal sprite
//! strip; which state to show is a pure function of facing and velocity.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Facing;

/// Animation states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AnimationState {
    #[default]
    Idle,
    IdleLeft,
    Run,
    RunLeft,
    Jump,
    JumpLeft,
    Fall,
    FallLeft,
}

/// Sprite strip backing an animation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationDescriptor {
    /// Image path relative to the web root
    pub image: &'static str,
    /// Number of frames in the strip
    pub frame_rate: u32,
    /// Ticks each frame stays on screen
    pub frame_buffer: u32,
}

impl AnimationState {
    pub const ALL: [AnimationState; 8] = [
        AnimationState::Idle,
        AnimationState::IdleLeft,
        AnimationState::Run,
        AnimationState::RunLeft,
        AnimationState::Jump,
        AnimationState::JumpLeft,
        AnimationState::Fall,
        AnimationState::FallLeft,
    ];

    pub fn descriptor(&self) -> AnimationDescriptor {
        let (image, frame_rate, frame_buffer) = match self {
            AnimationState::Idle => ("./imgs/warrior/Idle.png", 8, 20),
            AnimationState::IdleLeft => ("./imgs/warrior/IdleLeft.png", 8, 20),
            AnimationState::Run => ("./imgs/warrior/Run.png", 8, 20),
            AnimationState::RunLeft => ("./imgs/warrior/RunLeft.png", 8, 20),
            AnimationState::Jump => ("./imgs/warrior/Jump.png", 2, 3),
            AnimationState::JumpLeft => ("./imgs/warrior/JumpLeft.png", 2, 3),
            AnimationState::Fall => ("./imgs/warrior/Fall.png", 2, 3),
            AnimationState::FallLeft => ("./imgs/warrior/FallLeft.png", 2, 3),
        };
        AnimationDescriptor {
            image,
            frame_rate,
            frame_buffer,
        }
    }
}

/// Pick the animation for the actor's facing and velocity
///
/// Vertical motion wins over running; running wins over idling.
pub fn select_animation(facing: Facing, velocity: Vec2) -> AnimationState {
    if velocity.y < 0.0 {
        match facing {
            Facing::Left => AnimationState::JumpLeft,
            Facing::Right => AnimationState::Jump,
        }
    } else if velocity.y > 0.0 {
        match facing {
            Facing::Left => AnimationState::FallLeft,
            Facing::Right => AnimationState::Fall,
        }
    } else if velocity.x > 0.0 {
        AnimationState::Run
    } else if velocity.x < 0.0 {
        AnimationState::RunLeft
    } else {
        match facing {
            Facing::Left => AnimationState::IdleLeft,
            Facing::Right => AnimationState::Idle,
        }
    }
}

/// Current animation and frame of a sprite
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteAnimator {
    pub state: AnimationState,
    pub current_frame: u32,
    elapsed_frames: u64,
}

impl Default for SpriteAnimator {
    fn default() -> Self {
        Self::new(AnimationState::Idle)
    }
}

impl SpriteAnimator {
    pub fn new(state: AnimationState) -> Self {
        Self {
            state,
            current_frame: 0,
            elapsed_frames: 0,
        }
    }

    pub fn descriptor(&self) -> AnimationDescriptor {
        self.state.descriptor()
    }

    /// Count one rendered frame, stepping the strip every `frame_buffer` frames
    pub fn advance(&mut self) {
        self.elapsed_frames += 1;

        let descriptor = self.descriptor();
        if self.elapsed_frames % u64::from(descriptor.frame_buffer.max(1)) == 0 {
            if self.current_frame + 1 < descriptor.frame_rate {
                self.current_frame += 1;
            } else {
                self.current_frame = 0;
            }
        }
    }

    /// Switch to another animation
    ///
    /// A no-op when already showing `next` or when its image has not finished
    /// loading; the caller retries next frame. Returns whether a switch
    /// happened.
    pub fn switch_to(&mut self, next: AnimationState, image_ready: bool) -> bool {
        if self.state == next || !image_ready {
            return false;
        }
        log::trace!("Animation {:?} -> {:?}", self.state, next);
        self.state = next;
        self.current_frame = 0;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_animation() {
        use AnimationState::*;
        let cases = [
            (Facing::Right, Vec2::new(0.0, 0.0), Idle),
            (Facing::Left, Vec2::new(0.0, 0.0), IdleLeft),
            (Facing::Right, Vec2::new(1.0, 0.0), Run),
            (Facing::Left, Vec2::new(-1.5, 0.0), RunLeft),
            (Facing::Right, Vec2::new(1.0, -4.0), Jump),
            (Facing::Left, Vec2::new(0.0, -0.1), JumpLeft),
            (Facing::Right, Vec2::new(0.0, 0.1), Fall),
            (Facing::Left, Vec2::new(-1.5, 2.0), FallLeft),
        ];
        for (facing, velocity, expected) in cases {
            assert_eq!(select_animation(facing, velocity), expected, "{facing:?} {velocity:?}");
        }
    }

    #[test]
    fn test_descriptor_table() {
        for state in AnimationState::ALL {
            let descriptor = state.descriptor();
            assert!(descriptor.image.ends_with(".png"));
            assert!(descriptor.frame_rate > 0);
            assert!(descriptor.frame_buffer > 0);
        }
        assert_eq!(AnimationState::Run.descriptor().frame_rate, 8);
        assert_eq!(AnimationState::FallLeft.descriptor().frame_buffer, 3);
    }

    #[test]
    fn test_advance_steps_every_frame_buffer() {
        let mut animator = SpriteAnimator::new(AnimationState::Jump);
        // 2 frames, 3 ticks each
        let frames: Vec<u32> = (0..7)
            .map(|_| {
                animator.advance();
                animator.current_frame
            })
            .collect();
        assert_eq!(frames, vec![0, 0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_switch_waits_for_image() {
        let mut animator = SpriteAnimator::new(AnimationState::Idle);
        assert!(!animator.switch_to(AnimationState::Run, false));
        assert_eq!(animator.state, AnimationState::Idle);

        animator.current_frame = 5;
        assert!(animator.switch_to(AnimationState::Run, true));
        assert_eq!(animator.state, AnimationState::Run);
        assert_eq!(animator.current_frame, 0);

        // Same state keeps the current frame
        animator.current_frame = 3;
        assert!(!animator.switch_to(AnimationState::Run, true));
        assert_eq!(animator.current_frame, 3);
    }
}
