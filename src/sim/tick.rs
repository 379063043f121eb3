//! Fixed-step simulation tick
//!
//! One tick per rendered frame. Everything the tick touches besides the game
//! state is passed in through [`SimulationContext`].

use serde::{Deserialize, Serialize};

use super::animation::{AnimationState, select_animation};
use super::camera::{Camera, Viewport};
use super::state::{Facing, GameState};

/// Player intent for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputIntent {
    /// Left key held
    pub move_left: bool,
    /// Right key held (wins over left)
    pub move_right: bool,
    /// Jump pressed since the last tick (one-shot)
    pub jump_requested: bool,
}

/// Per-session state shared by the simulation and the frame loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationContext {
    pub camera: Camera,
    pub viewport: Viewport,
    pub input: InputIntent,
}

impl Default for SimulationContext {
    fn default() -> Self {
        Self::new(Viewport::default())
    }
}

impl SimulationContext {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            camera: Camera::new(&viewport),
            viewport,
            input: InputIntent::default(),
        }
    }
}

/// Advance the game state by one tick
///
/// Order: jump impulse, actor physics, horizontal intent and horizontal
/// camera pans, vertical camera pans. The horizontal velocity chosen here is
/// applied by the next tick's physics. Consumes the one-shot jump request and
/// returns the animation the actor should show.
pub fn tick(state: &mut GameState, ctx: &mut SimulationContext) -> AnimationState {
    state.time_ticks += 1;

    let physics = &state.physics;
    let actor = &mut state.actor;

    // Jumping is not gated on being grounded
    if ctx.input.jump_requested {
        actor.velocity.y = physics.jump_impulse;
        ctx.input.jump_requested = false;
        log::debug!("Jump at tick {}", state.time_ticks);
    }

    actor.advance(&state.level, physics);

    actor.velocity.x = 0.0;
    if ctx.input.move_right {
        actor.velocity.x = physics.run_speed_right;
        actor.facing = Facing::Right;
        ctx.camera.pan_left(actor, &ctx.viewport);
    } else if ctx.input.move_left {
        actor.velocity.x = -physics.run_speed_left;
        actor.facing = Facing::Left;
        ctx.camera.pan_right(actor);
    }

    if actor.velocity.y < 0.0 {
        ctx.camera.pan_down(actor);
    } else if actor.velocity.y > 0.0 {
        ctx.camera.pan_up(actor, &ctx.viewport);
    }

    select_animation(actor.facing, actor.velocity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::{BlockKind, CollisionBlock};
    use crate::sim::level::Level;
    use glam::Vec2;

    fn ground_level() -> Level {
        let floor = (0..36)
            .map(|col| CollisionBlock::new(BlockKind::Floor, Vec2::new(col as f32 * 16.0, 416.0)))
            .collect();
        Level {
            floor_blocks: floor,
            platform_blocks: Vec::new(),
        }
    }

    fn settle(state: &mut GameState, ctx: &mut SimulationContext) {
        for _ in 0..200 {
            tick(state, ctx);
        }
    }

    #[test]
    fn test_first_tick_without_floor() {
        let mut state = GameState::new(Level::default());
        let mut ctx = SimulationContext::default();

        let animation = tick(&mut state, &mut ctx);

        assert_eq!(state.time_ticks, 1);
        assert!((state.actor.velocity.y - 0.1).abs() < 1e-6);
        assert!((state.actor.position.y - 300.1).abs() < 1e-4);
        assert_eq!(animation, AnimationState::Fall);
    }

    #[test]
    fn test_idle_on_ground() {
        let mut state = GameState::new(ground_level());
        let mut ctx = SimulationContext::default();
        settle(&mut state, &mut ctx);

        let animation = tick(&mut state, &mut ctx);
        assert_eq!(animation, AnimationState::Idle);
        assert_eq!(state.actor.velocity, Vec2::ZERO);
        assert!((state.actor.hitbox().bottom() - 416.0).abs() < 0.02);
    }

    #[test]
    fn test_run_speeds_are_asymmetric() {
        let mut state = GameState::new(ground_level());
        let mut ctx = SimulationContext::default();
        settle(&mut state, &mut ctx);

        ctx.input.move_right = true;
        assert_eq!(tick(&mut state, &mut ctx), AnimationState::Run);
        let x = state.actor.position.x;
        tick(&mut state, &mut ctx);
        assert_eq!(state.actor.position.x - x, 1.0);

        ctx.input.move_right = false;
        ctx.input.move_left = true;
        assert_eq!(tick(&mut state, &mut ctx), AnimationState::RunLeft);
        assert_eq!(state.actor.facing, Facing::Left);
        let x = state.actor.position.x;
        tick(&mut state, &mut ctx);
        assert_eq!(state.actor.position.x - x, -1.5);

        ctx.input.move_left = false;
        tick(&mut state, &mut ctx);
        assert_eq!(tick(&mut state, &mut ctx), AnimationState::IdleLeft);
    }

    #[test]
    fn test_right_wins_over_left() {
        let mut state = GameState::new(ground_level());
        let mut ctx = SimulationContext::default();
        ctx.input.move_left = true;
        ctx.input.move_right = true;

        tick(&mut state, &mut ctx);
        assert_eq!(state.actor.velocity.x, 1.0);
        assert_eq!(state.actor.facing, Facing::Right);
    }

    #[test]
    fn test_jump_is_one_shot_and_not_grounded_gated() {
        let mut state = GameState::new(ground_level());
        let mut ctx = SimulationContext::default();
        settle(&mut state, &mut ctx);

        ctx.input.jump_requested = true;
        let animation = tick(&mut state, &mut ctx);
        assert!(!ctx.input.jump_requested);
        assert!((state.actor.velocity.y - -3.9).abs() < 1e-6);
        assert_eq!(animation, AnimationState::Jump);

        // Airborne re-jump resets the impulse
        tick(&mut state, &mut ctx);
        ctx.input.jump_requested = true;
        tick(&mut state, &mut ctx);
        assert!((state.actor.velocity.y - -3.9).abs() < 1e-6);
    }

    #[test]
    fn test_jump_lands_back_on_ground() {
        let mut state = GameState::new(ground_level());
        let mut ctx = SimulationContext::default();
        settle(&mut state, &mut ctx);
        let rest_y = state.actor.position.y;

        ctx.input.jump_requested = true;
        let mut saw_fall = false;
        for _ in 0..200 {
            if tick(&mut state, &mut ctx) == AnimationState::Fall {
                saw_fall = true;
            }
        }

        assert!(saw_fall);
        assert_eq!(state.actor.velocity.y, 0.0);
        assert!((state.actor.position.y - rest_y).abs() < 0.02);
    }

    #[test]
    fn test_camera_follows_right_then_clamps() {
        let mut state = GameState::new(ground_level());
        let mut ctx = SimulationContext::default();
        settle(&mut state, &mut ctx);
        ctx.input.move_right = true;

        let mut engaged_at = None;
        for i in 0..1000 {
            let before = ctx.camera.position.x;
            tick(&mut state, &mut ctx);
            if engaged_at.is_none() && ctx.camera.position.x != before {
                engaged_at = Some(i);
                assert!(state.actor.camera_box().right() >= ctx.viewport.scaled_width());
            }
            if state.actor.camera_box().right() >= CAMERA_RIGHT_GUARD {
                assert_eq!(ctx.camera.position.x, before);
            }
        }

        assert!(engaged_at.is_some());
        // The camera never scrolls further than the guard allows
        assert!(ctx.camera.position.x >= -(CAMERA_RIGHT_GUARD - ctx.viewport.scaled_width()));
        assert!(state.actor.hitbox().right() < 572.0);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(Level::demo());
        let mut state2 = GameState::new(Level::demo());
        let mut ctx1 = SimulationContext::default();
        let mut ctx2 = SimulationContext::default();

        let inputs = [
            InputIntent {
                move_right: true,
                ..Default::default()
            },
            InputIntent {
                move_right: true,
                jump_requested: true,
                ..Default::default()
            },
            InputIntent {
                move_left: true,
                ..Default::default()
            },
            InputIntent::default(),
        ];

        for input in inputs.iter().cycle().take(400) {
            ctx1.input = *input;
            ctx2.input = *input;
            let a = tick(&mut state1, &mut ctx1);
            let b = tick(&mut state2, &mut ctx2);
            assert_eq!(a, b);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.actor, state2.actor);
        assert_eq!(ctx1.camera, ctx2.camera);
    }
}
