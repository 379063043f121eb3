//! Keyboard input mapping
//!
//! Browser key events arrive between frames. Left and right are tracked as
//! held state; jump is latched as a one-shot until the next tick consumes it.

use crate::sim::InputIntent;

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKey {
    Left,
    Right,
    Jump,
}

impl GameKey {
    /// Map a `KeyboardEvent.code` value
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "KeyD" | "ArrowRight" => Some(GameKey::Right),
            "KeyA" | "ArrowLeft" => Some(GameKey::Left),
            "KeyW" | "ArrowUp" => Some(GameKey::Jump),
            _ => None,
        }
    }
}

/// Accumulated key state between ticks
#[derive(Debug, Clone, Default)]
pub struct KeyState {
    left_pressed: bool,
    right_pressed: bool,
    jump_pending: bool,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: GameKey) {
        match key {
            GameKey::Left => self.left_pressed = true,
            GameKey::Right => self.right_pressed = true,
            GameKey::Jump => self.jump_pending = true,
        }
    }

    /// Jump has no release action
    pub fn key_up(&mut self, key: GameKey) {
        match key {
            GameKey::Left => self.left_pressed = false,
            GameKey::Right => self.right_pressed = false,
            GameKey::Jump => {}
        }
    }

    /// Feed a raw key code; returns false for keys the game ignores
    pub fn handle_code(&mut self, code: &str, pressed: bool) -> bool {
        match GameKey::from_code(code) {
            Some(key) if pressed => {
                self.key_down(key);
                true
            }
            Some(key) => {
                self.key_up(key);
                true
            }
            None => false,
        }
    }

    /// Intent for the next tick, consuming a pending jump
    pub fn take_intent(&mut self) -> InputIntent {
        let intent = InputIntent {
            move_left: self.left_pressed,
            move_right: self.right_pressed,
            jump_requested: self.jump_pending,
        };
        self.jump_pending = false;
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(GameKey::from_code("KeyD"), Some(GameKey::Right));
        assert_eq!(GameKey::from_code("ArrowLeft"), Some(GameKey::Left));
        assert_eq!(GameKey::from_code("ArrowUp"), Some(GameKey::Jump));
        assert_eq!(GameKey::from_code("Space"), None);
    }

    #[test]
    fn test_held_keys_persist() {
        let mut keys = KeyState::new();
        assert!(keys.handle_code("KeyD", true));
        assert!(keys.take_intent().move_right);
        assert!(keys.take_intent().move_right);

        keys.handle_code("KeyD", false);
        assert!(!keys.take_intent().move_right);
    }

    #[test]
    fn test_jump_is_one_shot() {
        let mut keys = KeyState::new();
        keys.handle_code("KeyW", true);
        keys.handle_code("KeyW", false);

        assert!(keys.take_intent().jump_requested);
        assert!(!keys.take_intent().jump_requested);
    }

    #[test]
    fn test_unknown_code_ignored() {
        let mut keys = KeyState::new();
        assert!(!keys.handle_code("Escape", true));
        assert_eq!(keys.take_intent(), InputIntent::default());
    }
}
