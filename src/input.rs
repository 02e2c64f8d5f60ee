//! Per-frame input snapshot
//!
//! The simulation never polls the platform. Once per frame the orchestrator
//! freezes keyboard and mouse state into this snapshot and passes it down,
//! so a whole frame sees one consistent view of the controls.

use macroquad::prelude::{is_key_down, is_key_pressed, is_mouse_button_down, KeyCode, MouseButton};

/// Read-only view of the controls for one frame.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    /// Move-left key held.
    pub left: bool,
    /// Move-right key held.
    pub right: bool,
    /// Jump key went down this frame (edge, not level).
    pub jump_pressed: bool,
    /// Fire button held.
    pub shoot: bool,
}

impl InputSnapshot {
    /// Capture the current device state.
    pub fn poll() -> Self {
        Self {
            left: is_key_down(KeyCode::A) || is_key_down(KeyCode::Left),
            right: is_key_down(KeyCode::D) || is_key_down(KeyCode::Right),
            jump_pressed: is_key_pressed(KeyCode::Space),
            shoot: is_mouse_button_down(MouseButton::Left),
        }
    }

    /// Horizontal movement intent: -1, 0 or +1. Opposing keys cancel.
    pub fn horizontal_intent(&self) -> f32 {
        let mut intent = 0.0;
        if self.left {
            intent -= 1.0;
        }
        if self.right {
            intent += 1.0;
        }
        intent
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_combines_held_keys() {
        let none = InputSnapshot::default();
        assert_eq!(none.horizontal_intent(), 0.0);

        let left = InputSnapshot {
            left: true,
            ..InputSnapshot::default()
        };
        assert_eq!(left.horizontal_intent(), -1.0);

        let right = InputSnapshot {
            right: true,
            ..InputSnapshot::default()
        };
        assert_eq!(right.horizontal_intent(), 1.0);

        let both = InputSnapshot {
            left: true,
            right: true,
            ..InputSnapshot::default()
        };
        assert_eq!(both.horizontal_intent(), 0.0);
    }
}
