//=========================================================================
// Input Snapshot
//=========================================================================
//
// Read-side view of the raw device state that poll steps wrote this
// cycle. Combine steps evaluate every source through this trait, which
// keeps the combination rules independent of how the snapshot is stored.
//
//   Context keys ──> ContextSnapshot ──> InputSnapshot ──> combine rules
//
//=========================================================================

//=== External Dependencies ===============================================

use serde_json::Value as Json;

//=== Internal Dependencies ===============================================

use super::device::{GamepadAxis, GamepadButton, PointerAxis, PointerButton};
use crate::core::context::{keys, Context};

//=== InputSnapshot =======================================================

/// Raw device readings for one cycle.
///
/// Absent devices read as released / zero; implementations never fail.
pub trait InputSnapshot {
    /// `true` if the key with this display name is held.
    fn key_pressed(&self, name: &str) -> bool;

    /// Normalized pointer motion for the cycle.
    fn pointer_axis(&self, axis: PointerAxis) -> f32;

    fn pointer_button(&self, button: PointerButton) -> bool;

    fn gamepad_connected(&self) -> bool;

    /// Normalized axis value; 0 while disconnected.
    fn gamepad_axis(&self, axis: GamepadAxis) -> f32;

    /// Digital button state; released while disconnected.
    fn gamepad_button(&self, button: GamepadButton) -> bool;
}

//=== ContextSnapshot =====================================================

/// [`InputSnapshot`] backed by the Context keys written by poll steps.
pub struct ContextSnapshot<'a> {
    context: &'a Context,
    pressed_keys: Option<&'a Json>,
    gamepad_connected: bool,
}

impl<'a> ContextSnapshot<'a> {
    /// Captures the keyboard map and gamepad flag once per combine pass.
    pub fn new(context: &'a Context) -> Self {
        Self {
            context,
            pressed_keys: context.get_json(keys::KEYBOARD_STATE),
            gamepad_connected: context.get(keys::GAMEPAD_CONNECTED, false),
        }
    }
}

impl InputSnapshot for ContextSnapshot<'_> {
    fn key_pressed(&self, name: &str) -> bool {
        self.pressed_keys
            .and_then(|state| state.get(name))
            .and_then(Json::as_bool)
            .unwrap_or(false)
    }

    fn pointer_axis(&self, axis: PointerAxis) -> f32 {
        self.context.get(axis.context_key(), 0.0f32)
    }

    fn pointer_button(&self, button: PointerButton) -> bool {
        self.context.get(button.context_key(), false)
    }

    fn gamepad_connected(&self) -> bool {
        self.gamepad_connected
    }

    fn gamepad_axis(&self, axis: GamepadAxis) -> f32 {
        if !self.gamepad_connected {
            return 0.0;
        }
        self.context.get(axis.context_key(), 0.0f32)
    }

    fn gamepad_button(&self, button: GamepadButton) -> bool {
        if !self.gamepad_connected {
            return false;
        }
        self.context.get(button.context_key(), false)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_context_reads_as_idle() {
        let context = Context::new();
        let snapshot = ContextSnapshot::new(&context);

        assert!(!snapshot.key_pressed("W"));
        assert_eq!(snapshot.pointer_axis(PointerAxis::X), 0.0);
        assert!(!snapshot.pointer_button(PointerButton::Left));
        assert!(!snapshot.gamepad_connected());
        assert_eq!(snapshot.gamepad_axis(GamepadAxis::LeftStickX), 0.0);
    }

    #[test]
    fn sparse_key_map_lookup() {
        let mut context = Context::new();
        context.set(keys::KEYBOARD_STATE, json!({ "D": true, "Space": true }));
        let snapshot = ContextSnapshot::new(&context);

        assert!(snapshot.key_pressed("D"));
        assert!(snapshot.key_pressed("Space"));
        assert!(!snapshot.key_pressed("A"));
    }

    #[test]
    fn stale_gamepad_values_ignored_while_disconnected() {
        let mut context = Context::new();
        context.set(keys::GAMEPAD_CONNECTED, false);
        context.set(GamepadAxis::LeftStickX.context_key(), 0.9f32);
        context.set(GamepadButton::South.context_key(), true);
        let snapshot = ContextSnapshot::new(&context);

        assert_eq!(snapshot.gamepad_axis(GamepadAxis::LeftStickX), 0.0);
        assert!(!snapshot.gamepad_button(GamepadButton::South));
    }
}
