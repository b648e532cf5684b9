//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Contract between platform input layers and the poll steps.
//
// Poll steps only ever call `PlatformInput`; how a platform learns about
// devices (winit callbacks, a scripted replay, a native API) stays on
// the platform side of this boundary.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::device::{
    GamepadAxis, GamepadButton, GamepadId, KeyCode, PointerButton,
};
use crate::error::PlatformError;

//=== PointerState ========================================================

/// Pointer reading for one cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerState {
    /// Absolute position in window pixels.
    pub x: f32,
    pub y: f32,

    /// Motion since the previous cycle, in pixels.
    pub delta_x: f32,
    pub delta_y: f32,

    pub left: bool,
    pub middle: bool,
    pub right: bool,
}

impl PointerState {
    pub fn button(&self, button: PointerButton) -> bool {
        match button {
            PointerButton::Left => self.left,
            PointerButton::Middle => self.middle,
            PointerButton::Right => self.right,
        }
    }

    pub(crate) fn set_button(&mut self, button: PointerButton, pressed: bool) {
        match button {
            PointerButton::Left => self.left = pressed,
            PointerButton::Middle => self.middle = pressed,
            PointerButton::Right => self.right = pressed,
        }
    }
}

//=== PlatformInput =======================================================

/// Native input layer queried by the poll steps.
///
/// Single-thread affine: queried from the thread that drives the poll
/// cycle, never concurrently.
pub trait PlatformInput {
    /// Full per-scancode pressed/released array.
    fn keyboard_state(&self) -> Result<&[bool], PlatformError>;

    /// Display name for a scancode; `None` for unnamed scancodes.
    fn key_name(&self, scancode: usize) -> Option<&str>;

    fn pointer_state(&self) -> Result<PointerState, PlatformError>;

    /// Enumerates connected gamepads and opens the first one.
    fn first_gamepad(&self) -> Result<Option<GamepadId>, PlatformError>;

    /// Raw signed 16-bit axis reading.
    fn gamepad_axis(&self, id: GamepadId, axis: GamepadAxis) -> Result<i16, PlatformError>;

    fn gamepad_button(&self, id: GamepadId, button: GamepadButton) -> Result<bool, PlatformError>;
}

//=== DeviceEvent =========================================================

/// Device change reported by a platform backend.
///
/// Event-driven platforms fold these into their device state between
/// poll cycles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DeviceEvent {
    KeyDown(KeyCode),
    KeyUp(KeyCode),

    /// Cursor moved to an absolute window position.
    PointerMoved { x: f32, y: f32 },
    PointerButtonDown(PointerButton),
    PointerButtonUp(PointerButton),

    /// Window lost focus: every held key and button is released.
    FocusLost,

    GamepadConnected(GamepadId),
    GamepadDisconnected(GamepadId),
    GamepadAxisMoved {
        id: GamepadId,
        axis: GamepadAxis,
        value: i16,
    },
    GamepadButtonChanged {
        id: GamepadId,
        button: GamepadButton,
        pressed: bool,
    },
}
