//=========================================================================
// Device State
//=========================================================================
//
// Persistent device state folded from `DeviceEvent`s.
//
// Architecture:
//   DeviceEvent → apply() → key array / pointer / gamepads → queries
//
// Cycle lifecycle: apply()* → (poll steps query) → end_cycle()
//
// Held keys and buttons survive the cycle boundary; pointer motion is a
// per-cycle delta and is reset by `end_cycle()`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

//=== Internal Dependencies ===============================================

use super::interface::{DeviceEvent, PlatformInput, PointerState};
use crate::core::input::device::{GamepadAxis, GamepadButton, GamepadId, KeyCode};
use crate::error::PlatformError;

//=== GamepadState ========================================================

#[derive(Debug, Clone, Default)]
struct GamepadState {
    axes: [i16; GamepadAxis::ALL.len()],
    buttons: [bool; GamepadButton::ALL.len()],
}

//=== DeviceState =========================================================

/// Keyboard, pointer and gamepad state of an event-driven platform.
#[derive(Debug, Clone)]
pub struct DeviceState {
    //--- Persistent State (survives cycle boundary) -----------------------
    keys: Vec<bool>,
    pointer: PointerState,
    gamepads: BTreeMap<GamepadId, GamepadState>,

    //--- Cycle Tracking ---------------------------------------------------
    has_position: bool,
}

impl DeviceState {
    /// Creates a state with nothing held and no gamepads.
    pub fn new() -> Self {
        Self {
            keys: vec![false; KeyCode::COUNT],
            pointer: PointerState::default(),
            gamepads: BTreeMap::new(),
            has_position: false,
        }
    }

    //--- Event Processing -------------------------------------------------

    /// Folds a single device event into the state.
    pub fn apply(&mut self, event: &DeviceEvent) {
        match *event {
            DeviceEvent::KeyDown(key) => self.keys[key.index()] = true,
            DeviceEvent::KeyUp(key) => self.keys[key.index()] = false,

            DeviceEvent::PointerMoved { x, y } => {
                // The first reported position is a jump from nowhere, not motion
                if self.has_position {
                    self.pointer.delta_x += x - self.pointer.x;
                    self.pointer.delta_y += y - self.pointer.y;
                }
                self.pointer.x = x;
                self.pointer.y = y;
                self.has_position = true;
            }
            DeviceEvent::PointerButtonDown(button) => self.pointer.set_button(button, true),
            DeviceEvent::PointerButtonUp(button) => self.pointer.set_button(button, false),

            DeviceEvent::FocusLost => {
                self.keys.iter_mut().for_each(|k| *k = false);
                self.pointer.left = false;
                self.pointer.middle = false;
                self.pointer.right = false;
            }

            DeviceEvent::GamepadConnected(id) => {
                self.gamepads.entry(id).or_default();
            }
            DeviceEvent::GamepadDisconnected(id) => {
                self.gamepads.remove(&id);
            }
            DeviceEvent::GamepadAxisMoved { id, axis, value } => {
                if let Some(pad) = self.gamepads.get_mut(&id) {
                    pad.axes[axis_slot(axis)] = value;
                }
            }
            DeviceEvent::GamepadButtonChanged { id, button, pressed } => {
                if let Some(pad) = self.gamepads.get_mut(&id) {
                    pad.buttons[button_slot(button)] = pressed;
                }
            }
        }
    }

    pub fn apply_all<'a>(&mut self, events: impl IntoIterator<Item = &'a DeviceEvent>) {
        for event in events {
            self.apply(event);
        }
    }

    /// Resets per-cycle motion.
    pub fn end_cycle(&mut self) {
        self.pointer.delta_x = 0.0;
        self.pointer.delta_y = 0.0;
    }

    /// Replaces the pointer reading wholesale, deltas included.
    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.pointer = pointer;
        self.has_position = true;
    }

    //--- Queries ----------------------------------------------------------

    /// Pressed flags indexed by [`KeyCode::index`].
    pub fn keys(&self) -> &[bool] {
        &self.keys
    }

    pub fn is_key_down(&self, key: KeyCode) -> bool {
        self.keys[key.index()]
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    /// Lowest-numbered connected gamepad.
    pub fn first_gamepad(&self) -> Option<GamepadId> {
        self.gamepads.keys().next().copied()
    }

    /// `None` if `id` is not connected.
    pub fn gamepad_axis(&self, id: GamepadId, axis: GamepadAxis) -> Option<i16> {
        self.gamepads.get(&id).map(|pad| pad.axes[axis_slot(axis)])
    }

    /// `None` if `id` is not connected.
    pub fn gamepad_button(&self, id: GamepadId, button: GamepadButton) -> Option<bool> {
        self.gamepads.get(&id).map(|pad| pad.buttons[button_slot(button)])
    }
}

impl Default for DeviceState {
    fn default() -> Self {
        Self::new()
    }
}

//=== PlatformInput =======================================================

impl PlatformInput for DeviceState {
    fn keyboard_state(&self) -> Result<&[bool], PlatformError> {
        Ok(self.keys())
    }

    fn key_name(&self, scancode: usize) -> Option<&str> {
        KeyCode::from_index(scancode).map(KeyCode::name)
    }

    fn pointer_state(&self) -> Result<PointerState, PlatformError> {
        Ok(self.pointer)
    }

    fn first_gamepad(&self) -> Result<Option<GamepadId>, PlatformError> {
        Ok(DeviceState::first_gamepad(self))
    }

    fn gamepad_axis(&self, id: GamepadId, axis: GamepadAxis) -> Result<i16, PlatformError> {
        DeviceState::gamepad_axis(self, id, axis).ok_or_else(|| not_open(id))
    }

    fn gamepad_button(&self, id: GamepadId, button: GamepadButton) -> Result<bool, PlatformError> {
        DeviceState::gamepad_button(self, id, button).ok_or_else(|| not_open(id))
    }
}

//=== Helpers =============================================================

fn not_open(id: GamepadId) -> PlatformError {
    PlatformError::new(format!("gamepad {} is not open", id.0))
}

fn axis_slot(axis: GamepadAxis) -> usize {
    axis as usize
}

fn button_slot(button: GamepadButton) -> usize {
    button as usize
}

//=========================================================================
// Unit Tests
//=========================================================================
