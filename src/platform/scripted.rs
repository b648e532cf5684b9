//=========================================================================
// Scripted Platform
//=========================================================================
//
// Headless `PlatformInput` whose devices are set directly by the caller.
//
// Used by the `input-probe` CLI and by tests. Each device family can be
// told to fail, which surfaces as a `DeviceQuery` error from the poll
// step that touches it.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::device::{GamepadAxis, GamepadButton, GamepadId, KeyCode};
use crate::core::platform_bridge::{DeviceEvent, DeviceState, PlatformInput, PointerState};
use crate::error::PlatformError;

//=== ScriptedPlatform ====================================================

/// Headless `PlatformInput` whose devices are set directly.
///
/// Backs the CLI probe and every step test. State changes are applied
/// immediately; there is no cycle boundary unless `end_cycle()` is called.
///
/// # Fields
///
/// - `state`: the same `DeviceState` the event-fed backends use
/// - `*_failure`: when set, the matching device queries return that error
///   until the platform is rebuilt
#[derive(Debug, Clone, Default)]
pub struct ScriptedPlatform {
    state: DeviceState,

    //--- Failure Injection ------------------------------------------------
    keyboard_failure: Option<PlatformError>,
    pointer_failure: Option<PlatformError>,
    gamepad_failure: Option<PlatformError>,
}

impl ScriptedPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    //--- Keyboard ---------------------------------------------------------

    pub fn press(&mut self, key: KeyCode) {
        self.state.apply(&DeviceEvent::KeyDown(key));
    }

    pub fn release(&mut self, key: KeyCode) {
        self.state.apply(&DeviceEvent::KeyUp(key));
    }

    //--- Pointer ----------------------------------------------------------

    pub fn set_pointer(&mut self, pointer: PointerState) {
        self.state.set_pointer(pointer);
    }

    //--- Gamepad ----------------------------------------------------------

    pub fn connect_gamepad(&mut self, id: GamepadId) {
        self.state.apply(&DeviceEvent::GamepadConnected(id));
    }

    pub fn disconnect_gamepad(&mut self, id: GamepadId) {
        self.state.apply(&DeviceEvent::GamepadDisconnected(id));
    }

    /// Ignored unless `id` is connected.
    pub fn set_gamepad_axis(&mut self, id: GamepadId, axis: GamepadAxis, value: i16) {
        self.state
            .apply(&DeviceEvent::GamepadAxisMoved { id, axis, value });
    }

    /// Ignored unless `id` is connected.
    pub fn set_gamepad_button(&mut self, id: GamepadId, button: GamepadButton, pressed: bool) {
        self.state
            .apply(&DeviceEvent::GamepadButtonChanged { id, button, pressed });
    }

    //--- Failure Injection ------------------------------------------------

    pub fn fail_keyboard(&mut self, message: impl Into<String>) {
        self.keyboard_failure = Some(PlatformError::new(message));
    }

    pub fn fail_pointer(&mut self, message: impl Into<String>) {
        self.pointer_failure = Some(PlatformError::new(message));
    }

    /// Fails gamepad enumeration and every gamepad query.
    pub fn fail_gamepad(&mut self, message: impl Into<String>) {
        self.gamepad_failure = Some(PlatformError::new(message));
    }

    //--- Cycle ------------------------------------------------------------

    pub fn apply(&mut self, event: &DeviceEvent) {
        self.state.apply(event);
    }

    pub fn end_cycle(&mut self) {
        self.state.end_cycle();
    }
}

//=== PlatformInput =======================================================

fn check(failure: &Option<PlatformError>) -> Result<(), PlatformError> {
    match failure {
        Some(err) => Err(err.clone()),
        None => Ok(()),
    }
}

impl PlatformInput for ScriptedPlatform {
    fn keyboard_state(&self) -> Result<&[bool], PlatformError> {
        check(&self.keyboard_failure)?;
        self.state.keyboard_state()
    }

    fn key_name(&self, scancode: usize) -> Option<&str> {
        self.state.key_name(scancode)
    }

    fn pointer_state(&self) -> Result<PointerState, PlatformError> {
        check(&self.pointer_failure)?;
        PlatformInput::pointer_state(&self.state)
    }

    fn first_gamepad(&self) -> Result<Option<GamepadId>, PlatformError> {
        check(&self.gamepad_failure)?;
        PlatformInput::first_gamepad(&self.state)
    }

    fn gamepad_axis(&self, id: GamepadId, axis: GamepadAxis) -> Result<i16, PlatformError> {
        check(&self.gamepad_failure)?;
        PlatformInput::gamepad_axis(&self.state, id, axis)
    }

    fn gamepad_button(&self, id: GamepadId, button: GamepadButton) -> Result<bool, PlatformError> {
        check(&self.gamepad_failure)?;
        PlatformInput::gamepad_button(&self.state, id, button)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
