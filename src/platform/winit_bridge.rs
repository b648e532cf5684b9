//=========================================================================
// Winit Input Bridge
//=========================================================================
//
// Converts winit window events into `DeviceEvent`s and forwards them to
// a `ChannelPlatform`.
//
// Architecture:
//   WindowEvent → translate_window_event() → DeviceEvent → Sender
//
// Keys outside the pipeline's key set (F13-F24, numpad, media keys) are
// filtered. Winit has no gamepad support; gamepad events come from a
// separate backend sending on the same channel.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::Sender;
use log::{trace, warn};
use winit::{
    event::{ElementState, MouseButton as WinitMouseButton, WindowEvent},
    keyboard::{KeyCode as WinitKeyCode, PhysicalKey},
};

//=== Internal Dependencies ===============================================

use super::channel::PlatformEvent;
use crate::core::input::device::{KeyCode, PointerButton};
use crate::core::platform_bridge::DeviceEvent;

//=== WinitInputBridge ====================================================

/// Converts winit window events into `PlatformEvent`s for a
/// `ChannelPlatform`.
///
/// Owned by `InputWindow` on the main thread.
///
/// # Conversion Rules
///
/// - Key repeats are dropped, so a held key is one press
/// - Keys and mouse buttons without a `KeyCode`/`PointerButton` are dropped
/// - Losing focus sends `FocusLost`, which releases every held input
///
/// # Errors
///
/// Never fails. A disconnected receiver means the pipeline thread is
/// gone, which is logged at warn level and otherwise ignored.
pub struct WinitInputBridge {
    sender: Sender<PlatformEvent>,
}

impl WinitInputBridge {
    pub fn new(sender: Sender<PlatformEvent>) -> Self {
        Self { sender }
    }

    //--- Event Forwarding -------------------------------------------------

    /// Forwards the device side of a window event; everything else is
    /// ignored.
    pub fn handle_window_event(&self, event: &WindowEvent) {
        match translate_window_event(event) {
            Some(device) => self.send(PlatformEvent::Device(device)),
            None => trace!(target: "platform::input", "Window event ignored"),
        }
    }

    /// Marks the end of a cycle (one per redraw).
    pub fn end_cycle(&self) {
        self.send(PlatformEvent::CycleBoundary);
    }

    pub fn close(&self) {
        self.send(PlatformEvent::Closed);
    }

    fn send(&self, event: PlatformEvent) {
        if self.sender.send(event).is_err() {
            warn!(target: "platform::input", "Channel disconnected, dropping {:?}", event);
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

pub fn translate_window_event(event: &WindowEvent) -> Option<DeviceEvent> {
    match event {
        WindowEvent::KeyboardInput { event, .. } if !event.repeat => {
            translate_key(event.physical_key, event.state)
        }
        WindowEvent::CursorMoved { position, .. } => Some(DeviceEvent::PointerMoved {
            x: position.x as f32,
            y: position.y as f32,
        }),
        WindowEvent::MouseInput { state, button, .. } => translate_mouse_button(*button, *state),
        WindowEvent::Focused(false) => Some(DeviceEvent::FocusLost),
        _ => None,
    }
}

pub fn translate_key(key: PhysicalKey, state: ElementState) -> Option<DeviceEvent> {
    let PhysicalKey::Code(code) = key else {
        return None;
    };
    let key = key_code_from_winit(code)?;
    Some(match state {
        ElementState::Pressed => DeviceEvent::KeyDown(key),
        ElementState::Released => DeviceEvent::KeyUp(key),
    })
}

pub fn translate_mouse_button(
    button: WinitMouseButton,
    state: ElementState,
) -> Option<DeviceEvent> {
    let button = pointer_button_from_winit(button)?;
    Some(match state {
        ElementState::Pressed => DeviceEvent::PointerButtonDown(button),
        ElementState::Released => DeviceEvent::PointerButtonUp(button),
    })
}

pub fn pointer_button_from_winit(button: WinitMouseButton) -> Option<PointerButton> {
    match button {
        WinitMouseButton::Left => Some(PointerButton::Left),
        WinitMouseButton::Middle => Some(PointerButton::Middle),
        WinitMouseButton::Right => Some(PointerButton::Right),
        _ => None,
    }
}

/// Maps winit physical key codes onto the pipeline's key set.
pub fn key_code_from_winit(code: WinitKeyCode) -> Option<KeyCode> {
    use WinitKeyCode as W;
    let key = match code {
        //--- Digits -------------------------------------------------------
        W::Digit0 => KeyCode::Digit0,
        W::Digit1 => KeyCode::Digit1,
        W::Digit2 => KeyCode::Digit2,
        W::Digit3 => KeyCode::Digit3,
        W::Digit4 => KeyCode::Digit4,
        W::Digit5 => KeyCode::Digit5,
        W::Digit6 => KeyCode::Digit6,
        W::Digit7 => KeyCode::Digit7,
        W::Digit8 => KeyCode::Digit8,
        W::Digit9 => KeyCode::Digit9,

        //--- Letters ------------------------------------------------------
        W::KeyA => KeyCode::KeyA,
        W::KeyB => KeyCode::KeyB,
        W::KeyC => KeyCode::KeyC,
        W::KeyD => KeyCode::KeyD,
        W::KeyE => KeyCode::KeyE,
        W::KeyF => KeyCode::KeyF,
        W::KeyG => KeyCode::KeyG,
        W::KeyH => KeyCode::KeyH,
        W::KeyI => KeyCode::KeyI,
        W::KeyJ => KeyCode::KeyJ,
        W::KeyK => KeyCode::KeyK,
        W::KeyL => KeyCode::KeyL,
        W::KeyM => KeyCode::KeyM,
        W::KeyN => KeyCode::KeyN,
        W::KeyO => KeyCode::KeyO,
        W::KeyP => KeyCode::KeyP,
        W::KeyQ => KeyCode::KeyQ,
        W::KeyR => KeyCode::KeyR,
        W::KeyS => KeyCode::KeyS,
        W::KeyT => KeyCode::KeyT,
        W::KeyU => KeyCode::KeyU,
        W::KeyV => KeyCode::KeyV,
        W::KeyW => KeyCode::KeyW,
        W::KeyX => KeyCode::KeyX,
        W::KeyY => KeyCode::KeyY,
        W::KeyZ => KeyCode::KeyZ,

        //--- Arrows -------------------------------------------------------
        W::ArrowUp => KeyCode::ArrowUp,
        W::ArrowDown => KeyCode::ArrowDown,
        W::ArrowLeft => KeyCode::ArrowLeft,
        W::ArrowRight => KeyCode::ArrowRight,

        //--- Special ------------------------------------------------------
        W::Space => KeyCode::Space,
        W::Enter => KeyCode::Enter,
        W::Escape => KeyCode::Escape,
        W::Tab => KeyCode::Tab,
        W::Backspace => KeyCode::Backspace,
        W::Delete => KeyCode::Delete,

        //--- Modifiers ----------------------------------------------------
        W::ShiftLeft => KeyCode::ShiftLeft,
        W::ShiftRight => KeyCode::ShiftRight,
        W::ControlLeft => KeyCode::ControlLeft,
        W::ControlRight => KeyCode::ControlRight,
        W::AltLeft => KeyCode::AltLeft,
        W::AltRight => KeyCode::AltRight,

        //--- Function Keys ------------------------------------------------
        W::F1 => KeyCode::F1,
        W::F2 => KeyCode::F2,
        W::F3 => KeyCode::F3,
        W::F4 => KeyCode::F4,
        W::F5 => KeyCode::F5,
        W::F6 => KeyCode::F6,
        W::F7 => KeyCode::F7,
        W::F8 => KeyCode::F8,
        W::F9 => KeyCode::F9,
        W::F10 => KeyCode::F10,
        W::F11 => KeyCode::F11,
        W::F12 => KeyCode::F12,

        _ => return None,
    };
    Some(key)
}

//=========================================================================
// Unit Tests
//=========================================================================
