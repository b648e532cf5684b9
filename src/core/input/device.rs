//=========================================================================
// Device Identifiers
//=========================================================================
//
// Portable names for every physical control the pipeline understands.
//
// Each identifier knows:
// - its name in binding configuration documents ("A", "left_stick_x", "lb")
// - the Context key its poll step writes ("input.gamepad.left_stick_x")
//
// Platform layers translate native codes into these types. Nothing
// downstream of the poll steps ever sees a native code.
//
//=========================================================================

//=== KeyCode =============================================================

/// Physical keyboard key identifier.
///
/// Represents the physical key location, not the character produced.
/// The discriminant is the key's scancode index in a platform's
/// keyboard state array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum KeyCode {
    //--- Numeric Keys -----------------------------------------------------
    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    //--- Alphabetic Keys --------------------------------------------------
    KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI,
    KeyJ, KeyK, KeyL, KeyM, KeyN, KeyO, KeyP, KeyQ, KeyR,
    KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,

    //--- Arrow Keys -------------------------------------------------------
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    ArrowUp,

    //--- Special Keys -----------------------------------------------------
    Space,
    Enter,
    Escape,
    Tab,
    Backspace,
    Delete,

    //--- Modifier Keys ----------------------------------------------------
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    //--- Function Keys ----------------------------------------------------
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
}

impl KeyCode {
    /// Every key, ordered by scancode index.
    pub const ALL: [KeyCode; 64] = {
        use KeyCode::*;
        [
            Digit0, Digit1, Digit2, Digit3, Digit4, Digit5, Digit6, Digit7, Digit8, Digit9,
            KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM,
            KeyN, KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
            ArrowDown, ArrowLeft, ArrowRight, ArrowUp,
            Space, Enter, Escape, Tab, Backspace, Delete,
            ShiftLeft, ShiftRight, ControlLeft, ControlRight, AltLeft, AltRight,
            F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
        ]
    };

    /// Number of queryable keys.
    pub const COUNT: usize = Self::ALL.len();

    /// Scancode index into a keyboard state array.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Display name used as the key in the sparse pressed-key map and in
    /// binding documents.
    pub fn name(self) -> &'static str {
        use KeyCode::*;
        match self {
            Digit0 => "0", Digit1 => "1", Digit2 => "2", Digit3 => "3", Digit4 => "4",
            Digit5 => "5", Digit6 => "6", Digit7 => "7", Digit8 => "8", Digit9 => "9",

            KeyA => "A", KeyB => "B", KeyC => "C", KeyD => "D", KeyE => "E",
            KeyF => "F", KeyG => "G", KeyH => "H", KeyI => "I", KeyJ => "J",
            KeyK => "K", KeyL => "L", KeyM => "M", KeyN => "N", KeyO => "O",
            KeyP => "P", KeyQ => "Q", KeyR => "R", KeyS => "S", KeyT => "T",
            KeyU => "U", KeyV => "V", KeyW => "W", KeyX => "X", KeyY => "Y",
            KeyZ => "Z",

            ArrowDown => "Down",
            ArrowLeft => "Left",
            ArrowRight => "Right",
            ArrowUp => "Up",

            Space => "Space",
            Enter => "Return",
            Escape => "Escape",
            Tab => "Tab",
            Backspace => "Backspace",
            Delete => "Delete",

            ShiftLeft => "Left Shift",
            ShiftRight => "Right Shift",
            ControlLeft => "Left Ctrl",
            ControlRight => "Right Ctrl",
            AltLeft => "Left Alt",
            AltRight => "Right Alt",

            F1 => "F1", F2 => "F2", F3 => "F3", F4 => "F4", F5 => "F5", F6 => "F6",
            F7 => "F7", F8 => "F8", F9 => "F9", F10 => "F10", F11 => "F11", F12 => "F12",
        }
    }

    /// Inverse of [`name`](Self::name). Case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.name() == name)
    }
}

//=== Pointer =============================================================

/// Pointer motion axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerAxis {
    X,
    Y,
}

impl PointerAxis {
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "x" => Some(Self::X),
            "y" => Some(Self::Y),
            _ => None,
        }
    }

    pub fn context_key(self) -> &'static str {
        use crate::core::context::keys;
        match self {
            Self::X => keys::POINTER_X,
            Self::Y => keys::POINTER_Y,
        }
    }
}

/// Physical pointer button.
///
/// Side and extra buttons are not tracked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    Left,
    Middle,
    Right,
}

impl PointerButton {
    pub const ALL: [PointerButton; 3] = [Self::Left, Self::Middle, Self::Right];

    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "left" => Some(Self::Left),
            "middle" => Some(Self::Middle),
            "right" => Some(Self::Right),
            _ => None,
        }
    }

    pub fn context_key(self) -> &'static str {
        use crate::core::context::keys;
        match self {
            Self::Left => keys::POINTER_LEFT,
            Self::Middle => keys::POINTER_MIDDLE,
            Self::Right => keys::POINTER_RIGHT,
        }
    }
}

//=== Gamepad =============================================================

/// Opaque handle to an opened gamepad.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GamepadId(pub u32);

/// Analog gamepad axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadAxis {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    TriggerLeft,
    TriggerRight,
}

impl GamepadAxis {
    pub const ALL: [GamepadAxis; 6] = [
        Self::LeftStickX,
        Self::LeftStickY,
        Self::RightStickX,
        Self::RightStickY,
        Self::TriggerLeft,
        Self::TriggerRight,
    ];

    pub fn config_name(self) -> &'static str {
        match self {
            Self::LeftStickX => "left_stick_x",
            Self::LeftStickY => "left_stick_y",
            Self::RightStickX => "right_stick_x",
            Self::RightStickY => "right_stick_y",
            Self::TriggerLeft => "trigger_left",
            Self::TriggerRight => "trigger_right",
        }
    }

    pub fn from_config_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.config_name() == name)
    }

    pub fn context_key(self) -> &'static str {
        match self {
            Self::LeftStickX => "input.gamepad.left_stick_x",
            Self::LeftStickY => "input.gamepad.left_stick_y",
            Self::RightStickX => "input.gamepad.right_stick_x",
            Self::RightStickY => "input.gamepad.right_stick_y",
            Self::TriggerLeft => "input.gamepad.trigger_left",
            Self::TriggerRight => "input.gamepad.trigger_right",
        }
    }

    /// Maps a raw 16-bit reading onto `[-1, 1]`.
    ///
    /// Divides by the full-scale magnitude of the reading's sign, so both
    /// `i16::MIN` and `i16::MAX` reach exactly ±1.
    pub fn normalize(raw: i16) -> f32 {
        if raw < 0 {
            f32::from(raw) / 32768.0
        } else {
            f32::from(raw) / 32767.0
        }
    }
}

/// Digital gamepad button, named by face position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamepadButton {
    South,
    East,
    West,
    North,
    LeftShoulder,
    RightShoulder,
    Back,
    Start,
}

impl GamepadButton {
    pub const ALL: [GamepadButton; 8] = [
        Self::South,
        Self::East,
        Self::West,
        Self::North,
        Self::LeftShoulder,
        Self::RightShoulder,
        Self::Back,
        Self::Start,
    ];

    /// Binding documents use controller-label names (`a`, `lb`, ...).
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "a" => Some(Self::South),
            "b" => Some(Self::East),
            "x" => Some(Self::West),
            "y" => Some(Self::North),
            "lb" => Some(Self::LeftShoulder),
            "rb" => Some(Self::RightShoulder),
            "back" => Some(Self::Back),
            "start" => Some(Self::Start),
            _ => None,
        }
    }

    pub fn context_key(self) -> &'static str {
        match self {
            Self::South => "input.gamepad.button_south",
            Self::East => "input.gamepad.button_east",
            Self::West => "input.gamepad.button_west",
            Self::North => "input.gamepad.button_north",
            Self::LeftShoulder => "input.gamepad.button_left_shoulder",
            Self::RightShoulder => "input.gamepad.button_right_shoulder",
            Self::Back => "input.gamepad.button_back",
            Self::Start => "input.gamepad.button_start",
        }
    }
}

/// What a `gamepad_button` source name refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamepadButtonTarget {
    Digital(GamepadButton),
    /// Analog trigger read as a button via threshold.
    Trigger(GamepadAxis),
}

impl GamepadButtonTarget {
    pub fn from_config_name(name: &str) -> Option<Self> {
        match name {
            "trigger_left" => Some(Self::Trigger(GamepadAxis::TriggerLeft)),
            "trigger_right" => Some(Self::Trigger(GamepadAxis::TriggerRight)),
            _ => GamepadButton::from_config_name(name).map(Self::Digital),
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_indices_follow_all_order() {
        for (i, key) in KeyCode::ALL.iter().enumerate() {
            assert_eq!(key.index(), i);
            assert_eq!(KeyCode::from_index(i), Some(*key));
        }
        assert_eq!(KeyCode::from_index(KeyCode::COUNT), None);
    }

    #[test]
    fn key_names_round_trip() {
        for key in KeyCode::ALL {
            assert_eq!(KeyCode::from_name(key.name()), Some(key));
        }
        assert_eq!(KeyCode::from_name("a"), None);
    }

    #[test]
    fn axis_normalization_reaches_full_scale() {
        assert_eq!(GamepadAxis::normalize(i16::MAX), 1.0);
        assert_eq!(GamepadAxis::normalize(i16::MIN), -1.0);
        assert_eq!(GamepadAxis::normalize(0), 0.0);
        assert_eq!(GamepadAxis::normalize(-16384), -0.5);
    }

    #[test]
    fn button_names_map_to_face_positions() {
        assert_eq!(GamepadButton::from_config_name("a"), Some(GamepadButton::South));
        assert_eq!(GamepadButton::from_config_name("y"), Some(GamepadButton::North));
        assert_eq!(GamepadButton::from_config_name("select"), None);
    }

    #[test]
    fn triggers_resolve_to_analog_targets() {
        assert_eq!(
            GamepadButtonTarget::from_config_name("trigger_right"),
            Some(GamepadButtonTarget::Trigger(GamepadAxis::TriggerRight))
        );
        assert_eq!(
            GamepadButtonTarget::from_config_name("rb"),
            Some(GamepadButtonTarget::Digital(GamepadButton::RightShoulder))
        );
    }
}
