//=========================================================================
// Platform Backends
//
// Implementations of `PlatformInput`.
//
// Backends:
// - `ScriptedPlatform`: devices set directly (CLI probe, tests)
// - `ChannelPlatform`:  device state folded from a crossbeam channel
// - `WinitInputBridge` + `InputWindow`: feed a `ChannelPlatform` from a
//   real OS window
//
// Architecture:
// ```text
//  Main Thread                         Pipeline Thread
//  ┌──────────────────────────┐       ┌──────────────────────┐
//  │ InputWindow (winit loop) │       │ ChannelPlatform      │
//  │   ↓                      │       │   ↓                  │
//  │ WinitInputBridge ────────┼──────>│ InputPollAllStep     │
//  └──────────────────────────┘       └──────────────────────┘
// ```
//
//=========================================================================

//=== Submodules ==========================================================

mod channel;
mod scripted;
mod window;
mod winit_bridge;

//=== Public Exports ======================================================

pub use channel::{ChannelPlatform, PlatformEvent, TickControl};
pub use scripted::ScriptedPlatform;
pub use window::{InputWindow, WindowError};
pub use winit_bridge::{
    key_code_from_winit, pointer_button_from_winit, translate_window_event, WinitInputBridge,
};
