//=========================================================================
// Input Steps
//
// Device polling and logical binding evaluation.
//
// Data flow within one cycle:
// ```text
//  PlatformInput ──> KeyboardPollStep ─┐
//                ──> PointerPollStep  ─┼─> Context (raw keys)
//                ──> GamepadPollStep  ─┘        │
//                                               ▼
//                                        ContextSnapshot
//                                          │         │
//                               AxisCombineStep  ButtonCombineStep
//                                          │         │
//                                          ▼         ▼
//                                   Context (logical outputs)
// ```
//
// Poll steps talk to the platform; combine steps only ever read what the
// poll steps wrote, which keeps them testable without a device.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod device;

mod axis_combine;
mod button_combine;
mod deadzone;
mod gamepad_poll;
mod keyboard_poll;
mod pointer_poll;
mod snapshot;

//=== Public Exports ======================================================

pub use axis_combine::{combine_axis, raw_axis_value, shaped_axis_value, AxisCombineStep};
pub use button_combine::{combine_button, source_pressed, ButtonCombineStep};
pub use deadzone::apply_deadzone;
pub use gamepad_poll::GamepadPollStep;
pub use keyboard_poll::KeyboardPollStep;
pub use pointer_poll::{PointerPollStep, DEFAULT_POINTER_FULL_SCALE};
pub use snapshot::{ContextSnapshot, InputSnapshot};
