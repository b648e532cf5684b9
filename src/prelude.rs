//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use input_aggregation::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Context
pub use crate::core::context::{keys, Context, FromValue, Value};

// Steps
pub use crate::core::steps::{LogFacade, Logger, ParameterValue, Step, StepDefinition};

// Bindings
pub use crate::core::bindings::{cache_bindings, BindingDocument, BindingResolver};

// Input steps and device identifiers
pub use crate::core::input::device::{
    GamepadAxis, GamepadButton, GamepadId, KeyCode, PointerAxis, PointerButton,
};
pub use crate::core::input::{
    AxisCombineStep, ButtonCombineStep, GamepadPollStep, KeyboardPollStep, PointerPollStep,
};
pub use crate::core::pipeline::InputPollAllStep;

// Platform
pub use crate::core::platform_bridge::{DeviceEvent, PlatformInput, PointerState};
pub use crate::platform::{ChannelPlatform, ScriptedPlatform};

// Errors
pub use crate::error::{InputError, PlatformError};
