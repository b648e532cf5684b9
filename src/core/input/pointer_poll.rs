//=========================================================================
// Pointer Poll Step
//=========================================================================
//
// Reads the pointer once per cycle.
//
// Writes:
//   input.pointer.x / .y                   motion this cycle ÷ full scale
//   input.pointer.position_x / .position_y absolute window position (px)
//   input.pointer.left / .middle / .right  button flags
//
// `x`/`y` are relative motion so axis combine can treat them like any
// other normalizable scalar: moving `pointer_full_scale` pixels in one
// cycle reads as full deflection.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::context::{keys, Context};
use crate::core::input::device::PointerButton;
use crate::core::platform_bridge::PlatformInput;
use crate::core::steps::{Logger, Step, StepDefinition, StepParameters};
use crate::error::{InputError, Result};

//=== Constants ===========================================================

/// Pixels of motion per cycle that read as a full-scale axis value.
pub const DEFAULT_POINTER_FULL_SCALE: f32 = 100.0;

const FULL_SCALE_PARAM: &str = "pointer_full_scale";

//=== PointerPollStep =====================================================

/// Publishes pointer motion, position and buttons (`input.pointer.poll`).
///
/// Motion is the per-cycle delta divided by the `pointer_full_scale` step
/// parameter (default `DEFAULT_POINTER_FULL_SCALE` pixels), so a binding
/// can treat it like any other normalized axis. The absolute position is
/// published separately and is not normalized.
///
/// # Errors
///
/// Returns `InputError::DeviceQuery` when the pointer cannot be queried.
pub struct PointerPollStep<'p> {
    platform: &'p dyn PlatformInput,
    logger: Arc<dyn Logger>,
}

impl<'p> PointerPollStep<'p> {
    pub const PLUGIN_ID: &'static str = "input.pointer.poll";

    pub fn new(platform: &'p dyn PlatformInput, logger: Arc<dyn Logger>) -> Self {
        Self { platform, logger }
    }

    fn full_scale(step: &StepDefinition) -> f32 {
        StepParameters::new(step)
            .number(FULL_SCALE_PARAM)
            .map(|n| n as f32)
            .filter(|n| *n > 0.0)
            .unwrap_or(DEFAULT_POINTER_FULL_SCALE)
    }
}

impl Step for PointerPollStep<'_> {
    fn plugin_id(&self) -> &'static str {
        Self::PLUGIN_ID
    }

    fn execute(&self, step: &StepDefinition, context: &mut Context) -> Result<()> {
        self.logger.trace(Self::PLUGIN_ID, "Execute: entry");

        let pointer = self
            .platform
            .pointer_state()
            .map_err(|e| InputError::device_query(Self::PLUGIN_ID, e))?;
        let full_scale = Self::full_scale(step);

        context.set(keys::POINTER_X, pointer.delta_x / full_scale);
        context.set(keys::POINTER_Y, pointer.delta_y / full_scale);
        context.set(keys::POINTER_POSITION_X, pointer.x);
        context.set(keys::POINTER_POSITION_Y, pointer.y);

        for button in PointerButton::ALL {
            context.set(button.context_key(), pointer.button(button));
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
