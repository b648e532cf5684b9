//=========================================================================
// Axis Combine Step
//=========================================================================
//
// Turns the `axes` section of the binding configuration plus this
// cycle's raw snapshot into one value per logical axis.
//
// Per binding:
//   acc = 0
//   for source in sources:
//       v = raw(source)              key → 1/0, pointer, gamepad axis
//       v = invert ? -v : v
//       acc += deadzone(v, d) · scale
//   out = clamp(acc, -1, 1) → every output key
//
// The deadzone is applied per source, before scaling. Several sources
// individually below their deadzone therefore still sum to zero, but
// sources just above it can sum to more than any one of them alone.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use super::deadzone::apply_deadzone;
use super::device::{GamepadAxis, PointerAxis};
use super::snapshot::{ContextSnapshot, InputSnapshot};
use crate::core::bindings::{AxisBinding, AxisInput, AxisSource, BindingResolver};
use crate::core::context::Context;
use crate::core::steps::{Logger, Step, StepDefinition};
use crate::error::Result;

//=== Combination Rules ===================================================

/// Raw scalar for one source, before invert/deadzone/scale.
pub fn raw_axis_value(input: &AxisInput, snapshot: &impl InputSnapshot) -> f32 {
    match input {
        AxisInput::Key { key } => {
            if snapshot.key_pressed(key) {
                1.0
            } else {
                0.0
            }
        }
        AxisInput::Pointer { axis } => PointerAxis::from_config_name(axis)
            .map(|a| snapshot.pointer_axis(a))
            .unwrap_or(0.0),
        AxisInput::GamepadAxis { axis } => GamepadAxis::from_config_name(axis)
            .map(|a| snapshot.gamepad_axis(a))
            .unwrap_or(0.0),
        AxisInput::Unsupported => 0.0,
    }
}

/// Contribution of one source: invert, then deadzone, then scale.
pub fn shaped_axis_value(source: &AxisSource, snapshot: &impl InputSnapshot) -> f32 {
    let mut value = raw_axis_value(&source.input, snapshot);
    if source.invert {
        value = -value;
    }
    apply_deadzone(value, source.deadzone) * source.scale
}

/// Combined value of a binding, clamped to `[-1, 1]`.
pub fn combine_axis(binding: &AxisBinding, snapshot: &impl InputSnapshot) -> f32 {
    let accumulated: f32 = binding
        .sources
        .iter()
        .map(|source| shaped_axis_value(source, snapshot))
        .sum();
    accumulated.clamp(-1.0, 1.0)
}

//=== AxisCombineStep =====================================================

/// Evaluates every axis binding against the polled state
/// (`input.axis.combine`).
///
/// Must run after the poll steps of the same cycle. Each binding's value
/// is written to all of its outputs; a document without an `axes` section
/// is a no-op.
///
/// # Errors
///
/// Returns `InputError::ConfigLoad` when no session override exists and
/// the fallback file cannot be read or parsed.
pub struct AxisCombineStep {
    logger: Arc<dyn Logger>,
}

impl AxisCombineStep {
    pub const PLUGIN_ID: &'static str = "input.axis.combine";

    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Step for AxisCombineStep {
    fn plugin_id(&self) -> &'static str {
        Self::PLUGIN_ID
    }

    fn execute(&self, step: &StepDefinition, context: &mut Context) -> Result<()> {
        self.logger.trace(Self::PLUGIN_ID, "Execute: entry");

        let resolved = BindingResolver::for_step(step).resolve(Self::PLUGIN_ID, context)?;
        let Some(axes) = resolved.document.axes() else {
            self.logger
                .debug(Self::PLUGIN_ID, "No axes bindings found, skipping");
            return Ok(());
        };

        // Evaluate against a frozen view, then write
        let values: Vec<(&str, &AxisBinding, f32)> = {
            let snapshot = ContextSnapshot::new(context);
            axes.iter()
                .map(|(name, binding)| (name.as_str(), binding, combine_axis(binding, &snapshot)))
                .collect()
        };

        for (name, binding, value) in values {
            for output in &binding.outputs {
                context.set(output.as_str(), value);
            }
            self.logger
                .debug(Self::PLUGIN_ID, &format!("'{}' = {}", name, value));
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
