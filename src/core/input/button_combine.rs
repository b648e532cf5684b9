//=========================================================================
// Button Combine Step
//=========================================================================
//
// Evaluates the `buttons` section of the binding configuration: a logical
// button is pressed if ANY of its sources is pressed.
//
// Source kinds:
//   key             pressed flag from the keyboard map
//   pointer_button  left / middle / right
//   gamepad_button  a b x y lb rb back start           (digital)
//                   trigger_left / trigger_right       (value ≥ threshold)
//
// Evaluation stops at the first pressed source. Every gamepad source
// checks the connected flag before reading anything else.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use super::device::{GamepadButtonTarget, PointerButton};
use super::snapshot::{ContextSnapshot, InputSnapshot};
use crate::core::bindings::{BindingResolver, ButtonBinding, ButtonInput, ButtonSource};
use crate::core::context::Context;
use crate::core::steps::{Logger, Step, StepDefinition};
use crate::error::Result;

//=== Combination Rules ===================================================

/// Whether a single source reads as pressed.
pub fn source_pressed(source: &ButtonSource, snapshot: &impl InputSnapshot) -> bool {
    match &source.input {
        ButtonInput::Key { key } => snapshot.key_pressed(key),
        ButtonInput::PointerButton { button } => PointerButton::from_config_name(button)
            .is_some_and(|b| snapshot.pointer_button(b)),
        ButtonInput::GamepadButton { button } => {
            if !snapshot.gamepad_connected() {
                return false;
            }
            match GamepadButtonTarget::from_config_name(button) {
                Some(GamepadButtonTarget::Digital(b)) => snapshot.gamepad_button(b),
                Some(GamepadButtonTarget::Trigger(axis)) => {
                    snapshot.gamepad_axis(axis) >= source.threshold
                }
                None => false,
            }
        }
        ButtonInput::Unsupported => false,
    }
}

/// OR over the binding's sources, stopping at the first pressed one.
pub fn combine_button(binding: &ButtonBinding, snapshot: &impl InputSnapshot) -> bool {
    binding
        .sources
        .iter()
        .any(|source| source_pressed(source, snapshot))
}

//=== ButtonCombineStep ===================================================

/// Evaluates every button binding against the polled state
/// (`input.button.combine`).
///
/// Sources are OR-ed in order and evaluation stops at the first pressed
/// one. Gamepad sources read as released while no gamepad is connected.
///
/// # Errors
///
/// Same as `AxisCombineStep`: only configuration loading can fail.
pub struct ButtonCombineStep {
    logger: Arc<dyn Logger>,
}

impl ButtonCombineStep {
    pub const PLUGIN_ID: &'static str = "input.button.combine";

    pub fn new(logger: Arc<dyn Logger>) -> Self {
        Self { logger }
    }
}

impl Step for ButtonCombineStep {
    fn plugin_id(&self) -> &'static str {
        Self::PLUGIN_ID
    }

    fn execute(&self, step: &StepDefinition, context: &mut Context) -> Result<()> {
        self.logger.trace(Self::PLUGIN_ID, "Execute: entry");

        let resolved = BindingResolver::for_step(step).resolve(Self::PLUGIN_ID, context)?;
        let Some(buttons) = resolved.document.buttons() else {
            self.logger
                .debug(Self::PLUGIN_ID, "No button bindings found, skipping");
            return Ok(());
        };

        let states: Vec<(&str, &ButtonBinding, bool)> = {
            let snapshot = ContextSnapshot::new(context);
            buttons
                .iter()
                .map(|(name, binding)| (name.as_str(), binding, combine_button(binding, &snapshot)))
                .collect()
        };

        for (name, binding, pressed) in states {
            for output in &binding.outputs {
                context.set(output.as_str(), pressed);
            }
            if pressed {
                self.logger
                    .debug(Self::PLUGIN_ID, &format!("'{}' pressed", name));
            }
        }
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
