//=========================================================================
// Input Poll-All Orchestrator
//=========================================================================
//
// Runs the five input steps in order against one shared Context.
//
// Cycle outcome:
//   success → input.poll_complete = true
//   failure → input.poll_complete = false
//             input.poll_error    = "<step>: <reason>"
//             error logged, then returned to the caller
//
// Sub-steps are constructed fresh for every cycle and receive the same
// step definition, so `config_path` and `pointer_full_scale` apply to
// the whole cycle.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::context::{keys, Context};
use crate::core::input::{
    AxisCombineStep, ButtonCombineStep, GamepadPollStep, KeyboardPollStep, PointerPollStep,
};
use crate::core::platform_bridge::PlatformInput;
use crate::core::steps::{Logger, Step, StepDefinition};
use crate::error::Result;

//=== InputPollAllStep ====================================================

/// Composite step that polls every device and evaluates all bindings
/// (`input.poll.all`).
///
/// # Order
///
/// keyboard → pointer → gamepad → axis combine → button combine, every
/// cycle. The combine steps read only what the poll steps just wrote.
///
/// # Errors
///
/// The first failing step stops the cycle. Before the error is returned,
/// `input.poll_complete = false` and `input.poll_error = <message>` are
/// written so callers can inspect status without handling the error.
/// A successful cycle sets `input.poll_complete = true` but leaves any
/// earlier `input.poll_error` in place; clearing it is up to the owner
/// of the Context.
pub struct InputPollAllStep<'p> {
    platform: &'p dyn PlatformInput,
    logger: Arc<dyn Logger>,
}

impl<'p> InputPollAllStep<'p> {
    pub const PLUGIN_ID: &'static str = "input.poll.all";

    pub fn new(platform: &'p dyn PlatformInput, logger: Arc<dyn Logger>) -> Self {
        Self { platform, logger }
    }

    //--- Internal Helpers -------------------------------------------------

    fn run_cycle(&self, step: &StepDefinition, context: &mut Context) -> Result<()> {
        let logger = &self.logger;
        let steps: [Box<dyn Step + '_>; 5] = [
            Box::new(KeyboardPollStep::new(self.platform, Arc::clone(logger))),
            Box::new(PointerPollStep::new(self.platform, Arc::clone(logger))),
            Box::new(GamepadPollStep::new(self.platform, Arc::clone(logger))),
            Box::new(AxisCombineStep::new(Arc::clone(logger))),
            Box::new(ButtonCombineStep::new(Arc::clone(logger))),
        ];

        for sub_step in &steps {
            self.logger.trace(
                Self::PLUGIN_ID,
                &format!("Running {}", sub_step.plugin_id()),
            );
            sub_step.execute(step, context)?;
        }
        Ok(())
    }
}

impl Step for InputPollAllStep<'_> {
    fn plugin_id(&self) -> &'static str {
        Self::PLUGIN_ID
    }

    fn execute(&self, step: &StepDefinition, context: &mut Context) -> Result<()> {
        self.logger.trace(Self::PLUGIN_ID, "Execute: entry");

        match self.run_cycle(step, context) {
            Ok(()) => {
                context.set(keys::POLL_COMPLETE, true);
                self.logger.trace(Self::PLUGIN_ID, "Execute: complete");
                Ok(())
            }
            Err(err) => {
                let message = err.to_string();
                context.set(keys::POLL_COMPLETE, false);
                context.set(keys::POLL_ERROR, message.as_str());
                self.logger
                    .error(Self::PLUGIN_ID, &format!("Input poll failed: {}", message));
                Err(err)
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
