//=========================================================================
// Keyboard Poll Step
//=========================================================================
//
// Reads the platform's full keyboard array once and publishes the
// pressed keys as a sparse map.
//
// Writes:
//   input.keyboard.state     { "<KeyName>": true, ... }   (absent = released)
//   input.keyboard.num_keys  total queryable keys
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

use serde_json::{Map, Value as Json};

//=== Internal Dependencies ===============================================

use crate::core::context::{keys, Context};
use crate::core::platform_bridge::PlatformInput;
use crate::core::steps::{Logger, Step, StepDefinition};
use crate::error::{InputError, Result};

//=== KeyboardPollStep ====================================================

/// Publishes the pressed keys of the current cycle (`input.keyboard.poll`).
///
/// Queries the platform once per execution and rewrites the whole sparse
/// map, so a key released since the last cycle simply disappears from it.
///
/// # Errors
///
/// Returns `InputError::DeviceQuery` when the platform cannot report
/// keyboard state. Nothing is written in that case.
///
/// # Fields
///
/// - `platform`: borrowed for one cycle, shared with the other poll steps
/// - `logger`: trace/debug sink for the `input.keyboard.poll` component
pub struct KeyboardPollStep<'p> {
    platform: &'p dyn PlatformInput,
    logger: Arc<dyn Logger>,
}

impl<'p> KeyboardPollStep<'p> {
    pub const PLUGIN_ID: &'static str = "input.keyboard.poll";

    pub fn new(platform: &'p dyn PlatformInput, logger: Arc<dyn Logger>) -> Self {
        Self { platform, logger }
    }
}

impl Step for KeyboardPollStep<'_> {
    fn plugin_id(&self) -> &'static str {
        Self::PLUGIN_ID
    }

    fn execute(&self, _step: &StepDefinition, context: &mut Context) -> Result<()> {
        self.logger.trace(Self::PLUGIN_ID, "Execute: entry");

        let state = self
            .platform
            .keyboard_state()
            .map_err(|e| InputError::device_query(Self::PLUGIN_ID, e))?;

        let pressed: Map<String, Json> = state
            .iter()
            .enumerate()
            .filter(|(_, down)| **down)
            .filter_map(|(scancode, _)| self.platform.key_name(scancode))
            .filter(|name| !name.is_empty())
            .map(|name| (name.to_owned(), Json::Bool(true)))
            .collect();

        context.set(keys::KEYBOARD_STATE, Json::Object(pressed));
        context.set(keys::KEYBOARD_NUM_KEYS, state.len());
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
