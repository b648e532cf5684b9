//=========================================================================
// Gamepad Poll Step
//=========================================================================
//
// Opens the first connected gamepad and publishes its state.
//
// Writes:
//   input.gamepad.connected                      always
//   input.gamepad.{left,right}_stick_{x,y}       only when connected,
//   input.gamepad.trigger_{left,right}           raw i16 → [-1, 1]
//   input.gamepad.button_{south,east,...,start}  only when connected
//
// No gamepad is not an error: only `connected = false` is written and
// downstream readers supply their own defaults. Connect and disconnect
// are detected against the previous cycle's flag in the same Context.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::sync::Arc;

//=== Internal Dependencies ===============================================

use crate::core::context::{keys, Context};
use crate::core::input::device::{GamepadAxis, GamepadButton};
use crate::core::platform_bridge::PlatformInput;
use crate::core::steps::{Logger, Step, StepDefinition};
use crate::error::{InputError, Result};

//=== GamepadPollStep =====================================================

/// Publishes the first connected gamepad (`input.gamepad.poll`).
///
/// A missing gamepad is not an error: `input.gamepad.connected` becomes
/// `false` and the axis/button keys keep whatever they held, which the
/// combine steps ignore while disconnected.
///
/// # Lifecycle
///
/// 1. **Enumerate**: lowest connected id, or none
/// 2. **Read**: all six axes and eight buttons before touching the Context
/// 3. **Write**: normalized axes, button flags, connected flag
///
/// Connection changes against the previous cycle are logged at info level.
///
/// # Errors
///
/// Returns `InputError::DeviceQuery` when enumeration or any read fails.
/// Reads happen first, so a failed read leaves the previous cycle's
/// values intact.
pub struct GamepadPollStep<'p> {
    platform: &'p dyn PlatformInput,
    logger: Arc<dyn Logger>,
}

impl<'p> GamepadPollStep<'p> {
    pub const PLUGIN_ID: &'static str = "input.gamepad.poll";

    pub fn new(platform: &'p dyn PlatformInput, logger: Arc<dyn Logger>) -> Self {
        Self { platform, logger }
    }
}

impl Step for GamepadPollStep<'_> {
    fn plugin_id(&self) -> &'static str {
        Self::PLUGIN_ID
    }

    fn execute(&self, _step: &StepDefinition, context: &mut Context) -> Result<()> {
        self.logger.trace(Self::PLUGIN_ID, "Execute: entry");
        let query_failed = |e| InputError::device_query(Self::PLUGIN_ID, e);

        let was_connected = context.get(keys::GAMEPAD_CONNECTED, false);

        let Some(id) = self.platform.first_gamepad().map_err(query_failed)? else {
            if was_connected {
                self.logger.info(Self::PLUGIN_ID, "Gamepad disconnected");
            }
            context.set(keys::GAMEPAD_CONNECTED, false);
            return Ok(());
        };

        // Read everything before writing so a failed read leaves no partial snapshot
        let mut axes = [0.0f32; GamepadAxis::ALL.len()];
        for (slot, axis) in axes.iter_mut().zip(GamepadAxis::ALL) {
            let raw = self.platform.gamepad_axis(id, axis).map_err(query_failed)?;
            *slot = GamepadAxis::normalize(raw);
        }

        let mut buttons = [false; GamepadButton::ALL.len()];
        for (slot, button) in buttons.iter_mut().zip(GamepadButton::ALL) {
            *slot = self.platform.gamepad_button(id, button).map_err(query_failed)?;
        }

        if !was_connected {
            self.logger
                .info(Self::PLUGIN_ID, &format!("Gamepad {} connected", id.0));
        }
        context.set(keys::GAMEPAD_CONNECTED, true);
        for (axis, value) in GamepadAxis::ALL.into_iter().zip(axes) {
            context.set(axis.context_key(), value);
        }
        for (button, pressed) in GamepadButton::ALL.into_iter().zip(buttons) {
            context.set(button.context_key(), pressed);
        }

        self.logger
            .debug(Self::PLUGIN_ID, &format!("Gamepad {} polled", id.0));
        Ok(())
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::input::device::GamepadId;
    use crate::core::steps::testing::RecordingLogger;
    use crate::core::steps::LogFacade;
    use crate::platform::ScriptedPlatform;

    fn run(platform: &ScriptedPlatform) -> Result<Context> {
        let mut context = Context::new();
        GamepadPollStep::new(platform, Arc::new(LogFacade))
            .execute(&StepDefinition::default(), &mut context)?;
        Ok(context)
    }

    #[test]
    fn disconnected_writes_only_flag() {
        let context = run(&ScriptedPlatform::new()).unwrap();

        assert_eq!(context.try_get::<bool>(keys::GAMEPAD_CONNECTED), Some(false));
        assert_eq!(context.len(), 1);
        assert!(!context.contains(GamepadAxis::LeftStickX.context_key()));
    }

    #[test]
    fn connected_writes_normalized_axes_and_buttons() {
        let mut platform = ScriptedPlatform::new();
        let pad = GamepadId(0);
        platform.connect_gamepad(pad);
        platform.set_gamepad_axis(pad, GamepadAxis::LeftStickX, -16384);
        platform.set_gamepad_axis(pad, GamepadAxis::TriggerRight, i16::MAX);
        platform.set_gamepad_button(pad, GamepadButton::South, true);

        let context = run(&platform).unwrap();

        assert!(context.get(keys::GAMEPAD_CONNECTED, false));
        assert_eq!(context.get(GamepadAxis::LeftStickX.context_key(), 0.0f32), -0.5);
        assert_eq!(context.get(GamepadAxis::TriggerRight.context_key(), 0.0f32), 1.0);
        assert_eq!(context.try_get::<f32>(GamepadAxis::RightStickY.context_key()), Some(0.0));
        assert!(context.get(GamepadButton::South.context_key(), false));
        assert_eq!(context.try_get::<bool>(GamepadButton::Start.context_key()), Some(false));

        // connected flag + 6 axes + 8 buttons
        assert_eq!(context.len(), 15);
    }

    #[test]
    fn connection_changes_are_logged_once() {
        let logger = Arc::new(RecordingLogger::default());
        let mut platform = ScriptedPlatform::new();
        platform.connect_gamepad(GamepadId(2));
        let mut context = Context::new();
        {
            let step = GamepadPollStep::new(&platform, logger.clone());
            step.execute(&StepDefinition::default(), &mut context).unwrap();
            step.execute(&StepDefinition::default(), &mut context).unwrap();
        }

        let connects = logger
            .lines
            .lock()
            .unwrap()
            .iter()
            .filter(|(level, _, m)| *level == "info" && m.contains("connected"))
            .count();
        assert_eq!(connects, 1);

        platform.disconnect_gamepad(GamepadId(2));
        GamepadPollStep::new(&platform, logger.clone())
            .execute(&StepDefinition::default(), &mut context)
            .unwrap();
        assert!(logger.contains("info", "Gamepad disconnected"));
    }

    #[test]
    fn enumeration_failure_is_device_error() {
        let mut platform = ScriptedPlatform::new();
        platform.fail_gamepad("gamepad subsystem not initialized");

        let err = run(&platform).unwrap_err();
        assert!(err.is_device_query());
        assert_eq!(err.step(), GamepadPollStep::PLUGIN_ID);
    }
}
