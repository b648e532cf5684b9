//=========================================================================
// Input Aggregation — Library Root
//
// Polls keyboard, pointer and gamepad once per cycle and folds the raw
// readings into logical axes and buttons described by a JSON binding
// document.
//
// Typical usage:
// ```no_run
// use std::sync::Arc;
// use input_aggregation::prelude::*;
//
// let platform = ScriptedPlatform::new();
// let mut context = Context::new();
// let step = StepDefinition::new("poll", InputPollAllStep::PLUGIN_ID);
//
// InputPollAllStep::new(&platform, Arc::new(LogFacade))
//     .execute(&step, &mut context)?;
// let move_x: f32 = context.get("player.move_x", 0.0);
// # Ok::<(), input_aggregation::error::InputError>(())
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the steps, the Context and the binding schema.
// `platform` holds the backends that answer device queries.
//
pub mod core;
pub mod error;
pub mod platform;
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use crate::core::context::Context;
pub use crate::core::pipeline::InputPollAllStep;
pub use crate::error::{InputError, Result};
