//=========================================================================
// Pipeline Steps
//=========================================================================
//
// Contract shared by every unit of work in the input pipeline.
//
// Architecture:
//   StepDefinition (declarative) ─┐
//                                 ├─> Step::execute() ─> Context writes
//   Context (shared, per cycle) ──┘
//
// Execution is a plain synchronous call that either returns or fails
// before the next step runs.
//
//=========================================================================

//=== Module Declarations =================================================

mod definition;
mod logger;

//=== Public API ==========================================================

pub use definition::{ParameterValue, StepDefinition, StepParameters};
pub use logger::{LogFacade, Logger};

//=== Internal Dependencies ===============================================

use crate::core::context::Context;
use crate::error::Result;

//=== Step Trait ==========================================================

/// One pipeline step.
pub trait Step {
    /// Stable identifier, e.g. `"input.axis.combine"`.
    fn plugin_id(&self) -> &'static str;

    /// Runs the step once against `context`.
    fn execute(&self, step: &StepDefinition, context: &mut Context) -> Result<()>;
}

//=========================================================================
// Test Support
//=========================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::Logger;

    /// Captures `(level, component, message)` for assertions.
    #[derive(Default)]
    pub(crate) struct RecordingLogger {
        pub(crate) lines: Mutex<Vec<(&'static str, String, String)>>,
    }

    impl RecordingLogger {
        fn push(&self, level: &'static str, component: &str, message: &str) {
            self.lines
                .lock()
                .unwrap()
                .push((level, component.to_owned(), message.to_owned()));
        }

        pub(crate) fn contains(&self, level: &str, needle: &str) -> bool {
            self.lines
                .lock()
                .unwrap()
                .iter()
                .any(|(l, _, m)| *l == level && m.contains(needle))
        }
    }

    impl Logger for RecordingLogger {
        fn trace(&self, component: &str, message: &str) {
            self.push("trace", component, message);
        }
        fn debug(&self, component: &str, message: &str) {
            self.push("debug", component, message);
        }
        fn info(&self, component: &str, message: &str) {
            self.push("info", component, message);
        }
        fn error(&self, component: &str, message: &str) {
            self.push("error", component, message);
        }
    }
}
