//=========================================================================
// Logger Capability
//=========================================================================
//
// Component-tagged logging handed to every step.
//
//   Step → Arc<dyn Logger> → LogFacade → `log` macros (target = component)
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, error, info, trace};

//=== Logger ==============================================================

/// Logging sink shared by all steps of a pipeline.
pub trait Logger: Send + Sync {
    fn trace(&self, component: &str, message: &str);
    fn debug(&self, component: &str, message: &str);
    fn info(&self, component: &str, message: &str);
    fn error(&self, component: &str, message: &str);
}

//=== LogFacade ===========================================================

/// Forwards to the `log` crate, using the component as the log target.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogFacade;

impl Logger for LogFacade {
    fn trace(&self, component: &str, message: &str) {
        trace!(target: component, "{}", message);
    }

    fn debug(&self, component: &str, message: &str) {
        debug!(target: component, "{}", message);
    }

    fn info(&self, component: &str, message: &str) {
        info!(target: component, "{}", message);
    }

    fn error(&self, component: &str, message: &str) {
        error!(target: component, "{}", message);
    }
}
