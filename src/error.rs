//=========================================================================
// Errors
//=========================================================================
//
// Failure kinds of the input pipeline.
//
//   PlatformError    → what a platform input layer reports
//   InputError       → what a step returns (DeviceQuery / ConfigLoad)
//   ConfigLoadError  → why a binding document could not be loaded
//
// Missing optional hardware (no gamepad) is NOT an error. It is reported
// through `input.gamepad.connected = false`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::io;
use std::path::PathBuf;

use thiserror::Error;

//=== PlatformError =======================================================

/// A platform input layer could not answer a query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct PlatformError(pub String);

impl PlatformError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

//=== ConfigLoadError =====================================================

/// Reason a binding configuration document could not be loaded.
#[derive(Error, Debug)]
pub enum ConfigLoadError {
    /// The fallback file could not be opened or read.
    #[error("failed to open: {0}")]
    Open(#[from] io::Error),

    /// The document is not valid JSON or does not match the binding schema.
    #[error("failed to parse: {0}")]
    Parse(#[from] serde_json::Error),
}

//=== InputError ==========================================================

/// Error returned by pipeline steps.
///
/// Both variants are fatal for the step that raised them and propagate
/// through the orchestrator unchanged.
#[derive(Error, Debug)]
pub enum InputError {
    /// The platform input layer could not be queried.
    #[error("{step}: device query failed: {source}")]
    DeviceQuery {
        step: &'static str,
        #[source]
        source: PlatformError,
    },

    /// The binding configuration could not be loaded.
    #[error("{step}: failed to load config {}: {source}", path.display())]
    ConfigLoad {
        step: &'static str,
        path: PathBuf,
        #[source]
        source: ConfigLoadError,
    },
}

impl InputError {
    pub fn device_query(step: &'static str, source: PlatformError) -> Self {
        Self::DeviceQuery { step, source }
    }

    pub fn config_load(
        step: &'static str,
        path: impl Into<PathBuf>,
        source: impl Into<ConfigLoadError>,
    ) -> Self {
        Self::ConfigLoad {
            step,
            path: path.into(),
            source: source.into(),
        }
    }

    /// Plugin id of the step that failed.
    pub fn step(&self) -> &'static str {
        match self {
            Self::DeviceQuery { step, .. } | Self::ConfigLoad { step, .. } => step,
        }
    }

    pub fn is_device_query(&self) -> bool {
        matches!(self, Self::DeviceQuery { .. })
    }

    pub fn is_config_load(&self) -> bool {
        matches!(self, Self::ConfigLoad { .. })
    }
}

/// Result type used by every pipeline step.
pub type Result<T> = std::result::Result<T, InputError>;

//=========================================================================
// Unit Tests
//=========================================================================
