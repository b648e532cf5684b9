//=========================================================================
// Binding Resolver
//=========================================================================
//
// Two-tier lookup of the binding configuration:
//
//   1. Session  → JSON object cached in the Context at
//                 `input.aggregation.config`
//   2. File     → fallback path (step parameter `config_path`, else the
//                 crate default)
//
// The session tier never touches the filesystem, so override semantics
// are testable without I/O. The file read is synchronous.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value as Json;

//=== Internal Dependencies ===============================================

use super::BindingDocument;
use crate::core::context::{keys, Context};
use crate::core::steps::{StepDefinition, StepParameters};
use crate::error::{ConfigLoadError, InputError, Result};

//=== Constants ===========================================================

/// Fallback binding file used when neither the Context nor the step
/// definition provides one.
pub const DEFAULT_BINDINGS_PATH: &str = "config/input_aggregation.json";

/// Step parameter overriding the fallback path.
const CONFIG_PATH_PARAM: &str = "config_path";

//=== BindingSource =======================================================

/// Where a resolved document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingSource {
    Session,
    File(PathBuf),
}

/// A loaded document plus its origin.
#[derive(Debug, Clone)]
pub struct ResolvedBindings {
    pub document: BindingDocument,
    pub source: BindingSource,
}

//=== BindingResolver =====================================================

/// Resolves the binding document for one step invocation.
#[derive(Debug, Clone)]
pub struct BindingResolver {
    fallback_path: PathBuf,
}

impl BindingResolver {
    /// Resolver with an explicit fallback path.
    pub fn new(fallback_path: impl Into<PathBuf>) -> Self {
        Self {
            fallback_path: fallback_path.into(),
        }
    }

    /// Resolver honoring the step's `config_path` parameter.
    pub fn for_step(step: &StepDefinition) -> Self {
        let path = StepParameters::new(step)
            .string(CONFIG_PATH_PARAM)
            .unwrap_or(DEFAULT_BINDINGS_PATH);
        Self::new(path)
    }

    pub fn fallback_path(&self) -> &Path {
        &self.fallback_path
    }

    /// Loads the document, preferring the session override.
    ///
    /// `step_id` names the caller in any resulting `ConfigLoad` error.
    pub fn resolve(&self, step_id: &'static str, context: &Context) -> Result<ResolvedBindings> {
        if let Some(cached) = context.get_json(keys::BINDINGS_CACHE).filter(|j| j.is_object()) {
            let document = BindingDocument::deserialize(cached).map_err(|e| {
                InputError::config_load(step_id, format!("context:{}", keys::BINDINGS_CACHE), e)
            })?;
            return Ok(ResolvedBindings {
                document,
                source: BindingSource::Session,
            });
        }

        let document = load_file(&self.fallback_path)
            .map_err(|e| InputError::config_load(step_id, self.fallback_path.clone(), e))?;

        Ok(ResolvedBindings {
            document,
            source: BindingSource::File(self.fallback_path.clone()),
        })
    }
}

impl Default for BindingResolver {
    fn default() -> Self {
        Self::new(DEFAULT_BINDINGS_PATH)
    }
}

//=== Helpers =============================================================

fn load_file(path: &Path) -> std::result::Result<BindingDocument, ConfigLoadError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Installs `document` as the session override for later cycles.
pub fn cache_bindings(context: &mut Context, document: Json) {
    context.set(keys::BINDINGS_CACHE, document);
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::steps::ParameterValue;
    use serde_json::json;

    #[test]
    fn session_override_beats_file() {
        let mut context = Context::new();
        cache_bindings(
            &mut context,
            json!({ "inputBindings": { "axes": { "move_x": { "sources": [], "outputs": [] } } } }),
        );

        // The fallback does not exist; it must never be read.
        let resolver = BindingResolver::new("does/not/exist.json");
        let resolved = resolver.resolve("input.axis.combine", &context).unwrap();

        assert_eq!(resolved.source, BindingSource::Session);
        assert!(resolved.document.axes().unwrap().contains_key("move_x"));
    }

    #[test]
    fn non_object_cache_falls_through_to_file() {
        let mut context = Context::new();
        context.set(keys::BINDINGS_CACHE, json!("not an object"));

        let err = BindingResolver::new("does/not/exist.json")
            .resolve("input.button.combine", &context)
            .unwrap_err();

        assert!(err.is_config_load());
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn malformed_cache_is_a_config_error() {
        let mut context = Context::new();
        cache_bindings(&mut context, json!({ "inputBindings": { "axes": 5 } }));

        let err = BindingResolver::default()
            .resolve("input.axis.combine", &context)
            .unwrap_err();

        assert!(err.is_config_load());
        assert!(err.to_string().contains(keys::BINDINGS_CACHE));
    }

    #[test]
    fn step_parameter_overrides_default_path() {
        let step = StepDefinition::new("combine", "input.axis.combine").with_parameter(
            "config_path",
            ParameterValue::String("custom/bindings.json".into()),
        );

        assert_eq!(
            BindingResolver::for_step(&step).fallback_path(),
            Path::new("custom/bindings.json")
        );
        assert_eq!(
            BindingResolver::for_step(&StepDefinition::default()).fallback_path(),
            Path::new(DEFAULT_BINDINGS_PATH)
        );
    }
}
