//=========================================================================
// Step Definitions & Parameters
//=========================================================================
//
// Declarative description of one pipeline step and the resolver that
// extracts named parameters from it.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

//=== ParameterValue ======================================================

/// A single declarative step parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParameterValue {
    Bool(bool),
    Number(f64),
    String(String),
}

//=== StepDefinition ======================================================

/// Declarative step as it appears in a workflow document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub plugin: String,
    #[serde(default)]
    pub parameters: BTreeMap<String, ParameterValue>,
}

impl StepDefinition {
    /// Creates a definition with no parameters.
    pub fn new(id: impl Into<String>, plugin: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            plugin: plugin.into(),
            parameters: BTreeMap::new(),
        }
    }

    /// Adds a parameter (builder style).
    pub fn with_parameter(mut self, name: impl Into<String>, value: ParameterValue) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }
}

//=== StepParameters ======================================================

/// Typed lookups over a step's parameters.
///
/// A parameter of the wrong type reads as absent.
pub struct StepParameters<'a> {
    step: &'a StepDefinition,
}

impl<'a> StepParameters<'a> {
    pub fn new(step: &'a StepDefinition) -> Self {
        Self { step }
    }

    pub fn find(&self, name: &str) -> Option<&'a ParameterValue> {
        self.step.parameters.get(name)
    }

    pub fn string(&self, name: &str) -> Option<&'a str> {
        match self.find(name)? {
            ParameterValue::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        match self.find(name)? {
            ParameterValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn bool(&self, name: &str) -> Option<bool> {
        match self.find(name)? {
            ParameterValue::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
