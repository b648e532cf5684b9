//=========================================================================
// Context
//=========================================================================
//
// Shared per-cycle key/value store passed by reference through every
// pipeline step. It is the only channel steps communicate through.
//
// Architecture:
//   "input.gamepad.connected" → HashMap → Value::Bool(true)
//
// Reads never fail: an absent key or a type mismatch yields the caller's
// default. `try_get` exists for callers that must tell "absent" apart
// from "false/zero".
//
// Lifecycle: the caller that drives a poll cycle owns and resets the
// Context. Steps only overwrite keys, they never delete them.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod keys;
mod value;

//=== Public API ==========================================================

pub use value::{FromValue, Value};

//=== External Dependencies ===============================================

use std::collections::HashMap;

use serde_json::Value as Json;

//=== Context =============================================================

/// Dynamically typed key/value store keyed by dotted string paths.
///
/// Not synchronized: exactly one poll cycle may be in flight per Context.
#[derive(Debug, Default, Clone)]
pub struct Context {
    values: HashMap<String, Value>,
}

impl Context {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    //--- Writes -----------------------------------------------------------

    /// Stores `value` under `key`, replacing whatever was there.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }

    /// Drops every key. Intended for the cycle owner, never for steps.
    pub fn clear(&mut self) {
        self.values.clear();
    }

    /// Drops one key and returns its value. Same caveat as `clear`.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.values.remove(key)
    }

    //--- Reads ------------------------------------------------------------

    /// Returns the stored value, or `default` if absent or of another type.
    pub fn get<T: FromValue>(&self, key: &str, default: T) -> T {
        self.try_get(key).unwrap_or(default)
    }

    /// Returns `Some` only when `key` is present with a compatible type.
    pub fn try_get<T: FromValue>(&self, key: &str) -> Option<T> {
        self.values.get(key).and_then(T::from_value)
    }

    /// Borrowed access to the raw stored value.
    pub fn get_value(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Borrowed access to a structured value without cloning it.
    pub fn get_json(&self, key: &str) -> Option<&Json> {
        match self.values.get(key) {
            Some(Value::Json(json)) => Some(json),
            _ => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterates all entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
