//=========================================================================
// Context Value
//=========================================================================
//
// Tagged variant stored behind every Context key, plus the typed
// extraction used by `Context::get` / `Context::try_get`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;

use serde_json::Value as Json;

//=== Value ===============================================================

/// Dynamically typed Context value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Small structured payloads (sparse key maps, cached binding documents).
    Json(Json),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(v) => write!(f, "{:?}", v),
            Self::Json(v) => write!(f, "{}", v),
        }
    }
}

//--- Conversions ---------------------------------------------------------

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_owned())
    }
}

impl From<Json> for Value {
    fn from(v: Json) -> Self {
        Value::Json(v)
    }
}

//=== FromValue ===========================================================

/// Typed extraction from a [`Value`].
///
/// Returns `None` on a type mismatch. Float targets also accept `Int`;
/// integer targets accept only `Int`.
pub trait FromValue: Sized {
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for bool {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }
}

impl FromValue for usize {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Int(v) => usize::try_from(*v).ok(),
            _ => None,
        }
    }
}

impl FromValue for f64 {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            _ => None,
        }
    }
}

impl FromValue for f32 {
    fn from_value(value: &Value) -> Option<Self> {
        f64::from_value(value).map(|v| v as f32)
    }
}

impl FromValue for String {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Text(v) => Some(v.clone()),
            _ => None,
        }
    }
}

impl FromValue for Json {
    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Json(v) => Some(v.clone()),
            _ => None,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_targets_accept_integers() {
        assert_eq!(f32::from_value(&Value::Int(2)), Some(2.0));
        assert_eq!(f64::from_value(&Value::Float(0.25)), Some(0.25));
    }

    #[test]
    fn integer_targets_reject_floats() {
        assert_eq!(i64::from_value(&Value::Float(1.0)), None);
        assert_eq!(usize::from_value(&Value::Int(-1)), None);
    }

    #[test]
    fn display_quotes_text_only() {
        assert_eq!(Value::Float(-0.5).to_string(), "-0.5");
        assert_eq!(Value::Bool(true).to_string(), "true");
        assert_eq!(Value::Text("a".into()).to_string(), "\"a\"");
    }

    #[test]
    fn bool_is_not_coerced() {
        assert_eq!(bool::from_value(&Value::Int(1)), None);
        assert_eq!(bool::from_value(&Value::Text("true".into())), None);
    }
}
