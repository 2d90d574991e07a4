//! Setting values
//!
//! Settings hold scalar values only. [`ConfigValue`] is the tagged union the
//! store validates against each entry's declared type; parsed documents are
//! converted into it before validation so that arrays and objects never reach
//! the value store.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A single setting value
///
/// `Null` is the value of an entry that declares no default. `Float` exists so
/// that non-integer numbers from a loaded document can be represented and
/// rejected with an accurate kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
}

impl ConfigValue {
    /// Name of the value's runtime kind, as used in validation messages
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            ConfigValue::Null => "null",
            ConfigValue::Bool(_) => "bool",
            ConfigValue::Int(_) => "int",
            ConfigValue::Float(_) => "float",
            ConfigValue::String(_) => "string",
        }
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, ConfigValue::Null)
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConfigValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConfigValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Numeric view of the value (integers widen to `f64`)
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConfigValue::Int(n) => Some(*n as f64),
            ConfigValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConfigValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Convert into the generic JSON tree
    #[must_use]
    pub fn to_json(&self) -> Value {
        match self {
            ConfigValue::Null => Value::Null,
            ConfigValue::Bool(b) => Value::Bool(*b),
            ConfigValue::Int(n) => Value::from(*n),
            // NaN/inf have no JSON form
            ConfigValue::Float(n) => serde_json::Number::from_f64(*n).map_or(Value::Null, Value::Number),
            ConfigValue::String(s) => Value::String(s.clone()),
        }
    }
}

/// Kind name of a parsed JSON node, matching [`ConfigValue::kind`] for scalars
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(n) if n.is_i64() => "int",
        Value::Number(n) if n.is_u64() => "integer out of range",
        Value::Number(_) => "float",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

impl TryFrom<Value> for ConfigValue {
    /// Arrays, objects and integers beyond `i64` are handed back unchanged
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Null => Ok(ConfigValue::Null),
            Value::Bool(b) => Ok(ConfigValue::Bool(b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Ok(ConfigValue::Int(i)),
                None if n.is_u64() => Err(Value::Number(n)),
                None => n
                    .as_f64()
                    .map(ConfigValue::Float)
                    .ok_or(Value::Number(n)),
            },
            Value::String(s) => Ok(ConfigValue::String(s)),
            other => Err(other),
        }
    }
}

impl From<ConfigValue> for Value {
    fn from(value: ConfigValue) -> Self {
        value.to_json()
    }
}

impl fmt::Display for ConfigValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigValue::Null => f.write_str("null"),
            ConfigValue::Bool(b) => write!(f, "{b}"),
            ConfigValue::Int(n) => write!(f, "{n}"),
            ConfigValue::Float(n) => write!(f, "{n:?}"),
            ConfigValue::String(s) => write!(f, "{}", Value::String(s.clone())),
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        ConfigValue::Bool(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        ConfigValue::String(value.to_string())
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        ConfigValue::String(value)
    }
}

impl From<&String> for ConfigValue {
    fn from(value: &String) -> Self {
        ConfigValue::String(value.clone())
    }
}

impl From<f64> for ConfigValue {
    fn from(value: f64) -> Self {
        ConfigValue::Float(value)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for ConfigValue {
                fn from(value: $ty) -> Self {
                    ConfigValue::Int(i64::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl<T: Into<ConfigValue>> From<Option<T>> for ConfigValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ConfigValue::Null, Into::into)
    }
}

// =============================================================================
// Tests
// =============================================================================
