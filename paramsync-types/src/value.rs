//! Raw parameter values and the mappings that hold them.
//!
//! A URL query can only carry strings, so every query parameter is either a
//! single string or a repeated key (a sequence of strings). Stack params are
//! held in memory and keep their typed JSON form.

use crate::{ParamError, ParamResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Query mapping: parameter name to raw value.
pub type QueryMap = BTreeMap<String, ParamValue>;

/// Stack entry params: parameter name to typed value.
pub type StackParams = serde_json::Map<String, Value>;

/// The raw representation of a query parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    /// `?page=2`
    Single(String),
    /// `?tag=a&tag=b`
    Multi(Vec<String>),
}

impl ParamValue {
    /// Creates a single-string value.
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    /// Creates a repeated-key value.
    pub fn multi<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multi(values.into_iter().map(Into::into).collect())
    }

    /// Whether this value counts as present for navigation-mode decisions.
    ///
    /// An empty string is falsy; a sequence is always truthy, even when empty.
    #[must_use]
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Single(s) => !s.is_empty(),
            Self::Multi(_) => true,
        }
    }

    /// Returns the string if this is a single value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multi(_) => None,
        }
    }

    /// Returns the single value, or the first element of a sequence.
    pub fn first(&self) -> Option<&str> {
        match self {
            Self::Single(s) => Some(s),
            Self::Multi(values) => values.first().map(String::as_str),
        }
    }

    /// All strings carried by this value, in order.
    pub fn values(&self) -> &[String] {
        match self {
            Self::Single(s) => std::slice::from_ref(s),
            Self::Multi(values) => values,
        }
    }

    /// Converts a typed JSON value into its raw query form.
    ///
    /// `null` maps to `None`. Scalars use their display form, arrays become
    /// [`ParamValue::Multi`]. Objects and nested arrays have no query form.
    pub fn from_json(name: &str, value: &Value) -> ParamResult<Option<Self>> {
        match value {
            Value::Null => Ok(None),
            Value::Array(items) => {
                let mut out = Vec::with_capacity(items.len());
                for item in items {
                    match scalar_to_string(item) {
                        Some(s) => out.push(s),
                        None if item.is_null() => {}
                        None => {
                            return Err(ParamError::UnsupportedValue {
                                name: name.to_string(),
                                reason: "nested arrays and objects cannot be placed in a query".into(),
                            });
                        }
                    }
                }
                Ok(Some(Self::Multi(out)))
            }
            other => scalar_to_string(other).map(Self::Single).map(Some).ok_or_else(|| {
                ParamError::UnsupportedValue {
                    name: name.to_string(),
                    reason: "objects cannot be placed in a query".into(),
                }
            }),
        }
    }
}

fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::Multi(values)
    }
}

impl From<ParamValue> for Value {
    fn from(value: ParamValue) -> Self {
        match value {
            ParamValue::Single(s) => Value::String(s),
            ParamValue::Multi(values) => Value::Array(values.into_iter().map(Value::String).collect()),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(s) => f.write_str(s),
            Self::Multi(values) => f.write_str(&values.join(",")),
        }
    }
}
