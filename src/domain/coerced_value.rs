// SPDX-License-Identifier: MIT OR Apache-2.0

//! The typed result of a scoped configuration lookup.
//!
//! A `CoercedValue` carries exactly one of the shapes a configuration value can
//! be classified as, or `Absent` when no classification succeeded. Host layers
//! convert it to their own dynamic values at the boundary, either through
//! `serde::Serialize` or, with the `yaml` feature, `CoercedValue::to_yaml`.

use serde::{Serialize, Serializer};
use std::fmt;

/// A configuration value after type probing.
///
/// # Examples
///
/// ```
/// use scopedcfg::domain::CoercedValue;
///
/// let value = CoercedValue::Int(42);
/// assert_eq!(value.as_i64(), Some(42));
/// assert_eq!(value.as_f64(), None);
/// assert!(CoercedValue::Absent.is_absent());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub enum CoercedValue {
    /// A boolean.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A double-precision float.
    Float(f64),
    /// A string.
    String(String),
    /// An ordered list of strings.
    StringList(Vec<String>),
    /// An ordered list of integers.
    IntList(Vec<i64>),
    /// No interpretation of the value succeeded, or the key does not exist.
    #[default]
    Absent,
}

impl CoercedValue {
    /// Returns a short name for the variant, e.g. `"integer"` or `"absent"`.
    pub fn type_name(&self) -> &'static str {
        match self {
            CoercedValue::Bool(_) => "boolean",
            CoercedValue::Int(_) => "integer",
            CoercedValue::Float(_) => "float",
            CoercedValue::String(_) => "string",
            CoercedValue::StringList(_) => "string list",
            CoercedValue::IntList(_) => "integer list",
            CoercedValue::Absent => "absent",
        }
    }

    /// Returns true for `CoercedValue::Absent`.
    pub fn is_absent(&self) -> bool {
        matches!(self, CoercedValue::Absent)
    }

    /// Returns the boolean, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            CoercedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CoercedValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float, if this is a `Float`.
    ///
    /// Integers are not widened; use the variant you expect.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CoercedValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the string, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            CoercedValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the strings, if this is a `StringList`.
    pub fn as_string_list(&self) -> Option<&[String]> {
        match self {
            CoercedValue::StringList(list) => Some(list),
            _ => None,
        }
    }

    /// Returns the integers, if this is an `IntList`.
    pub fn as_int_list(&self) -> Option<&[i64]> {
        match self {
            CoercedValue::IntList(list) => Some(list),
            _ => None,
        }
    }

    /// Converts into an `Option`, mapping `Absent` to `None`.
    pub fn into_option(self) -> Option<CoercedValue> {
        match self {
            CoercedValue::Absent => None,
            value => Some(value),
        }
    }

    /// Converts the value into a YAML value; `Absent` becomes `Null`.
    #[cfg(feature = "yaml")]
    pub fn to_yaml(&self) -> serde_yaml::Value {
        use serde_yaml::Value;

        match self {
            CoercedValue::Bool(b) => Value::Bool(*b),
            CoercedValue::Int(n) => Value::Number((*n).into()),
            CoercedValue::Float(n) => Value::Number((*n).into()),
            CoercedValue::String(s) => Value::String(s.clone()),
            CoercedValue::StringList(list) => {
                Value::Sequence(list.iter().cloned().map(Value::String).collect())
            }
            CoercedValue::IntList(list) => Value::Sequence(
                list.iter().map(|n| Value::Number((*n).into())).collect(),
            ),
            CoercedValue::Absent => Value::Null,
        }
    }
}

impl From<Option<CoercedValue>> for CoercedValue {
    fn from(value: Option<CoercedValue>) -> Self {
        value.unwrap_or(CoercedValue::Absent)
    }
}

impl Serialize for CoercedValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            CoercedValue::Bool(b) => serializer.serialize_bool(*b),
            CoercedValue::Int(n) => serializer.serialize_i64(*n),
            CoercedValue::Float(n) => serializer.serialize_f64(*n),
            CoercedValue::String(s) => serializer.serialize_str(s),
            CoercedValue::StringList(list) => list.serialize(serializer),
            CoercedValue::IntList(list) => list.serialize(serializer),
            CoercedValue::Absent => serializer.serialize_none(),
        }
    }
}

impl fmt::Display for CoercedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
            f.write_str("[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{}", item)?;
            }
            f.write_str("]")
        }

        match self {
            CoercedValue::Bool(b) => write!(f, "{}", b),
            CoercedValue::Int(n) => write!(f, "{}", n),
            CoercedValue::Float(n) => write!(f, "{:?}", n),
            CoercedValue::String(s) => f.write_str(s),
            CoercedValue::StringList(items) => list(f, items),
            CoercedValue::IntList(items) => list(f, items),
            CoercedValue::Absent => f.write_str("None"),
        }
    }
}
