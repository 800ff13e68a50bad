//! Dynamic cell values and the numeric view over them
//!
//! Data read from a table is not guaranteed to be numeric. [`Value`] holds a
//! single cell of any supported type, and [`AsNumeric`] is the bound the
//! statistics functions place on their input so that both plain numbers and
//! dynamic cells can be passed in.

use crate::{Error, Result};
use serde::Serialize;
use std::fmt;

/// A single cell of tabular data
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null / NaN cell
    Missing,
    /// Boolean value
    Bool(bool),
    /// Integer value
    Integer(i64),
    /// Floating point value
    Float(f64),
    /// String value
    String(String),
}

impl Value {
    /// Check whether this cell is missing
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Try to get as integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get as float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get as string
    pub fn as_string(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Name of the variant, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Missing => "missing",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(i) => write!(f, "{i}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}

/// Anything that may or may not be a number
pub trait AsNumeric {
    /// The value as `f64`, or `None` when it is not numeric
    fn as_number(&self) -> Option<f64>;

    /// Short description used when reporting a non-numeric item
    fn describe(&self) -> String;
}

macro_rules! impl_as_numeric {
    ($($t:ty),* $(,)?) => {
        $(
            impl AsNumeric for $t {
                #[inline]
                fn as_number(&self) -> Option<f64> {
                    Some(*self as f64)
                }

                fn describe(&self) -> String {
                    stringify!($t).to_string()
                }
            }
        )*
    };
}

impl_as_numeric!(f64, f32, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl AsNumeric for Value {
    fn as_number(&self) -> Option<f64> {
        self.as_float()
    }

    fn describe(&self) -> String {
        match self {
            Value::Missing => "missing value".to_string(),
            other => format!("{} {}", other.kind(), other),
        }
    }
}

/// Convert a collection into plain numbers, failing on the first non-numeric item
pub fn to_numbers<V: AsNumeric>(values: &[V]) -> Result<Vec<f64>> {
    values
        .iter()
        .map(|v| v.as_number().ok_or_else(|| Error::non_numeric(v.describe())))
        .collect()
}

/// Drop missing cells, keeping order
pub fn drop_missing(values: Vec<Value>) -> Vec<Value> {
    values.into_iter().filter(|v| !v.is_missing()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessors() {
        assert_eq!(Value::Integer(3).as_float(), Some(3.0));
        assert_eq!(Value::Float(2.5).as_float(), Some(2.5));
        assert_eq!(Value::from("x").as_float(), None);
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::from("abc").as_string(), Some("abc"));
        assert!(Value::from(None::<f64>).is_missing());
        assert_eq!(Value::from(Some(4i64)), Value::Integer(4));
    }

    #[test]
    fn test_to_numbers_plain() {
        let numbers = to_numbers(&[1i32, 2, 3]).unwrap();
        assert_eq!(numbers, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_to_numbers_rejects_text() {
        let values = vec![Value::from(1), Value::from("oops"), Value::from(3)];
        let err = to_numbers(&values).unwrap_err();
        assert!(err.is_type_mismatch());
        assert!(err.to_string().contains("oops"));
    }

    #[test]
    fn test_to_numbers_rejects_bool_and_missing() {
        assert!(to_numbers(&[Value::Bool(true)]).is_err());
        assert!(to_numbers(&[Value::Missing]).is_err());
    }

    #[test]
    fn test_drop_missing_keeps_order() {
        let values = vec![
            Value::from(1.0),
            Value::Missing,
            Value::from(3.0),
            Value::Missing,
        ];
        assert_eq!(drop_missing(values), vec![Value::Float(1.0), Value::Float(3.0)]);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Integer(10).to_string(), "10");
        assert_eq!(Value::from("a").to_string(), "\"a\"");
        assert_eq!(Value::Missing.to_string(), "null");
    }
}
