//! Owned tagged value with runtime type identity.
//!
//! [`Value`] is a small type-erasing container: it stores one of a fixed set
//! of variants and exposes checked `try_*` reads that fail with
//! [`SifterError::TypeMismatch`] when the stored variant differs from the
//! requested one. It doubles as the sort key type for
//! [`RecordProcessor::sort_by_key`](crate::RecordProcessor::sort_by_key).

use std::cmp::Ordering;

use crate::error::{Result, SifterError};

/// An owned, dynamically typed value.
///
/// # Example
///
/// ```
/// use sifter::Value;
///
/// let v = Value::from(42i64);
/// assert_eq!(v.try_int().unwrap(), 42);
/// assert!(v.try_text().is_err()); // wrong variant, reported not silent
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Signed 64-bit integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Owned string.
    Text(String),
    /// Boolean.
    Bool(bool),
    /// Absent or unsupported.
    None,
}

impl Value {
    /// Returns the name of the stored variant.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bool(_) => "bool",
            Value::None => "none",
        }
    }

    /// Returns `true` if this is an `Int` value.
    pub fn is_int(&self) -> bool {
        matches!(self, Value::Int(_))
    }

    /// Returns `true` if this is a `Float` value.
    pub fn is_float(&self) -> bool {
        matches!(self, Value::Float(_))
    }

    /// Returns `true` if this is a `Text` value.
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Returns `true` if this is a `Bool` value.
    pub fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Extracts the integer, or fails with a type mismatch.
    pub fn try_int(&self) -> Result<i64> {
        match self {
            Value::Int(n) => Ok(*n),
            other => Err(other.mismatch("int")),
        }
    }

    /// Extracts the float, or fails with a type mismatch.
    pub fn try_float(&self) -> Result<f64> {
        match self {
            Value::Float(n) => Ok(*n),
            other => Err(other.mismatch("float")),
        }
    }

    /// Extracts the string, or fails with a type mismatch.
    pub fn try_text(&self) -> Result<&str> {
        match self {
            Value::Text(s) => Ok(s),
            other => Err(other.mismatch("text")),
        }
    }

    /// Extracts the boolean, or fails with a type mismatch.
    pub fn try_bool(&self) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(other.mismatch("bool")),
        }
    }

    fn mismatch(&self, expected: &'static str) -> SifterError {
        SifterError::TypeMismatch {
            expected,
            actual: self.type_name(),
        }
    }

    /// Converts a numeric value to f64 for mixed comparison.
    fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Compares two values of the same type.
    ///
    /// `Int` and `Float` compare numerically with each other. `None` sorts
    /// last. Returns `None` for cross-type pairs and NaN comparisons.
    pub fn compare(&self, other: &Value) -> Option<Ordering> {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),

            // Mixed numeric comparison goes through f64
            (Value::Int(_) | Value::Float(_), Value::Int(_) | Value::Float(_)) => {
                self.to_f64()?.partial_cmp(&other.to_f64()?)
            }

            // None values sort last
            (Value::None, Value::None) => Some(Ordering::Equal),
            (Value::None, _) => Some(Ordering::Greater),
            (_, Value::None) => Some(Ordering::Less),

            _ => None,
        }
    }
}

// Conversions from common types

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Int(n as i64)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Float(n as f64)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(v) => v.into(),
            None => Value::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_names() {
        assert_eq!(Value::Int(1).type_name(), "int");
        assert_eq!(Value::Float(1.0).type_name(), "float");
        assert_eq!(Value::Text("a".into()).type_name(), "text");
        assert_eq!(Value::Bool(true).type_name(), "bool");
        assert_eq!(Value::None.type_name(), "none");
    }

    #[test]
    fn type_checks() {
        assert!(Value::Int(1).is_int());
        assert!(Value::Float(1.0).is_float());
        assert!(Value::Text("a".into()).is_text());
        assert!(Value::Bool(true).is_bool());
        assert!(Value::None.is_none());
        assert!(!Value::Int(1).is_text());
    }

    #[test]
    fn checked_reads() {
        assert_eq!(Value::Int(42).try_int().unwrap(), 42);
        assert_eq!(Value::Float(2.5).try_float().unwrap(), 2.5);
        assert_eq!(Value::Text("hi".into()).try_text().unwrap(), "hi");
        assert!(Value::Bool(true).try_bool().unwrap());
    }

    #[test]
    fn checked_read_mismatch() {
        let err = Value::Int(42).try_text().unwrap_err();
        match err {
            SifterError::TypeMismatch { expected, actual } => {
                assert_eq!(expected, "text");
                assert_eq!(actual, "int");
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(
            Value::Int(42).try_text().unwrap_err().to_string(),
            "type mismatch: expected text, got int"
        );
    }

    #[test]
    fn compare_same_type() {
        assert_eq!(
            Value::Int(1).compare(&Value::Int(2)),
            Some(Ordering::Less)
        );
        assert_eq!(
            Value::Text("b".into()).compare(&Value::Text("a".into())),
            Some(Ordering::Greater)
        );
        assert_eq!(
            Value::Bool(false).compare(&Value::Bool(true)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn compare_mixed_numeric() {
        assert_eq!(
            Value::Int(2).compare(&Value::Float(2.0)),
            Some(Ordering::Equal)
        );
        assert_eq!(
            Value::Float(1.5).compare(&Value::Int(2)),
            Some(Ordering::Less)
        );
    }

    #[test]
    fn compare_nan_is_none() {
        assert_eq!(Value::Float(f64::NAN).compare(&Value::Float(1.0)), None);
    }

    #[test]
    fn compare_none_sorts_last() {
        assert_eq!(
            Value::None.compare(&Value::Int(1)),
            Some(Ordering::Greater)
        );
        assert_eq!(Value::Int(1).compare(&Value::None), Some(Ordering::Less));
        assert_eq!(Value::None.compare(&Value::None), Some(Ordering::Equal));
    }

    #[test]
    fn compare_cross_type_is_none() {
        assert_eq!(Value::Int(1).compare(&Value::Text("1".into())), None);
        assert_eq!(Value::Bool(true).compare(&Value::Int(1)), None);
    }

    #[test]
    fn conversions() {
        assert_eq!(Value::from(42i64), Value::Int(42));
        assert_eq!(Value::from(42u32), Value::Int(42));
        assert_eq!(Value::from(2.5f64), Value::Float(2.5));
        assert_eq!(Value::from("hi"), Value::Text("hi".into()));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<i64>), Value::None);
        assert_eq!(Value::from(Some(1i64)), Value::Int(1));
    }
}
