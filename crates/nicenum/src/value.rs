//! Cell values and the error-vs-coerce policy.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single cell in a frame.
///
/// `Na` is the missing-value sentinel produced by the coerce policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Whole number.
    Int(i64),
    /// Floating-point number.
    Float(f64),
    /// Text.
    Str(String),
    /// Missing value. Serializes as JSON `null`, renders empty.
    Na,
}

impl Value {
    /// Returns true if this value is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::Float(_))
    }

    /// Returns true if this value is the missing sentinel.
    pub fn is_na(&self) -> bool {
        matches!(self, Value::Na)
    }

    /// Numeric view of this value, if it has one.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Short name of the value's type, for error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "integer",
            Value::Float(_) => "float",
            Value::Str(_) => "string",
            Value::Na => "missing",
        }
    }

    /// Infer a cell value from a raw text field.
    ///
    /// Missing-value patterns become `Na`, then integer and float parses
    /// are attempted, and anything else stays text.
    pub fn from_field(field: &str) -> Value {
        let trimmed = field.trim();
        if Self::is_na_string(trimmed) {
            return Value::Na;
        }
        if let Ok(i) = trimmed.parse::<i64>() {
            return Value::Int(i);
        }
        if let Ok(f) = trimmed.parse::<f64>() {
            return Value::Float(f);
        }
        Value::Str(field.to_string())
    }

    /// Check if a raw field represents a missing value.
    pub fn is_na_string(value: &str) -> bool {
        let trimmed = value.trim();
        trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("na")
            || trimmed.eq_ignore_ascii_case("n/a")
            || trimmed.eq_ignore_ascii_case("nan")
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{}", x),
            Value::Str(s) => f.write_str(s),
            Value::Na => Ok(()),
        }
    }
}

/// What to do when a value-level conversion fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorPolicy {
    /// Propagate the failure to the caller.
    Raise,
    /// Replace the failure with the missing sentinel.
    Coerce,
}

impl ErrorPolicy {
    /// Apply this policy to a conversion result.
    ///
    /// Under `Coerce` any failure becomes `Ok(Value::Na)`; under `Raise`
    /// the result passes through untouched.
    pub fn apply(self, result: Result<Value>) -> Result<Value> {
        match (self, result) {
            (ErrorPolicy::Coerce, Err(_)) => Ok(Value::Na),
            (_, result) => result,
        }
    }
}

impl Default for ErrorPolicy {
    fn default() -> Self {
        ErrorPolicy::Raise
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::NiceNumError;

    #[test]
    fn test_from_field_inference() {
        assert_eq!(Value::from_field("42"), Value::Int(42));
        assert_eq!(Value::from_field("4.5"), Value::Float(4.5));
        assert_eq!(Value::from_field("hello"), Value::Str("hello".to_string()));
        assert_eq!(Value::from_field(""), Value::Na);
        assert_eq!(Value::from_field("N/A"), Value::Na);
        assert_eq!(Value::from_field("null"), Value::Na);
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(Value::Int(5).as_f64(), Some(5.0));
        assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::Str("5".to_string()).as_f64(), None);
        assert_eq!(Value::Na.as_f64(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Int(42).to_string(), "42");
        assert_eq!(Value::Float(4510.0).to_string(), "4510");
        assert_eq!(Value::Str("4.51K".to_string()).to_string(), "4.51K");
        assert_eq!(Value::Na.to_string(), "");
    }

    #[test]
    fn test_policy_coerces_failures_to_na() {
        let err = Err(NiceNumError::NotNumeric {
            value: "abc".to_string(),
        });
        assert_eq!(ErrorPolicy::Coerce.apply(err).unwrap(), Value::Na);

        let err = Err(NiceNumError::NotNumeric {
            value: "abc".to_string(),
        });
        assert!(ErrorPolicy::Raise.apply(err).is_err());

        let ok = Ok(Value::Int(1));
        assert_eq!(ErrorPolicy::Coerce.apply(ok).unwrap(), Value::Int(1));
    }

    #[test]
    fn test_na_serializes_as_null() {
        let json = serde_json::to_string(&Value::Na).unwrap();
        assert_eq!(json, "null");

        let back: Value = serde_json::from_str("null").unwrap();
        assert_eq!(back, Value::Na);
    }
}
