//! Abbreviated string back to numeric value.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{NiceNumError, Result};
use crate::suffix::{suffix_list, Family};
use crate::value::{ErrorPolicy, Value};

static LEADING_NON_DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\D+").unwrap());
static TRAILING_ALPHA: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-zA-Z]*$").unwrap());
static NUMERIC_LITERAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+(?:\.\d*)?").unwrap());

/// Options for [`to_numeric`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericOptions {
    /// Suffix family.
    pub family: Family,
    /// Custom suffix list overriding the family's table.
    pub custom_suffixes: Option<Vec<String>>,
    /// What to do when conversion fails (cell-level entry points only).
    pub errors: ErrorPolicy,
}

impl Default for NumericOptions {
    fn default() -> Self {
        Self {
            family: Family::Number,
            custom_suffixes: None,
            errors: ErrorPolicy::Raise,
        }
    }
}

/// Parse an abbreviated string back to its numeric value.
///
/// Leading non-digit noise (currency symbols, whitespace, punctuation) is
/// stripped; the trailing alphabetic run is matched case-insensitively
/// against the suffix list. Trailing letters that match no known suffix
/// fail rather than silently truncating.
///
/// # Examples
///
/// ```
/// use nicenum::{to_numeric, NumericOptions};
///
/// let opts = NumericOptions::default();
/// assert_eq!(to_numeric("1.2K", &opts).unwrap(), 1200.0);
/// assert_eq!(to_numeric("#@#$220k", &opts).unwrap(), 220000.0);
/// ```
pub fn to_numeric(input: &str, opts: &NumericOptions) -> Result<f64> {
    let stripped = LEADING_NON_DIGITS.replace(input, "");

    let suffixes = suffix_list(opts.family, opts.custom_suffixes.as_deref(), true);

    let suffix = TRAILING_ALPHA
        .find(stripped.as_ref())
        .map(|m| m.as_str().to_lowercase())
        .unwrap_or_default();

    let power = suffixes
        .iter()
        .position(|s| *s == suffix)
        .ok_or_else(|| NiceNumError::InvalidSuffix {
            suffix: suffix.clone(),
            valid: suffixes.clone(),
        })?;

    let literal = NUMERIC_LITERAL
        .find(stripped.as_ref())
        .ok_or_else(|| NiceNumError::NotNumeric {
            value: input.to_string(),
        })?;

    let number: f64 = literal
        .as_str()
        .parse()
        .map_err(|_| NiceNumError::NotNumeric {
            value: input.to_string(),
        })?;

    Ok(number * 1000f64.powi(power as i32))
}

/// Cell-level parser: string cells parse, numeric cells pass through.
///
/// Already-numeric cells convert straight to `Float` — no parsing, and the
/// suffix family is ignored. Missing cells fail with `NotString`. The
/// configured error policy decides whether failures propagate or collapse
/// to `Na`.
pub fn numeric_value(value: &Value, opts: &NumericOptions) -> Result<Value> {
    let result = match value {
        Value::Int(i) => Ok(Value::Float(*i as f64)),
        Value::Float(f) => Ok(Value::Float(*f)),
        Value::Str(s) => to_numeric(s, opts).map(Value::Float),
        Value::Na => Err(NiceNumError::NotString {
            value: "<NA>".to_string(),
        }),
    };
    opts.errors.apply(result)
}
