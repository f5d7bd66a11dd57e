//! Numeric value to human-readable abbreviated string.

use serde::{Deserialize, Serialize};

use crate::error::{NiceNumError, Result};
use crate::suffix::{suffix_list, Family};
use crate::value::{ErrorPolicy, Value};

/// Options for [`to_human`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HumanOptions {
    /// Decimal precision of the rendered number.
    pub precision: usize,
    /// Suffix family.
    pub family: Family,
    /// Custom suffix list overriding the family's table.
    pub custom_suffixes: Option<Vec<String>>,
    /// Prefix the output with a currency symbol.
    pub currency: bool,
    /// Currency symbol to prefix with.
    pub currency_symbol: String,
    /// What to do when conversion fails (cell-level entry points only).
    pub errors: ErrorPolicy,
}

impl Default for HumanOptions {
    fn default() -> Self {
        Self {
            precision: 0,
            family: Family::Number,
            custom_suffixes: None,
            currency: false,
            currency_symbol: "$".to_string(),
            errors: ErrorPolicy::Raise,
        }
    }
}

/// Convert a numeric value to its abbreviated string representation.
///
/// # Examples
///
/// ```
/// use nicenum::{to_human, HumanOptions};
///
/// let opts = HumanOptions { precision: 1, ..Default::default() };
/// assert_eq!(to_human(69420.0, &opts).unwrap(), "69.4K");
/// ```
pub fn to_human(n: f64, opts: &HumanOptions) -> Result<String> {
    if !n.is_finite() {
        return Err(NiceNumError::NotNumeric {
            value: n.to_string(),
        });
    }

    // Decimal order of magnitude, then the thousands-group index.
    // Sub-thousand magnitudes clamp to index 0 (no suffix, raw value).
    let order = if n == 0.0 {
        0
    } else {
        n.abs().log10().floor() as i32
    };
    let idx = (order / 3).max(0);
    let scaled = n / 1000f64.powi(idx);

    let suffixes = suffix_list(opts.family, opts.custom_suffixes.as_deref(), false);
    let max_idx = suffixes.len() - 1;

    if idx as usize > max_idx {
        return Err(NiceNumError::TooLarge {
            max_order: max_idx * 3,
            suffix: suffixes[max_idx].clone(),
        });
    }

    // Filesize values are never prefixed with a currency symbol.
    let currency = opts.currency && opts.family == Family::Number;
    let symbol = if currency {
        opts.currency_symbol.as_str()
    } else {
        ""
    };

    Ok(format!(
        "{symbol}{scaled:.precision$}{suffix}",
        precision = opts.precision,
        suffix = suffixes[idx as usize],
    ))
}

/// Cell-level formatter: numeric cells become abbreviated strings.
///
/// Non-numeric cells fail with `NotNumeric` — a string is rejected even if
/// it looks numeric. The configured error policy decides whether failures
/// propagate or collapse to `Na`.
pub fn human_value(value: &Value, opts: &HumanOptions) -> Result<Value> {
    let result = match value.as_f64() {
        Some(n) => to_human(n, opts).map(Value::Str),
        None => Err(NiceNumError::NotNumeric {
            value: rendered(value),
        }),
    };
    opts.errors.apply(result)
}

fn rendered(value: &Value) -> String {
    match value {
        Value::Na => "<NA>".to_string(),
        v => v.to_string(),
    }
}
