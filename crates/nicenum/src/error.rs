//! Error types for the nicenum library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for nicenum operations.
///
/// Messages name the offending value and, where a closed set of options
/// exists, the valid choices.
#[derive(Debug, Error)]
pub enum NiceNumError {
    /// Input to the formatter was not a usable number.
    #[error("value must be numeric. Invalid value: \"{value}\"")]
    NotNumeric { value: String },

    /// Unrecognized suffix family name.
    #[error("invalid family: \"{family}\". Valid options: {valid:?}")]
    InvalidFamily {
        family: String,
        valid: &'static [&'static str],
    },

    /// Magnitude exceeds the largest configured suffix.
    #[error("number too large for conversion. Maximum order: 1e{max_order} ({suffix})")]
    TooLarge { max_order: usize, suffix: String },

    /// Input to the parser was neither a string nor a number.
    #[error("input must be a string or number. Invalid value: \"{value}\"")]
    NotString { value: String },

    /// Trailing letters did not match any known suffix.
    #[error("invalid string suffix: \"{suffix}\". Valid options: {valid:?}")]
    InvalidSuffix { suffix: String, valid: Vec<String> },

    /// Requested column does not exist in the frame.
    #[error("column \"{column}\" not present in frame. Available columns: {available:?}")]
    UnknownColumn {
        column: String,
        available: Vec<String>,
    },

    /// Unrecognized transform kind name.
    #[error("invalid transform: \"{name}\". Valid options: {valid:?}")]
    InvalidTransform {
        name: String,
        valid: &'static [&'static str],
    },

    /// Input to the colorizer was not a non-negative integer.
    #[error("input must be a non-negative integer. Invalid value: \"{value}\"")]
    NotInteger { value: String },

    /// Unrecognized color name.
    #[error("invalid color: \"{name}\". Valid options: {valid:?}")]
    InvalidColor {
        name: String,
        valid: &'static [&'static str],
    },

    /// Column lengths disagree with the frame's row count.
    #[error("shape mismatch: {0}")]
    Shape(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for nicenum operations.
pub type Result<T> = std::result::Result<T, NiceNumError>;
