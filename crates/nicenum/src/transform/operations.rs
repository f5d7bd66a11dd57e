//! Transform kinds and column selection for frame transformation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::{color_value, ColorOptions};
use crate::error::{NiceNumError, Result};
use crate::human::{human_value, HumanOptions};
use crate::numeric::{numeric_value, NumericOptions};
use crate::value::Value;

/// Which columns a transform applies to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ColumnSelection {
    /// Every column in the frame.
    All,
    /// The named columns only.
    Columns(Vec<String>),
}

impl ColumnSelection {
    /// Select a single column by name.
    pub fn single(name: impl Into<String>) -> Self {
        ColumnSelection::Columns(vec![name.into()])
    }

    /// Select several columns by name.
    pub fn columns<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ColumnSelection::Columns(names.into_iter().map(Into::into).collect())
    }
}

impl Default for ColumnSelection {
    fn default() -> Self {
        ColumnSelection::All
    }
}

/// A per-cell transform with its options.
///
/// Each variant applies independently per cell; there is no cross-cell
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Transform {
    /// Numeric cells to abbreviated strings.
    Human(HumanOptions),
    /// Abbreviated strings back to numbers.
    Numeric(NumericOptions),
    /// Non-negative integer cells to colorized digit groups.
    Color(ColorOptions),
}

impl Transform {
    /// The kind tag for this transform.
    pub fn kind(&self) -> TransformKind {
        match self {
            Transform::Human(_) => TransformKind::Human,
            Transform::Numeric(_) => TransformKind::Num,
            Transform::Color(_) => TransformKind::Color,
        }
    }

    /// Apply this transform to a single cell.
    pub fn apply(&self, value: &Value) -> Result<Value> {
        match self {
            Transform::Human(options) => human_value(value, options),
            Transform::Numeric(options) => numeric_value(value, options),
            Transform::Color(options) => color_value(value, options),
        }
    }
}

/// Name tags for the closed set of transforms.
///
/// This is the string/config boundary; the transforms themselves are
/// selected through [`Transform`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransformKind {
    Human,
    Num,
    Color,
}

impl TransformKind {
    /// Valid transform names, for error messages.
    pub const VALID: &'static [&'static str] = &["human", "num", "color"];

    /// String form of the transform name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransformKind::Human => "human",
            TransformKind::Num => "num",
            TransformKind::Color => "color",
        }
    }

    /// Build the transform of this kind with default options.
    pub fn with_defaults(&self) -> Transform {
        match self {
            TransformKind::Human => Transform::Human(HumanOptions::default()),
            TransformKind::Num => Transform::Numeric(NumericOptions::default()),
            TransformKind::Color => Transform::Color(ColorOptions::default()),
        }
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformKind {
    type Err = NiceNumError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "human" => Ok(TransformKind::Human),
            "num" => Ok(TransformKind::Num),
            "color" => Ok(TransformKind::Color),
            _ => Err(NiceNumError::InvalidTransform {
                name: s.to_string(),
                valid: TransformKind::VALID,
            }),
        }
    }
}
