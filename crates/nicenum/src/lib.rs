//! nicenum: human-readable number formatting for tabular datasets.
//!
//! Converts between numeric values and abbreviated string representations
//! (`4510` ↔ `"4.51K"`), with pluggable suffix families, custom suffix
//! lists, optional currency prefixes, colorized thousands-grouping, and
//! column-wise transformation of in-memory frames.
//!
//! # Core Principles
//!
//! - **Typed boundaries**: families, transforms, and colors are closed
//!   enums; string names are validated once at the edge
//! - **Non-destructive**: frame transforms produce a new frame
//! - **Raise or coerce**: conversion failures either propagate as typed
//!   errors or collapse to the missing-value sentinel, per call
//!
//! # Example
//!
//! ```
//! use nicenum::{ColumnSelection, Frame, HumanOptions, Transform, Value};
//!
//! let frame = Frame::from_columns(vec![
//!     ("revenue", vec![Value::Int(4510), Value::Int(69_420_000)]),
//! ]).unwrap();
//!
//! let human = Transform::Human(HumanOptions { precision: 2, ..Default::default() });
//! let out = frame.transform(&ColumnSelection::All, &human).unwrap();
//!
//! assert_eq!(out.get(0, "revenue"), Some(&Value::Str("4.51K".to_string())));
//! assert_eq!(out.get(1, "revenue"), Some(&Value::Str("69.42M".to_string())));
//! ```

pub mod color;
pub mod error;
pub mod frame;
pub mod human;
pub mod numeric;
pub mod suffix;
pub mod transform;
pub mod value;

pub use color::{color_value, to_color, ColorName, ColorOptions};
pub use error::{NiceNumError, Result};
pub use frame::{Frame, ReadOptions};
pub use human::{human_value, to_human, HumanOptions};
pub use numeric::{numeric_value, to_numeric, NumericOptions};
pub use suffix::{suffix_list, Family, FILESIZE_SUFFIXES, NUMBER_SUFFIXES};
pub use transform::{ColumnSelection, Transform, TransformKind};
pub use value::{ErrorPolicy, Value};
