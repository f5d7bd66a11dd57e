//! Applying per-cell transforms across frame columns.

use indexmap::IndexMap;

use super::operations::{ColumnSelection, Transform};
use crate::error::{NiceNumError, Result};
use crate::frame::Frame;
use crate::value::Value;

impl Frame {
    /// Produce a new frame with the selected columns transformed.
    ///
    /// Unselected columns, column order, and row order are unchanged. The
    /// transform applies independently per cell; structural errors
    /// (unknown columns) always propagate regardless of the transform's
    /// error policy.
    ///
    /// # Examples
    ///
    /// ```
    /// use nicenum::{ColumnSelection, Frame, HumanOptions, Transform, Value};
    ///
    /// let frame = Frame::from_columns(vec![("A", vec![Value::Int(4510)])]).unwrap();
    /// let transform = Transform::Human(HumanOptions { precision: 2, ..Default::default() });
    ///
    /// let out = frame.transform(&ColumnSelection::All, &transform).unwrap();
    /// assert_eq!(out.get(0, "A"), Some(&Value::Str("4.51K".to_string())));
    /// ```
    pub fn transform(
        &self,
        selection: &ColumnSelection,
        transform: &Transform,
    ) -> Result<Frame> {
        let selected: Vec<String> = match selection {
            ColumnSelection::All => self.columns.keys().cloned().collect(),
            ColumnSelection::Columns(names) => {
                for name in names {
                    if !self.columns.contains_key(name) {
                        return Err(NiceNumError::UnknownColumn {
                            column: name.clone(),
                            available: self.columns.keys().cloned().collect(),
                        });
                    }
                }
                names.clone()
            }
        };

        let mut columns = IndexMap::with_capacity(self.columns.len());
        for (name, values) in &self.columns {
            let cells = if selected.iter().any(|s| s == name) {
                values
                    .iter()
                    .map(|v| transform.apply(v))
                    .collect::<Result<Vec<Value>>>()?
            } else {
                values.clone()
            };
            columns.insert(name.clone(), cells);
        }

        Ok(Frame { columns })
    }
}
