//! In-memory table of named, ordered columns.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{NiceNumError, Result};
use crate::value::Value;

/// An ordered collection of named columns.
///
/// Column insertion order is preserved; every column holds the same number
/// of rows. Transforms never mutate in place — they produce a new frame.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub(crate) columns: IndexMap<String, Vec<Value>>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Self {
            columns: IndexMap::new(),
        }
    }

    /// Build a frame from (name, values) pairs, preserving order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<Value>)>,
        S: Into<String>,
    {
        let mut frame = Frame::new();
        for (name, values) in columns {
            frame.insert_column(name.into(), values)?;
        }
        Ok(frame)
    }

    /// Append a column, checking its length against the existing rows.
    pub fn insert_column(&mut self, name: String, values: Vec<Value>) -> Result<()> {
        if !self.columns.is_empty() && values.len() != self.row_count() {
            return Err(NiceNumError::Shape(format!(
                "column \"{}\" has {} rows, frame has {}",
                name,
                values.len(),
                self.row_count()
            )));
        }
        self.columns.insert(name, values);
        Ok(())
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map(|(_, v)| v.len()).unwrap_or(0)
    }

    /// Returns true if the frame has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// All column names in order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.keys().map(|k| k.as_str()).collect()
    }

    /// Get a column's values by name.
    pub fn column(&self, name: &str) -> Option<&[Value]> {
        self.columns.get(name).map(|v| v.as_slice())
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        self.columns.get(column).and_then(|v| v.get(row))
    }

    /// Iterate over (name, values) pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Value])> {
        self.columns.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_frame() -> Frame {
        Frame::from_columns(vec![
            ("A", vec![Value::Int(1000), Value::Int(1_000_000)]),
            ("B", vec![Value::Int(2000), Value::Int(2_000_000)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_column_order_preserved() {
        let frame = make_frame();
        assert_eq!(frame.column_names(), vec!["A", "B"]);
        assert_eq!(frame.column_count(), 2);
        assert_eq!(frame.row_count(), 2);
    }

    #[test]
    fn test_get_cell() {
        let frame = make_frame();
        assert_eq!(frame.get(1, "A"), Some(&Value::Int(1_000_000)));
        assert_eq!(frame.get(2, "A"), None);
        assert_eq!(frame.get(0, "Z"), None);
    }

    #[test]
    fn test_ragged_column_rejected() {
        let mut frame = make_frame();
        let err = frame
            .insert_column("C".to_string(), vec![Value::Int(1)])
            .unwrap_err();
        assert!(matches!(err, NiceNumError::Shape(_)));
    }

    #[test]
    fn test_empty_frame() {
        let frame = Frame::new();
        assert!(frame.is_empty());
        assert_eq!(frame.row_count(), 0);
    }
}
