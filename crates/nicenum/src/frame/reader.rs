//! CSV and JSON-records I/O for frames.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use indexmap::IndexMap;

use super::table::Frame;
use crate::error::{NiceNumError, Result};
use crate::value::Value;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Configuration for reading CSV data.
#[derive(Debug, Clone)]
pub struct ReadOptions {
    /// Delimiter to use (None = comma).
    pub delimiter: Option<u8>,
    /// Whether the data has a header row. Without one, columns are named
    /// `column_1..column_n`.
    pub has_header: bool,
}

impl Default for ReadOptions {
    fn default() -> Self {
        Self {
            delimiter: None,
            has_header: true,
        }
    }
}

impl Frame {
    /// Read a frame from CSV data.
    ///
    /// Cell types are inferred per field (missing patterns, integer,
    /// float, text).
    pub fn from_csv<R: Read>(reader: R, options: &ReadOptions) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(options.delimiter.unwrap_or(b','))
            .has_headers(options.has_header)
            .from_reader(reader);

        let mut names: Vec<String> = Vec::new();
        if options.has_header {
            names = rdr.headers()?.iter().map(|h| h.to_string()).collect();
        }

        let mut columns: Vec<Vec<Value>> = vec![Vec::new(); names.len()];
        for record in rdr.records() {
            let record = record?;
            if names.is_empty() {
                names = (1..=record.len()).map(|i| format!("column_{}", i)).collect();
                columns = vec![Vec::new(); names.len()];
            }
            for (idx, field) in record.iter().enumerate() {
                if let Some(col) = columns.get_mut(idx) {
                    col.push(Value::from_field(field));
                }
            }
        }

        Frame::from_columns(names.into_iter().zip(columns))
    }

    /// Read a frame from a CSV/TSV file, auto-detecting the delimiter.
    pub fn from_csv_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut file = File::open(path).map_err(|e| NiceNumError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let mut contents = Vec::new();
        file.read_to_end(&mut contents).map_err(|e| NiceNumError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let options = ReadOptions {
            delimiter: Some(detect_delimiter(&contents)),
            has_header: true,
        };
        Frame::from_csv(contents.as_slice(), &options)
    }

    /// Write the frame as CSV. `Na` cells render empty.
    pub fn to_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        wtr.write_record(self.column_names())?;

        for row in 0..self.row_count() {
            let record: Vec<String> = self
                .columns
                .values()
                .map(|col| col[row].to_string())
                .collect();
            wtr.write_record(&record)?;
        }

        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Build a frame from a JSON array of objects.
    ///
    /// Column order follows first appearance of each key; keys missing
    /// from a record pad as `Na`.
    pub fn from_json_records(json: &str) -> Result<Self> {
        let records: Vec<IndexMap<String, Value>> = serde_json::from_str(json)?;

        let mut columns: IndexMap<String, Vec<Value>> = IndexMap::new();
        for (row, record) in records.iter().enumerate() {
            for (key, value) in record {
                columns
                    .entry(key.clone())
                    .or_insert_with(|| vec![Value::Na; row])
                    .push(value.clone());
            }
            for column in columns.values_mut() {
                if column.len() < row + 1 {
                    column.push(Value::Na);
                }
            }
        }

        Ok(Frame { columns })
    }

    /// Serialize the frame as a JSON array of objects.
    pub fn to_json_records(&self) -> Result<String> {
        let records: Vec<IndexMap<&str, &Value>> = (0..self.row_count())
            .map(|row| {
                self.columns
                    .iter()
                    .map(|(name, col)| (name.as_str(), &col[row]))
                    .collect()
            })
            .collect();
        Ok(serde_json::to_string(&records)?)
    }
}

/// Pick the delimiter whose count in the first line is highest.
fn detect_delimiter(contents: &[u8]) -> u8 {
    let first_line = contents.split(|&b| b == b'\n').next().unwrap_or(contents);

    DELIMITERS
        .iter()
        .copied()
        .max_by_key(|&d| first_line.iter().filter(|&&b| b == d).count())
        .unwrap_or(b',')
}
