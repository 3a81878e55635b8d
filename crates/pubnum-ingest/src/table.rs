//! In-memory CSV table.

use crate::error::{IngestError, Result};

/// A loaded CSV export: header names plus string rows of equal width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Compares a header with a column name, ignoring surrounding whitespace.
pub fn header_matches(header: &str, name: &str) -> bool {
    header.trim() == name.trim()
}

/// Column indexes of the two fields the normalizer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredColumns {
    pub number: usize,
    pub kind: usize,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Index of the first column whose trimmed header equals `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers
            .iter()
            .position(|header| header_matches(header, name))
    }

    /// Cell text, or `None` when the cell is empty or out of range.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows
            .get(row)
            .and_then(|values| values.get(column))
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Resolves the publication number and kind columns.
    ///
    /// Fails with [`IngestError::MissingRequiredField`] naming every absent
    /// column, in the order given.
    pub fn require_columns(&self, number: &str, kind: &str) -> Result<RequiredColumns> {
        let number_idx = self.column_index(number);
        let kind_idx = self.column_index(kind);
        match (number_idx, kind_idx) {
            (Some(number), Some(kind)) => Ok(RequiredColumns { number, kind }),
            _ => {
                let missing = [(number, number_idx), (kind, kind_idx)]
                    .into_iter()
                    .filter(|(_, idx)| idx.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect();
                Err(IngestError::MissingRequiredField { missing })
            }
        }
    }
}
