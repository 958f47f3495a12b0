//! Header-keyed CSV rows
//!
//! A [`Record`] is one data row keyed by column name. A [`CsvTable`] keeps the
//! header order alongside the rows so tables can be written back unchanged.

use crate::core::LabError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;

/// One CSV data row, keyed by header name
pub type Record = BTreeMap<String, String>;

/// A CSV file loaded into memory
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CsvTable {
    /// Column names in file order
    pub headers: Vec<String>,

    /// Data rows (header excluded)
    pub rows: Vec<Record>,
}

impl CsvTable {
    /// Load a CSV file with a header row
    ///
    /// Short rows are padded with empty values; values beyond the header
    /// width are dropped.
    pub fn load(path: &Path) -> Result<Self, LabError> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(path)
            .map_err(|e| LabError::csv(path, e))?;

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| LabError::csv(path, e))?
            .iter()
            .map(String::from)
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| LabError::csv(path, e))?;
            let row = headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), record.get(i).unwrap_or("").to_string()))
                .collect();
            rows.push(row);
        }

        debug!(path = %path.display(), rows = rows.len(), "loaded csv table");
        Ok(Self { headers, rows })
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Whether `column` appears in the header
    pub fn has_column(&self, column: &str) -> bool {
        self.headers.iter().any(|h| h == column)
    }

    /// Fail with [`LabError::MissingColumn`] unless `column` is present
    pub fn require_column(&self, column: &str, path: &Path) -> Result<(), LabError> {
        if self.has_column(column) {
            Ok(())
        } else {
            Err(LabError::MissingColumn {
                column: column.to_string(),
                path: path.to_path_buf(),
            })
        }
    }

    /// Values of `column` in row order
    pub fn column<'a>(&'a self, column: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.rows
            .iter()
            .map(move |row| row.get(column).map(String::as_str).unwrap_or(""))
    }

    /// Row values ordered by header
    pub fn row_values(&self, row: &Record) -> Vec<String> {
        self.headers
            .iter()
            .map(|h| row.get(h).cloned().unwrap_or_default())
            .collect()
    }
}
