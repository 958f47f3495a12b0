//! CSV reading
//!
//! All queries take the file path and read it fresh; callers that run many
//! queries against one file should load a [`CsvTable`] once instead.

use crate::core::LabError;
use crate::models::{CsvTable, Record};
use std::collections::BTreeSet;
use std::path::Path;

/// Every row, header included, as raw string values
pub fn read_samples_as_list(path: &Path) -> Result<Vec<Vec<String>>, LabError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|e| LabError::csv(path, e))?;

    reader
        .records()
        .map(|result| {
            result
                .map(|record| record.iter().map(String::from).collect())
                .map_err(|e| LabError::csv(path, e))
        })
        .collect()
}

/// Data rows keyed by header name
pub fn read_samples_as_dict(path: &Path) -> Result<Vec<Record>, LabError> {
    Ok(CsvTable::load(path)?.rows)
}

/// Values of one column in row order
pub fn get_column_values(path: &Path, column: &str) -> Result<Vec<String>, LabError> {
    let table = CsvTable::load(path)?;
    table.require_column(column, path)?;
    Ok(table.column(column).map(String::from).collect())
}

/// Distinct values of one column
pub fn get_unique_values(path: &Path, column: &str) -> Result<BTreeSet<String>, LabError> {
    Ok(get_column_values(path, column)?.into_iter().collect())
}

/// Number of data rows (header excluded)
pub fn get_row_count(path: &Path) -> Result<usize, LabError> {
    Ok(CsvTable::load(path)?.len())
}

/// Rows whose `column` equals `value` exactly
pub fn find_rows_by_value(path: &Path, column: &str, value: &str) -> Result<Vec<Record>, LabError> {
    let table = CsvTable::load(path)?;
    table.require_column(column, path)?;
    Ok(table
        .rows
        .into_iter()
        .filter(|row| row.get(column).map(String::as_str) == Some(value))
        .collect())
}

/// Column names in file order
pub fn get_csv_headers(path: &Path) -> Result<Vec<String>, LabError> {
    Ok(CsvTable::load(path)?.headers)
}
