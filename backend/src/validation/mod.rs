//! Defensive file helpers and row validation
//!
//! The `safe_*` helpers never panic: every failure comes back as a
//! [`LabError`] whose `Display` text is a readable message, and is logged at
//! warn level.

pub mod file_info;
pub mod row;

pub use file_info::{get_file_info, FileInfo};
pub use row::{
    process_csv_with_validation, validate_csv_row, InvalidRow, RowValidation, ValidationSummary,
    DEFAULT_NUMERIC_FIELDS, DEFAULT_REQUIRED_FIELDS,
};

use crate::core::numeric::parse_number;
use crate::core::LabError;
use crate::models::{CsvTable, Record};
use std::fs;
use std::path::Path;
use tracing::warn;

/// Read a whole text file
pub fn safe_read_file(path: &Path) -> Result<String, LabError> {
    fs::read_to_string(path)
        .map_err(|e| LabError::io(path, e))
        .inspect_err(|err| warn!(error = %err, "safe_read_file failed"))
}

/// Read a CSV file into header-keyed records
pub fn safe_read_csv(path: &Path) -> Result<Vec<Record>, LabError> {
    CsvTable::load(path)
        .map(|table| table.rows)
        .inspect_err(|err| warn!(error = %err, "safe_read_csv failed"))
}

/// Write `content` to `path`, creating parent directories
///
/// Returns the number of bytes written.
pub fn safe_write_file(path: &Path, content: &str) -> Result<usize, LabError> {
    let result = (|| -> Result<usize, LabError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LabError::io(parent, e))?;
        }
        fs::write(path, content).map_err(|e| LabError::io(path, e))?;
        Ok(content.len())
    })();
    result.inspect_err(|err| warn!(error = %err, "safe_write_file failed"))
}

/// Parse a cell as a number, `None` when it is not one
///
/// # Example
/// ```
/// use geolab_core_rs::validation::safe_convert_numeric;
///
/// assert_eq!(safe_convert_numeric("2.5"), Some(2.5));
/// assert_eq!(safe_convert_numeric("N/A").unwrap_or(0.0), 0.0);
/// ```
pub fn safe_convert_numeric(value: &str) -> Option<f64> {
    parse_number(value)
}

/// Whether `path` names an existing regular file
pub fn check_file_exists(path: &Path) -> bool {
    path.is_file()
}
