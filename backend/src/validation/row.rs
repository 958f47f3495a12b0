//! Row-level validation of CSV records

use crate::core::numeric::parse_number;
use crate::core::LabError;
use crate::models::{CsvTable, Record};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info};

/// Fields every sample row must fill in
pub const DEFAULT_REQUIRED_FIELDS: [&str; 3] = ["sample_id", "rock_type", "location"];

/// Fields every sample row must hold a number in
pub const DEFAULT_NUMERIC_FIELDS: [&str; 3] = ["grade", "depth", "mass"];

/// Outcome of validating one record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowValidation {
    /// One message per problem, in field order
    pub errors: Vec<String>,
}

impl RowValidation {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check required and numeric fields of `record`
///
/// A required field is a problem when missing or blank. A numeric field is a
/// problem when missing, blank, or not a number.
pub fn validate_csv_row<R, N>(record: &Record, required_fields: &[R], numeric_fields: &[N]) -> RowValidation
where
    R: AsRef<str>,
    N: AsRef<str>,
{
    let mut errors = Vec::new();

    for field in required_fields.iter().map(AsRef::<str>::as_ref) {
        match record.get(field) {
            None => errors.push(format!("Missing required field '{}'", field)),
            Some(value) if value.trim().is_empty() => {
                errors.push(format!("Required field '{}' is empty", field))
            }
            Some(_) => {}
        }
    }

    for field in numeric_fields.iter().map(AsRef::<str>::as_ref) {
        match record.get(field) {
            None => errors.push(format!("Missing numeric field '{}'", field)),
            Some(value) if parse_number(value).is_none() => {
                errors.push(format!("Field '{}' is not numeric: '{}'", field, value))
            }
            Some(_) => {}
        }
    }

    RowValidation { errors }
}

/// A record that failed validation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvalidRow {
    /// 1-based data row number (header excluded)
    pub row_number: usize,
    pub record: Record,
    pub errors: Vec<String>,
}

/// Result of validating a whole file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationSummary {
    pub valid_rows: Vec<Record>,
    pub invalid_rows: Vec<InvalidRow>,
    /// Number of invalid rows
    pub error_count: usize,
}

impl ValidationSummary {
    pub fn total_rows(&self) -> usize {
        self.valid_rows.len() + self.invalid_rows.len()
    }

    /// Number of individual problems across all invalid rows
    pub fn issue_count(&self) -> usize {
        self.invalid_rows.iter().map(|row| row.errors.len()).sum()
    }
}

/// Validate every row of a samples CSV against the default field rules
pub fn process_csv_with_validation(path: &Path) -> Result<ValidationSummary, LabError> {
    let table = CsvTable::load(path)?;
    let mut summary = ValidationSummary::default();

    for (index, record) in table.rows.into_iter().enumerate() {
        let validation = validate_csv_row(
            &record,
            DEFAULT_REQUIRED_FIELDS.as_slice(),
            DEFAULT_NUMERIC_FIELDS.as_slice(),
        );
        if validation.is_valid() {
            summary.valid_rows.push(record);
        } else {
            debug!(row = index + 1, errors = ?validation.errors, "invalid row");
            summary.invalid_rows.push(InvalidRow {
                row_number: index + 1,
                record,
                errors: validation.errors,
            });
        }
    }
    summary.error_count = summary.invalid_rows.len();

    info!(
        path = %path.display(),
        valid = summary.valid_rows.len(),
        invalid = summary.error_count,
        "validated csv"
    );
    Ok(summary)
}
