//! Descriptive statistics of a numeric column

use crate::core::numeric::parse_number;
use crate::core::LabError;
use crate::models::CsvTable;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::warn;

/// Summary of the numeric values of one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnStatistics {
    /// Numeric values used
    pub count: usize,
    /// Cells skipped because they were empty or non-numeric
    pub skipped: usize,
    pub sum: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
    pub median: f64,
    /// Population standard deviation
    pub std_dev: f64,
}

impl ColumnStatistics {
    /// Statistics of `values`, or `None` when empty
    pub fn from_values(values: &[f64]) -> Option<Self> {
        if values.is_empty() {
            return None;
        }
        let count = values.len();
        let sum: f64 = values.iter().sum();
        let mean = sum / count as f64;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);
        let median = if count % 2 == 0 {
            (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
        } else {
            sorted[count / 2]
        };

        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Some(Self {
            count,
            skipped: 0,
            sum,
            mean,
            min,
            max,
            median,
            std_dev: variance.sqrt(),
        })
    }
}

/// Statistics of the numeric values in `column`
///
/// # Errors
/// - [`LabError::MissingColumn`] when the column is absent
/// - [`LabError::NoNumericValues`] when no cell parses as a number
pub fn calculate_statistics(path: &Path, column: &str) -> Result<ColumnStatistics, LabError> {
    let table = CsvTable::load(path)?;
    table.require_column(column, path)?;

    let mut values = Vec::with_capacity(table.len());
    let mut skipped = 0;
    for cell in table.column(column) {
        match parse_number(cell) {
            Some(value) => values.push(value),
            None => skipped += 1,
        }
    }
    if skipped > 0 {
        warn!(column, skipped, "skipped non-numeric values");
    }

    let mut stats = ColumnStatistics::from_values(&values).ok_or_else(|| LabError::NoNumericValues {
        column: column.to_string(),
    })?;
    stats.skipped = skipped;
    Ok(stats)
}
