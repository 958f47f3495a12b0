//! Sample data processing
//!
//! Statistics, filters and groupings over a samples CSV. Non-numeric cells in
//! a numeric column are skipped (and counted) rather than failing the whole
//! computation.

pub mod report;
pub mod statistics;

pub use report::generate_summary_report;
pub use statistics::{calculate_statistics, ColumnStatistics};

use crate::core::numeric::parse_number;
use crate::core::LabError;
use crate::models::{CsvTable, Record};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::path::Path;

/// Rows with grade strictly above `threshold`, highest grade first
pub fn find_high_grade_samples(path: &Path, threshold: f64) -> Result<Vec<Record>, LabError> {
    let table = CsvTable::load(path)?;
    table.require_column("grade", path)?;

    let mut graded: Vec<(f64, Record)> = table
        .rows
        .into_iter()
        .filter_map(|row| {
            let grade = row.get("grade").and_then(|v| parse_number(v))?;
            (grade > threshold).then_some((grade, row))
        })
        .collect();
    graded.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    Ok(graded.into_iter().map(|(_, row)| row).collect())
}

/// Rows grouped by the value of `column`, row order kept within groups
pub fn group_by(path: &Path, column: &str) -> Result<BTreeMap<String, Vec<Record>>, LabError> {
    let table = CsvTable::load(path)?;
    table.require_column(column, path)?;

    let mut groups: BTreeMap<String, Vec<Record>> = BTreeMap::new();
    for row in table.rows {
        let key = row.get(column).cloned().unwrap_or_default();
        groups.entry(key).or_default().push(row);
    }
    Ok(groups)
}

/// Rows grouped by `location`
pub fn group_by_location(path: &Path) -> Result<BTreeMap<String, Vec<Record>>, LabError> {
    group_by(path, "location")
}

/// Number of rows per value of `column`
pub fn count_by(path: &Path, column: &str) -> Result<BTreeMap<String, usize>, LabError> {
    let table = CsvTable::load(path)?;
    table.require_column(column, path)?;
    Ok(counts_in(&table, column))
}

/// Number of rows per value of `column` in an already loaded table
pub(crate) fn counts_in(table: &CsvTable, column: &str) -> BTreeMap<String, usize> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for key in table.column(column) {
        *counts.entry(key.to_string()).or_default() += 1;
    }
    counts
}

/// Number of rows per `rock_type`
pub fn count_by_rock_type(path: &Path) -> Result<BTreeMap<String, usize>, LabError> {
    count_by(path, "rock_type")
}

/// Mean of `value_column` per value of `group_column`
///
/// Non-numeric values are skipped; groups with no numeric value are omitted.
pub fn calculate_average_by_group(
    path: &Path,
    group_column: &str,
    value_column: &str,
) -> Result<BTreeMap<String, f64>, LabError> {
    let table = CsvTable::load(path)?;
    table.require_column(group_column, path)?;
    table.require_column(value_column, path)?;
    Ok(averages_in(&table, group_column, value_column))
}

/// Mean of `value_column` per value of `group_column` in an already loaded table
pub(crate) fn averages_in(table: &CsvTable, group_column: &str, value_column: &str) -> BTreeMap<String, f64> {
    let mut sums: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for row in &table.rows {
        let Some(value) = row.get(value_column).and_then(|v| parse_number(v)) else {
            continue;
        };
        let key = row.get(group_column).cloned().unwrap_or_default();
        let entry = sums.entry(key).or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(key, (sum, count))| (key, sum / count as f64))
        .collect()
}

/// Rows with `min_depth <= depth <= max_depth`
pub fn find_depth_range_samples(path: &Path, min_depth: f64, max_depth: f64) -> Result<Vec<Record>, LabError> {
    let table = CsvTable::load(path)?;
    table.require_column("depth", path)?;

    Ok(table
        .rows
        .into_iter()
        .filter(|row| {
            row.get("depth")
                .and_then(|v| parse_number(v))
                .is_some_and(|d| min_depth <= d && d <= max_depth)
        })
        .collect())
}
