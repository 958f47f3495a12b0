//! Validate command: check every sample row

use geolab_core_rs::validation::process_csv_with_validation;
use std::path::Path;

use crate::Result;

pub fn run(input: &Path) -> Result<()> {
    let summary = process_csv_with_validation(input)?;

    println!("Valid rows:   {}", summary.valid_rows.len());
    println!("Invalid rows: {}", summary.error_count);
    for invalid in &summary.invalid_rows {
        println!("  row {}: {}", invalid.row_number, invalid.errors.join("; "));
    }
    Ok(())
}
