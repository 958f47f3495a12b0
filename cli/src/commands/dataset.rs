//! Dataset command: generate the variant's sample data

use geolab_core_rs::generate_variant_dataset;
use geolab_core_rs::variant::VariantSettings;
use std::path::Path;

use super::resolve_variant;
use crate::Result;

pub fn run(settings: &VariantSettings, student: Option<&str>, output: &Path) -> Result<()> {
    let variant = resolve_variant(settings, student);
    let summary = generate_variant_dataset(output, &variant)?;

    println!(
        "Wrote {} rows ({} with errors) to {}",
        summary.total_rows,
        summary.defects.len(),
        output.display()
    );
    for (row, defect) in &summary.defects {
        println!("  row {:>3}: {:?}", row, defect);
    }
    Ok(())
}
