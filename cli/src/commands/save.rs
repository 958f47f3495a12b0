//! Save command: cache the variant as JSON

use geolab_core_rs::variant::{save_variant_config, VariantSettings};
use std::path::Path;
use tracing::info;

use super::resolve_variant;
use crate::Result;

pub fn run(settings: &VariantSettings, student: Option<&str>, output: &Path) -> Result<()> {
    let variant = resolve_variant(settings, student);
    save_variant_config(output, &variant)?;
    info!("Variant for {} saved", variant.student_id);
    println!("Saved variant for {} to {}", variant.student_id, output.display());
    Ok(())
}
