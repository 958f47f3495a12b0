//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod dataset;
pub mod report;
pub mod save;
pub mod seed;
pub mod show;
pub mod validate;

use geolab_core_rs::variant::{self, Variant, VariantSettings};

/// Variant of `student`, or of the detected repository owner
pub(crate) fn resolve_variant(settings: &VariantSettings, student: Option<&str>) -> Variant {
    match student {
        Some(id) => variant::get_variant_for_student(id, settings),
        None => variant::get_my_variant(settings),
    }
}
