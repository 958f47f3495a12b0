//! Lab 4 harness core - File I/O & CSV Processing
//!
//! Deterministic per-student variants plus the reference file utilities the
//! lab asks students to build.
//!
//! # Architecture
//!
//! - **rng**: Deterministic random number generation (MT19937)
//! - **variant**: Seed derivation and variant parameter draw
//! - **models**: Domain types (Record, CsvTable, Sample)
//! - **io**: Text and CSV reading/writing
//! - **processing**: Statistics, grouping and reports
//! - **validation**: Safe file helpers and row validation
//! - **dataset**: Variant-driven sample data generation
//!
//! # Critical Invariants
//!
//! 1. Same student id + settings → same variant, in every process
//! 2. All randomness is deterministic (seeded RNG)
//! 3. File helpers report failures as `LabError`, never panic

// Module declarations
pub mod core;
pub mod dataset;
pub mod io;
pub mod models;
pub mod processing;
pub mod rng;
pub mod validation;
pub mod variant;

// Re-exports for convenience
pub use crate::core::LabError;
pub use dataset::{generate_variant_dataset, DatasetSummary, Defect, SampleGenerator};
pub use models::{CsvTable, Record, Sample, SampleLogEntry, SAMPLE_HEADERS};
pub use processing::ColumnStatistics;
pub use rng::RngManager;
pub use validation::{FileInfo, RowValidation, ValidationSummary};
pub use variant::{
    compute_seed, get_my_variant, get_variant_for_student, DepthRange, Variant,
    VariantParameters, VariantSettings,
};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn geolab_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    ffi::register(m)
}
