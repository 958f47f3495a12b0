//! Python bindings
//!
//! Exposes variant computation to the Python grading suites so they can
//! recompute a student's values without reimplementing the draw.
//! Only compiled with the `pyo3` feature.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use std::path::PathBuf;

use crate::variant::{self, VariantSettings};

/// Seed of `student_id` under the course salt and assignment tag
#[pyfunction]
fn compute_seed(student_id: &str) -> u64 {
    variant::compute_seed(student_id)
}

/// Grading group of a seed
#[pyfunction]
#[pyo3(signature = (seed, num_groups = variant::NUM_GROUPS))]
fn group_for_seed(seed: u64, num_groups: u64) -> PyResult<u64> {
    if num_groups == 0 {
        return Err(PyValueError::new_err("num_groups must be positive"));
    }
    Ok(variant::group_for_seed(seed, num_groups))
}

/// Full variant of `student_id` as a JSON string
#[pyfunction]
#[pyo3(signature = (student_id, samples_csv = None))]
fn get_variant_for_student(student_id: &str, samples_csv: Option<PathBuf>) -> PyResult<String> {
    let mut settings = VariantSettings::default();
    if let Some(path) = samples_csv {
        settings = settings.with_samples_csv(path);
    }
    let variant = variant::get_variant_for_student(student_id, &settings);
    serde_json::to_string(&variant).map_err(|e| PyValueError::new_err(e.to_string()))
}

pub fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(compute_seed, m)?)?;
    m.add_function(wrap_pyfunction!(group_for_seed, m)?)?;
    m.add_function(wrap_pyfunction!(get_variant_for_student, m)?)?;
    Ok(())
}
