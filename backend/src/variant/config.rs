//! Variant settings and the cached variant file
//!
//! [`VariantSettings`] holds everything seed derivation depends on. It
//! defaults to the course constants and can be overridden from a JSON file
//! (missing fields keep their defaults).
//!
//! The computed variant is cached as `.variant_config.json`; grading suites
//! prefer that file over recomputing.

use super::{Variant, VariantParameters, ASSIGNMENT_ID, NUM_GROUPS, SEED_SALT};
use crate::core::LabError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default cache file name, relative to the repository root
pub const VARIANT_CONFIG_FILE: &str = ".variant_config.json";

/// Default samples CSV location, relative to the repository root
pub const DEFAULT_SAMPLES_CSV: &str = "data/samples.csv";

/// Inputs of variant computation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VariantSettings {
    /// Salt mixed into the hashed identifier
    pub seed_salt: String,

    /// Assignment tag mixed into the hashed identifier
    pub assignment_id: String,

    /// Number of grading groups (`group_id = seed % num_groups`)
    pub num_groups: u64,

    /// Samples CSV whose locations are the candidate sites
    pub samples_csv: PathBuf,
}

impl Default for VariantSettings {
    fn default() -> Self {
        Self {
            seed_salt: SEED_SALT.to_string(),
            assignment_id: ASSIGNMENT_ID.to_string(),
            num_groups: NUM_GROUPS,
            samples_csv: PathBuf::from(DEFAULT_SAMPLES_CSV),
        }
    }
}

impl VariantSettings {
    /// Settings with a different samples CSV
    pub fn with_samples_csv(mut self, path: impl Into<PathBuf>) -> Self {
        self.samples_csv = path.into();
        self
    }

    /// Load settings from a JSON file
    pub fn from_json_file(path: &Path) -> Result<Self, LabError> {
        let text = fs::read_to_string(path).map_err(|e| LabError::io(path, e))?;
        let settings: Self = serde_json::from_str(&text).map_err(|e| LabError::json(path, e))?;
        settings.validate()?;
        debug!(path = %path.display(), "loaded variant settings");
        Ok(settings)
    }

    /// Samples CSV path to read
    ///
    /// A relative path is looked up from the current directory upwards, so a
    /// command run anywhere inside the checkout finds the repository's
    /// `data/samples.csv`.
    pub fn resolved_samples_csv(&self) -> PathBuf {
        match std::env::current_dir() {
            Ok(cwd) => locate_upwards(&cwd, &self.samples_csv),
            Err(_) => self.samples_csv.clone(),
        }
    }

    pub fn validate(&self) -> Result<(), LabError> {
        if self.num_groups == 0 {
            return Err(LabError::InvalidConfig(
                "num_groups must be positive".to_string(),
            ));
        }
        if self.assignment_id.is_empty() {
            return Err(LabError::InvalidConfig(
                "assignment_id must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// First existing `start/.../relative` walking from `start` to the root
///
/// Absolute paths are returned unchanged; a relative path found nowhere is
/// returned as given.
pub fn locate_upwards(start: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        return path.to_path_buf();
    }
    match start.ancestors().map(|dir| dir.join(path)).find(|candidate| candidate.is_file()) {
        Some(found) => {
            debug!(path = %found.display(), "located samples csv");
            found
        }
        None => path.to_path_buf(),
    }
}

/// Contents of a variant cache file
///
/// Older cache files hold only the parameters object.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CachedVariant {
    Full(Variant),
    ParametersOnly(VariantParameters),
}

impl CachedVariant {
    pub fn parameters(&self) -> &VariantParameters {
        match self {
            CachedVariant::Full(variant) => &variant.parameters,
            CachedVariant::ParametersOnly(params) => params,
        }
    }
}

/// Write a variant as pretty JSON
pub fn save_variant_config(path: &Path, variant: &Variant) -> Result<(), LabError> {
    let json = serde_json::to_string_pretty(variant).map_err(|e| LabError::json(path, e))?;
    fs::write(path, json + "\n").map_err(|e| LabError::io(path, e))?;
    info!(path = %path.display(), student = %variant.student_id, "saved variant config");
    Ok(())
}

/// Read a variant cache file
pub fn load_variant_config(path: &Path) -> Result<CachedVariant, LabError> {
    let text = fs::read_to_string(path).map_err(|e| LabError::io(path, e))?;
    serde_json::from_str(&text).map_err(|e| LabError::json(path, e))
}
