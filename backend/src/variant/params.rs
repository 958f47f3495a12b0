//! Variant parameter draw
//!
//! Parameters are drawn from a seeded [`RngManager`] in a FIXED order. Changing
//! the order (or a bound) silently changes every student's values, so the
//! order below is part of the published contract:
//!
//! 1. minimum depth
//! 2. number of locations
//! 3. number of records
//! 4. location subset
//! 5. depth span
//! 6. number of error rows

use crate::core::LabError;
use crate::models::CsvTable;
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

/// Inclusive bounds of `num_records`
pub const NUM_RECORDS_RANGE: (i64, i64) = (40, 60);

/// Inclusive bounds of `depth_range.min`
pub const MIN_DEPTH_RANGE: (i64, i64) = (50, 150);

/// Inclusive bounds of `depth_range.max - depth_range.min`
pub const DEPTH_SPAN_RANGE: (i64, i64) = (300, 500);

/// Inclusive bounds of the requested location count (capped by candidates)
pub const LOCATION_COUNT_RANGE: (i64, i64) = (2, 4);

/// Inclusive bounds of `include_errors`
pub const ERROR_COUNT_RANGE: (i64, i64) = (2, 5);

/// Locations used when the samples CSV cannot be read
pub const FALLBACK_LOCATIONS: [&str; 2] = ["Site-A", "Site-B"];

/// Depth window (metres, inclusive) a student filters samples by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepthRange {
    pub min: u32,
    pub max: u32,
}

impl DepthRange {
    pub fn contains(&self, depth: f64) -> bool {
        f64::from(self.min) <= depth && depth <= f64::from(self.max)
    }
}

/// Per-student assignment values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantParameters {
    /// Number of records the student generates
    pub num_records: u32,

    /// Locations the student reports on (distinct, draw order)
    pub locations: Vec<String>,

    /// Depth window for range queries
    pub depth_range: DepthRange,

    /// Number of malformed rows in the student's dataset
    pub include_errors: u32,
}

/// Draw parameters from `rng` against the candidate `sites`
///
/// # Example
/// ```
/// use geolab_core_rs::rng::RngManager;
/// use geolab_core_rs::variant::generate_parameters;
///
/// let sites = vec!["Site-A".to_string(), "Site-B".to_string()];
/// let mut rng = RngManager::new(7);
/// let params = generate_parameters(&mut rng, &sites);
/// assert!(params.depth_range.min < params.depth_range.max);
/// assert_eq!(params.locations.len(), 2);
/// ```
pub fn generate_parameters(rng: &mut RngManager, sites: &[String]) -> VariantParameters {
    let min_depth = draw(rng, MIN_DEPTH_RANGE);
    let num_locations = (draw(rng, LOCATION_COUNT_RANGE) as usize).min(sites.len());
    let num_records = draw(rng, NUM_RECORDS_RANGE);
    let locations = rng.sample(sites, num_locations);
    let span = draw(rng, DEPTH_SPAN_RANGE);
    let include_errors = draw(rng, ERROR_COUNT_RANGE);

    VariantParameters {
        num_records,
        locations,
        depth_range: DepthRange {
            min: min_depth,
            max: min_depth + span,
        },
        include_errors,
    }
}

fn draw(rng: &mut RngManager, (min, max): (i64, i64)) -> u32 {
    // All bounds are small and non-negative
    rng.randint(min, max) as u32
}

/// Sorted distinct locations of a samples CSV
///
/// Falls back to [`FALLBACK_LOCATIONS`] only when the file is unreadable. A
/// readable file without locations yields an empty list, which draws no
/// locations and consumes no randomness.
pub fn candidate_locations(csv_path: &Path) -> Vec<String> {
    match read_locations(csv_path) {
        Ok(sites) => sites,
        Err(err) => {
            warn!(path = %csv_path.display(), error = %err, "cannot read samples csv, using fallback");
            fallback_locations()
        }
    }
}

fn read_locations(csv_path: &Path) -> Result<Vec<String>, LabError> {
    let table = CsvTable::load(csv_path)?;
    let sites: BTreeSet<String> = table
        .column("location")
        .map(str::trim)
        .filter(|loc| !loc.is_empty())
        .map(String::from)
        .collect();
    Ok(sites.into_iter().collect())
}

fn fallback_locations() -> Vec<String> {
    FALLBACK_LOCATIONS.iter().map(|s| s.to_string()).collect()
}
