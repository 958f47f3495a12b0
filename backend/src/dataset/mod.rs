//! Variant-driven sample data generation
//!
//! Produces `samples.csv`-shaped data for a student's variant: the variant's
//! record count, locations and depth window, with exactly `include_errors`
//! rows corrupted so validation exercises have a known answer.
//!
//! All draws come from an [`RngManager`], so a variant always yields the same
//! file.

use crate::core::LabError;
use crate::io::csv_writer::write_samples_from_list;
use crate::models::{Sample, SAMPLE_HEADERS};
use crate::rng::RngManager;
use crate::variant::params::FALLBACK_LOCATIONS;
use crate::variant::{DepthRange, Variant};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Rock types drawn for generated samples
pub const ROCK_TYPES: [&str; 6] = ["Granite", "Basalt", "Sandstone", "Schist", "Limestone", "Shale"];

/// Grade bounds (percent)
pub const GRADE_RANGE: (f64, f64) = (0.5, 5.0);

/// Mass bounds (kg)
pub const MASS_RANGE: (f64, f64) = (5.0, 25.0);

/// Depth window used outside a variant
pub const DEFAULT_DEPTH_RANGE: DepthRange = DepthRange { min: 50, max: 600 };

/// Key word separating the dataset stream from the parameter stream
const DATASET_STREAM: u32 = 0x4c41_4234;

/// Draws samples from a borrowed RNG
pub struct SampleGenerator<'a> {
    rng: &'a mut RngManager,
    locations: Vec<String>,
    depth_range: DepthRange,
}

impl<'a> SampleGenerator<'a> {
    /// Create a generator over `locations` and `depth_range`
    ///
    /// An empty location list falls back to the default sites.
    pub fn new(rng: &'a mut RngManager, locations: Vec<String>, depth_range: DepthRange) -> Self {
        let locations = if locations.is_empty() {
            FALLBACK_LOCATIONS.iter().map(|s| s.to_string()).collect()
        } else {
            locations
        };
        Self {
            rng,
            locations,
            depth_range,
        }
    }

    pub fn with_defaults(rng: &'a mut RngManager) -> Self {
        Self::new(rng, Vec::new(), DEFAULT_DEPTH_RANGE)
    }

    /// Draw sample number `index` (1-based, used for the id)
    pub fn next_sample(&mut self, index: usize) -> Sample {
        let rock = ROCK_TYPES[self.rng.randbelow(ROCK_TYPES.len() as u64) as usize];
        let grade = round1(self.rng.uniform(GRADE_RANGE.0, GRADE_RANGE.1));
        let depth = self.rng.randint(
            i64::from(self.depth_range.min),
            i64::from(self.depth_range.max),
        ) as f64;
        let mass = round1(self.rng.uniform(MASS_RANGE.0, MASS_RANGE.1));
        let location = self.locations[self.rng.randbelow(self.locations.len() as u64) as usize].clone();

        Sample {
            sample_id: format!("GEO-{:03}", index),
            rock_type: rock.to_string(),
            grade,
            depth,
            mass,
            location,
        }
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A single defect injected into a generated row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Defect {
    /// `sample_id` left empty
    BlankSampleId,
    /// `grade` replaced by `N/A`
    NonNumericGrade,
    /// `depth` replaced by `unknown`
    NonNumericDepth,
    /// `location` left empty
    BlankLocation,
}

impl Defect {
    pub const ALL: [Defect; 4] = [
        Defect::BlankSampleId,
        Defect::NonNumericGrade,
        Defect::NonNumericDepth,
        Defect::BlankLocation,
    ];

    /// Corrupt a row laid out in [`SAMPLE_HEADERS`] order
    pub fn apply(self, row: &mut [String]) {
        match self {
            Defect::BlankSampleId => row[0].clear(),
            Defect::NonNumericGrade => row[2] = "N/A".to_string(),
            Defect::NonNumericDepth => row[3] = "unknown".to_string(),
            Defect::BlankLocation => row[5].clear(),
        }
    }
}

/// What [`generate_variant_dataset`] wrote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Data rows written
    pub total_rows: usize,

    /// Corrupted rows as (1-based data row number, defect), ascending
    pub defects: Vec<(usize, Defect)>,
}

impl DatasetSummary {
    pub fn valid_rows(&self) -> usize {
        self.total_rows - self.defects.len()
    }
}

/// Generate the rows of a variant's dataset
pub fn variant_rows(variant: &Variant) -> (Vec<Vec<String>>, Vec<(usize, Defect)>) {
    let seed = variant.variant_seed;
    let mut rng = RngManager::from_key(&[seed as u32, (seed >> 32) as u32, DATASET_STREAM]);
    let params = &variant.parameters;

    let total = params.num_records as usize;
    let mut rows: Vec<Vec<String>> = {
        let mut generator = SampleGenerator::new(&mut rng, params.locations.clone(), params.depth_range);
        (1..=total).map(|i| generator.next_sample(i).to_row()).collect()
    };

    let positions: Vec<usize> = (0..total).collect();
    let error_count = (params.include_errors as usize).min(total);
    let mut defects: Vec<(usize, Defect)> = rng
        .sample(&positions, error_count)
        .into_iter()
        .map(|pos| {
            let defect = Defect::ALL[rng.randbelow(Defect::ALL.len() as u64) as usize];
            defect.apply(&mut rows[pos]);
            (pos + 1, defect)
        })
        .collect();
    defects.sort_by_key(|(row, _)| *row);

    (rows, defects)
}

/// Write a variant's dataset to `path`
pub fn generate_variant_dataset(path: &Path, variant: &Variant) -> Result<DatasetSummary, LabError> {
    let (rows, defects) = variant_rows(variant);
    let total_rows = write_samples_from_list(path, SAMPLE_HEADERS.as_slice(), rows.as_slice())?;

    info!(
        path = %path.display(),
        student = %variant.student_id,
        rows = total_rows,
        defects = defects.len(),
        "generated variant dataset"
    );
    Ok(DatasetSummary {
        total_rows,
        defects,
    })
}
