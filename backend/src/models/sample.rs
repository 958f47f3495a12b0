//! Rock sample records
//!
//! Typed view of a `samples.csv` row plus the compact entry written to text
//! sample logs.

use crate::models::Record;
use serde::{Deserialize, Serialize};

/// Column order of `samples.csv`
pub const SAMPLE_HEADERS: [&str; 6] = ["sample_id", "rock_type", "grade", "depth", "mass", "location"];

/// A single rock sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub sample_id: String,
    pub rock_type: String,
    /// Ore grade (percent)
    pub grade: f64,
    /// Depth below surface (metres)
    pub depth: f64,
    /// Sample mass (kg)
    pub mass: f64,
    pub location: String,
}

impl Sample {
    /// Cell values in [`SAMPLE_HEADERS`] order, formatted as in `samples.csv`
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.sample_id.clone(),
            self.rock_type.clone(),
            format!("{:.1}", self.grade),
            format!("{:.0}", self.depth),
            format!("{:.1}", self.mass),
            self.location.clone(),
        ]
    }

    pub fn to_record(&self) -> Record {
        SAMPLE_HEADERS
            .iter()
            .map(|h| h.to_string())
            .zip(self.to_row())
            .collect()
    }
}

/// One line of a text sample log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleLogEntry {
    pub id: String,
    pub rock_type: String,
    pub grade: f64,
}

impl SampleLogEntry {
    pub fn new(id: impl Into<String>, rock_type: impl Into<String>, grade: f64) -> Self {
        Self {
            id: id.into(),
            rock_type: rock_type.into(),
            grade,
        }
    }
}

impl From<&Sample> for SampleLogEntry {
    fn from(sample: &Sample) -> Self {
        Self::new(sample.sample_id.clone(), sample.rock_type.clone(), sample.grade)
    }
}
