//! Domain models for the lab harness

pub mod record;
pub mod sample;

// Re-exports
pub use record::{CsvTable, Record};
pub use sample::{Sample, SampleLogEntry, SAMPLE_HEADERS};
