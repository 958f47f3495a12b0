//! Error type shared by every harness module
//!
//! Every fallible operation returns `Result<_, LabError>`. The `Display`
//! text is what the "safe" helpers surface to students, so variants carry the
//! offending path or column.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while reading, writing or analysing lab data
#[derive(Debug, Error)]
pub enum LabError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("JSON error in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Column '{column}' not found in {}", path.display())]
    MissingColumn { column: String, path: PathBuf },

    #[error("Column '{column}' has no numeric values")]
    NoNumericValues { column: String },

    #[error("Field '{field}' is not one of the CSV fieldnames")]
    UnknownField { field: String },

    #[error("Row has {found} values but header has {expected} columns")]
    RowLength { expected: usize, found: usize },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl LabError {
    /// Wrap an I/O error, mapping `NotFound` to [`LabError::NotFound`]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            LabError::NotFound(path.to_path_buf())
        } else {
            LabError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Wrap a CSV error; I/O failures underneath keep their I/O meaning
    pub fn csv(path: &Path, source: csv::Error) -> Self {
        if let csv::ErrorKind::Io(err) = source.kind() {
            return LabError::io(path, std::io::Error::new(err.kind(), err.to_string()));
        }
        LabError::Csv {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn json(path: &Path, source: serde_json::Error) -> Self {
        LabError::Json {
            path: path.to_path_buf(),
            source,
        }
    }
}
