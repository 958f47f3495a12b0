//! File metadata that never fails

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Facts about a path; absent files report `exists: false`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileInfo {
    pub path: PathBuf,
    pub exists: bool,
    pub is_file: bool,
    pub size_bytes: u64,
    /// Line count for readable text files
    pub line_count: Option<usize>,
    /// Lowercased extension without the dot
    pub extension: Option<String>,
}

/// Inspect `path`
pub fn get_file_info(path: &Path) -> FileInfo {
    let metadata = fs::metadata(path).ok();
    let is_file = metadata.as_ref().is_some_and(|m| m.is_file());
    let line_count = if is_file {
        fs::read_to_string(path).ok().map(|text| text.lines().count())
    } else {
        None
    };

    FileInfo {
        path: path.to_path_buf(),
        exists: metadata.is_some(),
        is_file,
        size_bytes: metadata.as_ref().map(|m| m.len()).unwrap_or(0),
        line_count,
        extension: path
            .extension()
            .map(|ext| ext.to_string_lossy().to_lowercase()),
    }
}
