//! Text file I/O
//!
//! A sample log is a header line, a separator line, then one line per
//! sample:
//!
//! ```text
//! Sample Log
//! ----------------------------------------
//! GEO-001 | Granite | 2.50
//! ```

use crate::core::LabError;
use crate::models::SampleLogEntry;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;
use tracing::debug;

/// First line of every sample log
pub const LOG_HEADER: &str = "Sample Log";

/// Width of the separator under [`LOG_HEADER`]
const SEPARATOR_WIDTH: usize = 40;

/// Format one log line
pub fn format_log_entry(entry: &SampleLogEntry) -> String {
    format!("{} | {} | {:.2}", entry.id, entry.rock_type, entry.grade)
}

/// Write a sample log, replacing any existing file
///
/// Returns the number of lines written (header + separator + one per entry).
pub fn write_sample_log(path: &Path, entries: &[SampleLogEntry]) -> Result<usize, LabError> {
    let mut lines = Vec::with_capacity(entries.len() + 2);
    lines.push(LOG_HEADER.to_string());
    lines.push("-".repeat(SEPARATOR_WIDTH));
    lines.extend(entries.iter().map(format_log_entry));
    write_lines(path, &lines)
}

/// Sample lines of a log (header and separator skipped, blank lines dropped)
pub fn read_sample_log(path: &Path) -> Result<Vec<String>, LabError> {
    let content = read_file_content(path)?;
    Ok(content
        .lines()
        .skip(2)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect())
}

/// Number of lines in a file (a final line without newline counts)
pub fn count_lines(path: &Path) -> Result<usize, LabError> {
    Ok(read_file_content(path)?.lines().count())
}

/// Write each line followed by a newline, replacing any existing file
///
/// Returns the number of lines written.
pub fn write_lines<S: AsRef<str>>(path: &Path, lines: &[S]) -> Result<usize, LabError> {
    let mut content = String::new();
    for line in lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }
    fs::write(path, content).map_err(|e| LabError::io(path, e))?;
    debug!(path = %path.display(), lines = lines.len(), "wrote lines");
    Ok(lines.len())
}

/// Append one line to a log, creating the file when absent
pub fn append_to_log(path: &Path, message: &str) -> Result<(), LabError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| LabError::io(path, e))?;
    writeln!(file, "{}", message).map_err(|e| LabError::io(path, e))
}

/// Whole file as a string
pub fn read_file_content(path: &Path) -> Result<String, LabError> {
    fs::read_to_string(path).map_err(|e| LabError::io(path, e))
}
