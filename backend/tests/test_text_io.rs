//! Tests for text file I/O

use geolab_core_rs::io::text::{
    append_to_log, count_lines, read_file_content, read_sample_log, write_lines,
    write_sample_log, LOG_HEADER,
};
use geolab_core_rs::{LabError, SampleLogEntry};
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn sample_log_data() -> Vec<SampleLogEntry> {
    vec![
        SampleLogEntry::new("GEO-001", "Granite", 2.5),
        SampleLogEntry::new("GEO-002", "Basalt", 1.8),
        SampleLogEntry::new("GEO-003", "Sandstone", 3.2),
    ]
}

// ============================================================================
// Sample Log
// ============================================================================

#[test]
fn test_write_sample_log_counts_header_and_separator() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt");

    let written = write_sample_log(&path, &sample_log_data()).unwrap();
    assert_eq!(written, 5);
    assert_eq!(count_lines(&path).unwrap(), written);
}

#[test]
fn test_write_sample_log_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt");
    write_sample_log(&path, &sample_log_data()).unwrap();

    let content = read_file_content(&path).unwrap();
    assert!(content.starts_with(LOG_HEADER));
    assert!(content.contains("GEO-001 | Granite | 2.50"));
    assert!(content.contains("GEO-003 | Sandstone | 3.20"));
}

#[test]
fn test_read_sample_log_roundtrip() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("roundtrip.txt");
    let samples = vec![
        SampleLogEntry::new("HID-001", "Gneiss", 3.14),
        SampleLogEntry::new("HID-002", "Slate", 0.72),
    ];

    assert_eq!(write_sample_log(&path, &samples).unwrap(), 4);

    let lines = read_sample_log(&path).unwrap();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("HID-001"));
    assert!(lines[0].contains("Gneiss"));
    assert!(lines[1].contains("HID-002"));
}

#[test]
fn test_empty_sample_log() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.txt");

    assert_eq!(write_sample_log(&path, &[]).unwrap(), 2);
    assert!(read_sample_log(&path).unwrap().is_empty());
}

#[test]
fn test_write_sample_log_replaces_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("log.txt");
    write_sample_log(&path, &sample_log_data()).unwrap();
    write_sample_log(&path, &sample_log_data()[..1]).unwrap();

    assert_eq!(count_lines(&path).unwrap(), 3);
}

// ============================================================================
// Lines & Appending
// ============================================================================

#[test]
fn test_write_lines_returns_count() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("lines.txt");

    assert_eq!(write_lines(&path, &["A", "B", "C"]).unwrap(), 3);
    assert_eq!(read_file_content(&path).unwrap(), "A\nB\nC\n");
}

#[test]
fn test_count_lines_known_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("count.txt");
    write_lines(&path, &["alpha", "beta", "gamma", "delta", "epsilon"]).unwrap();

    assert_eq!(count_lines(&path).unwrap(), 5);
}

#[test]
fn test_count_lines_without_trailing_newline() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("partial.txt");
    std::fs::write(&path, "one\ntwo").unwrap();

    assert_eq!(count_lines(&path).unwrap(), 2);
}

#[test]
fn test_append_to_log_preserves_original() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("append.txt");
    write_sample_log(&path, &[SampleLogEntry::new("APP-001", "Basalt", 2.0)]).unwrap();
    let original = count_lines(&path).unwrap();

    append_to_log(&path, "Extra line 1").unwrap();
    append_to_log(&path, "Extra line 2").unwrap();

    assert_eq!(count_lines(&path).unwrap(), original + 2);
    let content = read_file_content(&path).unwrap();
    assert!(content.contains("APP-001"));
    assert!(content.ends_with("Extra line 2\n"));
}

#[test]
fn test_append_to_log_creates_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("new.txt");

    append_to_log(&path, "--- End of Log ---").unwrap();
    assert_eq!(read_file_content(&path).unwrap(), "--- End of Log ---\n");
}

#[test]
fn test_read_missing_file_is_not_found() {
    let dir = TempDir::new().unwrap();
    let err = read_file_content(&dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, LabError::NotFound(_)));
}
