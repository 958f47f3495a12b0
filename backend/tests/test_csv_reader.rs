//! Tests for CSV reading

use geolab_core_rs::io::csv_reader::{
    find_rows_by_value, get_column_values, get_csv_headers, get_row_count, get_unique_values,
    read_samples_as_dict, read_samples_as_list,
};
use geolab_core_rs::LabError;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn samples_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/samples.csv")
}

/// Four-row CSV: two Granite, two sites
fn small_csv(dir: &Path) -> PathBuf {
    let path = dir.join("test_samples.csv");
    std::fs::write(
        &path,
        "sample_id,rock_type,grade,depth,mass,location\n\
         GEO-001,Granite,2.5,150,12.3,Site-A\n\
         GEO-002,Basalt,3.2,200,15.1,Site-A\n\
         GEO-003,Granite,1.8,180,11.8,Site-B\n\
         GEO-004,Schist,4.1,250,14.5,Site-B\n",
    )
    .unwrap();
    path
}

// ============================================================================
// Small CSV
// ============================================================================

#[test]
fn test_read_samples_as_list_includes_header() {
    let dir = TempDir::new().unwrap();
    let rows = read_samples_as_list(&small_csv(dir.path())).unwrap();

    assert_eq!(rows.len(), 5);
    assert_eq!(rows[0][0], "sample_id");
    assert_eq!(rows[4], vec!["GEO-004", "Schist", "4.1", "250", "14.5", "Site-B"]);
}

#[test]
fn test_read_samples_as_dict_keys() {
    let dir = TempDir::new().unwrap();
    let rows = read_samples_as_dict(&small_csv(dir.path())).unwrap();

    assert_eq!(rows.len(), 4);
    let keys: BTreeSet<&str> = rows[0].keys().map(String::as_str).collect();
    let expected: BTreeSet<&str> = ["sample_id", "rock_type", "grade", "depth", "mass", "location"]
        .into_iter()
        .collect();
    assert_eq!(keys, expected);
    assert_eq!(rows[1]["rock_type"], "Basalt");
}

#[test]
fn test_get_column_values() {
    let dir = TempDir::new().unwrap();
    let values = get_column_values(&small_csv(dir.path()), "sample_id").unwrap();
    assert_eq!(values, vec!["GEO-001", "GEO-002", "GEO-003", "GEO-004"]);
}

#[test]
fn test_get_column_values_unknown_column() {
    let dir = TempDir::new().unwrap();
    let err = get_column_values(&small_csv(dir.path()), "porosity").unwrap_err();
    assert!(matches!(err, LabError::MissingColumn { ref column, .. } if column == "porosity"));
}

#[test]
fn test_get_unique_values() {
    let dir = TempDir::new().unwrap();
    let values = get_unique_values(&small_csv(dir.path()), "rock_type").unwrap();

    assert_eq!(values.len(), 3);
    assert!(values.contains("Granite"));
}

#[test]
fn test_get_row_count() {
    let dir = TempDir::new().unwrap();
    assert_eq!(get_row_count(&small_csv(dir.path())).unwrap(), 4);
}

#[test]
fn test_find_rows_by_value() {
    let dir = TempDir::new().unwrap();
    let rows = find_rows_by_value(&small_csv(dir.path()), "rock_type", "Granite").unwrap();

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["sample_id"], "GEO-001");
    assert_eq!(rows[1]["sample_id"], "GEO-003");
}

#[test]
fn test_find_rows_by_value_no_match() {
    let dir = TempDir::new().unwrap();
    let rows = find_rows_by_value(&small_csv(dir.path()), "rock_type", "Marble").unwrap();
    assert!(rows.is_empty());
}

#[test]
fn test_get_csv_headers() {
    let dir = TempDir::new().unwrap();
    let headers = get_csv_headers(&small_csv(dir.path())).unwrap();
    assert_eq!(headers, vec!["sample_id", "rock_type", "grade", "depth", "mass", "location"]);
}

#[test]
fn test_short_rows_are_padded() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.csv");
    std::fs::write(&path, "a,b,c\n1,2\n").unwrap();

    let rows = read_samples_as_dict(&path).unwrap();
    assert_eq!(rows[0]["c"], "");
}

#[test]
fn test_missing_file() {
    let err = get_row_count(Path::new("/nonexistent/path/data.csv")).unwrap_err();
    assert!(matches!(err, LabError::NotFound(_)));
}

// ============================================================================
// Shipped samples.csv
// ============================================================================

#[test]
fn test_samples_csv_has_50_rows() {
    assert_eq!(get_row_count(&samples_csv()).unwrap(), 50);
    assert_eq!(read_samples_as_list(&samples_csv()).unwrap().len(), 51);
}

#[test]
fn test_samples_csv_columns() {
    let headers: BTreeSet<String> = get_csv_headers(&samples_csv()).unwrap().into_iter().collect();
    let expected: BTreeSet<String> = ["sample_id", "rock_type", "grade", "depth", "mass", "location"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(headers, expected);
}

#[test]
fn test_samples_csv_grades_are_numeric() {
    let grades = get_column_values(&samples_csv(), "grade").unwrap();
    assert_eq!(grades.len(), 50);
    for grade in grades {
        assert!(grade.parse::<f64>().is_ok(), "non-numeric grade {}", grade);
    }
}

#[test]
fn test_samples_csv_locations() {
    let locations = get_unique_values(&samples_csv(), "location").unwrap();
    let expected: BTreeSet<String> = ["Site-A", "Site-B"].iter().map(|s| s.to_string()).collect();
    assert_eq!(locations, expected);
}

#[test]
fn test_samples_csv_site_counts() {
    assert_eq!(find_rows_by_value(&samples_csv(), "location", "Site-A").unwrap().len(), 30);
    assert_eq!(find_rows_by_value(&samples_csv(), "location", "Site-B").unwrap().len(), 20);
}
