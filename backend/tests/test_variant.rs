//! Tests for variant assignment
//!
//! Golden values were published to students; they must never change.

use geolab_core_rs::variant::{
    candidate_locations, compute_seed, compute_seed_with, generate_parameters,
    get_variant_for_student, group_for_seed, load_variant_config, locate_upwards,
    save_variant_config,
    variant_from_sites, CachedVariant, DepthRange, VariantSettings, NUM_GROUPS,
};
use geolab_core_rs::RngManager;
use proptest::prelude::*;
use std::collections::HashSet;
use std::path::PathBuf;
use tempfile::TempDir;

// ============================================================================
// Test Helpers
// ============================================================================

fn samples_csv() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../data/samples.csv")
}

fn settings() -> VariantSettings {
    VariantSettings::default().with_samples_csv(samples_csv())
}

fn two_sites() -> Vec<String> {
    vec!["Site-A".to_string(), "Site-B".to_string()]
}

// ============================================================================
// Seed Derivation
// ============================================================================

#[test]
fn test_alice_seed_is_stable() {
    assert_eq!(compute_seed("alice"), 3_787_835_193_634_315_092);
    assert_eq!(group_for_seed(compute_seed("alice"), NUM_GROUPS), 2);
}

#[test]
fn test_known_seeds() {
    assert_eq!(compute_seed("bob"), 2_423_406_429_804_459_993);
    assert_eq!(compute_seed("jdoe"), 7_468_907_974_275_938_834);
    assert_eq!(compute_seed(""), 13_254_529_008_818_684_451);
}

#[test]
fn test_seed_uses_settings() {
    let settings = VariantSettings {
        seed_salt: "other".to_string(),
        ..settings()
    };
    let variant = get_variant_for_student("alice", &settings);
    assert_eq!(
        variant.variant_seed,
        compute_seed_with("lab04", "other", "alice")
    );
    assert_ne!(variant.variant_seed, compute_seed("alice"));
}

#[test]
fn test_distinct_ids_distinct_seeds() {
    let seeds: HashSet<u64> = (0..2000).map(|i| compute_seed(&format!("student{}", i))).collect();
    assert_eq!(seeds.len(), 2000);
}

// ============================================================================
// Parameter Draw
// ============================================================================

#[test]
fn test_candidate_locations_from_samples_csv() {
    assert_eq!(candidate_locations(&samples_csv()), two_sites());
}

#[test]
fn test_alice_variant_golden() {
    let variant = get_variant_for_student("alice", &settings());

    assert_eq!(variant.student_id, "alice");
    assert_eq!(variant.variant_seed, 3_787_835_193_634_315_092);
    assert_eq!(variant.group_id, 2);
    assert_eq!(variant.parameters.num_records, 52);
    assert_eq!(variant.parameters.locations, two_sites());
    assert_eq!(variant.parameters.depth_range, DepthRange { min: 87, max: 498 });
    assert_eq!(variant.parameters.include_errors, 3);
}

#[test]
fn test_bob_variant_golden() {
    let variant = get_variant_for_student("bob", &settings());

    assert_eq!(variant.group_id, 3);
    assert_eq!(variant.parameters.num_records, 55);
    assert_eq!(
        variant.parameters.locations,
        vec!["Site-B".to_string(), "Site-A".to_string()]
    );
    assert_eq!(variant.parameters.depth_range, DepthRange { min: 62, max: 457 });
    assert_eq!(variant.parameters.include_errors, 2);
}

#[test]
fn test_jdoe_variant_golden() {
    let variant = variant_from_sites("jdoe", &VariantSettings::default(), &two_sites());

    assert_eq!(variant.group_id, 4);
    assert_eq!(variant.parameters.num_records, 55);
    assert_eq!(variant.parameters.depth_range, DepthRange { min: 126, max: 613 });
    assert_eq!(variant.parameters.include_errors, 4);
}

#[test]
fn test_variant_repeatable() {
    let first = get_variant_for_student("alice", &settings());
    for _ in 0..5 {
        assert_eq!(get_variant_for_student("alice", &settings()), first);
    }
}

#[test]
fn test_missing_csv_uses_fallback_sites() {
    let settings = VariantSettings::default().with_samples_csv("/nonexistent/samples.csv");
    let variant = get_variant_for_student("alice", &settings);
    assert_eq!(variant, get_variant_for_student("alice", &self::settings()));
}

#[test]
fn test_csv_without_location_column_draws_no_locations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no_locations.csv");
    std::fs::write(&path, "sample_id,rock_type\nA,B\n").unwrap();

    assert!(candidate_locations(&path).is_empty());

    let settings = VariantSettings::default().with_samples_csv(&path);
    let params = get_variant_for_student("alice", &settings).parameters;
    assert_eq!(params.num_records, 52);
    assert!(params.locations.is_empty());
    assert_eq!(params.depth_range, DepthRange { min: 87, max: 419 });
    assert_eq!(params.include_errors, 5);
}

#[test]
fn test_samples_csv_found_from_subdirectory() {
    let dir = TempDir::new().unwrap();
    std::fs::create_dir_all(dir.path().join("data")).unwrap();
    std::fs::create_dir_all(dir.path().join("src").join("nested")).unwrap();
    let expected = dir.path().join("data").join("samples.csv");
    std::fs::write(&expected, "sample_id,location\nA,North\n").unwrap();

    let start = dir.path().join("src").join("nested");
    let found = locate_upwards(&start, std::path::Path::new("data/samples.csv"));
    assert_eq!(found, expected);
    assert_eq!(candidate_locations(&found), vec!["North".to_string()]);
}

#[test]
fn test_locate_upwards_leaves_unresolved_paths() {
    let dir = TempDir::new().unwrap();
    let relative = std::path::Path::new("data/missing.csv");
    assert_eq!(locate_upwards(dir.path(), relative), relative.to_path_buf());

    let absolute = dir.path().join("elsewhere.csv");
    assert_eq!(locate_upwards(dir.path(), &absolute), absolute);
}

#[test]
fn test_default_settings_find_repository_samples() {
    // Test binaries run from the package directory, one level below data/
    let variant = get_variant_for_student("alice", &VariantSettings::default());
    assert_eq!(variant, get_variant_for_student("alice", &settings()));
    assert_eq!(variant.parameters.depth_range, DepthRange { min: 87, max: 498 });
}

#[test]
fn test_csv_with_blank_locations_draws_no_locations() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank_locations.csv");
    std::fs::write(&path, "sample_id,location\nA,\nB,  \n").unwrap();

    assert!(candidate_locations(&path).is_empty());
}

#[test]
fn test_variant_json_shape() {
    let variant = get_variant_for_student("alice", &settings());
    let json: serde_json::Value = serde_json::to_value(&variant).unwrap();

    assert_eq!(json["student_id"], "alice");
    assert_eq!(json["variant_seed"], 3_787_835_193_634_315_092u64);
    assert_eq!(json["group_id"], 2);
    assert_eq!(json["parameters"]["num_records"], 52);
    assert_eq!(json["parameters"]["depth_range"]["min"], 87);
    assert_eq!(json["parameters"]["depth_range"]["max"], 498);
    assert_eq!(json["parameters"]["locations"][0], "Site-A");
}

// ============================================================================
// Variant Cache & Settings
// ============================================================================

#[test]
fn test_save_and_load_variant_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".variant_config.json");
    let variant = get_variant_for_student("alice", &settings());

    save_variant_config(&path, &variant).unwrap();
    match load_variant_config(&path).unwrap() {
        CachedVariant::Full(loaded) => assert_eq!(loaded, variant),
        other => panic!("expected full variant, got {:?}", other),
    }
}

#[test]
fn test_load_parameters_only_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".variant_config.json");
    std::fs::write(
        &path,
        r#"{"num_records": 45, "locations": ["Site-B"], "depth_range": {"min": 100, "max": 450}, "include_errors": 2}"#,
    )
    .unwrap();

    let cached = load_variant_config(&path).unwrap();
    assert!(matches!(cached, CachedVariant::ParametersOnly(_)));
    assert_eq!(cached.parameters().num_records, 45);
    assert_eq!(cached.parameters().depth_range.max, 450);
}

#[test]
fn test_load_missing_config_errors() {
    let err = load_variant_config(std::path::Path::new("/nonexistent/.variant_config.json"))
        .unwrap_err();
    assert!(err.to_string().contains("not found"));
}

#[test]
fn test_settings_from_partial_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"num_groups": 4}"#).unwrap();

    let loaded = VariantSettings::from_json_file(&path).unwrap();
    assert_eq!(loaded.num_groups, 4);
    assert_eq!(loaded.seed_salt, "GGY3061_2026");
    assert_eq!(loaded.assignment_id, "lab04");
}

#[test]
fn test_settings_reject_zero_groups() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json");
    std::fs::write(&path, r#"{"num_groups": 0}"#).unwrap();

    assert!(VariantSettings::from_json_file(&path).is_err());
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_parameters_within_bounds(seed in any::<u64>(), n_sites in 0usize..8) {
        let sites: Vec<String> = (0..n_sites).map(|i| format!("Site-{}", i)).collect();
        let mut rng = RngManager::new(seed);
        let params = generate_parameters(&mut rng, &sites);

        prop_assert!((40..=60).contains(&params.num_records));
        prop_assert!((50..=150).contains(&params.depth_range.min));
        prop_assert!(params.depth_range.min < params.depth_range.max);
        let span = params.depth_range.max - params.depth_range.min;
        prop_assert!((300..=500).contains(&span));
        prop_assert!((2..=5).contains(&params.include_errors));

        let count = params.locations.len();
        prop_assert!(count <= n_sites.min(4));
        if n_sites >= 2 {
            prop_assert!(count >= 2);
        } else {
            prop_assert_eq!(count, n_sites);
        }
        let unique: HashSet<&String> = params.locations.iter().collect();
        prop_assert_eq!(unique.len(), params.locations.len());
        for loc in &params.locations {
            prop_assert!(sites.contains(loc));
        }
    }

    #[test]
    fn prop_variant_deterministic(student in "[a-z0-9_-]{0,24}") {
        let a = variant_from_sites(&student, &VariantSettings::default(), &two_sites());
        let b = variant_from_sites(&student, &VariantSettings::default(), &two_sites());
        prop_assert_eq!(a, b);
    }
}
