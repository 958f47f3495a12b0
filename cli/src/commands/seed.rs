//! Seed command: print the seed and group of an identifier

use geolab_core_rs::variant::{compute_seed_with, group_for_seed, VariantSettings};

use crate::Result;

pub fn run(settings: &VariantSettings, student: &str) -> Result<()> {
    let seed = compute_seed_with(&settings.assignment_id, &settings.seed_salt, student);
    println!("student: {}", student);
    println!("seed:    {} (0x{:016x})", seed, seed);
    println!("group:   {}", group_for_seed(seed, settings.num_groups));
    Ok(())
}
