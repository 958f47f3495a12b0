//! Show command: print a student's assignment values

use geolab_core_rs::variant::{Variant, VariantSettings};

use super::resolve_variant;
use crate::Result;

const RULE: usize = 60;

pub fn run(settings: &VariantSettings, student: Option<&str>, json: bool) -> Result<()> {
    let variant = resolve_variant(settings, student);
    if json {
        println!("{}", serde_json::to_string_pretty(&variant)?);
    } else {
        print!("{}", render(&variant));
    }
    Ok(())
}

fn render(variant: &Variant) -> String {
    let params = &variant.parameters;
    let mut out = String::new();
    out.push_str(&format!("{}\n", "=".repeat(RULE)));
    out.push_str("YOUR ASSIGNMENT VALUES - Lab 4: File I/O\n");
    out.push_str(&format!("{}\n\n", "=".repeat(RULE)));
    out.push_str(&format!("Student: {}\n", variant.student_id));
    out.push_str(&format!("Variant Group: {}\n\n", variant.group_id));
    out.push_str("Use these EXACT values in your code:\n");
    out.push_str(&format!("{}\n", "-".repeat(40)));
    out.push_str(&format!("  num_records = {}\n", params.num_records));
    out.push_str(&format!("  locations = {:?}\n", params.locations));
    out.push_str(&format!(
        "  depth_range = {{'min': {}, 'max': {}}}\n",
        params.depth_range.min, params.depth_range.max
    ));
    out.push_str(&format!("  include_errors = {}\n", params.include_errors));
    out.push_str(&format!("{}\n\n", "-".repeat(40)));
    out.push_str("Using someone else's values = FAIL on hidden tests\n");
    out
}
