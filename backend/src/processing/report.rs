//! Plain-text summary report of a samples CSV

use super::statistics::ColumnStatistics;
use super::{averages_in, counts_in};
use crate::core::numeric::parse_number;
use crate::core::LabError;
use crate::io::text::write_lines;
use crate::models::CsvTable;
use std::path::Path;
use tracing::info;

const RULE_WIDTH: usize = 50;

/// Write a summary report of `input` to `output`
///
/// Sections: overview, grade/depth/mass statistics, counts per rock type,
/// mean grade per location. Returns the number of lines written.
pub fn generate_summary_report(input: &Path, output: &Path) -> Result<usize, LabError> {
    let table = CsvTable::load(input)?;
    let lines = render_report(input, &table);
    let written = write_lines(output, &lines)?;
    info!(input = %input.display(), output = %output.display(), lines = written, "wrote summary report");
    Ok(written)
}

fn render_report(input: &Path, table: &CsvTable) -> Vec<String> {
    let mut lines = vec![
        "=".repeat(RULE_WIDTH),
        "SAMPLE DATA SUMMARY REPORT".to_string(),
        "=".repeat(RULE_WIDTH),
        format!("Source file: {}", input.display()),
        format!("Total samples: {}", table.len()),
        format!("Columns: {}", table.headers.join(", ")),
        String::new(),
    ];

    for column in ["grade", "depth", "mass"] {
        if !table.has_column(column) {
            continue;
        }
        let values: Vec<f64> = table.column(column).filter_map(parse_number).collect();
        lines.push(format!("{} statistics", capitalize(column)));
        lines.push("-".repeat(RULE_WIDTH));
        match ColumnStatistics::from_values(&values) {
            Some(stats) => {
                lines.push(format!("  Count:   {}", stats.count));
                lines.push(format!("  Mean:    {:.2}", stats.mean));
                lines.push(format!("  Median:  {:.2}", stats.median));
                lines.push(format!("  Min:     {:.2}", stats.min));
                lines.push(format!("  Max:     {:.2}", stats.max));
                lines.push(format!("  Std dev: {:.2}", stats.std_dev));
            }
            None => lines.push("  No numeric values".to_string()),
        }
        lines.push(String::new());
    }

    if table.has_column("rock_type") {
        lines.push("Samples by rock type".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        for (rock, count) in counts_in(table, "rock_type") {
            lines.push(format!("  {:<12} {}", rock, count));
        }
        lines.push(String::new());
    }

    if table.has_column("location") && table.has_column("grade") {
        lines.push("Average grade by location".to_string());
        lines.push("-".repeat(RULE_WIDTH));
        for (location, mean) in averages_in(table, "location", "grade") {
            lines.push(format!("  {:<12} {:.2}", location, mean));
        }
        lines.push(String::new());
    }

    lines.push("=".repeat(RULE_WIDTH));
    lines
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
