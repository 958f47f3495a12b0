//! Report command: write a summary report of a samples CSV

use geolab_core_rs::processing::generate_summary_report;
use geolab_core_rs::validation::check_file_exists;
use std::path::Path;
use tracing::info;

use crate::{CliError, Result};

pub fn run(input: &Path, output: &Path) -> Result<()> {
    if !check_file_exists(input) {
        return Err(CliError::InvalidArgument(format!(
            "input file does not exist: {}",
            input.display()
        )));
    }

    let lines = generate_summary_report(input, output)?;
    info!("Report generation complete");
    println!("Wrote {} lines to {}", lines, output.display());
    Ok(())
}
