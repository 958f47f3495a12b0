//! get-variant - Lab 4 assignment values and data tools
//!
//! # Commands
//!
//! - `get-variant show` - Print your assignment values (default)
//! - `get-variant seed <ID>` - Print the seed and group of an identifier
//! - `get-variant save` - Cache your variant as `.variant_config.json`
//! - `get-variant dataset --output <file>` - Generate your variant dataset
//! - `get-variant report --input <csv> --output <txt>` - Write a summary report
//! - `get-variant validate --input <csv>` - Validate sample rows

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod error;

pub use error::{CliError, Result};

use geolab_core_rs::variant::{VariantSettings, VARIANT_CONFIG_FILE};

/// Lab 4 variant and data tools
#[derive(Parser)]
#[command(name = "get-variant")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Samples CSV used for candidate locations
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    /// JSON file overriding variant settings
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print assignment values
    Show {
        /// Student identifier (detected from the repository by default)
        #[arg(short, long)]
        student: Option<String>,

        /// Print the variant as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the seed and group of an identifier
    Seed {
        student: String,
    },

    /// Cache the variant as JSON
    Save {
        #[arg(short, long)]
        student: Option<String>,

        #[arg(short, long, default_value = VARIANT_CONFIG_FILE)]
        output: PathBuf,
    },

    /// Generate the variant's sample dataset
    Dataset {
        #[arg(short, long)]
        student: Option<String>,

        #[arg(short, long)]
        output: PathBuf,
    },

    /// Write a summary report of a samples CSV
    Report {
        #[arg(short, long)]
        input: PathBuf,

        #[arg(short, long, default_value = "report.txt")]
        output: PathBuf,
    },

    /// Validate every row of a samples CSV
    Validate {
        #[arg(short, long)]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if let Err(err) = run(cli) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.settings.as_deref(), cli.data)?;
    debug!(?settings, "resolved settings");

    match cli.command.unwrap_or(Commands::Show {
        student: None,
        json: false,
    }) {
        Commands::Show { student, json } => commands::show::run(&settings, student.as_deref(), json),
        Commands::Seed { student } => commands::seed::run(&settings, &student),
        Commands::Save { student, output } => commands::save::run(&settings, student.as_deref(), &output),
        Commands::Dataset { student, output } => {
            commands::dataset::run(&settings, student.as_deref(), &output)
        }
        Commands::Report { input, output } => commands::report::run(&input, &output),
        Commands::Validate { input } => commands::validate::run(&input),
    }
}

fn load_settings(path: Option<&std::path::Path>, data: Option<PathBuf>) -> Result<VariantSettings> {
    let settings = match path {
        Some(path) => VariantSettings::from_json_file(path)?,
        None => VariantSettings::default(),
    };
    Ok(match data {
        Some(data) => settings.with_samples_csv(data),
        None => settings,
    })
}
