use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::writer::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "bitb-tools")]
#[command(version, about = "Breed catalog generator and contact helpers for the BitB dashboard")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download (if needed) the source CSVs and regenerate the catalog
    Sync {
        /// Output artifact path
        #[arg(short, long, default_value = "src/breeds/generated.rs")]
        output: PathBuf,

        /// Artifact format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Rust)]
        format: OutputFormat,

        /// Force re-download even if cached
        #[arg(long)]
        force: bool,

        /// Custom cache directory
        #[arg(short, long)]
        cache_dir: Option<PathBuf>,
    },

    /// Download the source CSVs into the cache without generating
    Download {
        /// Custom cache directory
        #[arg(short, long)]
        cache_dir: Option<PathBuf>,

        /// Force re-download even if cached
        #[arg(long)]
        force: bool,
    },

    /// Generate the catalog from local CSV files
    Convert {
        /// FCI breed list CSV
        fci_csv: PathBuf,

        /// AKC breed list CSV
        akc_csv: PathBuf,

        /// Output artifact path
        #[arg(short, long, default_value = "src/breeds/generated.rs")]
        output: PathBuf,

        /// Artifact format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Rust)]
        format: OutputFormat,
    },

    /// Look a breed label up in the built-in catalog
    Lookup {
        /// Breed label as typed into a form
        label: String,
    },

    /// List all catalog entries
    List,

    /// Normalize a phone number and print its contact links
    Phone {
        /// Phone number as entered
        number: String,

        /// Country code assumed for national-format numbers
        #[arg(short, long)]
        country_code: Option<String>,

        /// Prefilled WhatsApp message
        #[arg(short, long)]
        message: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
