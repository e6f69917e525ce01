//! CLI argument parsing for po2csv

pub mod output;
pub mod parse;

use std::path::PathBuf;

use clap::Parser;

use po2csv_core::convert::{ConvertOptions, DEFAULT_CAPACITY};
pub use output::OutputFormat;
use parse::parse_capacity;

/// po2csv - Convert PO files to CSV
#[derive(Parser, Debug)]
#[command(name = "po2csv")]
#[command(author, version, about = "po2csv - Convert PO files to CSV", long_about = None)]
pub struct Cli {
    /// PO file to read
    #[arg(value_name = "INPUT.PO")]
    pub input: PathBuf,

    /// CSV file to write (created or truncated)
    #[arg(value_name = "OUTPUT.CSV")]
    pub output: PathBuf,

    /// Format of the final result message
    #[arg(long, value_enum, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress the success message
    #[arg(long, short)]
    pub quiet: bool,

    /// Log timing and per-run details
    #[arg(long, short)]
    pub verbose: bool,

    /// Log level or filter directive (overrides --verbose)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    pub log_json: bool,

    /// Maximum bytes kept for a single msgid or msgstr
    #[arg(long, value_name = "BYTES", default_value_t = DEFAULT_CAPACITY, value_parser = parse_capacity)]
    pub max_field_len: usize,
}

impl Cli {
    pub fn convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            capacity: self.max_field_len,
        }
    }
}
