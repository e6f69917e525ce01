//! The conversion command: `po2csv <input.po> <output.csv>`

use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use po2csv_core::convert::{convert_file, ConversionReport};
use po2csv_core::error::Result;
use po2csv_core::trace_time;

use super::macros::trace_command;
use crate::cli::{Cli, OutputFormat};

/// JSON shape printed by `--format json`
#[derive(Serialize)]
struct ConversionSummary<'a> {
    input: &'a Path,
    output: &'a Path,
    #[serde(flatten)]
    report: &'a ConversionReport,
}

/// Execute the conversion described by `cli`
pub fn execute(cli: &Cli, start: Instant) -> Result<()> {
    let options = cli.convert_options();
    let report = convert_file(&cli.input, &cli.output, &options)?;
    trace_command!(cli, start, "convert_file");
    trace_time!(
        start,
        "convert_done",
        entries = report.entries,
        warnings = report.warnings.len()
    );

    match cli.format {
        OutputFormat::Human => {
            if !cli.quiet {
                println!(
                    "Successfully converted {} to {}",
                    cli.input.display(),
                    cli.output.display()
                );
            }
        }
        OutputFormat::Json => {
            let summary = ConversionSummary {
                input: &cli.input,
                output: &cli.output,
                report: &report,
            };
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
    }

    Ok(())
}
