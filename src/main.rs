//! po2csv - convert gettext PO translation files to CSV
//!
//! Reads `msgid`/`msgstr` pairs from a PO file and writes them as a
//! two-column CSV with a `msgid,msgstr` header.

mod cli;
mod commands;

use std::env;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use cli::{Cli, OutputFormat};
use po2csv_core::error::{ExitCode as Po2CsvExitCode, Po2CsvError};
use po2csv_core::logging;

fn main() -> ExitCode {
    let start = Instant::now();

    let argv_format_json = argv_requests_json();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            match err.kind() {
                // Help and version are informational, not errors
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    err.exit()
                }
                _ => {}
            }

            if argv_format_json {
                let usage_error = Po2CsvError::Usage(err.to_string());
                eprintln!("{}", usage_error.to_json());
            } else {
                // clap's rendering carries the message and the usage line
                eprint!("{}", err.render());
            }
            return ExitCode::from(Po2CsvExitCode::Failure as u8);
        }
    };

    if let Err(e) = logging::init_tracing(cli.verbose, cli.log_level.as_deref(), cli.log_json) {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::debug!(elapsed = ?start.elapsed(), "parse_args");

    match commands::convert::execute(&cli, start) {
        Ok(()) => ExitCode::from(Po2CsvExitCode::Success as u8),
        Err(e) => {
            if cli.format == OutputFormat::Json {
                eprintln!("{}", e.to_json());
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::from(e.exit_code() as u8)
        }
    }
}

/// `--format` may not have been parsed yet when clap rejects the arguments.
fn argv_requests_json() -> bool {
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--format" {
            if args.next().is_some_and(|v| v == "json") {
                return true;
            }
        } else if arg == "--format=json" {
            return true;
        }
    }
    false
}
