//! Conversion driver: PO stream in, CSV stream out

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::assembler::{is_ignored, Assembler, Entry};
use crate::csv::write_record;
use crate::error::{LineWarning, Po2CsvError, Result, StreamError, WarningKind};

/// Per-field capacity used when none is configured
pub const DEFAULT_CAPACITY: usize = 4096;

/// Column names written as the first CSV row
pub const HEADER: [&str; 2] = ["msgid", "msgstr"];

/// Settings for one conversion run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Maximum bytes held for a single msgid or msgstr
    pub capacity: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Summary of a finished conversion
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Input lines read
    pub lines: usize,
    /// CSV records written, header excluded
    pub entries: usize,
    pub warnings: Vec<LineWarning>,
}

/// Convert PO text from `reader` into CSV on `writer`.
///
/// Records are written as soon as each entry completes. The writer is
/// flushed before returning.
pub fn convert<R, W>(
    mut reader: R,
    writer: &mut W,
    options: &ConvertOptions,
) -> std::result::Result<ConversionReport, StreamError>
where
    R: BufRead,
    W: Write,
{
    let start = Instant::now();
    let mut assembler = Assembler::new(options.capacity);
    let mut report = ConversionReport::default();
    let mut raw = Vec::new();

    write_record(writer, &HEADER).map_err(StreamError::Write)?;

    loop {
        raw.clear();
        let read = reader
            .read_until(b'\n', &mut raw)
            .map_err(StreamError::Read)?;
        if read == 0 {
            break;
        }
        report.lines += 1;

        let line = String::from_utf8_lossy(&raw);
        if matches!(line, Cow::Owned(_)) && !is_ignored(&line) {
            assembler.warn(report.lines, WarningKind::InvalidUtf8);
        }

        if let Some(entry) = assembler.feed_line(report.lines, &line) {
            write_entry(writer, &entry)?;
            report.entries += 1;
        }
    }

    let (last, warnings) = assembler.finish();
    if let Some(entry) = last {
        write_entry(writer, &entry)?;
        report.entries += 1;
    }
    report.warnings = warnings;

    writer.flush().map_err(StreamError::Write)?;

    debug!(
        elapsed = ?start.elapsed(),
        lines = report.lines,
        entries = report.entries,
        warnings = report.warnings.len(),
        "convert"
    );
    Ok(report)
}

fn write_entry<W: Write>(writer: &mut W, entry: &Entry) -> std::result::Result<(), StreamError> {
    write_record(writer, &[&entry.msgid, &entry.msgstr]).map_err(StreamError::Write)
}

/// Convert the PO file at `input` into a CSV file at `output`.
///
/// The input is opened first, so a missing input never leaves an empty
/// output file behind.
pub fn convert_file(
    input: &Path,
    output: &Path,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let source = File::open(input).map_err(|source| Po2CsvError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;
    let target = File::create(output).map_err(|source| Po2CsvError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    debug!(input = %input.display(), output = %output.display(), "convert_file");

    let mut writer = BufWriter::new(target);
    convert(BufReader::new(source), &mut writer, options).map_err(|e| e.with_paths(input, output))
}
