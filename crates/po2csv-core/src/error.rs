//! Error types and exit codes for po2csv
//!
//! Exit codes:
//! - 0: Success
//! - 1: Failure (usage error, unreadable input, unwritable output)
//!
//! Fatal conditions are `Po2CsvError` values that abort the run. Per-line
//! problems never abort; they are collected as [`LineWarning`]s.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::extract::ExtractError;

/// Exit codes for the po2csv binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Any failure (1)
    Failure = 1,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that abort a conversion run
#[derive(Error, Debug)]
pub enum Po2CsvError {
    #[error("{0}")]
    Usage(String),

    #[error("could not open input file {path:?}: {source}")]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not open output file {path:?}: {source}")]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Po2CsvError {
    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Po2CsvError::Usage(_)
            | Po2CsvError::OpenInput { .. }
            | Po2CsvError::CreateOutput { .. }
            | Po2CsvError::Read { .. }
            | Po2CsvError::Write { .. }
            | Po2CsvError::Json(_) => ExitCode::Failure,
        }
    }

    /// Stable identifier used in structured error output
    pub fn error_type(&self) -> &'static str {
        match self {
            Po2CsvError::Usage(_) => "usage_error",
            Po2CsvError::OpenInput { .. } => "open_input",
            Po2CsvError::CreateOutput { .. } => "create_output",
            Po2CsvError::Read { .. } => "read_error",
            Po2CsvError::Write { .. } => "write_error",
            Po2CsvError::Json(_) => "json_error",
        }
    }

    /// Convert error to JSON representation for structured error output.
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// I/O failure while streaming, before the file paths are attached
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("read failed: {0}")]
    Read(#[source] std::io::Error),

    #[error("write failed: {0}")]
    Write(#[source] std::io::Error),
}

impl StreamError {
    /// Attach the input and output paths of the run
    pub fn with_paths(self, input: &Path, output: &Path) -> Po2CsvError {
        match self {
            StreamError::Read(source) => Po2CsvError::Read {
                path: input.to_path_buf(),
                source,
            },
            StreamError::Write(source) => Po2CsvError::Write {
                path: output.to_path_buf(),
                source,
            },
        }
    }
}

/// Result type alias for po2csv operations
pub type Result<T> = std::result::Result<T, Po2CsvError>;

/// A recoverable problem found on one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LineWarning {
    /// 1-based line number in the input
    pub line: usize,
    pub kind: WarningKind,
}

impl LineWarning {
    pub fn new(line: usize, kind: WarningKind) -> Self {
        Self { line, kind }
    }
}

impl fmt::Display for LineWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line, self.kind)
    }
}

/// What went wrong on a line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum WarningKind {
    /// The quoted value on a `msgid`/`msgstr`/continuation line could not be extracted
    Malformed { reason: ExtractError },
    /// A continuation line appeared before any `msgid` or `msgstr`
    NoActiveField,
    /// Appending a continuation would exceed the field capacity; the continuation was dropped
    Overflow { field: Field, capacity: usize },
    /// A `msgid`/`msgstr` value was longer than the capacity and was cut
    Truncated { field: Field, capacity: usize },
    /// The line was not valid UTF-8 and was decoded lossily
    InvalidUtf8,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::Malformed { reason } => write!(f, "malformed quoted string: {reason}"),
            WarningKind::NoActiveField => {
                write!(f, "continuation line without a preceding msgid or msgstr")
            }
            WarningKind::Overflow { field, capacity } => write!(
                f,
                "continuation dropped, {field} would exceed {capacity} bytes"
            ),
            WarningKind::Truncated { field, capacity } => {
                write!(f, "{field} truncated to {capacity} bytes")
            }
            WarningKind::InvalidUtf8 => write!(f, "invalid UTF-8 replaced"),
        }
    }
}

/// The two PO fields the converter accumulates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Msgid,
    Msgstr,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Msgid => write!(f, "msgid"),
            Field::Msgstr => write!(f, "msgstr"),
        }
    }
}
