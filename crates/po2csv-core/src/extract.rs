//! Quoted-string extraction for PO lines
//!
//! A PO value line looks like `msgid "text"` or `"text"`. The value is taken
//! as the raw span between the first and the last double quote on the line;
//! backslash sequences such as `\n` or `\"` are kept verbatim.

use serde::Serialize;
use thiserror::Error;

/// Why a line had no extractable quoted value
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractError {
    #[error("no opening quote")]
    MissingOpeningQuote,

    #[error("no closing quote")]
    MissingClosingQuote,

    #[error("empty quoted span")]
    EmptySpan,
}

/// Return the text strictly between the first and last `"` of `line`.
///
/// Fails when the line has fewer than two quotes or when nothing lies
/// between them (`""`).
pub fn extract_quoted(line: &str) -> Result<&str, ExtractError> {
    let open = line.find('"').ok_or(ExtractError::MissingOpeningQuote)?;
    let rest = &line[open + 1..];
    let close = rest.rfind('"').ok_or(ExtractError::MissingClosingQuote)?;
    if close == 0 {
        return Err(ExtractError::EmptySpan);
    }
    Ok(&rest[..close])
}
