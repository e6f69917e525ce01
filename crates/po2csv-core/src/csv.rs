//! CSV field escaping (RFC 4180)
//!
//! A field is wrapped in double quotes when it contains a comma, a double
//! quote, CR or LF; quotes inside a wrapped field are doubled. Anything else
//! is written as-is.

use std::borrow::Cow;
use std::io::{self, Write};

/// Does `value` have to be quoted to survive as a CSV field?
pub fn needs_quoting(value: &str) -> bool {
    value.contains([',', '"', '\r', '\n'])
}

/// Escape a single field, borrowing when no quoting is required.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if needs_quoting(value) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Outcome of a bounded escape
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escaped {
    /// Bytes appended to the output
    pub len: usize,
    /// Whether part of the value was dropped to respect the capacity
    pub truncated: bool,
}

/// Append the escaped form of `value` to `out`, writing at most `capacity` bytes.
///
/// Content that does not fit is dropped and reported through
/// [`Escaped::truncated`]. The cut never splits a character or a doubled
/// quote, and a quoted field always gets its closing quote.
pub fn escape_into(value: &str, out: &mut String, capacity: usize) -> Escaped {
    let quoted = needs_quoting(value);
    let closing = usize::from(quoted);

    if quoted && capacity < 2 {
        return Escaped {
            len: 0,
            truncated: true,
        };
    }

    let start = out.len();
    if quoted {
        out.push('"');
    }

    let mut truncated = false;
    let mut buf = [0u8; 4];
    for c in value.chars() {
        let piece: &str = if c == '"' { "\"\"" } else { &*c.encode_utf8(&mut buf) };
        if out.len() - start + piece.len() + closing > capacity {
            truncated = true;
            break;
        }
        out.push_str(piece);
    }

    if quoted {
        out.push('"');
    }

    Escaped {
        len: out.len() - start,
        truncated,
    }
}

/// Reverse [`escape_field`]: strip the surrounding quotes and undouble inner ones.
pub fn unescape_field(field: &str) -> Cow<'_, str> {
    match field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
    {
        Some(inner) if inner.contains("\"\"") => Cow::Owned(inner.replace("\"\"", "\"")),
        Some(inner) => Cow::Borrowed(inner),
        None => Cow::Borrowed(field),
    }
}

/// Write one LF-terminated record, escaping every field.
pub fn write_record<W: Write>(writer: &mut W, fields: &[&str]) -> io::Result<()> {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            writer.write_all(b",")?;
        }
        writer.write_all(escape_field(field).as_bytes())?;
    }
    writer.write_all(b"\n")
}
