//! po2csv core library
//!
//! Turns gettext PO files into two-column CSV (`msgid,msgstr`).
//!
//! ```
//! use po2csv_core::convert::{convert, ConvertOptions};
//!
//! let po = "msgid \"Hello, \"\n\"world\"\nmsgstr \"Bonjour\"\n";
//! let mut csv = Vec::new();
//! let report = convert(po.as_bytes(), &mut csv, &ConvertOptions::default()).unwrap();
//!
//! assert_eq!(report.entries, 1);
//! assert_eq!(csv, b"msgid,msgstr\n\"Hello, world\",Bonjour\n");
//! ```

pub mod assembler;
pub mod buffer;
pub mod convert;
pub mod csv;
pub mod error;
pub mod extract;
pub mod logging;
