//! CLI commands for po2csv

pub mod convert;
mod macros;
