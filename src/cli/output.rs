use clap::ValueEnum;

/// How the outcome of a run is reported on stdout/stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One-line confirmation for terminals
    #[default]
    Human,
    /// Conversion report as JSON
    Json,
}
