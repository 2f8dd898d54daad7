//! Export target specification

use std::str::FromStr;

/// Output format for a statement export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// Semicolon-delimited text statement
    Csv,
    /// Upstream PDF document, streamed as-is
    Pdf,
}

impl ExportFormat {
    /// File extension and `@t@` token value for this format
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Pdf => "pdf",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "pdf" => Ok(ExportFormat::Pdf),
            _ => Err(format!("invalid format: {s}. Valid options: csv, pdf")),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

/// Fully validated description of one statement export
///
/// Constructed by the CLI layer before any network call; the pipeline never
/// parses raw user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportTarget {
    /// Statement month (1-12)
    pub month: u32,
    /// Statement year
    pub year: i32,
    /// Currency override; the configured default applies when `None` or empty
    pub currency: Option<String>,
    /// Output path template (see [`crate::output::path`])
    pub output_template: String,
    /// Output format
    pub format: ExportFormat,
}
