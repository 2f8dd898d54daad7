//! Export orchestration
//!
//! This module drives the complete export workflow:
//!
//! 1. **Target**: describe what to export with [`target::ExportTarget`]
//! 2. **Execution**: run the lookups and the download via
//!    [`pipeline::ExportPipeline`]
//!
//! The pipeline resolves the requested (month, year, currency) into a UTC
//! time window, selects the profile and balance, and hands the statement to
//! the CSV encoder or the PDF stream writer. Every step feeds the next; any
//! failure aborts the remaining steps and surfaces as an [`ExportError`].

pub mod pipeline;
pub mod target;

pub use pipeline::{select_balance, select_profile, ExportPipeline};
pub use target::{ExportFormat, ExportTarget};

use crate::client::ApiError;
use crate::config::ConfigError;
use crate::locale::LocaleError;
use crate::output::OutputError;
use crate::window::WindowError;

/// Export pipeline errors
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Configuration missing or invalid
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Bad month/year input
    #[error("invalid input: {0}")]
    Window(#[from] WindowError),

    /// Unknown locale tag in configuration
    #[error("configuration error: {0}")]
    Locale(#[from] LocaleError),

    /// Remote API call failed
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// No profile or balance matches the configured filters
    #[error("selection error: {0}")]
    Selection(String),

    /// Output file could not be written
    #[error("output error: {0}")]
    Output(#[from] OutputError),
}

/// Result type for export operations
pub type ExportResult<T> = Result<T, ExportError>;
