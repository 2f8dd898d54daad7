//! CLI error types and conversions

use crate::client::ApiError;
use crate::config::ConfigError;
use crate::export::ExportError;
use crate::output::OutputError;
use crate::signer::SignerError;
use crate::window::WindowError;

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    /// Export error
    #[error("export error: {0}")]
    ExportError(#[from] ExportError),

    /// API error
    #[error("API error: {0}")]
    ApiError(#[from] ApiError),

    /// Signer error
    #[error("signer error: {0}")]
    SignerError(#[from] SignerError),

    /// Window error
    #[error("window error: {0}")]
    WindowError(#[from] WindowError),

    /// Output error
    #[error("output error: {0}")]
    OutputError(#[from] OutputError),

    /// Invalid argument
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
