//! Statement output writers

pub mod csv;
pub mod path;
pub mod pdf;

pub use csv::CsvStatementWriter;
pub use path::{ensure_parent_dir, resolve_template};

/// Output writer errors
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    /// IO error
    #[error("IO error: {0}")]
    IoError(String),

    /// Row encoding error
    #[error("encode error: {0}")]
    EncodeError(String),

    /// Buffer flush error
    #[error("flush error: {0}")]
    FlushError(String),

    /// Upstream byte stream aborted mid-transfer
    #[error("stream error: {0}")]
    StreamError(String),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
