//! # Statement Exporter Library
//!
//! A library for exporting monthly account statements (transaction ledgers)
//! from a remote banking REST API into local CSV or PDF files.
//!
//! ## Features
//!
//! - **Bearer authentication**: Every API call carries the configured token
//! - **Transparent SCA**: Step-up strong-customer-authentication challenges
//!   are satisfied by signing the server-issued token with a local RSA key
//! - **Calendar-month windows**: Leap-year-correct UTC time windows for any
//!   requested (month, year)
//! - **Locale-aware CSV**: Dates and amounts rendered per the configured
//!   locale, with debit/credit markers
//! - **Streaming PDF**: The upstream PDF document is streamed to disk with
//!   partial-file cleanup on error
//!
//! ## Quick Start
//!
//! ```no_run
//! use statement_exporter::config::AppConfig;
//! use statement_exporter::export::{ExportFormat, ExportPipeline, ExportTarget};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::load("config.json")?;
//!
//! let target = ExportTarget {
//!     month: 3,
//!     year: 2024,
//!     currency: Some("EUR".to_string()),
//!     output_template: "statement_@c@_@Y@-@m@.@t@".to_string(),
//!     format: ExportFormat::Csv,
//! };
//!
//! let pipeline = ExportPipeline::new(config, "private.pem");
//! let path = pipeline.run(&target).await?;
//! println!("written: {}", path.display());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The library is organized into several core modules:
//!
//! - [`window`] - Calendar-month UTC time window computation
//! - [`signer`] - SCA challenge signing with a local RSA private key
//! - [`client`] - Authenticated API client with single-retry SCA handling
//! - [`export`] - Export orchestration (profile → balance → statement)
//! - [`output`] - Output writers (CSV encoder, PDF stream, path templates)
//! - [`locale`] - Locale-aware date and amount rendering
//! - [`config`] - JSON configuration loading and validation

#![warn(missing_docs)]
#![warn(clippy::all)]

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// CLI command implementations
pub mod cli;

/// Authenticated API client with SCA challenge handling
pub mod client;

/// Configuration loading and validation
pub mod config;

/// Export orchestration
pub mod export;

/// Locale-aware date and amount rendering
pub mod locale;

/// Statement output writers
pub mod output;

/// SCA challenge signing
pub mod signer;

/// Calendar-month time window computation
pub mod window;

// Re-export commonly used types
pub use export::{ExportFormat, ExportPipeline, ExportTarget};
pub use window::TimeWindow;

/// Account owner record in the remote system
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Profile {
    /// Profile identifier
    pub id: u64,
    /// Owner full name, matched against the configured owner name
    #[serde(rename = "fullName")]
    pub full_name: String,
}

/// Currency-denominated sub-account under a profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Balance {
    /// Balance identifier
    pub id: u64,
    /// ISO currency code (e.g., "EUR")
    pub currency: String,
}

/// Monetary value with its currency code
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Money {
    /// Signed decimal value
    pub value: Decimal,
    /// ISO currency code
    pub currency: String,
}

/// Free-text details attached to a transaction
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionDetails {
    /// Human-readable description of the transaction
    pub description: String,
}

/// One ledger entry of a statement
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Transaction timestamp
    pub date: DateTime<Utc>,
    /// Transaction details
    pub details: TransactionDetails,
    /// Signed transaction amount (negative for debits)
    pub amount: Money,
}

/// Flat statement document for one balance and time window
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatementResponse {
    /// Ordered transaction ledger
    pub transactions: Vec<Transaction>,
}

/// Flattened (date, description, signed amount) view handed to the CSV encoder
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    /// Transaction timestamp
    pub date: DateTime<Utc>,
    /// Transaction description
    pub description: String,
    /// Signed amount (negative for debits)
    pub amount: Decimal,
}

impl From<&Transaction> for StatementRow {
    fn from(txn: &Transaction) -> Self {
        Self {
            date: txn.date,
            description: txn.details.description.clone(),
            amount: txn.amount.value,
        }
    }
}
