//! Authenticated API client with SCA challenge handling
//!
//! All remote calls go through [`http::ApiClient`], which owns the bearer
//! token and the challenge signer. A 403 response carrying the SCA header
//! gets exactly one signed retry; every other failure surfaces as an
//! [`ApiError`].

use crate::signer::SignerError;

pub mod http;

pub use http::{ApiClient, ScaState};

/// API client errors
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Non-success HTTP response
    #[error("HTTP {status} {reason}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Canonical status reason
        reason: String,
        /// Response body text
        body: String,
    },

    /// SCA approval rejected after the signed retry
    #[error("SCA approval rejected (HTTP {status}): {body}")]
    ChallengeRejected {
        /// HTTP status code of the second refusal
        status: u16,
        /// Response body text
        body: String,
    },

    /// Transport-level failure
    #[error("network error: {0}")]
    Network(String),

    /// Response body could not be parsed
    #[error("parse error: {0}")]
    Parse(String),

    /// Challenge signing failed
    #[error("signing error: {0}")]
    Signer(#[from] SignerError),
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
