//! Configuration loading and validation
//!
//! The configuration is a flat JSON mapping persisted by the CLI layer. The
//! core only ever sees the deserialized [`AppConfig`] value; it is
//! constructed once per run and passed by reference into the pipeline, never
//! held as ambient global state.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default API base URL
pub const DEFAULT_API_URL: &str = "https://api.transferwise.com";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file missing or unreadable
    #[error("IO error: {0}")]
    IoError(String),

    /// Configuration file is not valid JSON
    #[error("parse error: {0}")]
    ParseError(String),

    /// A required key is missing or empty
    #[error("missing configuration key: {0}")]
    MissingKey(&'static str),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Application configuration
///
/// Field names follow the keys of the persisted JSON mapping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// API bearer token
    #[serde(rename = "api-token", default)]
    pub api_token: String,

    /// Owner full name used to select the profile
    #[serde(rename = "profile", default)]
    pub profile: String,

    /// Locale tag driving CSV date and amount rendering (e.g., "pl" or "de-DE")
    #[serde(rename = "locale", default)]
    pub locale: String,

    /// Document locale requested for PDF statements
    #[serde(rename = "pdf-locale", default)]
    pub pdf_locale: String,

    /// Default export currency when the caller supplies none
    #[serde(rename = "currency", default)]
    pub currency: String,

    /// API base URL; fixed in production, overridable for tests
    #[serde(rename = "api-url", default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            profile: String::new(),
            locale: String::new(),
            pdf_locale: String::new(),
            currency: String::new(),
            api_url: default_api_url(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    ///
    /// # Errors
    /// Returns [`ConfigError::IoError`] if the file cannot be read and
    /// [`ConfigError::ParseError`] if it is not valid JSON. Missing keys are
    /// tolerated here; [`validate`](Self::validate) reports them.
    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::IoError(format!("failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ConfigError::ParseError(format!("invalid configuration {}: {}", path.display(), e))
        })
    }

    /// Check that every required key is present and non-empty
    ///
    /// Reports the first missing key in declaration order, so a user fixing
    /// their configuration sees one actionable message at a time.
    pub fn validate(&self) -> ConfigResult<()> {
        let required: [(&'static str, &str); 5] = [
            ("api-token", &self.api_token),
            ("profile", &self.profile),
            ("locale", &self.locale),
            ("pdf-locale", &self.pdf_locale),
            ("currency", &self.currency),
        ];

        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingKey(key));
            }
        }

        Ok(())
    }
}
