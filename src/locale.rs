//! Locale-aware date and amount rendering
//!
//! CSV statements render dates and amounts according to the configured
//! locale tag, resolved once per run into a [`LocaleSpec`]. The locale is
//! always passed in explicitly; the ambient process locale is never
//! consulted.

use chrono::{DateTime, Locale, Utc};
use rust_decimal::Decimal;

/// Locale resolution errors
#[derive(Debug, thiserror::Error)]
pub enum LocaleError {
    /// Locale tag not recognized
    #[error("unknown locale: {0}")]
    Unknown(String),
}

/// Languages that write decimal fractions with a comma
const COMMA_DECIMAL_LANGS: [&str; 14] = [
    "cs", "da", "de", "es", "fi", "fr", "it", "nb", "nl", "pl", "pt", "ru", "sv", "tr",
];

/// Resolved rendering rules for one locale tag
#[derive(Debug, Clone)]
pub struct LocaleSpec {
    tag: String,
    chrono_locale: Locale,
    decimal_sep: char,
}

impl LocaleSpec {
    /// Resolve a locale tag like `"pl"`, `"de-DE"` or `"en_US"`
    ///
    /// Bare language tags are widened to their usual region (`pl` → `pl_PL`,
    /// `en` → `en_US`).
    ///
    /// # Errors
    /// Returns [`LocaleError::Unknown`] when the tag maps to no known locale.
    pub fn parse(tag: &str) -> Result<Self, LocaleError> {
        let normalized = tag.trim().replace('-', "_");
        if normalized.is_empty() {
            return Err(LocaleError::Unknown(tag.to_string()));
        }

        let chrono_locale = Locale::try_from(normalized.as_str())
            .or_else(|_| Locale::try_from(widen_language_tag(&normalized).as_str()))
            .map_err(|_| LocaleError::Unknown(tag.to_string()))?;

        let lang = normalized
            .split('_')
            .next()
            .unwrap_or(&normalized)
            .to_lowercase();
        let decimal_sep = if COMMA_DECIMAL_LANGS.contains(&lang.as_str()) {
            ','
        } else {
            '.'
        };

        Ok(Self {
            tag: tag.to_string(),
            chrono_locale,
            decimal_sep,
        })
    }

    /// Original tag this spec was resolved from
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Decimal separator used for amounts
    pub fn decimal_separator(&self) -> char {
        self.decimal_sep
    }

    /// Render a date with the locale's preferred date representation
    pub fn format_date(&self, date: &DateTime<Utc>) -> String {
        date.format_localized("%x", self.chrono_locale).to_string()
    }

    /// Render an amount with two fraction digits and the locale's decimal
    /// separator
    pub fn format_amount(&self, amount: Decimal) -> String {
        let rendered = format!("{amount:.2}");
        if self.decimal_sep == '.' {
            rendered
        } else {
            rendered.replace('.', &self.decimal_sep.to_string())
        }
    }
}

/// Widen a bare language tag to its usual region locale
fn widen_language_tag(lang: &str) -> String {
    let lang = lang.to_lowercase();
    match lang.as_str() {
        // Languages whose region code differs from the language code
        "en" => "en_US".to_string(),
        "sv" => "sv_SE".to_string(),
        "da" => "da_DK".to_string(),
        "cs" => "cs_CZ".to_string(),
        "nb" => "nb_NO".to_string(),
        other => format!("{}_{}", other, other.to_uppercase()),
    }
}
