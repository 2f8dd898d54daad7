//! Export pipeline orchestrating lookups and output
//!
//! The pipeline runs the steps of one export strictly in sequence: validate
//! configuration, compute the month window, resolve the profile and balance,
//! expand the output path, then fetch and write the statement. Entities live
//! only for the duration of the run.

use chrono::SecondsFormat;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::{ExportError, ExportFormat, ExportResult, ExportTarget};
use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::locale::LocaleSpec;
use crate::output;
use crate::output::CsvStatementWriter;
use crate::signer::RequestSigner;
use crate::window::{self, TimeWindow, WindowPolicy};
use crate::{Balance, Profile, StatementResponse, StatementRow};

/// Select the profile whose full name matches the configured owner name
///
/// Zero or multiple matches is an explicit selection error; no tie-break is
/// attempted.
pub fn select_profile<'a>(profiles: &'a [Profile], owner: &str) -> ExportResult<&'a Profile> {
    let matches: Vec<&Profile> = profiles.iter().filter(|p| p.full_name == owner).collect();
    match matches.as_slice() {
        [profile] => Ok(profile),
        [] => Err(ExportError::Selection(format!(
            "no profile matches owner name {owner:?}"
        ))),
        many => Err(ExportError::Selection(format!(
            "{} profiles match owner name {owner:?}",
            many.len()
        ))),
    }
}

/// Select the balance with the requested currency
pub fn select_balance<'a>(balances: &'a [Balance], currency: &str) -> ExportResult<&'a Balance> {
    let matches: Vec<&Balance> = balances.iter().filter(|b| b.currency == currency).collect();
    match matches.as_slice() {
        [balance] => Ok(balance),
        [] => Err(ExportError::Selection(format!(
            "no STANDARD balance holds currency {currency:?}"
        ))),
        many => Err(ExportError::Selection(format!(
            "{} STANDARD balances hold currency {currency:?}",
            many.len()
        ))),
    }
}

/// Export pipeline for one statement download
pub struct ExportPipeline {
    config: AppConfig,
    key_path: PathBuf,
    policy: WindowPolicy,
}

impl ExportPipeline {
    /// Create a pipeline over the given configuration and private key
    pub fn new<P: Into<PathBuf>>(config: AppConfig, key_path: P) -> Self {
        Self {
            config,
            key_path: key_path.into(),
            policy: WindowPolicy::default(),
        }
    }

    /// Override the accepted year range
    pub fn with_policy(mut self, policy: WindowPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run the export, writing exactly one file
    ///
    /// # Returns
    /// The path of the written statement file.
    ///
    /// # Errors
    /// Any failed step aborts the remaining steps; nothing is written on
    /// selection or lookup failures, and a failed PDF transfer removes the
    /// partial file.
    pub async fn run(&self, target: &ExportTarget) -> ExportResult<PathBuf> {
        self.config.validate()?;
        let locale = LocaleSpec::parse(&self.config.locale)?;

        let window = window::month_window(target.month, target.year, self.policy)?;

        let currency = target
            .currency
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(self.config.currency.as_str());

        info!(
            month = target.month,
            year = target.year,
            currency = currency,
            format = %target.format,
            "starting statement export"
        );

        let signer = RequestSigner::new(&self.key_path);
        let client = ApiClient::new(&self.config.api_url, &self.config.api_token, signer)?;

        let profiles: Vec<Profile> = client.get_json("/v1/profiles").await?;
        let profile = select_profile(&profiles, &self.config.profile)?;
        debug!(profile_id = profile.id, "profile resolved");

        let balances: Vec<Balance> = client
            .get_json(&format!(
                "/v4/profiles/{}/balances?types=STANDARD",
                profile.id
            ))
            .await?;
        let balance = select_balance(&balances, currency)?;
        debug!(balance_id = balance.id, "balance resolved");

        let path = output::resolve_template(
            &target.output_template,
            currency,
            target.year,
            target.month,
            target.format.extension(),
        );
        output::ensure_parent_dir(&path)?;

        match target.format {
            ExportFormat::Csv => {
                self.export_csv(&client, profile, balance, currency, &window, &path, locale)
                    .await?
            }
            ExportFormat::Pdf => {
                self.export_pdf(&client, profile, balance, currency, &window, &path)
                    .await?
            }
        }

        info!(path = %path.display(), "statement export complete");
        Ok(path)
    }

    /// Fetch the flat JSON statement and encode it as CSV
    #[allow(clippy::too_many_arguments)]
    async fn export_csv(
        &self,
        client: &ApiClient,
        profile: &Profile,
        balance: &Balance,
        currency: &str,
        window: &TimeWindow,
        path: &Path,
        locale: LocaleSpec,
    ) -> ExportResult<()> {
        let resource = format!(
            "/v1/profiles/{}/balance-statements/{}/statement.json?currency={}&intervalStart={}&intervalEnd={}&type=FLAT",
            profile.id,
            balance.id,
            currency,
            rfc3339_millis(window.start),
            rfc3339_millis(window.end),
        );

        let statement: StatementResponse = client.get_json(&resource).await?;
        let rows: Vec<StatementRow> = statement.transactions.iter().map(StatementRow::from).collect();
        debug!(transactions = rows.len(), "statement fetched");

        let mut writer = CsvStatementWriter::create(path, locale)?;
        writer.write_rows(&rows)?;
        writer.close()?;
        Ok(())
    }

    /// Fetch the statement as a PDF byte stream and copy it to disk
    async fn export_pdf(
        &self,
        client: &ApiClient,
        profile: &Profile,
        balance: &Balance,
        currency: &str,
        window: &TimeWindow,
        path: &Path,
    ) -> ExportResult<()> {
        let resource = format!(
            "/v1/profiles/{}/balance-statements/{}/statement.pdf?currency={}&intervalStart={}&intervalEnd={}&locale={}",
            profile.id,
            balance.id,
            currency,
            rfc3339_millis(window.start),
            rfc3339_millis(window.end),
            self.config.pdf_locale,
        );

        let stream = client.get_stream(&resource).await?;
        futures_util::pin_mut!(stream);
        output::pdf::write_stream(path, stream).await?;
        Ok(())
    }
}

/// Render an instant as RFC 3339 with millisecond precision and `Z` suffix
fn rfc3339_millis(instant: chrono::DateTime<chrono::Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}
