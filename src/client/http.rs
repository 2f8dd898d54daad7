//! HTTP client with bearer authentication and single-retry SCA handling
//!
//! Provides a unified client for all API interactions with:
//! - `Authorization: Bearer` on every request
//! - Transparent resolution of one step-up (SCA) challenge per request
//! - JSON or raw byte-stream responses
//! - A fixed per-request deadline so a stalled request cannot hang the run

use bytes::Bytes;
use futures_util::Stream;
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{ApiError, ApiResult};
use crate::signer::RequestSigner;

/// Response header carrying the SCA challenge token
const SCA_CHALLENGE_HEADER: &str = "x-2fa-approval";

/// Request header carrying the base64 signature over the challenge token
const SCA_SIGNATURE_HEADER: &str = "X-Signature";

/// Per-request deadline
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// SCA request states
///
/// A request is issued in `Initial` state; receiving a challenge moves it to
/// `Challenged` for the single signed retry. There is no transition out of
/// `Challenged`, so the retry cap is structural.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaState {
    /// First attempt, bearer token only
    Initial,
    /// Signed retry after a challenge
    Challenged,
}

impl ScaState {
    /// Decide whether a non-success response warrants the signed retry
    ///
    /// Returns the challenge token to sign when the response is a 403 with
    /// the SCA header and no retry has been spent yet; `None` otherwise.
    pub fn challenge_to_retry(
        self,
        status: StatusCode,
        challenge_header: Option<&str>,
    ) -> Option<String> {
        match (self, status, challenge_header) {
            (ScaState::Initial, StatusCode::FORBIDDEN, Some(token)) => Some(token.to_string()),
            _ => None,
        }
    }
}

/// Unified HTTP client for all API interactions
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: String,
    signer: RequestSigner,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// # Arguments
    /// * `base_url` - Base URL for API endpoints (no trailing slash)
    /// * `token` - API bearer token
    /// * `signer` - Signer used to answer SCA challenges
    pub fn new(
        base_url: impl Into<String>,
        token: impl Into<String>,
        signer: RequestSigner,
    ) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: token.into(),
            signer,
        })
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute a GET request and deserialize the JSON response
    ///
    /// # Errors
    /// Returns [`ApiError`] on network, HTTP, SCA, or parse failures.
    pub async fn get_json<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let response = self.get_with_sca(path).await?;
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Parse(format!("failed to deserialize response: {e}")))
    }

    /// Execute a GET request and return the response body as a byte stream
    ///
    /// The caller must drain the stream fully before considering the
    /// operation complete; this is the suspension point for PDF downloads.
    pub async fn get_stream(
        &self,
        path: &str,
    ) -> ApiResult<impl Stream<Item = Result<Bytes, reqwest::Error>>> {
        let response = self.get_with_sca(path).await?;
        Ok(response.bytes_stream())
    }

    /// Issue a GET, resolving at most one SCA challenge
    ///
    /// The loop runs at most twice: the only `continue` is the
    /// `Initial` → `Challenged` transition, and `Challenged` has no
    /// further transition.
    async fn get_with_sca(&self, path: &str) -> ApiResult<Response> {
        let url = format!("{}{}", self.base_url, path);
        let mut state = ScaState::Initial;
        let mut challenge: Option<String> = None;

        loop {
            let mut request = self.client.get(&url).bearer_auth(&self.token);
            if let Some(token) = &challenge {
                let signature = self.signer.sign(token.as_bytes())?;
                request = request
                    .header(SCA_CHALLENGE_HEADER, token)
                    .header(SCA_SIGNATURE_HEADER, signature);
            }

            debug!(%url, ?state, "issuing GET request");

            let response = request.send().await.map_err(|e| {
                warn!(%url, error = %e, "request failed to complete");
                ApiError::Network(e.to_string())
            })?;

            let status = response.status();
            if status.is_success() {
                debug!(%url, status = status.as_u16(), "request succeeded");
                return Ok(response);
            }

            let challenge_header = header_str(&response, SCA_CHALLENGE_HEADER);
            if let Some(token) = state.challenge_to_retry(status, challenge_header.as_deref()) {
                info!(%url, "SCA challenge received, retrying with signed approval");
                challenge = Some(token);
                state = ScaState::Challenged;
                continue;
            }

            let reason = status
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_string();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            if state == ScaState::Challenged && status == StatusCode::FORBIDDEN {
                warn!(%url, status = status.as_u16(), "SCA approval rejected, not retrying");
                return Err(ApiError::ChallengeRejected {
                    status: status.as_u16(),
                    body,
                });
            }

            warn!(%url, status = status.as_u16(), "request failed");
            return Err(ApiError::Http {
                status: status.as_u16(),
                reason,
                body,
            });
        }
    }
}

/// Extract a response header as an owned string, if present and valid UTF-8
fn header_str(response: &Response, name: &str) -> Option<String> {
    response
        .headers()
        .get(name)?
        .to_str()
        .ok()
        .map(str::to_owned)
}
