//! # verity-client
//!
//! HTTP client for the backend verification service.
//!
//! [`VerificationClient::verify`] posts a page identity to `/check-article`
//! and returns a validated [`VerdictRecord`]. It never writes to the verdict
//! store and never retries; both decisions belong to the caller.

mod error;
mod http;
mod tools;
mod wire;

pub use error::VerificationError;
pub use tools::{ExtractedClaim, SiteAssessment};

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use verity_config::BackendConfig;
use verity_core::{PageIdentity, VerdictRecord};

use crate::http::check_response;

/// Something that can fact-check a page.
pub trait Verifier: Send + Sync {
    /// Run one verification for `identity`.
    fn verify(
        &self,
        identity: &PageIdentity,
    ) -> impl Future<Output = Result<VerdictRecord, VerificationError>> + Send;
}

/// reqwest-based client for the backend verification service.
#[derive(Debug, Clone)]
pub struct VerificationClient {
    http: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl VerificationClient {
    /// Build a client from the `backend` config section.
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError::InvalidEndpoint`] if the base URL does not
    /// parse, or [`VerificationError::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &BackendConfig) -> Result<Self, VerificationError> {
        let base_url = config.base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|e| VerificationError::InvalidEndpoint(format!("{base_url}: {e}")))?;

        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()?;

        Ok(Self {
            http,
            base_url,
            timeout: config.timeout(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fact-check the page at `identity` (`POST /check-article`).
    ///
    /// The returned record carries the identity the backend echoed, which may
    /// differ from the one requested.
    ///
    /// # Errors
    ///
    /// Returns a transport-group [`VerificationError`] if the backend cannot
    /// be reached, times out, or answers with a non-success status, and a
    /// malformed-group error if the body fails validation.
    pub async fn check_article(
        &self,
        identity: &PageIdentity,
    ) -> Result<VerdictRecord, VerificationError> {
        tracing::info!(%identity, "requesting fact-check");
        let raw = self
            .post("check-article", &serde_json::json!({ "url": identity.as_str() }))
            .await?;
        let record = wire::parse_verdict(&raw)?;
        tracing::info!(%identity, claims = record.claims.len(), "fact-check received");
        Ok(record)
    }

    /// POST `body` as JSON to `path` and return the response body.
    async fn post<T: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &T,
    ) -> Result<String, VerificationError> {
        let url = format!("{}/{path}", self.base_url);
        let resp = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        let resp = check_response(resp).await?;
        resp.text().await.map_err(|e| self.transport_error(e))
    }

    fn transport_error(&self, error: reqwest::Error) -> VerificationError {
        if error.is_timeout() {
            tracing::warn!(timeout_secs = self.timeout.as_secs(), "backend request timed out");
            VerificationError::Timeout(self.timeout)
        } else {
            tracing::warn!(%error, "backend request failed");
            VerificationError::Transport(error)
        }
    }
}

impl Verifier for VerificationClient {
    async fn verify(&self, identity: &PageIdentity) -> Result<VerdictRecord, VerificationError> {
        self.check_article(identity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash() {
        let config = BackendConfig {
            base_url: "http://localhost:3000/".into(),
            ..BackendConfig::default()
        };
        let client = VerificationClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn rejects_unparseable_base_url() {
        let config = BackendConfig {
            base_url: "http://".into(),
            ..BackendConfig::default()
        };
        assert!(matches!(
            VerificationClient::new(&config),
            Err(VerificationError::InvalidEndpoint(_))
        ));
    }

    #[tokio::test]
    #[ignore] // requires a running backend on localhost:3000
    async fn live_check_article() {
        let client = VerificationClient::new(&BackendConfig::default()).unwrap();
        let identity = PageIdentity::new("https://en.wikipedia.org/wiki/Rust_(programming_language)")
            .unwrap();
        let record = client.check_article(&identity).await.unwrap();
        println!("{} claims", record.claims.len());
    }
}
