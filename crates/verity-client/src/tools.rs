//! Finer-grained backend endpoints.
//!
//! These expose the individual steps the backend runs for a full article
//! check. They are for inspection and debugging; nothing here touches the
//! verdict store.

use serde::{Deserialize, Serialize};
use verity_core::{Assessment, Claim};

use crate::VerificationClient;
use crate::error::VerificationError;
use crate::wire::{self, WireClaim, WireSiteCheck};

/// A checkable statement the backend pulled out of some text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedClaim {
    pub summary: String,
    #[serde(default)]
    pub quote: String,
    /// Search query the backend would use to gather sources.
    pub query: String,
}

/// How one source page relates to one claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteAssessment {
    pub assessment: Assessment,
    pub summary: String,
    pub article_loaded: bool,
}

#[derive(Deserialize)]
struct ParsedClaims {
    claims: Vec<ExtractedClaim>,
}

impl VerificationClient {
    /// Extract checkable claims from free text (`POST /parse-claims`).
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError`] on transport failure or if the response
    /// is not `{ "claims": [...] }`.
    pub async fn parse_claims(&self, text: &str) -> Result<Vec<ExtractedClaim>, VerificationError> {
        let raw = self
            .post("parse-claims", &serde_json::json!({ "text": text }))
            .await?;
        let parsed: ParsedClaims = wire::decode(&raw)?;
        Ok(parsed.claims)
    }

    /// Check a single claim against search results for `query`
    /// (`POST /check-claim`).
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError`] on transport failure or if the claim
    /// object fails validation.
    pub async fn check_claim(&self, claim: &str, query: &str) -> Result<Claim, VerificationError> {
        let raw = self
            .post(
                "check-claim",
                &serde_json::json!({ "claim": claim, "query": query }),
            )
            .await?;
        let wire_claim: WireClaim = wire::decode(&raw)?;
        wire::convert_claim(0, wire_claim, &raw)
    }

    /// Ask whether the page at `url` supports `claim` (`POST /check-site`).
    ///
    /// # Errors
    ///
    /// Returns [`VerificationError`] on transport failure, a missing field,
    /// or an unknown assessment.
    pub async fn check_site(&self, claim: &str, url: &str) -> Result<SiteAssessment, VerificationError> {
        let raw = self
            .post("check-site", &serde_json::json!({ "claim": claim, "url": url }))
            .await?;
        let site: WireSiteCheck = wire::decode(&raw)?;
        Ok(SiteAssessment {
            assessment: wire::parse_assessment(&site.assessment, &raw)?,
            summary: site.summary,
            article_loaded: site.article_loaded,
        })
    }
}
