//! Backend response shapes and their validation into domain types.
//!
//! Responses are decoded into loose wire structs first (assessments as plain
//! strings) so an unknown variant can be reported as
//! [`VerificationError::UnknownAssessmentVariant`] rather than a generic
//! decode failure. Nothing is coerced: a response either converts completely
//! or is rejected.

use std::collections::BTreeMap;

use serde::Deserialize;
use verity_core::{Assessment, Citation, Claim, PageIdentity, VerdictRecord};

use crate::error::VerificationError;

#[derive(Deserialize)]
pub(crate) struct WireVerdict {
    pub url: String,
    pub claims: Vec<WireClaim>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireClaim {
    pub summary: String,
    pub overall_assessment: String,
    pub citations: BTreeMap<String, Vec<WireCitation>>,
}

#[derive(Deserialize)]
pub(crate) struct WireCitation {
    pub link: String,
    pub summary: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct WireSiteCheck {
    pub assessment: String,
    pub summary: String,
    pub article_loaded: bool,
}

/// Decode `raw` as `T`, reporting shape errors as malformed.
pub(crate) fn decode<'a, T: Deserialize<'a>>(raw: &'a str) -> Result<T, VerificationError> {
    serde_json::from_str(raw).map_err(|e| malformed(e.to_string(), raw))
}

/// Parse a `/check-article` response body into a validated record.
pub(crate) fn parse_verdict(raw: &str) -> Result<VerdictRecord, VerificationError> {
    let wire: WireVerdict = decode(raw)?;
    let identity = PageIdentity::new(wire.url)
        .map_err(|_| malformed("response 'url' is empty".to_string(), raw))?;

    let claims = wire
        .claims
        .into_iter()
        .enumerate()
        .map(|(index, claim)| convert_claim(index, claim, raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(VerdictRecord::new(identity, claims))
}

/// Validate one wire claim. `index` only feeds error messages.
pub(crate) fn convert_claim(
    index: usize,
    claim: WireClaim,
    raw: &str,
) -> Result<Claim, VerificationError> {
    let overall = parse_assessment(&claim.overall_assessment, raw)?;

    if !claim.citations.contains_key(Assessment::True.as_str()) {
        return Err(malformed(
            format!("claim {index} has no '{}' citation bucket", Assessment::True),
            raw,
        ));
    }

    let mut citations = BTreeMap::new();
    for (key, bucket) in claim.citations {
        let assessment = parse_assessment(&key, raw)?;
        let bucket = bucket
            .into_iter()
            .map(|c| Citation::new(c.link, c.summary))
            .collect();
        citations.insert(assessment, bucket);
    }

    Ok(Claim::new(claim.summary, overall, citations))
}

pub(crate) fn parse_assessment(value: &str, raw: &str) -> Result<Assessment, VerificationError> {
    value.parse().map_err(|_| {
        tracing::error!(value, raw, "backend sent unknown assessment variant");
        VerificationError::UnknownAssessmentVariant {
            value: value.to_string(),
            raw: raw.to_string(),
        }
    })
}

pub(crate) fn malformed(reason: String, raw: &str) -> VerificationError {
    tracing::error!(%reason, raw, "malformed backend response");
    VerificationError::MalformedResponse {
        reason,
        raw: raw.to_string(),
    }
}
