//! Verdict data model.
//!
//! Field names serialize to the same JSON shape the backend speaks, so a
//! stored record and a `/check-article` response look alike.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Assessment;
use crate::identity::PageIdentity;

/// A source consulted while checking a claim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Citation {
    pub link: String,
    pub summary: String,
}

impl Citation {
    #[must_use]
    pub fn new(link: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            link: link.into(),
            summary: summary.into(),
        }
    }
}

/// One checked claim with its overall verdict and citations grouped by the
/// verdict each source gave.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Claim {
    pub summary: String,
    #[serde(rename = "overallAssessment")]
    pub overall_assessment: Assessment,
    #[serde(rename = "citations")]
    pub citations_by_assessment: BTreeMap<Assessment, Vec<Citation>>,
}

impl Claim {
    /// Build a claim. An empty `true` bucket is added if the map lacks one.
    #[must_use]
    pub fn new(
        summary: impl Into<String>,
        overall_assessment: Assessment,
        mut citations_by_assessment: BTreeMap<Assessment, Vec<Citation>>,
    ) -> Self {
        citations_by_assessment.entry(Assessment::True).or_default();
        Self {
            summary: summary.into(),
            overall_assessment,
            citations_by_assessment,
        }
    }

    /// Citations filed under `assessment`, empty if the bucket is absent.
    #[must_use]
    pub fn citations_for(&self, assessment: Assessment) -> &[Citation] {
        self.citations_by_assessment
            .get(&assessment)
            .map_or(&[], Vec::as_slice)
    }

    #[must_use]
    pub fn citation_count(&self) -> usize {
        self.citations_by_assessment.values().map(Vec::len).sum()
    }
}

/// Result of one completed fact-check for one page.
///
/// Records are immutable once built. A re-check produces a new record that
/// replaces the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct VerdictRecord {
    #[serde(rename = "url")]
    pub page_identity: PageIdentity,
    pub claims: Vec<Claim>,
}

impl VerdictRecord {
    #[must_use]
    pub const fn new(page_identity: PageIdentity, claims: Vec<Claim>) -> Self {
        Self {
            page_identity,
            claims,
        }
    }

    /// Same claims, filed under a different identity.
    #[must_use]
    pub fn rekeyed(self, page_identity: PageIdentity) -> Self {
        Self {
            page_identity,
            claims: self.claims,
        }
    }
}
