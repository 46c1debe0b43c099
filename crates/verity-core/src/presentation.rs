//! Mapping from a [`VerdictRecord`] to the flat shape display renderers draw.
//!
//! Only the `true` citation bucket is surfaced, whatever the claim's overall
//! assessment. A claim assessed `false` therefore lists the sources that
//! supported it. Whether renderers should instead show the bucket matching
//! `overall_assessment` is still undecided; [`present`] keeps the observed
//! behavior until then.

use serde::Serialize;

use crate::entities::{Citation, Claim, VerdictRecord};
use crate::enums::Assessment;

/// A claim ready for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderableClaim {
    pub summary: String,
    pub assessment: Assessment,
    /// `None` for [`Assessment::NotFound`].
    pub label: Option<&'static str>,
    /// Style hook, e.g. `assessment--false`.
    pub css_class: String,
    pub citations: Vec<Citation>,
}

/// Map every claim of `record`, preserving order.
#[must_use]
pub fn present(record: &VerdictRecord) -> Vec<RenderableClaim> {
    record.claims.iter().map(present_claim).collect()
}

/// Map a single claim.
#[must_use]
pub fn present_claim(claim: &Claim) -> RenderableClaim {
    RenderableClaim {
        summary: claim.summary.clone(),
        assessment: claim.overall_assessment,
        label: claim.overall_assessment.display_label(),
        css_class: format!("assessment--{}", claim.overall_assessment),
        citations: claim.citations_for(Assessment::True).to_vec(),
    }
}
