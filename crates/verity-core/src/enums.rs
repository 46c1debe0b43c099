//! Assessment variants and the per-activation check state machine.
//!
//! Assessments serialize as the lowercase wire strings the backend uses
//! (`true`, `false`, `unclear`, `notfound`). The set is closed: anything else
//! is rejected by [`Assessment::from_str`](std::str::FromStr) and by serde.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Assessment
// ---------------------------------------------------------------------------

/// Truth verdict for a claim or a single citation.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Assessment {
    True,
    False,
    Unclear,
    NotFound,
}

impl Assessment {
    pub const ALL: [Self; 4] = [Self::True, Self::False, Self::Unclear, Self::NotFound];

    /// Wire and storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Unclear => "unclear",
            Self::NotFound => "notfound",
        }
    }

    /// Human label shown next to a claim.
    ///
    /// `NotFound` has no label; renderers show nothing for it.
    #[must_use]
    pub const fn display_label(self) -> Option<&'static str> {
        match self {
            Self::True => Some("True"),
            Self::False => Some("False"),
            Self::Unclear => Some("Unclear"),
            Self::NotFound => None,
        }
    }
}

impl fmt::Display for Assessment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Assessment {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "true" => Ok(Self::True),
            "false" => Ok(Self::False),
            "unclear" => Ok(Self::Unclear),
            "notfound" => Ok(Self::NotFound),
            other => Err(CoreError::UnknownAssessment(other.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// CheckState
// ---------------------------------------------------------------------------

/// State of one page identity within one orchestrator activation.
///
/// ```text
/// unchecked → cached
///           → checking → checked
///                      → failed → checking (manual retry)
/// cached / checked → checking (explicit re-check)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum CheckState {
    Unchecked,
    Cached,
    Checking,
    Checked,
    Failed,
}

impl CheckState {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Unchecked => &[Self::Cached, Self::Checking],
            Self::Checking => &[Self::Checked, Self::Failed],
            Self::Failed => &[Self::Unchecked, Self::Cached, Self::Checking],
            Self::Cached | Self::Checked => &[Self::Checking],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    /// Whether a new verification may start from this state.
    #[must_use]
    pub fn can_start_check(self) -> bool {
        self.can_transition_to(Self::Checking)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unchecked => "unchecked",
            Self::Cached => "cached",
            Self::Checking => "checking",
            Self::Checked => "checked",
            Self::Failed => "failed",
        }
    }
}

impl fmt::Display for CheckState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
