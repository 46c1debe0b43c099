//! Cross-cutting error types for Verity.
//!
//! Store, transport, and orchestration errors live in their own crates. This
//! module only covers violations of the data model itself.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A page identity was empty or whitespace-only.
    #[error("page identity must be a non-empty URL")]
    EmptyIdentity,

    /// A value outside the four assessment variants.
    #[error("unknown assessment variant '{0}' (expected true, false, unclear or notfound)")]
    UnknownAssessment(String),
}
