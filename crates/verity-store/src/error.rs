//! Verdict store error types.

use thiserror::Error;

/// Errors from verdict persistence.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The persistence layer could not be reached or opened.
    #[error("verdict store unavailable: {0}")]
    Unavailable(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// A stored value exists but no longer decodes as a verdict.
    #[error("stored verdict for '{identity}' is corrupt: {reason}")]
    Corrupt { identity: String, reason: String },

    /// A verdict could not be serialized for storage.
    #[error("failed to encode verdict: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Whether the error means the store itself could not be used, as
    /// opposed to bad data inside it.
    #[must_use]
    pub const fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable(_) | Self::LibSql(_))
    }
}
