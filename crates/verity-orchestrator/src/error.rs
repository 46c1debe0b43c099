//! Orchestrator error types.

use thiserror::Error;
use verity_client::VerificationError;
use verity_core::PageIdentity;
use verity_store::StoreError;

#[derive(Debug, Error)]
pub enum OrchestratorError {
    /// The verdict store could not be read or written. Distinct from a miss.
    #[error("verdict store unavailable: {0}")]
    StorageUnavailable(#[from] StoreError),

    /// The backend call failed; nothing was stored.
    #[error(transparent)]
    Verification(#[from] VerificationError),

    /// A check for this identity is already running.
    #[error("a fact-check for {0} is already in progress")]
    CheckInFlight(PageIdentity),

    /// The detached check task ended without a result.
    #[error("fact-check task for {identity} aborted: {reason}")]
    TaskAborted {
        identity: PageIdentity,
        reason: String,
    },
}
