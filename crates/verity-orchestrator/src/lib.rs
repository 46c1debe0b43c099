//! # verity-orchestrator
//!
//! The single decision point for "do we already know the answer, or must we
//! go ask".
//!
//! - [`Orchestrator::resolve`] is the read path: it consults the verdict
//!   store and never calls the backend.
//! - [`Orchestrator::check_and_store`] is the write path: it must be invoked
//!   explicitly, calls the backend once, and stores the verdict on success.
//!
//! At most one check per page identity runs at a time; a second request for
//! the same identity while one is in flight is rejected with
//! [`OrchestratorError::CheckInFlight`]. Checks run on a detached task, so a
//! caller that stops waiting does not cancel the store write.

mod error;
mod states;

pub use error::OrchestratorError;

use std::sync::Arc;

use verity_client::Verifier;
use verity_core::{CheckState, PageIdentity, VerdictRecord};
use verity_store::{KvBackend, VerdictStore};

use crate::states::{CheckGuard, StateTable};

/// Result of the read path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheOutcome {
    Hit(VerdictRecord),
    Miss,
}

struct Inner<B, V> {
    store: VerdictStore<B>,
    verifier: V,
    states: Arc<StateTable>,
}

/// Cache-or-verify orchestrator. Cloning is cheap and clones share state.
pub struct Orchestrator<B, V> {
    inner: Arc<Inner<B, V>>,
}

impl<B, V> Clone for Orchestrator<B, V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<B, V> Orchestrator<B, V>
where
    B: KvBackend + 'static,
    V: Verifier + 'static,
{
    #[must_use]
    pub fn new(store: VerdictStore<B>, verifier: V) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                verifier,
                states: Arc::new(StateTable::default()),
            }),
        }
    }

    #[must_use]
    pub fn store(&self) -> &VerdictStore<B> {
        &self.inner.store
    }

    /// Current state of `identity` in this activation.
    #[must_use]
    pub fn state(&self, identity: &PageIdentity) -> CheckState {
        self.inner.states.get(identity)
    }

    /// Look up a stored verdict for `identity`.
    ///
    /// # Errors
    ///
    /// Returns [`OrchestratorError::StorageUnavailable`] if the store cannot
    /// be read. That is never reported as a miss.
    pub async fn resolve(&self, identity: &PageIdentity) -> Result<CacheOutcome, OrchestratorError> {
        let outcome = match self.inner.store.lookup(identity).await {
            Ok(Some(record)) => CacheOutcome::Hit(record),
            Ok(None) => CacheOutcome::Miss,
            Err(error) => {
                tracing::warn!(%identity, %error, "verdict lookup failed");
                return Err(error.into());
            }
        };

        let observed = match outcome {
            CacheOutcome::Hit(_) => CheckState::Cached,
            CacheOutcome::Miss => CheckState::Unchecked,
        };
        self.inner.states.observe(identity, observed);
        tracing::debug!(%identity, state = %self.state(identity), "resolved");
        Ok(outcome)
    }

    /// Fact-check `identity` and store the verdict under `identity`.
    ///
    /// The verdict is stored under the identity supplied here even if the
    /// backend echoes a different URL. On failure nothing is written.
    ///
    /// # Errors
    ///
    /// - [`OrchestratorError::CheckInFlight`] if a check for `identity` is
    ///   already running (no backend call is made).
    /// - [`OrchestratorError::Verification`] if the backend call fails.
    /// - [`OrchestratorError::StorageUnavailable`] if the verdict could not
    ///   be stored.
    /// - [`OrchestratorError::TaskAborted`] if the check task panicked.
    pub async fn check_and_store(
        &self,
        identity: &PageIdentity,
    ) -> Result<VerdictRecord, OrchestratorError> {
        let guard = CheckGuard::begin(Arc::clone(&self.inner.states), identity)?;

        let inner = Arc::clone(&self.inner);
        let task_identity = identity.clone();
        let task = tokio::spawn(async move { inner.run_check(guard, task_identity).await });

        match task.await {
            Ok(result) => result,
            Err(join_error) => Err(OrchestratorError::TaskAborted {
                identity: identity.clone(),
                reason: join_error.to_string(),
            }),
        }
    }
}

impl<B, V> Inner<B, V>
where
    B: KvBackend,
    V: Verifier,
{
    async fn run_check(
        &self,
        guard: CheckGuard,
        identity: PageIdentity,
    ) -> Result<VerdictRecord, OrchestratorError> {
        let fetched = match self.verifier.verify(&identity).await {
            Ok(record) => record,
            Err(error) => {
                tracing::warn!(
                    %identity,
                    %error,
                    retryable = error.is_retryable(),
                    "fact-check failed"
                );
                guard.finish(CheckState::Failed);
                return Err(error.into());
            }
        };

        if fetched.page_identity != identity {
            tracing::warn!(
                requested = %identity,
                echoed = %fetched.page_identity,
                "backend echoed a different url; storing under the requested one"
            );
        }
        let record = fetched.rekeyed(identity);

        if let Err(error) = self.store.write(&record).await {
            tracing::error!(identity = %record.page_identity, %error, "failed to store verdict");
            guard.finish(CheckState::Failed);
            return Err(error.into());
        }

        guard.finish(CheckState::Checked);
        tracing::info!(
            identity = %record.page_identity,
            claims = record.claims.len(),
            "verdict stored"
        );
        Ok(record)
    }
}
