//! Per-identity check state and the in-flight guard.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use verity_core::{CheckState, PageIdentity};

use crate::error::OrchestratorError;

#[derive(Debug, Default)]
pub(crate) struct StateTable {
    states: Mutex<HashMap<PageIdentity, CheckState>>,
}

impl StateTable {
    fn lock(&self) -> MutexGuard<'_, HashMap<PageIdentity, CheckState>> {
        self.states.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn get(&self, identity: &PageIdentity) -> CheckState {
        self.lock()
            .get(identity)
            .copied()
            .unwrap_or(CheckState::Unchecked)
    }

    /// Record what a store lookup found. A running check keeps its state.
    pub(crate) fn observe(&self, identity: &PageIdentity, observed: CheckState) {
        let mut states = self.lock();
        let current = states
            .get(identity)
            .copied()
            .unwrap_or(CheckState::Unchecked);
        if current != CheckState::Checking {
            states.insert(identity.clone(), observed);
        }
    }
}

/// Marks an identity as `Checking` for as long as it lives.
///
/// Dropping the guard without [`CheckGuard::finish`] (e.g. the task
/// panicked) leaves the identity `Failed`, so a retry is possible.
pub(crate) struct CheckGuard {
    table: Arc<StateTable>,
    identity: PageIdentity,
    finished: bool,
}

impl CheckGuard {
    pub(crate) fn begin(
        table: Arc<StateTable>,
        identity: &PageIdentity,
    ) -> Result<Self, OrchestratorError> {
        {
            let mut states = table.lock();
            let current = states
                .get(identity)
                .copied()
                .unwrap_or(CheckState::Unchecked);
            if !current.can_start_check() {
                tracing::debug!(%identity, "rejecting check: already in flight");
                return Err(OrchestratorError::CheckInFlight(identity.clone()));
            }
            states.insert(identity.clone(), CheckState::Checking);
        }
        Ok(Self {
            table,
            identity: identity.clone(),
            finished: false,
        })
    }

    pub(crate) fn finish(mut self, outcome: CheckState) {
        debug_assert!(CheckState::Checking.can_transition_to(outcome));
        self.table.lock().insert(self.identity.clone(), outcome);
        self.finished = true;
    }
}

impl Drop for CheckGuard {
    fn drop(&mut self) {
        if !self.finished {
            self.table
                .lock()
                .insert(self.identity.clone(), CheckState::Failed);
        }
    }
}
