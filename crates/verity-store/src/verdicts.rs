//! Verdict store: `PageIdentity -> VerdictRecord` on top of a [`KvBackend`].

use verity_core::{PageIdentity, VerdictRecord};

use crate::backend::KvBackend;
use crate::error::StoreError;

/// Durable mapping from page identity to the last verdict retrieved for it.
///
/// Records are serialized as JSON. After `write(r)` succeeds, `lookup` of
/// `r.page_identity` returns `r` until something else writes that key.
pub struct VerdictStore<B> {
    backend: B,
}

impl<B: KvBackend> VerdictStore<B> {
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Stored verdict for `identity`, or `None` if the page was never checked.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot be read, or
    /// [`StoreError::Corrupt`] if the stored value no longer decodes. Neither
    /// is reported as a miss.
    pub async fn lookup(&self, identity: &PageIdentity) -> Result<Option<VerdictRecord>, StoreError> {
        let Some(raw) = self.backend.get(identity.as_str()).await? else {
            tracing::debug!(%identity, "verdict store miss");
            return Ok(None);
        };

        let record: VerdictRecord =
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                identity: identity.to_string(),
                reason: e.to_string(),
            })?;
        tracing::debug!(%identity, claims = record.claims.len(), "verdict store hit");
        Ok(Some(record))
    }

    /// Persist `record` under `record.page_identity`, replacing any earlier
    /// verdict. Writing the same record twice leaves the same state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the record cannot be encoded or the backend
    /// write fails.
    pub async fn write(&self, record: &VerdictRecord) -> Result<(), StoreError> {
        let raw = serde_json::to_string(record)?;
        self.backend.set(record.page_identity.as_str(), &raw).await?;
        tracing::debug!(identity = %record.page_identity, "verdict stored");
        Ok(())
    }

    /// Drop the stored verdict for `identity`. Returns whether one existed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend delete fails.
    pub async fn forget(&self, identity: &PageIdentity) -> Result<bool, StoreError> {
        let removed = self.backend.remove(identity.as_str()).await?;
        tracing::debug!(%identity, removed, "verdict forgotten");
        Ok(removed)
    }

    /// Identities with a stored verdict, most recently written first.
    ///
    /// Keys that are not valid identities are skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backend cannot list keys.
    pub async fn identities(&self) -> Result<Vec<PageIdentity>, StoreError> {
        let keys = self.backend.keys().await?;
        Ok(keys
            .into_iter()
            .filter_map(|key| match PageIdentity::new(key) {
                Ok(identity) => Some(identity),
                Err(error) => {
                    tracing::warn!(%error, "skipping invalid key in verdict store");
                    None
                }
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use pretty_assertions::assert_eq;
    use verity_core::{Assessment, Citation, Claim};

    use super::*;
    use crate::backend::MemoryBackend;

    fn identity(url: &str) -> PageIdentity {
        PageIdentity::new(url).unwrap()
    }

    fn record(url: &str) -> VerdictRecord {
        VerdictRecord::new(
            identity(url),
            vec![Claim::new(
                "The sky is green",
                Assessment::False,
                BTreeMap::from([(
                    Assessment::True,
                    vec![Citation::new("https://x", "sky color study")],
                )]),
            )],
        )
    }

    #[tokio::test]
    async fn unknown_identity_is_miss() {
        let store = VerdictStore::new(MemoryBackend::new());
        assert_eq!(store.lookup(&identity("https://example.com/a")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn write_then_lookup_returns_record() {
        let store = VerdictStore::new(MemoryBackend::new());
        let r = record("https://example.com/a");
        store.write(&r).await.unwrap();
        assert_eq!(store.lookup(&r.page_identity).await.unwrap(), Some(r));
    }

    #[tokio::test]
    async fn write_is_idempotent() {
        let store = VerdictStore::new(MemoryBackend::new());
        let r = record("https://example.com/a");
        store.write(&r).await.unwrap();
        let once = store.backend().get(r.page_identity.as_str()).await.unwrap();
        store.write(&r).await.unwrap();
        let twice = store.backend().get(r.page_identity.as_str()).await.unwrap();

        assert_eq!(once, twice);
        assert_eq!(store.identities().await.unwrap(), vec![r.page_identity.clone()]);
    }

    #[tokio::test]
    async fn lookup_is_keyed_per_identity() {
        let store = VerdictStore::new(MemoryBackend::new());
        store.write(&record("https://example.com/a")).await.unwrap();
        assert_eq!(store.lookup(&identity("https://example.com/b")).await.unwrap(), None);
    }

    #[tokio::test]
    async fn corrupt_value_is_not_a_miss() {
        let store = VerdictStore::new(MemoryBackend::new());
        store
            .backend()
            .set("https://example.com/a", "{not json")
            .await
            .unwrap();
        let err = store
            .lookup(&identity("https://example.com/a"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Corrupt { .. }));
        assert!(!err.is_unavailable());
    }

    #[tokio::test]
    async fn forget_removes_record() {
        let store = VerdictStore::new(MemoryBackend::new());
        let r = record("https://example.com/a");
        store.write(&r).await.unwrap();
        assert!(store.forget(&r.page_identity).await.unwrap());
        assert_eq!(store.lookup(&r.page_identity).await.unwrap(), None);
        assert!(!store.forget(&r.page_identity).await.unwrap());
    }
}
