//! Persistent key-value capability the verdict store is built on.

use std::collections::HashMap;
use std::future::Future;

use tokio::sync::RwLock;

use crate::error::StoreError;

/// String-keyed, string-valued persistence.
///
/// Every operation is an atomic single-key read or write; no multi-key
/// transactions are offered.
pub trait KvBackend: Send + Sync {
    /// Value stored under `key`, if any.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Delete `key`. Returns whether a value was present.
    fn remove(&self, key: &str) -> impl Future<Output = Result<bool, StoreError>> + Send;

    /// All stored keys, most recently written first.
    fn keys(&self) -> impl Future<Output = Result<Vec<String>, StoreError>> + Send;
}

/// Process-local backend. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: RwLock<HashMap<String, (u64, String)>>,
    clock: std::sync::atomic::AtomicU64,
}

impl MemoryBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .entries
            .read()
            .await
            .get(key)
            .map(|(_, value)| value.clone()))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let tick = self
            .clock
            .fetch_add(1, std::sync::atomic::Ordering::Relaxed);
        self.entries
            .write()
            .await
            .insert(key.to_string(), (tick, value.to_string()));
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        Ok(self.entries.write().await.remove(key).is_some())
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let entries = self.entries.read().await;
        let mut keyed: Vec<(u64, String)> = entries
            .iter()
            .map(|(key, (tick, _))| (*tick, key.clone()))
            .collect();
        keyed.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(keyed.into_iter().map(|(_, key)| key).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn get_missing_is_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("absent").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_overwrites() {
        let backend = MemoryBackend::new();
        backend.set("k", "one").await.unwrap();
        backend.set("k", "two").await.unwrap();
        assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(backend.keys().await.unwrap(), vec!["k".to_string()]);
    }

    #[tokio::test]
    async fn keys_most_recent_first() {
        let backend = MemoryBackend::new();
        backend.set("a", "1").await.unwrap();
        backend.set("b", "2").await.unwrap();
        backend.set("a", "3").await.unwrap();
        assert_eq!(backend.keys().await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn remove_reports_presence() {
        let backend = MemoryBackend::new();
        backend.set("k", "v").await.unwrap();
        assert!(backend.remove("k").await.unwrap());
        assert!(!backend.remove("k").await.unwrap());
        assert_eq!(backend.get("k").await.unwrap(), None);
    }
}
