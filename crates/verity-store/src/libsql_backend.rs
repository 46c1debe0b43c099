//! libSQL-backed key-value persistence.
//!
//! One `verdicts` table keyed by page identity. The schema is created on
//! open with `IF NOT EXISTS`, so reopening an existing file is safe.

use std::path::Path;

use crate::backend::KvBackend;
use crate::error::StoreError;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS verdicts (
    page_identity TEXT PRIMARY KEY NOT NULL,
    record TEXT NOT NULL,
    stored_at INTEGER NOT NULL
)";

/// Durable backend over a local libSQL database file.
pub struct LibsqlBackend {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl LibsqlBackend {
    /// Open (or create) the database at `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if the directory or database
    /// cannot be created or opened.
    pub async fn open(path: &Path) -> Result<Self, StoreError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                StoreError::Unavailable(format!("mkdir {}: {e}", parent.display()))
            })?;
        }
        Self::open_at(&path.to_string_lossy()).await
    }

    /// Open a private in-memory database.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Unavailable`] if libSQL cannot initialize.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        Self::open_at(":memory:").await
    }

    async fn open_at(location: &str) -> Result<Self, StoreError> {
        let db = libsql::Builder::new_local(location)
            .build()
            .await
            .map_err(|e| StoreError::Unavailable(format!("open {location}: {e}")))?;
        let conn = db
            .connect()
            .map_err(|e| StoreError::Unavailable(format!("connect {location}: {e}")))?;
        conn.execute(SCHEMA, ())
            .await
            .map_err(|e| StoreError::Unavailable(format!("initialize schema: {e}")))?;
        tracing::debug!(location, "opened verdict database");
        Ok(Self { db, conn })
    }
}

impl KvBackend for LibsqlBackend {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT record FROM verdicts WHERE page_identity = ?1",
                libsql::params![key],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row.get::<String>(0)?)),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let stored_at = chrono::Utc::now().timestamp_millis();
        self.conn
            .execute(
                "INSERT INTO verdicts (page_identity, record, stored_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT(page_identity) DO UPDATE SET
                     record = excluded.record,
                     stored_at = excluded.stored_at",
                libsql::params![key, value, stored_at],
            )
            .await?;
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<bool, StoreError> {
        let affected = self
            .conn
            .execute(
                "DELETE FROM verdicts WHERE page_identity = ?1",
                libsql::params![key],
            )
            .await?;
        Ok(affected > 0)
    }

    async fn keys(&self) -> Result<Vec<String>, StoreError> {
        let mut rows = self
            .conn
            .query(
                "SELECT page_identity FROM verdicts ORDER BY stored_at DESC, rowid DESC",
                (),
            )
            .await?;
        let mut keys = Vec::new();
        while let Some(row) = rows.next().await? {
            keys.push(row.get::<String>(0)?);
        }
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn schema_is_created() {
        let backend = LibsqlBackend::open_in_memory().await.unwrap();
        let mut rows = backend
            .conn
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["verdicts"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn set_get_remove_cycle() {
        let backend = LibsqlBackend::open_in_memory().await.unwrap();
        assert_eq!(backend.get("k").await.unwrap(), None);

        backend.set("k", "one").await.unwrap();
        backend.set("k", "two").await.unwrap();
        assert_eq!(backend.get("k").await.unwrap().as_deref(), Some("two"));
        assert_eq!(backend.keys().await.unwrap(), vec!["k".to_string()]);

        assert!(backend.remove("k").await.unwrap());
        assert!(!backend.remove("k").await.unwrap());
        assert_eq!(backend.get("k").await.unwrap(), None);
    }
}
