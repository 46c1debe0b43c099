//! Verdict store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StoreConfig {
    /// Path of the libSQL verdict database. Empty means the per-user default.
    #[serde(default)]
    pub path: String,
}

impl StoreConfig {
    /// Database path to open: the configured one, or
    /// `<data_dir>/verity/verdicts.db`.
    ///
    /// Returns `None` only when no path is configured and the platform has
    /// no data directory.
    #[must_use]
    pub fn resolved_path(&self) -> Option<PathBuf> {
        if !self.path.trim().is_empty() {
            return Some(PathBuf::from(self.path.trim()));
        }
        dirs::data_dir().map(|dir| dir.join("verity").join("verdicts.db"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins() {
        let config = StoreConfig {
            path: "/tmp/verdicts.db".into(),
        };
        assert_eq!(config.resolved_path(), Some(PathBuf::from("/tmp/verdicts.db")));
    }

    #[test]
    fn default_path_ends_with_db_file() {
        if let Some(path) = StoreConfig::default().resolved_path() {
            assert!(path.ends_with("verity/verdicts.db"));
        }
    }
}
