//! Backend verification service configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_base_url() -> String {
    "http://localhost:3000".to_string()
}

/// Default request timeout. A full article check crawls several sites per
/// claim, so this is generous but still bounded.
const fn default_timeout_secs() -> u64 {
    180
}

fn default_user_agent() -> String {
    "verity/0.1".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    /// Base URL of the verification service (e.g., `http://localhost:3000`).
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Upper bound for a single backend request, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl BackendConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Check that the section can be used to build a client.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for an empty or non-HTTP base URL
    /// or a zero timeout.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base_url = self.base_url.trim();
        if base_url.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "backend.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "backend.base_url".into(),
                reason: format!("'{base_url}' is not an http(s) URL"),
            });
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_secs".into(),
                reason: "must be greater than zero".into(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = BackendConfig::default();
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.timeout(), Duration::from_secs(180));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_non_http_base_url() {
        let config = BackendConfig {
            base_url: "ftp://example.com".into(),
            ..BackendConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "backend.base_url"
        ));
    }

    #[test]
    fn rejects_zero_timeout() {
        let config = BackendConfig {
            timeout_secs: 0,
            ..BackendConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "backend.timeout_secs"
        ));
    }
}
