//! Page identity: the canonical URL a verdict is looked up and stored under.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::CoreError;

/// Canonical URL string identifying the page under evaluation.
///
/// Always non-empty. The string is kept exactly as supplied; callers are
/// expected to pass the URL the host reports for the active page.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema)]
#[serde(transparent)]
pub struct PageIdentity(String);

impl PageIdentity {
    /// Build an identity from a URL string.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EmptyIdentity`] if `url` is empty or only whitespace.
    pub fn new(url: impl Into<String>) -> Result<Self, CoreError> {
        let url = url.into();
        if url.trim().is_empty() {
            return Err(CoreError::EmptyIdentity);
        }
        Ok(Self(url))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageIdentity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for PageIdentity {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for PageIdentity {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for PageIdentity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}
