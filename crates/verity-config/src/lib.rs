//! # verity-config
//!
//! Layered configuration loading for Verity using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`VERITY_*` prefix, `__` as separator)
//! 2. Project-level `.verity/config.toml`
//! 3. User-level `~/.config/verity/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `VERITY_BACKEND__BASE_URL` -> `backend.base_url`,
//! `VERITY_STORE__PATH` -> `store.path`, etc.
//!
//! ```no_run
//! use verity_config::VerityConfig;
//!
//! let config = VerityConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.backend.base_url);
//! ```

mod backend;
mod error;
mod store;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct VerityConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl VerityConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT read `.env`; use [`Self::load_with_dotenv`] for that.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory (if present), then [`Self::load`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".verity/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("VERITY_").split("__"))
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.backend.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("verity").join("config.toml"))
    }
}
