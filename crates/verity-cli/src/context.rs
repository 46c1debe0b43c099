use std::path::PathBuf;

use anyhow::Context;
use verity_client::VerificationClient;
use verity_config::VerityConfig;
use verity_orchestrator::Orchestrator;
use verity_store::{LibsqlBackend, VerdictStore};

use crate::cli::GlobalFlags;

pub type AppOrchestrator = Orchestrator<LibsqlBackend, VerificationClient>;

/// Shared resources for commands that touch the verdict store.
pub struct AppContext {
    pub orchestrator: AppOrchestrator,
    pub store_path: PathBuf,
}

impl AppContext {
    /// Open the verdict store and build the backend client.
    pub async fn init(config: VerityConfig, flags: &GlobalFlags) -> anyhow::Result<Self> {
        let store_path = resolve_store_path(&config, flags)?;
        tracing::debug!(path = %store_path.display(), "opening verdict store");

        let backend = LibsqlBackend::open(&store_path).await.with_context(|| {
            format!("failed to open verdict store at {}", store_path.display())
        })?;
        let client = VerificationClient::new(&config.backend)
            .context("failed to build verification client")?;

        Ok(Self {
            orchestrator: Orchestrator::new(VerdictStore::new(backend), client),
            store_path,
        })
    }
}

fn resolve_store_path(config: &VerityConfig, flags: &GlobalFlags) -> anyhow::Result<PathBuf> {
    if let Some(path) = flags.store.as_deref().filter(|path| !path.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    config.store.resolved_path().context(
        "no verdict store path configured and no platform data directory; pass --store <path>",
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use verity_config::StoreConfig;

    use super::*;
    use crate::cli::OutputFormat;

    fn flags(store: Option<&str>) -> GlobalFlags {
        GlobalFlags {
            format: OutputFormat::Json,
            quiet: false,
            verbose: false,
            store: store.map(str::to_string),
        }
    }

    #[test]
    fn store_flag_overrides_config() {
        let config = VerityConfig {
            store: StoreConfig {
                path: "/from/config.db".into(),
            },
            ..VerityConfig::default()
        };
        assert_eq!(
            resolve_store_path(&config, &flags(Some("/from/flag.db"))).unwrap(),
            PathBuf::from("/from/flag.db")
        );
        assert_eq!(
            resolve_store_path(&config, &flags(None)).unwrap(),
            PathBuf::from("/from/config.db")
        );
    }
}
