use anyhow::Context;
use verity_client::VerificationClient;
use verity_config::VerityConfig;
use verity_core::present_claim;

use crate::cli::{BackendCommands, GlobalFlags};
use crate::output::output;
use crate::progress::Progress;

/// Handle `verity backend`. Talks to the backend only; the store is untouched.
pub async fn handle(
    action: &BackendCommands,
    config: &VerityConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let client =
        VerificationClient::new(&config.backend).context("failed to build verification client")?;
    let spinner = Progress::spinner(&format!("Calling {}", client.base_url()));

    let result = match action {
        BackendCommands::ParseClaims { text } => client
            .parse_claims(text)
            .await
            .map(serde_json::to_value),
        BackendCommands::CheckClaim { claim, query } => client
            .check_claim(claim, query)
            .await
            .map(|claim| serde_json::to_value(present_claim(&claim))),
        BackendCommands::CheckSite { claim, url } => client
            .check_site(claim, url)
            .await
            .map(serde_json::to_value),
    };

    let value = match result {
        Ok(value) => {
            spinner.finish_clear();
            value?
        }
        Err(error) => {
            spinner.finish_err("backend call failed");
            return Err(error.into());
        }
    };
    output(&value, flags.format)
}
