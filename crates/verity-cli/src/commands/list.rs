use serde::Serialize;
use verity_core::PageIdentity;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StoredVerdict {
    url: PageIdentity,
}

/// Handle `verity list`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows = ctx
        .orchestrator
        .store()
        .identities()
        .await?
        .into_iter()
        .map(|url| StoredVerdict { url })
        .collect::<Vec<_>>();
    output(&rows, flags.format)
}
