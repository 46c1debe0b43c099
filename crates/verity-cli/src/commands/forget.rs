use serde::Serialize;
use verity_core::PageIdentity;

use crate::cli::{GlobalFlags, PageArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ForgetResponse {
    url: PageIdentity,
    removed: bool,
}

/// Handle `verity forget`.
pub async fn handle(args: &PageArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let removed = ctx.orchestrator.store().forget(&args.url).await?;
    if removed {
        tracing::info!(identity = %args.url, "verdict forgotten");
    }
    output(
        &ForgetResponse {
            url: args.url.clone(),
            removed,
        },
        flags.format,
    )
}
