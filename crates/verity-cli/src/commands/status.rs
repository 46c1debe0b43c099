use serde::Serialize;
use verity_core::{CheckState, PageIdentity};
use verity_orchestrator::CacheOutcome;

use crate::cli::{GlobalFlags, PageArgs};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StatusResponse {
    url: PageIdentity,
    state: CheckState,
    claims: Option<usize>,
    store: String,
}

/// Handle `verity status`.
pub async fn handle(args: &PageArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.orchestrator.resolve(&args.url).await?;
    let claims = match &outcome {
        CacheOutcome::Hit(record) => Some(record.claims.len()),
        CacheOutcome::Miss => None,
    };

    output(
        &StatusResponse {
            url: args.url.clone(),
            state: ctx.orchestrator.state(&args.url),
            claims,
            store: ctx.store_path.display().to_string(),
        },
        flags.format,
    )
}
