use anyhow::Context;
use verity_core::CheckState;
use verity_orchestrator::CacheOutcome;

use crate::cli::{CheckArgs, GlobalFlags};
use crate::context::AppContext;
use crate::output::{VerdictSource, VerdictView, render_verdict};
use crate::progress::Progress;

/// Handle `verity check`: serve the stored verdict unless `--force`,
/// otherwise ask the backend and store the answer.
pub async fn handle(args: &CheckArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if !args.force
        && let CacheOutcome::Hit(record) = ctx.orchestrator.resolve(&args.url).await?
    {
        tracing::debug!(identity = %args.url, "serving stored verdict; pass --force to re-check");
        let view = VerdictView::new(&record, CheckState::Cached, VerdictSource::Cache);
        println!("{}", render_verdict(&view, flags.format)?);
        return Ok(());
    }

    let spinner = Progress::spinner(&format!("Fact-checking {}", args.url));
    let record = match ctx.orchestrator.check_and_store(&args.url).await {
        Ok(record) => {
            spinner.finish_clear();
            record
        }
        Err(error) => {
            spinner.finish_err("fact-check failed");
            return Err(error).with_context(|| format!("could not fact-check {}", args.url));
        }
    };

    let view = VerdictView::new(&record, ctx.orchestrator.state(&args.url), VerdictSource::Backend);
    println!("{}", render_verdict(&view, flags.format)?);
    Ok(())
}
