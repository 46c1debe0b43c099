use verity_orchestrator::CacheOutcome;

use crate::cli::{GlobalFlags, OutputFormat, PageArgs};
use crate::context::AppContext;
use crate::output::{VerdictSource, VerdictView, output, render_verdict};

/// Handle `verity show`. Reads the store only.
pub async fn handle(args: &PageArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match ctx.orchestrator.resolve(&args.url).await? {
        CacheOutcome::Hit(record) => {
            let view = VerdictView::new(&record, ctx.orchestrator.state(&args.url), VerdictSource::Cache);
            println!("{}", render_verdict(&view, flags.format)?);
            Ok(())
        }
        CacheOutcome::Miss if flags.format == OutputFormat::Table => {
            println!("No verdict stored for {}.", args.url);
            if !flags.quiet {
                println!("Run `verity check {}` to fact-check it.", args.url);
            }
            Ok(())
        }
        CacheOutcome::Miss => output(
            &serde_json::json!({
                "url": args.url,
                "state": ctx.orchestrator.state(&args.url),
                "claims": null,
            }),
            flags.format,
        ),
    }
}
