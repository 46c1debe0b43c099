use schemars::schema_for;
use verity_core::VerdictRecord;

use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `verity schema`. Always prints JSON; `raw` keeps it on one line.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for!(VerdictRecord);
    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(&schema)?
    } else {
        serde_json::to_string_pretty(&schema)?
    };
    println!("{rendered}");
    Ok(())
}
