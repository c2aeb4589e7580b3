use anyhow::{Context as _, Result};
use tracing::debug;

use super::Context;

/// Run the whole interactive program. Exits non-zero when any step was
/// rejected.
pub fn execute(ctx: &Context) -> Result<i32> {
    debug!(config = %ctx.config_path.display(), "starting interactive session");

    let report = ctx
        .session()
        .run()
        .context("Failed to talk to the terminal")?;

    Ok(if report.all_completed() { 0 } else { 1 })
}
