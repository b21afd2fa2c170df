//! Dependency installation, skipped once the store exists.

use super::{BuildContext, StageOutcome};
use crate::error::Result;
use crate::process::CommandRunner;

const INSTALL_TITLE: &str = "📦 Installing dependencies...";

/// Runs the install command only when the dependency store is absent.
///
/// Single attempt; the command's output streams straight to the console.
pub async fn install_dependencies<R: CommandRunner>(
    ctx: &mut BuildContext<'_, R>,
) -> Result<StageOutcome> {
    let store = ctx.settings.dependency_store();
    if ctx.settings.resolve(store).exists() {
        log::debug!("{} present, skipping install", store);
        return Ok(StageOutcome::pass("Dependencies already installed"));
    }

    let command = ctx.settings.install_command();
    ctx.output.section(INSTALL_TITLE)?;
    ctx.output.indent(&format!("{store} not found, running `{command}`"))?;

    match ctx.runner.run(command, ctx.settings.working_dir()).await {
        Ok(status) if status.success() => Ok(StageOutcome::pass("Dependencies installed")),
        Ok(status) => Ok(StageOutcome::fail(format!(
            "Failed to install dependencies: `{command}` failed with {status}"
        ))),
        Err(e) => Ok(StageOutcome::fail(format!("Failed to install dependencies: {e}"))),
    }
}
