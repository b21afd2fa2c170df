//! Delegated build and artifact verification.

use super::record::ArtifactEntry;
use super::{BuildContext, StageOutcome};
use crate::error::Result;
use crate::process::CommandRunner;

/// Runs the external build command with inherited stdio.
pub async fn run_build<R: CommandRunner>(ctx: &mut BuildContext<'_, R>) -> Result<StageOutcome> {
    let command = ctx.settings.build_command();
    ctx.output.indent(&format!("Running `{command}`"))?;

    match ctx.runner.run(command, ctx.settings.working_dir()).await {
        Ok(status) if status.success() => Ok(StageOutcome::pass("Build successful")),
        Ok(status) => Ok(StageOutcome::fail(format!(
            "Build failed: `{command}` failed with {status}"
        ))),
        Err(e) => Ok(StageOutcome::fail(format!("Build failed: {e}"))),
    }
}

/// Reports size or absence of every expected output.
///
/// Artifacts found on disk are collected into the context for the build
/// record. Missing ones only make the outcome fail, which is advisory.
pub fn verify_outputs<R>(ctx: &mut BuildContext<'_, R>) -> Result<StageOutcome> {
    let expected = ctx.settings.expected_outputs();
    let mut artifacts = Vec::with_capacity(expected.len());

    for name in expected {
        match std::fs::metadata(ctx.settings.resolve(name)) {
            Ok(metadata) => {
                let size = metadata.len();
                ctx.output
                    .success(&format!("{name} ({})", format_kilobytes(size)))?;
                artifacts.push(ArtifactEntry {
                    name: name.clone(),
                    size,
                });
            }
            Err(e) => {
                log::debug!("{} unavailable: {}", name, e);
                ctx.output.failure(&format!("{name} - MISSING"))?;
            }
        }
    }

    let missing = expected.len() - artifacts.len();
    ctx.artifacts = artifacts;

    if missing == 0 {
        Ok(StageOutcome::pass(format!(
            "All {} build artifacts present",
            expected.len()
        )))
    } else {
        Ok(StageOutcome::fail(format!(
            "{missing} of {} expected artifacts missing",
            expected.len()
        )))
    }
}

/// Byte count as kilobytes with one decimal place, e.g. `12.3KB`.
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.1}KB", bytes as f64 / 1024.0)
}
