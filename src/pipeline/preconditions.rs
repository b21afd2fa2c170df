//! Required source files.

use super::{BuildContext, StageOutcome};
use crate::error::Result;

/// Checks every required path, printing a mark per file.
pub fn check_required_files<R>(ctx: &mut BuildContext<'_, R>) -> Result<StageOutcome> {
    let required = ctx.settings.required_files();
    let mut missing = Vec::new();

    for file in required {
        if ctx.settings.resolve(file).exists() {
            ctx.output.success(file)?;
        } else {
            ctx.output.failure(&format!("{file} - MISSING"))?;
            missing.push(file.as_str());
        }
    }

    if missing.is_empty() {
        Ok(StageOutcome::pass(format!(
            "All {} required files present",
            required.len()
        )))
    } else {
        Ok(StageOutcome::fail(format!(
            "Missing required files: {}",
            missing.join(", ")
        )))
    }
}
