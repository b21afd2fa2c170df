//! Host runtime version report.
//!
//! Purely informational. A missing or outdated runtime produces a warning,
//! never a failed build.

use super::{BuildContext, StageOutcome};
use crate::error::Result;
use crate::process::CommandRunner;

/// Queries the host runtime and compares its major version to the minimum.
pub async fn report_host_version<R: CommandRunner>(
    ctx: &mut BuildContext<'_, R>,
) -> Result<StageOutcome> {
    let name = ctx.settings.host_runtime_name();
    let version_cmd = ctx.settings.version_command();

    let raw = match ctx.runner.capture(version_cmd, ctx.settings.working_dir()).await {
        Ok(captured) if captured.status.success() => captured.stdout.trim().to_string(),
        Ok(captured) => {
            return Ok(StageOutcome::fail(format!(
                "Could not determine {name} version: `{version_cmd}` returned {}",
                captured.status
            )));
        }
        Err(e) => {
            return Ok(StageOutcome::fail(format!("Could not determine {name} version: {e}")));
        }
    };

    ctx.output.indent(&format!("{name} version: {raw}"))?;
    ctx.host_version = Some(raw.clone());

    let minimum = ctx.settings.min_host_major();
    match parse_major(&raw) {
        Some(major) if major < minimum => Ok(StageOutcome::fail(format!(
            "Warning: {name} {minimum}+ recommended (current: {major})"
        ))),
        Some(major) => Ok(StageOutcome::pass(format!(
            "{name} {major} meets the {minimum}+ recommendation"
        ))),
        None => Ok(StageOutcome::fail(format!(
            "Could not parse {name} version '{raw}'"
        ))),
    }
}

/// Leading major version of a version string such as `v18.17.0`.
///
/// Full semver is tried first; strings like `v20` or `18.x-nightly` fall
/// back to their leading digits.
pub fn parse_major(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();
    let version = trimmed.strip_prefix(['v', 'V']).unwrap_or(trimmed);

    if let Ok(parsed) = semver::Version::parse(version) {
        return Some(parsed.major);
    }

    let digits: String = version.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::parse_major;

    #[test]
    fn parses_node_style_versions() {
        assert_eq!(parse_major("v18.17.0"), Some(18));
        assert_eq!(parse_major("v22.1.0\n"), Some(22));
        assert_eq!(parse_major("14.21.3"), Some(14));
    }

    #[test]
    fn falls_back_to_leading_digits() {
        assert_eq!(parse_major("v20"), Some(20));
        assert_eq!(parse_major("v21.0"), Some(21));
    }

    #[test]
    fn rejects_non_numeric_versions() {
        assert_eq!(parse_major("nightly"), None);
        assert_eq!(parse_major(""), None);
    }
}
