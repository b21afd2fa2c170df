//! Real process spawning via `tokio::process`.

use super::{CapturedOutput, CommandRunner, CommandSpec, CommandStatus};
use crate::error::{BuildError, Result};
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Runs commands as child processes of the orchestrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }

    /// Resolves the program through `PATH` (and `PATHEXT` on Windows, so
    /// `npm` finds `npm.cmd`). Paths containing a separator are resolved
    /// against `cwd`.
    fn resolve(command: &CommandSpec, cwd: &Path) -> Result<PathBuf> {
        let program = command.program();
        let resolved = if program.contains(['/', '\\']) {
            which::which_in(program, None::<&str>, cwd)
        } else {
            which::which(program)
        };

        match resolved {
            Ok(path) => {
                log::debug!("Resolved {} to {}", program, path.display());
                Ok(path)
            }
            Err(e) => Err(BuildError::execution(
                command.to_string(),
                format!("{program} not found: {e}"),
            )),
        }
    }
}

impl CommandRunner for SystemRunner {
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<CommandStatus> {
        let program = Self::resolve(command, cwd)?;
        log::info!("Running `{}` in {}", command, cwd.display());

        let status = Command::new(&program)
            .args(command.args())
            .current_dir(cwd)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .await
            .map_err(|e| BuildError::execution(command.to_string(), e.to_string()))?;

        log::debug!("`{}` finished with {:?}", command, status);
        Ok(status.into())
    }

    async fn capture(&self, command: &CommandSpec, cwd: &Path) -> Result<CapturedOutput> {
        let program = Self::resolve(command, cwd)?;

        let output = Command::new(&program)
            .args(command.args())
            .current_dir(cwd)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| BuildError::execution(command.to_string(), e.to_string()))?;

        if !output.stderr.is_empty() {
            log::debug!(
                "`{}` stderr: {}",
                command,
                String::from_utf8_lossy(&output.stderr).trim()
            );
        }

        Ok(CapturedOutput {
            status: output.status.into(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }
}
