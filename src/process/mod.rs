//! External command invocation.
//!
//! The pipeline never spawns processes directly. It describes what to run
//! with a [`CommandSpec`] and hands it to a [`CommandRunner`], so the
//! install and build steps can be replaced by a recording double in tests.

mod system;

pub use system::SystemRunner;

use crate::error::{BuildError, Result};
use std::fmt;
use std::path::Path;

/// A program plus its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
}

impl CommandSpec {
    /// Creates a command from a program name and arguments.
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// Builds a command from a list whose first element is the program.
    ///
    /// This is the shape used by the settings file
    /// (`build_command = ["npm", "run", "build"]`).
    pub fn from_parts(parts: &[String]) -> Result<Self> {
        match parts.split_first() {
            Some((program, args)) if !program.trim().is_empty() => {
                Ok(Self::new(program.clone(), args.iter().cloned()))
            }
            _ => Err(BuildError::settings("command must name a program")),
        }
    }

    /// Program name or path.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments passed to the program.
    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Exit status of a finished command.
///
/// `code` is `None` when the process was terminated by a signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    pub code: Option<i32>,
}

impl CommandStatus {
    /// Status of a process that exited with `code`.
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    /// True when the process exited with code 0.
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

impl From<std::process::ExitStatus> for CommandStatus {
    fn from(status: std::process::ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

impl fmt::Display for CommandStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "exit code {code}"),
            None => f.write_str("terminated by signal"),
        }
    }
}

/// Status and standard output of a command run for its output.
#[derive(Debug, Clone)]
pub struct CapturedOutput {
    pub status: CommandStatus,
    pub stdout: String,
}

/// Capability for running external commands.
///
/// Both methods block the pipeline until the child exits. There is no
/// timeout.
#[allow(async_fn_in_trait)]
pub trait CommandRunner {
    /// Runs `command` in `cwd` with stdin, stdout and stderr inherited.
    async fn run(&self, command: &CommandSpec, cwd: &Path) -> Result<CommandStatus>;

    /// Runs `command` in `cwd` and captures its standard output.
    async fn capture(&self, command: &CommandSpec, cwd: &Path) -> Result<CapturedOutput>;
}
