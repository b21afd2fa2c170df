//! Error types for build orchestration.
//!
//! Stage failures that the pipeline reports (missing files, a failed build)
//! are outcomes, not errors. The types here cover everything that prevents
//! the orchestrator from doing its job: bad arguments, unreadable settings,
//! subprocesses that cannot be spawned, and I/O on the record file.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for orchestrator operations
pub type Result<T> = std::result::Result<T, BuildError>;

/// Main error type for all orchestrator operations
#[derive(Error, Debug)]
pub enum BuildError {
    /// CLI argument and command execution errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings file could not be parsed
    #[error("Invalid settings file {}: {source}", .path.display())]
    SettingsFile {
        /// Path of the offending file
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: toml::de::Error,
    },

    /// Settings failed validation
    #[error("Invalid settings: {reason}")]
    Settings {
        /// Reason for the error
        reason: String,
    },

    /// Generic errors from anyhow, shown with their full cause chain
    #[error("{0:#}")]
    Anyhow(#[from] anyhow::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BuildError {
    /// Shorthand for a settings validation error.
    pub fn settings(reason: impl Into<String>) -> Self {
        Self::Settings {
            reason: reason.into(),
        }
    }

    /// Shorthand for a command that could not be executed.
    pub fn execution(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Cli(CliError::ExecutionFailed {
            command: command.into(),
            reason: reason.into(),
        })
    }
}
