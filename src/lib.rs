//! Build orchestrator library for Office add-in projects.
//!
//! Runs a fixed sequence of stages around an external bundler:
//! - required source files must exist
//! - host runtime version is reported
//! - dependencies are installed when the dependency store is absent
//! - the deployment manifest is audited for placeholder values
//! - the bundler runs, its outputs are verified, and a build record is written
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod process;
pub mod settings;

// Re-export commonly used types
pub use error::{BuildError, CliError, Result};
pub use pipeline::{BuildRecord, Pipeline, PipelineReport, PipelineState};
pub use settings::{Settings, SettingsBuilder};
