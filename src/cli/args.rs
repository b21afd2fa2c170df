//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation of
//! the project directory and settings file path.

use clap::Parser;
use std::path::PathBuf;

/// Build orchestrator for the Outlook Planner add-in
#[derive(Parser, Debug, Clone)]
#[command(
    name = "addin_build",
    version,
    about = "Checks, installs, builds and audits an Office add-in project",
    long_about = "Validates prerequisite files, installs dependencies when node_modules is \
absent, audits manifest.xml for placeholder values, runs the bundler and records \
build provenance in dist/build-info.json.

Usage:
  addin_build
  addin_build --project-dir ./planner-addin
  addin_build --config ci/addin-build.toml --quiet

Exit code 0 = build succeeded and the build record was written."
)]
pub struct Args {
    /// Project directory every relative path is resolved against
    #[arg(
        short = 'C',
        long,
        value_name = "DIR",
        env = "ADDIN_BUILD_PROJECT_DIR",
        default_value = "."
    )]
    pub project_dir: PathBuf,

    /// Settings file (default: addin-build.toml in the project directory, if present)
    #[arg(short, long, value_name = "FILE", env = "ADDIN_BUILD_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print diagnostic detail and enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments, leaving the exit decision to the caller
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if !self.project_dir.is_dir() {
            return Err(format!(
                "Project directory does not exist: {}",
                self.project_dir.display()
            ));
        }

        match &self.config {
            Some(config) if !config.is_file() => {
                return Err(format!("Settings file not found: {}", config.display()));
            }
            _ => {}
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for the progress log
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        Self {
            output: super::OutputManager::new(args.verbose, args.quiet),
        }
    }
}

impl RuntimeConfig {
    /// Get a reference to the output manager
    pub fn output(&self) -> &super::OutputManager {
        &self.output
    }

    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }
}
