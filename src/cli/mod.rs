//! Command line interface for the add-in build orchestrator.
//!
//! Parses arguments, layers settings (defaults, settings file, arguments),
//! and runs the pipeline against real processes.

mod args;
mod output;

pub use args::{Args, RuntimeConfig};
pub use output::{OutputManager, SharedBuffer};

use crate::error::{BuildError, CliError, Result};
use crate::pipeline::Pipeline;
use crate::process::{CommandRunner, SystemRunner};
use crate::settings::{Settings, SettingsBuilder, SettingsFile};
use clap::error::ErrorKind;

/// Main CLI entry point
pub async fn run() -> Result<i32> {
    let args = match Args::parse_args() {
        Ok(args) => args,
        Err(e) => {
            e.print()?;
            return Ok(usage_exit_code(&e));
        }
    };
    init_logging(args.verbose);

    let runtime_config = RuntimeConfig::from(&args);
    execute(&args, &runtime_config, &SystemRunner::new()).await
}

/// Runs the pipeline for already-parsed arguments.
///
/// Returns the process exit code: 0 when the pipeline reached `Done`.
pub async fn execute<R: CommandRunner>(
    args: &Args,
    runtime_config: &RuntimeConfig,
    runner: &R,
) -> Result<i32> {
    let settings = load_settings(args)?;
    runtime_config.verbose_println(&format!(
        "Project directory: {}",
        settings.working_dir().display()
    ))?;

    let report = Pipeline::new(&settings, runner, runtime_config.output())
        .run()
        .await?;

    log::info!(
        "Pipeline finished in state {} with {} warning(s)",
        report.state,
        report.warnings().count()
    );
    Ok(report.exit_code())
}

/// Builds [`Settings`] from defaults, the settings file and the arguments.
pub fn load_settings(args: &Args) -> Result<Settings> {
    args.validate()
        .map_err(|reason| BuildError::Cli(CliError::InvalidArguments { reason }))?;

    let file = match &args.config {
        Some(path) => Some(SettingsFile::load(path)?),
        None => SettingsFile::discover(&args.project_dir)?,
    };

    let mut builder = SettingsBuilder::new().working_dir(&args.project_dir);
    if let Some(file) = file {
        builder = builder.apply_file(file);
    }
    builder.build()
}

/// Exit code for a command line clap refused to parse.
///
/// `--help` and `--version` are successful runs; every usage error exits 1.
fn usage_exit_code(error: &clap::Error) -> i32 {
    match error.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // Ignore a second initialisation (tests may have installed a logger).
    let _ = env_logger::Builder::from_env(env).try_init();
}
