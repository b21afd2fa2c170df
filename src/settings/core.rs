//! Core Settings struct and implementations.

use crate::process::CommandSpec;
use std::path::{Path, PathBuf};

/// Resolved configuration for one pipeline run.
///
/// Constructed via [`SettingsBuilder`](super::SettingsBuilder). All relative
/// paths are interpreted against [`Settings::working_dir`].
///
/// # Examples
///
/// ```no_run
/// use addin_build::settings::SettingsBuilder;
///
/// # fn example() -> addin_build::Result<()> {
/// let settings = SettingsBuilder::new()
///     .working_dir("./planner-addin")
///     .min_host_major(18)
///     .build()?;
/// assert_eq!(settings.required_files().len(), 5);
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Settings {
    pub(super) working_dir: PathBuf,
    pub(super) project_name: String,
    pub(super) host_runtime_name: String,
    pub(super) min_host_major: u64,
    pub(super) required_files: Vec<String>,
    pub(super) placeholders: Vec<String>,
    pub(super) expected_outputs: Vec<String>,
    pub(super) manifest_path: String,
    pub(super) dependency_store: String,
    pub(super) record_path: String,
    pub(super) install_command: CommandSpec,
    pub(super) build_command: CommandSpec,
    pub(super) version_command: CommandSpec,
    pub(super) next_steps: Vec<String>,
    pub(super) readme_hint: Option<String>,
}

impl Settings {
    /// Absolute directory every relative path is resolved against.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Joins a relative path onto the working directory.
    pub fn resolve(&self, relative: &str) -> PathBuf {
        self.working_dir.join(relative)
    }

    /// Name shown in the opening banner.
    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Human name of the host runtime (e.g. "Node.js").
    pub fn host_runtime_name(&self) -> &str {
        &self.host_runtime_name
    }

    /// Major version below which the environment stage warns.
    pub fn min_host_major(&self) -> u64 {
        self.min_host_major
    }

    /// Paths that must exist before anything else runs.
    pub fn required_files(&self) -> &[String] {
        &self.required_files
    }

    /// Literal template values that should not survive into the manifest.
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    /// Paths the build command is expected to produce.
    pub fn expected_outputs(&self) -> &[String] {
        &self.expected_outputs
    }

    /// Deployment manifest audited for placeholders.
    pub fn manifest_path(&self) -> &str {
        &self.manifest_path
    }

    /// Directory whose presence means dependencies are installed.
    pub fn dependency_store(&self) -> &str {
        &self.dependency_store
    }

    /// Where the build record is written.
    pub fn record_path(&self) -> &str {
        &self.record_path
    }

    pub fn install_command(&self) -> &CommandSpec {
        &self.install_command
    }

    pub fn build_command(&self) -> &CommandSpec {
        &self.build_command
    }

    /// Command whose stdout is the host runtime version (e.g. `v18.17.0`).
    pub fn version_command(&self) -> &CommandSpec {
        &self.version_command
    }

    /// Instructions printed after a successful build.
    pub fn next_steps(&self) -> &[String] {
        &self.next_steps
    }

    pub fn readme_hint(&self) -> Option<&str> {
        self.readme_hint.as_deref()
    }
}
