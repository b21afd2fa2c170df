//! Builder for constructing Settings.

use super::{Settings, SettingsFile, defaults};
use crate::error::{BuildError, Result};
use crate::process::CommandSpec;
use path_absolutize::Absolutize;
use std::path::{Path, PathBuf};

/// Builder for constructing [`Settings`].
///
/// Every field is optional. Unset fields fall back to the add-in defaults
/// when [`SettingsBuilder::build`] runs.
///
/// # Examples
///
/// ```no_run
/// use addin_build::settings::SettingsBuilder;
///
/// # fn example() -> addin_build::Result<()> {
/// let settings = SettingsBuilder::new()
///     .working_dir(".")
///     .build_command(vec!["npm".into(), "run".into(), "build:prod".into()])
///     .record_path("dist/provenance.json")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default, Clone)]
pub struct SettingsBuilder {
    working_dir: Option<PathBuf>,
    project_name: Option<String>,
    host_runtime_name: Option<String>,
    min_host_major: Option<u64>,
    required_files: Option<Vec<String>>,
    placeholders: Option<Vec<String>>,
    expected_outputs: Option<Vec<String>>,
    manifest_path: Option<String>,
    dependency_store: Option<String>,
    record_path: Option<String>,
    install_command: Option<Vec<String>>,
    build_command: Option<Vec<String>>,
    version_command: Option<Vec<String>>,
    next_steps: Option<Vec<String>>,
    readme_hint: Option<String>,
}

impl SettingsBuilder {
    /// Creates a new settings builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the working directory.
    ///
    /// Default: the current directory
    pub fn working_dir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.working_dir = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    pub fn host_runtime_name(mut self, name: impl Into<String>) -> Self {
        self.host_runtime_name = Some(name.into());
        self
    }

    pub fn min_host_major(mut self, major: u64) -> Self {
        self.min_host_major = Some(major);
        self
    }

    pub fn required_files(mut self, files: Vec<String>) -> Self {
        self.required_files = Some(files);
        self
    }

    pub fn placeholders(mut self, placeholders: Vec<String>) -> Self {
        self.placeholders = Some(placeholders);
        self
    }

    pub fn expected_outputs(mut self, outputs: Vec<String>) -> Self {
        self.expected_outputs = Some(outputs);
        self
    }

    pub fn manifest_path(mut self, path: impl Into<String>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    pub fn dependency_store(mut self, path: impl Into<String>) -> Self {
        self.dependency_store = Some(path.into());
        self
    }

    pub fn record_path(mut self, path: impl Into<String>) -> Self {
        self.record_path = Some(path.into());
        self
    }

    /// Sets the install command; the first element is the program.
    pub fn install_command(mut self, command: Vec<String>) -> Self {
        self.install_command = Some(command);
        self
    }

    /// Sets the build command; the first element is the program.
    pub fn build_command(mut self, command: Vec<String>) -> Self {
        self.build_command = Some(command);
        self
    }

    /// Sets the host version check; the first element is the program.
    pub fn version_command(mut self, command: Vec<String>) -> Self {
        self.version_command = Some(command);
        self
    }

    pub fn next_steps(mut self, steps: Vec<String>) -> Self {
        self.next_steps = Some(steps);
        self
    }

    pub fn readme_hint(mut self, hint: impl Into<String>) -> Self {
        self.readme_hint = Some(hint.into());
        self
    }

    /// Overlays every field present in a settings file.
    ///
    /// Fields already set on the builder are replaced.
    pub fn apply_file(mut self, file: SettingsFile) -> Self {
        macro_rules! overlay {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = file.$field {
                    self.$field = Some(value);
                })*
            };
        }

        overlay!(
            project_name,
            host_runtime_name,
            min_host_major,
            required_files,
            placeholders,
            expected_outputs,
            manifest_path,
            dependency_store,
            record_path,
            install_command,
            build_command,
            version_command,
            next_steps,
            readme_hint,
        );
        self
    }

    /// Builds the settings.
    ///
    /// # Errors
    ///
    /// Returns an error if a command is empty, the record or manifest path
    /// is blank, or the working directory cannot be made absolute.
    pub fn build(self) -> Result<Settings> {
        let working_dir = self.working_dir.unwrap_or_else(|| PathBuf::from("."));
        let working_dir = working_dir.absolutize()?.into_owned();

        let install_command = command_or_default(
            "install_command",
            self.install_command,
            defaults::INSTALL_COMMAND,
        )?;
        let build_command =
            command_or_default("build_command", self.build_command, defaults::BUILD_COMMAND)?;
        let version_command = command_or_default(
            "version_command",
            self.version_command,
            defaults::VERSION_COMMAND,
        )?;

        let manifest_path = non_blank(
            "manifest_path",
            self.manifest_path
                .unwrap_or_else(|| defaults::MANIFEST_PATH.to_string()),
        )?;
        let dependency_store = non_blank(
            "dependency_store",
            self.dependency_store
                .unwrap_or_else(|| defaults::DEPENDENCY_STORE.to_string()),
        )?;
        let record_path = non_blank(
            "record_path",
            self.record_path
                .unwrap_or_else(|| defaults::RECORD_PATH.to_string()),
        )?;

        Ok(Settings {
            working_dir,
            project_name: self
                .project_name
                .unwrap_or_else(|| defaults::PROJECT_NAME.to_string()),
            host_runtime_name: self
                .host_runtime_name
                .unwrap_or_else(|| defaults::HOST_RUNTIME_NAME.to_string()),
            min_host_major: self.min_host_major.unwrap_or(defaults::MIN_HOST_MAJOR),
            required_files: self
                .required_files
                .unwrap_or_else(|| defaults::strings(defaults::REQUIRED_FILES)),
            placeholders: self
                .placeholders
                .unwrap_or_else(|| defaults::strings(defaults::PLACEHOLDERS)),
            expected_outputs: self
                .expected_outputs
                .unwrap_or_else(|| defaults::strings(defaults::EXPECTED_OUTPUTS)),
            manifest_path,
            dependency_store,
            record_path,
            install_command,
            build_command,
            version_command,
            next_steps: self
                .next_steps
                .unwrap_or_else(|| defaults::strings(defaults::NEXT_STEPS)),
            readme_hint: self
                .readme_hint
                .or_else(|| Some(defaults::README_HINT.to_string())),
        })
    }
}

fn command_or_default(
    field: &str,
    value: Option<Vec<String>>,
    default: &[&str],
) -> Result<CommandSpec> {
    let parts = value.unwrap_or_else(|| defaults::strings(default));
    CommandSpec::from_parts(&parts).map_err(|_| BuildError::settings(format!("{field} is empty")))
}

fn non_blank(field: &str, value: String) -> Result<String> {
    if value.trim().is_empty() {
        return Err(BuildError::settings(format!("{field} cannot be empty")));
    }
    Ok(value)
}
